auto_derived!(
    /// Event
    pub struct Event {
        /// Event Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the user who created this event
        pub owner_id: String,

        /// Event title
        pub title: String,
        /// Event description
        pub description: String,
        /// Calendar date, e.g. `2024-12-25`
        pub date: String,
        /// Clock time, e.g. `18:00`
        pub time: String,
        /// Where the event takes place
        pub location: String,
        /// Maximum number of attendees
        pub capacity: i64,

        /// When this event was created (RFC 3339)
        pub created_at: String,
        /// When this event was last edited (RFC 3339)
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub updated_at: Option<String>,
    }

    /// New event details
    #[derive(Default)]
    #[cfg_attr(feature = "validator", derive(validator::Validate))]
    pub struct DataCreateEvent {
        /// Event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 100)))]
        pub title: String,
        /// Event description
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 2000)))]
        pub description: String,
        /// Calendar date
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 32)))]
        pub date: String,
        /// Clock time
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 32)))]
        pub time: String,
        /// Event location
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 200)))]
        pub location: String,
        /// Maximum number of attendees
        #[cfg_attr(feature = "validator", validate(range(min = 1)))]
        pub capacity: i64,
    }

    /// Changed event details
    ///
    /// Fields left as `None` are not touched.
    #[derive(Default)]
    #[cfg_attr(feature = "validator", derive(validator::Validate))]
    pub struct DataEditEvent {
        /// Event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 100)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub title: Option<String>,
        /// Event description
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 2000)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub description: Option<String>,
        /// Calendar date
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 32)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub date: Option<String>,
        /// Clock time
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 32)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub time: Option<String>,
        /// Event location
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 200)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub location: Option<String>,
        /// Maximum number of attendees
        #[cfg_attr(feature = "validator", validate(range(min = 1)))]
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub capacity: Option<i64>,
    }
);

impl DataCreateEvent {
    /// Strip surrounding whitespace from every text field
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            location: self.location.trim().to_string(),
            capacity: self.capacity,
        }
    }
}

impl DataEditEvent {
    /// Strip surrounding whitespace from every supplied text field
    pub fn trimmed(self) -> Self {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());

        Self {
            title: trim(self.title),
            description: trim(self.description),
            date: trim(self.date),
            time: trim(self.time),
            location: trim(self.location),
            capacity: self.capacity,
        }
    }

    /// Whether no field was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.location.is_none()
            && self.capacity.is_none()
    }
}

impl Event {
    /// Human readable date line, `"{date} at {time}"`
    pub fn display_date(&self) -> String {
        super::display_date(&self.date, &self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataCreateEvent, DataEditEvent};

    #[test]
    fn trimming_strips_whitespace_only() {
        let data = DataCreateEvent {
            title: "  Demo ".to_string(),
            description: "\td\n".to_string(),
            date: " 2024-12-25".to_string(),
            time: "18:00 ".to_string(),
            location: " Hall ".to_string(),
            capacity: 500,
        }
        .trimmed();

        assert_eq!(data.title, "Demo");
        assert_eq!(data.description, "d");
        assert_eq!(data.date, "2024-12-25");
        assert_eq!(data.time, "18:00");
        assert_eq!(data.location, "Hall");
        assert_eq!(data.capacity, 500);
    }

    #[test]
    fn edit_tracks_supplied_fields() {
        assert!(DataEditEvent::default().is_empty());

        let data = DataEditEvent {
            location: Some("  ".to_string()),
            ..Default::default()
        }
        .trimmed();

        assert!(!data.is_empty());
        assert_eq!(data.location.as_deref(), Some(""));
    }

    #[cfg(feature = "validator")]
    #[test]
    fn blank_fields_and_capacity_fail_validation() {
        use validator::Validate;

        let data = DataCreateEvent {
            title: "   ".to_string(),
            description: "d".to_string(),
            date: "2024-12-25".to_string(),
            time: "18:00".to_string(),
            location: "Hall".to_string(),
            capacity: 0,
        }
        .trimmed();

        let errors = data.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("capacity"));
        assert!(!fields.contains_key("location"));

        assert!(DataEditEvent {
            capacity: Some(-3),
            ..Default::default()
        }
        .validate()
        .is_err());

        assert!(DataEditEvent {
            capacity: Some(600),
            ..Default::default()
        }
        .validate()
        .is_ok());
    }
}
