auto_derived!(
    /// RSVP
    ///
    /// The `event_*` fields are a snapshot taken when the RSVP was made,
    /// later edits to the event are not reflected here.
    pub struct Rsvp {
        /// RSVP Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the event this RSVP refers to
        pub event_id: String,
        /// Id of the user attending
        pub user_id: String,

        /// Event title at RSVP time
        pub event_title: String,
        /// Event date at RSVP time
        pub event_date: String,
        /// Event time at RSVP time
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "String::is_empty", default)
        )]
        pub event_time: String,
        /// Event location at RSVP time
        pub event_location: String,
        /// Event description at RSVP time
        pub event_description: String,

        /// When this RSVP was made (RFC 3339)
        pub rsvped_at: String,
    }

    /// Whether the viewer is attending an event
    #[derive(Default)]
    pub struct RsvpState {
        /// Viewer has an RSVP for the event
        pub rsvpd: bool,
        /// Id of that RSVP, if any
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub rsvp_id: Option<String>,
    }
);

impl RsvpState {
    /// Viewer is attending through the given RSVP
    pub fn attending(rsvp_id: String) -> Self {
        Self {
            rsvpd: true,
            rsvp_id: Some(rsvp_id),
        }
    }

    /// Viewer is not attending
    pub fn not_attending() -> Self {
        Self::default()
    }
}

impl Rsvp {
    /// Human readable date line of the snapshot
    pub fn display_date(&self) -> String {
        super::display_date(&self.event_date, &self.event_time)
    }
}
