auto_derived!(
    /// Which collection a listing entry was read from
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    #[derive(Copy)]
    pub enum ListingKind {
        /// Event from the `events` collection
        Created,
        /// Snapshot from the `rsvps` collection
        Rsvp,
    }

    /// Entry in the viewer's combined "my events" listing
    pub struct CombinedListing {
        /// Event Id
        pub id: String,
        /// Event title
        pub title: String,
        /// Date line, `"{date} at {time}"`
        pub date: String,
        /// Event location
        pub location: String,
        /// Event description
        pub description: String,
        /// Where this entry came from
        pub kind: ListingKind,
        /// RSVP document id, only set for RSVP entries
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub rsvp_id: Option<String>,
        /// Raw sort timestamp, `created_at` or `rsvped_at`
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub timestamp: Option<String>,
    }
);

/// Join a calendar date and a clock time for display
pub fn display_date(date: &str, time: &str) -> String {
    if time.is_empty() {
        date.to_string()
    } else {
        format!("{date} at {time}")
    }
}
