use eventflow_result::Result;
use ulid::Ulid;

use crate::{util::timestamp, Database};

auto_derived!(
    /// RSVP
    pub struct Rsvp {
        /// RSVP Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the event this RSVP refers to
        ///
        /// Not checked against the events collection, the event may
        /// have been deleted since.
        pub event_id: String,
        /// Id of the user attending
        pub user_id: String,

        /// Event title at RSVP time
        pub event_title: String,
        /// Event date at RSVP time
        pub event_date: String,
        /// Event time at RSVP time
        #[serde(skip_serializing_if = "String::is_empty", default)]
        pub event_time: String,
        /// Event location at RSVP time
        pub event_location: String,
        /// Event description at RSVP time
        pub event_description: String,

        /// When this RSVP was made
        pub rsvped_at: String,
    }

    /// Event details copied into an RSVP
    #[derive(Default)]
    pub struct RsvpSnapshot {
        pub title: String,
        pub date: String,
        pub time: String,
        pub location: String,
        pub description: String,
    }
);

impl Rsvp {
    /// Build a new RSVP for a user, stamped with the current time
    pub fn new(user_id: &str, event_id: &str, snapshot: RsvpSnapshot) -> Rsvp {
        Rsvp {
            id: Ulid::new().to_string(),
            event_id: event_id.to_string(),
            user_id: user_id.to_string(),
            event_title: snapshot.title,
            event_date: snapshot.date,
            event_time: snapshot.time,
            event_location: snapshot.location,
            event_description: snapshot.description,
            rsvped_at: timestamp::now(),
        }
    }

    /// Create a new RSVP
    ///
    /// Does not check for an existing RSVP by the same user.
    pub async fn create(
        db: &Database,
        user_id: &str,
        event_id: &str,
        snapshot: RsvpSnapshot,
    ) -> Result<Rsvp> {
        let rsvp = Rsvp::new(user_id, event_id, snapshot);
        db.insert_rsvp(&rsvp).await?;
        debug!("{user_id} RSVP'd to {event_id} as {}", rsvp.id);
        Ok(rsvp)
    }

    /// Create a new RSVP, failing with `RaceLost` if the user already has one for this event
    pub async fn create_unique(
        db: &Database,
        user_id: &str,
        event_id: &str,
        snapshot: RsvpSnapshot,
    ) -> Result<Rsvp> {
        let rsvp = Rsvp::new(user_id, event_id, snapshot);
        db.insert_rsvp_unique(&rsvp).await?;
        debug!("{user_id} RSVP'd to {event_id} as {}", rsvp.id);
        Ok(rsvp)
    }

    /// Delete an RSVP
    pub async fn delete(db: &Database, id: &str) -> Result<()> {
        db.delete_rsvp(id).await?;
        debug!("Deleted RSVP {id}");
        Ok(())
    }
}
