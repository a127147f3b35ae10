use eventflow_result::Result;

use crate::Rsvp;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractRsvps: Sync + Send {
    /// Insert a new RSVP into the database
    async fn insert_rsvp(&self, rsvp: &Rsvp) -> Result<()>;

    /// Insert a new RSVP unless the user already has one for the event
    ///
    /// The check and the insert happen atomically; losing fails with `RaceLost`.
    async fn insert_rsvp_unique(&self, rsvp: &Rsvp) -> Result<()>;

    /// Fetch an RSVP by its id
    async fn fetch_rsvp(&self, id: &str) -> Result<Rsvp>;

    /// Fetch every RSVP, most recent first
    async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>>;

    /// Fetch RSVPs made by a user, most recent first
    async fn fetch_rsvps_by_user(&self, user_id: &str) -> Result<Vec<Rsvp>>;

    /// Fetch RSVPs referring to an event, oldest first
    async fn fetch_rsvps_by_event(&self, event_id: &str) -> Result<Vec<Rsvp>>;

    /// Delete an RSVP from the database
    async fn delete_rsvp(&self, id: &str) -> Result<()>;
}
