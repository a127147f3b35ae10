use eventflow_result::Result;

use crate::{Event, PartialEvent};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch every event, newest first
    async fn fetch_events(&self) -> Result<Vec<Event>>;

    /// Fetch events created by a user, newest first
    async fn fetch_events_by_owner(&self, owner_id: &str) -> Result<Vec<Event>>;

    /// Update event with new information
    async fn update_event(&self, id: &str, partial: &PartialEvent) -> Result<()>;

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()>;
}
