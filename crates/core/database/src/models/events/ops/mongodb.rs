use eventflow_result::Result;

use crate::MongoDb;
use crate::{Event, PartialEvent};

use super::AbstractEvents;

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch every event, newest first
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        query!(
            self,
            find_sorted,
            COL,
            doc! {},
            doc! {
                "created_at": -1,
                "_id": -1
            }
        )
    }

    /// Fetch events created by a user, newest first
    async fn fetch_events_by_owner(&self, owner_id: &str) -> Result<Vec<Event>> {
        query!(
            self,
            find_sorted,
            COL,
            doc! {
                "owner_id": owner_id
            },
            doc! {
                "created_at": -1,
                "_id": -1
            }
        )
    }

    /// Update event with new information
    async fn update_event(&self, id: &str, partial: &PartialEvent) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).and_then(|result| {
            if result.matched_count > 0 {
                Ok(())
            } else {
                Err(create_error!(NotFound))
            }
        })
    }

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).and_then(|result| {
            if result.deleted_count > 0 {
                Ok(())
            } else {
                Err(create_error!(NotFound))
            }
        })
    }
}
