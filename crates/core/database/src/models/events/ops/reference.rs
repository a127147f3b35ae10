use eventflow_result::Result;

use crate::ReferenceDb;
use crate::{Event, PartialEvent};

use super::AbstractEvents;

static COL: &str = "events";

/// Order the way the MongoDB driver sorts: `created_at` then id, descending
fn newest_first(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    events
}

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        self.check_available("insert_one", COL).await?;
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert_one", COL))
        } else {
            events.insert(event.id.to_string(), event.clone());
            Ok(())
        }
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        self.check_available("find_one_by_id", COL).await?;
        let events = self.events.lock().await;
        events.get(id).cloned().ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch every event, newest first
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.check_available("find_sorted", COL).await?;
        let events = self.events.lock().await;
        Ok(newest_first(events.values().cloned().collect()))
    }

    /// Fetch events created by a user, newest first
    async fn fetch_events_by_owner(&self, owner_id: &str) -> Result<Vec<Event>> {
        self.check_available("find_sorted", COL).await?;
        let events = self.events.lock().await;
        Ok(newest_first(
            events
                .values()
                .filter(|event| event.owner_id == owner_id)
                .cloned()
                .collect(),
        ))
    }

    /// Update event with new information
    async fn update_event(&self, id: &str, partial: &PartialEvent) -> Result<()> {
        self.check_available("update_one_by_id", COL).await?;
        let mut events = self.events.lock().await;
        if let Some(event) = events.get_mut(id) {
            event.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()> {
        self.check_available("delete_one_by_id", COL).await?;
        let mut events = self.events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
