use eventflow_result::Result;

use crate::Rsvp;
use crate::{is_duplicate_key, MongoDb};

use super::AbstractRsvps;

static COL: &str = "rsvps";

#[async_trait]
impl AbstractRsvps for MongoDb {
    /// Insert a new RSVP into the database
    async fn insert_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        query!(self, insert_one, COL, rsvp).map(|_| ())
    }

    /// Insert a new RSVP unless the user already has one for the event
    ///
    /// Relies on the unique index created by `migrate_database`.
    async fn insert_rsvp_unique(&self, rsvp: &Rsvp) -> Result<()> {
        match self.insert_one(COL, rsvp).await {
            Ok(_) => Ok(()),
            Err(error) if is_duplicate_key(&error) => Err(create_error!(RaceLost)),
            Err(_) => Err(create_database_error!("insert_one", COL)),
        }
    }

    /// Fetch an RSVP by its id
    async fn fetch_rsvp(&self, id: &str) -> Result<Rsvp> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch every RSVP, most recent first
    async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>> {
        query!(
            self,
            find_sorted,
            COL,
            doc! {},
            doc! {
                "rsvped_at": -1,
                "_id": -1
            }
        )
    }

    /// Fetch RSVPs made by a user, most recent first
    async fn fetch_rsvps_by_user(&self, user_id: &str) -> Result<Vec<Rsvp>> {
        query!(
            self,
            find_sorted,
            COL,
            doc! {
                "user_id": user_id
            },
            doc! {
                "rsvped_at": -1,
                "_id": -1
            }
        )
    }

    /// Fetch RSVPs referring to an event, oldest first
    async fn fetch_rsvps_by_event(&self, event_id: &str) -> Result<Vec<Rsvp>> {
        query!(
            self,
            find_sorted,
            COL,
            doc! {
                "event_id": event_id
            },
            doc! {
                "rsvped_at": 1,
                "_id": 1
            }
        )
    }

    /// Delete an RSVP from the database
    async fn delete_rsvp(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).and_then(|result| {
            if result.deleted_count > 0 {
                Ok(())
            } else {
                Err(create_error!(NotFound))
            }
        })
    }
}
