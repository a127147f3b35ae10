use std::cmp::Ordering;

use eventflow_result::Result;

use crate::ReferenceDb;
use crate::Rsvp;

use super::AbstractRsvps;

static COL: &str = "rsvps";

/// Compare by `rsvped_at` then id, the MongoDB driver's sort keys
fn by_time(a: &Rsvp, b: &Rsvp) -> Ordering {
    a.rsvped_at
        .cmp(&b.rsvped_at)
        .then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl AbstractRsvps for ReferenceDb {
    /// Insert a new RSVP into the database
    async fn insert_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        self.check_available("insert_one", COL).await?;
        let mut rsvps = self.rsvps.lock().await;
        if rsvps.contains_key(&rsvp.id) {
            Err(create_database_error!("insert_one", COL))
        } else {
            rsvps.insert(rsvp.id.to_string(), rsvp.clone());
            Ok(())
        }
    }

    /// Insert a new RSVP unless the user already has one for the event
    async fn insert_rsvp_unique(&self, rsvp: &Rsvp) -> Result<()> {
        self.check_available("insert_one", COL).await?;
        let mut rsvps = self.rsvps.lock().await;
        if rsvps
            .values()
            .any(|existing| existing.user_id == rsvp.user_id && existing.event_id == rsvp.event_id)
        {
            Err(create_error!(RaceLost))
        } else if rsvps.contains_key(&rsvp.id) {
            Err(create_database_error!("insert_one", COL))
        } else {
            rsvps.insert(rsvp.id.to_string(), rsvp.clone());
            Ok(())
        }
    }

    /// Fetch an RSVP by its id
    async fn fetch_rsvp(&self, id: &str) -> Result<Rsvp> {
        self.check_available("find_one_by_id", COL).await?;
        let rsvps = self.rsvps.lock().await;
        rsvps.get(id).cloned().ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch every RSVP, most recent first
    async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>> {
        self.check_available("find_sorted", COL).await?;
        let rsvps = self.rsvps.lock().await;
        let mut rsvps: Vec<Rsvp> = rsvps.values().cloned().collect();
        rsvps.sort_by(|a, b| by_time(b, a));
        Ok(rsvps)
    }

    /// Fetch RSVPs made by a user, most recent first
    async fn fetch_rsvps_by_user(&self, user_id: &str) -> Result<Vec<Rsvp>> {
        self.check_available("find_sorted", COL).await?;
        let rsvps = self.rsvps.lock().await;
        let mut rsvps: Vec<Rsvp> = rsvps
            .values()
            .filter(|rsvp| rsvp.user_id == user_id)
            .cloned()
            .collect();
        rsvps.sort_by(|a, b| by_time(b, a));
        Ok(rsvps)
    }

    /// Fetch RSVPs referring to an event, oldest first
    async fn fetch_rsvps_by_event(&self, event_id: &str) -> Result<Vec<Rsvp>> {
        self.check_available("find_sorted", COL).await?;
        let rsvps = self.rsvps.lock().await;
        let mut rsvps: Vec<Rsvp> = rsvps
            .values()
            .filter(|rsvp| rsvp.event_id == event_id)
            .cloned()
            .collect();
        rsvps.sort_by(by_time);
        Ok(rsvps)
    }

    /// Delete an RSVP from the database
    async fn delete_rsvp(&self, id: &str) -> Result<()> {
        self.check_available("delete_one_by_id", COL).await?;
        let mut rsvps = self.rsvps.lock().await;
        if rsvps.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
