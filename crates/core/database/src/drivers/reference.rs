use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use eventflow_result::Result;
use futures::lock::Mutex;

use crate::{Event, Rsvp};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub rsvps: Arc<Mutex<HashMap<String, Rsvp>>>,

        /// Collections currently refusing requests
        pub unavailable: Arc<Mutex<HashSet<String>>>,
    }
);

impl ReferenceDb {
    /// Simulate a collection becoming unreachable (or reachable again)
    pub async fn set_available(&self, collection: &str, available: bool) {
        let mut unavailable = self.unavailable.lock().await;
        if available {
            unavailable.remove(collection);
        } else {
            unavailable.insert(collection.to_string());
        }
    }

    /// Fail with a database error if the collection was marked unavailable
    pub async fn check_available(&self, operation: &str, collection: &'static str) -> Result<()> {
        if self.unavailable.lock().await.contains(collection) {
            Err(create_database_error!(operation, collection))
        } else {
            Ok(())
        }
    }

    /// Remove every document
    pub async fn clear(&self) {
        self.events.lock().await.clear();
        self.rsvps.lock().await.clear();
        self.unavailable.lock().await.clear();
    }
}
