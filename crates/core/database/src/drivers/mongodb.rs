use std::ops::Deref;

use eventflow_result::Result;
use futures::TryStreamExt;
use mongodb::bson::{to_document, Document};
use mongodb::error::{ErrorKind, Result as MongoResult, WriteFailure};
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::IndexModel;
use serde::de::DeserializeOwned;
use serde::Serialize;

database_derived!(
    /// MongoDB implementation
    pub struct MongoDb(pub ::mongodb::Client, pub String);
);

impl Deref for MongoDb {
    type Target = mongodb::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Error code MongoDB reports for a unique index violation
const DUPLICATE_KEY: i32 = 11000;

impl MongoDb {
    /// Get the EventFlow database
    pub fn db(&self) -> mongodb::Database {
        self.database(&self.1)
    }

    /// Get a collection by its name
    pub fn col<T: Send + Sync>(&self, collection: &str) -> mongodb::Collection<T> {
        self.db().collection(collection)
    }

    /// Insert one document into a collection
    pub async fn insert_one<T: Serialize + Send + Sync>(
        &self,
        collection: &'static str,
        document: T,
    ) -> MongoResult<InsertOneResult> {
        self.col::<T>(collection).insert_one(document).await
    }

    /// Find multiple documents in a collection with options
    pub async fn find_with_options<O, T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        projection: Document,
        options: O,
    ) -> MongoResult<Vec<T>>
    where
        O: Into<Option<FindOptions>>,
    {
        self.col::<T>(collection)
            .find(projection)
            .with_options(options)
            .await?
            .try_collect::<Vec<T>>()
            .await
    }

    /// Find multiple documents in a collection, sorted
    pub async fn find_sorted<T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        projection: Document,
        sort: Document,
    ) -> MongoResult<Vec<T>> {
        self.find_with_options(
            collection,
            projection,
            FindOptions::builder().sort(sort).build(),
        )
        .await
    }

    /// Find one document
    pub async fn find_one<T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        projection: Document,
    ) -> MongoResult<Option<T>> {
        self.col::<T>(collection).find_one(projection).await
    }

    /// Find one document by its ID
    pub async fn find_one_by_id<T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        id: &str,
    ) -> MongoResult<Option<T>> {
        self.find_one(
            collection,
            doc! {
                "_id": id
            },
        )
        .await
    }

    /// Update one document given an ID and partial document
    pub async fn update_one_by_id<T: Serialize>(
        &self,
        collection: &'static str,
        id: &str,
        partial: T,
    ) -> MongoResult<UpdateResult> {
        self.col::<Document>(collection)
            .update_one(
                doc! {
                    "_id": id
                },
                doc! {
                    "$set": to_document(&partial)?
                },
            )
            .await
    }

    /// Delete one document by the given ID
    pub async fn delete_one_by_id(
        &self,
        collection: &'static str,
        id: &str,
    ) -> MongoResult<DeleteResult> {
        self.col::<Document>(collection)
            .delete_one(doc! {
                "_id": id
            })
            .await
    }

    /// Create the indexes used by event and RSVP queries
    pub async fn create_indexes(&self, unique_rsvps: bool) -> Result<()> {
        self.col::<Document>("events")
            .create_indexes([
                IndexModel::builder()
                    .keys(doc! { "created_at": -1, "_id": -1 })
                    .build(),
                IndexModel::builder().keys(doc! { "owner_id": 1 }).build(),
            ])
            .await
            .map_err(|_| create_database_error!("create_indexes", "events"))?;

        let mut rsvp_indexes = vec![
            IndexModel::builder()
                .keys(doc! { "rsvped_at": -1, "_id": -1 })
                .build(),
            IndexModel::builder().keys(doc! { "event_id": 1 }).build(),
        ];

        if unique_rsvps {
            rsvp_indexes.push(user_event_index());
        }

        self.col::<Document>("rsvps")
            .create_indexes(rsvp_indexes)
            .await
            .map_err(|error| {
                // Existing duplicate RSVPs make the unique index build fail
                warn!("Failed to create RSVP indexes: {error}");
                create_database_error!("create_indexes", "rsvps")
            })?;

        info!("Created indexes (unique RSVPs: {unique_rsvps}).");
        Ok(())
    }

    /// Make sure a user can hold at most one RSVP per event
    ///
    /// Creating an index that already exists is a no-op.
    pub async fn ensure_unique_rsvps(&self) -> Result<()> {
        self.col::<Document>("rsvps")
            .create_index(user_event_index())
            .await
            .map(|_| ())
            .map_err(|error| {
                warn!("Failed to create unique RSVP index: {error}");
                create_database_error!("create_index", "rsvps")
            })
    }
}

/// Unique index over `(user_id, event_id)`
fn user_event_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "user_id": 1, "event_id": 1 })
        .options(
            IndexOptions::builder()
                .name("user_event".to_string())
                .unique(true)
                .build(),
        )
        .build()
}

/// Whether a driver error was caused by a unique index violation
pub fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        _ => false,
    }
}
