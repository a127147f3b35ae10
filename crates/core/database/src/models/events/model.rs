use eventflow_models::v0::{DataCreateEvent, DataEditEvent};
use eventflow_result::Result;
use ulid::Ulid;
use validator::Validate;

use crate::{util::timestamp, Database, RsvpSnapshot};

auto_derived_partial!(
    /// Event
    pub struct Event {
        /// Event Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who created this event
        pub owner_id: String,

        /// Event title
        pub title: String,
        /// Event description
        pub description: String,
        /// Calendar date
        pub date: String,
        /// Clock time
        pub time: String,
        /// Where the event takes place
        pub location: String,
        /// Maximum number of attendees
        pub capacity: i64,

        /// Creation timestamp
        pub created_at: String,
        /// Last edit timestamp
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub updated_at: Option<String>,
    },
    "PartialEvent"
);

/// Turn validator output into our error type
fn validation_error(error: validator::ValidationErrors) -> eventflow_result::Error {
    create_error!(FailedValidation {
        error: error.to_string()
    })
}

impl Event {
    /// Create a new event owned by the given user
    pub async fn create(db: &Database, owner_id: &str, data: DataCreateEvent) -> Result<Event> {
        let data = data.trimmed();
        data.validate().map_err(validation_error)?;

        let event = Event {
            id: Ulid::new().to_string(),
            owner_id: owner_id.to_string(),
            title: data.title,
            description: data.description,
            date: data.date,
            time: data.time,
            location: data.location,
            capacity: data.capacity,
            created_at: timestamp::now(),
            updated_at: None,
        };

        db.insert_event(&event).await?;
        debug!("Created event {} for {}", event.id, event.owner_id);
        Ok(event)
    }

    /// Apply changed details to an event and return the stored result
    pub async fn update(db: &Database, id: &str, data: DataEditEvent) -> Result<Event> {
        let data = data.trimmed();
        data.validate().map_err(validation_error)?;

        let partial = PartialEvent {
            title: data.title,
            description: data.description,
            date: data.date,
            time: data.time,
            location: data.location,
            capacity: data.capacity,
            updated_at: Some(timestamp::now()),
            ..Default::default()
        };

        db.update_event(id, &partial).await?;
        db.fetch_event(id).await
    }

    /// Delete an event
    ///
    /// RSVPs referring to it are left in place.
    pub async fn delete(db: &Database, id: &str) -> Result<()> {
        db.delete_event(id).await?;
        debug!("Deleted event {id}");
        Ok(())
    }

    /// Copy the fields an RSVP keeps of this event
    pub fn snapshot(&self) -> RsvpSnapshot {
        RsvpSnapshot {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use eventflow_models::v0::{DataCreateEvent, DataEditEvent};
    use eventflow_result::ErrorType;

    use crate::{Event, PartialEvent};

    fn demo() -> DataCreateEvent {
        DataCreateEvent {
            title: "Demo".to_string(),
            description: "d".to_string(),
            date: "2024-12-25".to_string(),
            time: "18:00".to_string(),
            location: "Hall".to_string(),
            capacity: 500,
        }
    }

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let event = Event::create(&db, "owner", demo()).await.unwrap();
            assert!(!event.created_at.is_empty());
            assert!(event.updated_at.is_none());

            let events = db.fetch_events().await.unwrap();
            let matching: Vec<&Event> = events.iter().filter(|e| e.id == event.id).collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].capacity, 500);
            assert_eq!(matching[0].title, "Demo");
            assert_eq!(matching[0].owner_id, "owner");

            let updated = Event::update(
                &db,
                &event.id,
                DataEditEvent {
                    capacity: Some(600),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

            assert_eq!(updated.capacity, 600);
            assert_eq!(updated.title, "Demo");
            assert!(updated.updated_at.is_some());
            assert_eq!(db.fetch_event(&event.id).await.unwrap(), updated);

            Event::delete(&db, &event.id).await.unwrap();
            assert!(db
                .fetch_events()
                .await
                .unwrap()
                .iter()
                .all(|e| e.id != event.id));

            let error = Event::delete(&db, &event.id).await.unwrap_err();
            assert!(matches!(error.error_type, ErrorType::NotFound));
        });
    }

    #[async_std::test]
    async fn create_then_delete_leaves_listing_unchanged() {
        database_test!(|db| async move {
            Event::create(&db, "owner", demo()).await.unwrap();
            let before = db.fetch_events().await.unwrap();

            let event = Event::create(&db, "owner", demo()).await.unwrap();
            Event::delete(&db, &event.id).await.unwrap();

            assert_eq!(before, db.fetch_events().await.unwrap());
        });
    }

    #[async_std::test]
    async fn invalid_details_are_rejected() {
        database_test!(|db| async move {
            let error = Event::create(
                &db,
                "owner",
                DataCreateEvent {
                    capacity: 0,
                    ..demo()
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(
                error.error_type,
                ErrorType::FailedValidation { .. }
            ));

            let error = Event::create(
                &db,
                "owner",
                DataCreateEvent {
                    location: "   ".to_string(),
                    ..demo()
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(
                error.error_type,
                ErrorType::FailedValidation { .. }
            ));

            assert!(db.fetch_events().await.unwrap().is_empty());

            let event = Event::create(&db, "owner", demo()).await.unwrap();
            let error = Event::update(
                &db,
                &event.id,
                DataEditEvent {
                    title: Some(" ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
            assert!(matches!(
                error.error_type,
                ErrorType::FailedValidation { .. }
            ));
            assert_eq!(db.fetch_event(&event.id).await.unwrap().title, "Demo");
        });
    }

    #[async_std::test]
    async fn reused_id_reports_collection() {
        database_test!(|db| async move {
            let event = Event::create(&db, "owner", demo()).await.unwrap();

            let error = db.insert_event(&event).await.unwrap_err();
            match error.error_type {
                ErrorType::DatabaseError { collection, .. } => assert_eq!(collection, "events"),
                other => panic!("unexpected error type {other:?}"),
            }
        });
    }

    #[async_std::test]
    async fn updating_missing_event_fails() {
        database_test!(|db| async move {
            let error = db
                .update_event(
                    "missing",
                    &PartialEvent {
                        capacity: Some(10),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();

            assert!(matches!(error.error_type, ErrorType::NotFound));
        });
    }

    #[async_std::test]
    async fn listing_is_newest_first() {
        database_test!(|db| async move {
            let event = |id: &str, owner: &str, created_at: &str| Event {
                id: id.to_string(),
                owner_id: owner.to_string(),
                title: "Demo".to_string(),
                description: "d".to_string(),
                date: "2024-12-25".to_string(),
                time: "18:00".to_string(),
                location: "Hall".to_string(),
                capacity: 500,
                created_at: created_at.to_string(),
                updated_at: None,
            };

            db.insert_event(&event("older", "a", "2024-01-01T10:00:00.000000Z"))
                .await
                .unwrap();
            db.insert_event(&event("newer", "b", "2024-06-01T10:00:00.000000Z"))
                .await
                .unwrap();
            db.insert_event(&event("tied", "a", "2024-01-01T10:00:00.000000Z"))
                .await
                .unwrap();

            let ids: Vec<String> = db
                .fetch_events()
                .await
                .unwrap()
                .into_iter()
                .map(|e| e.id)
                .collect();
            assert_eq!(ids, vec!["newer", "tied", "older"]);

            let owned = db.fetch_events_by_owner("b").await.unwrap();
            assert_eq!(owned.len(), 1);
            assert_eq!(owned[0].id, "newer");
        });
    }
}
