use eventflow_config::{Ownership, RsvpMode};
use eventflow_database::{Database, Event, Rsvp};
use eventflow_models::v0::{CombinedListing, DataCreateEvent, DataEditEvent, RsvpState};
use eventflow_result::{ErrorType, Result};
use futures::join;

use crate::{matches_query, merge_listing, SyncOptions};

/// Turn the outcome of deleting the viewer's RSVP into the new state
///
/// In hardened mode a missing RSVP means another caller removed it between
/// our read and delete.
fn settle_removal(deleted: Result<()>, mode: RsvpMode) -> Result<RsvpState> {
    match (deleted, mode) {
        (Ok(()), _) => Ok(RsvpState::not_attending()),
        (Err(error), RsvpMode::Hardened) if matches!(error.error_type, ErrorType::NotFound) => {
            Err(create_error!(RaceLost))
        }
        (Err(error), _) => Err(error),
    }
}

/// Reconciles the events and RSVPs collections for one viewer
#[derive(Clone)]
pub struct EventSyncService {
    db: Database,
    viewer: String,
    options: SyncOptions,
}

impl EventSyncService {
    /// Create a service acting on behalf of the given viewer
    pub fn new(db: Database, viewer: &str, options: SyncOptions) -> EventSyncService {
        EventSyncService {
            db,
            viewer: viewer.to_string(),
            options,
        }
    }

    /// Create a service with policies read from configuration
    pub async fn from_config(db: Database, viewer: &str) -> EventSyncService {
        EventSyncService::new(db, viewer, SyncOptions::from_config().await)
    }

    /// Id of the acting viewer
    pub fn viewer(&self) -> &str {
        &self.viewer
    }

    /// Policies this service runs under
    pub fn options(&self) -> SyncOptions {
        self.options
    }

    /// Fetch both collections concurrently, scoped by the ownership policy
    async fn fetch_sources(&self) -> (Result<Vec<Event>>, Result<Vec<Rsvp>>) {
        match self.options.ownership {
            Ownership::Presence => join!(self.db.fetch_events(), self.db.fetch_rsvps()),
            Ownership::Identity => join!(
                self.db.fetch_events_by_owner(&self.viewer),
                self.db.fetch_rsvps_by_user(&self.viewer)
            ),
        }
    }

    /// Build the "my events" listing, created events and RSVPs merged newest first
    ///
    /// Fails with `SyncFailed` if either collection could not be read.
    pub async fn combined_listing(&self) -> Result<Vec<CombinedListing>> {
        let (events, rsvps) = self.fetch_sources().await;

        let events = events.map_err(|error| {
            warn!("Failed to fetch events for {}: {error}", self.viewer);
            create_sync_error!(error)
        })?;

        let rsvps = rsvps.map_err(|error| {
            warn!("Failed to fetch RSVPs for {}: {error}", self.viewer);
            create_sync_error!(error)
        })?;

        Ok(merge_listing(events, rsvps))
    }

    /// Reload the listing, called whenever the listing comes back into view
    pub async fn refresh(&self) -> Result<Vec<CombinedListing>> {
        let listing = self.combined_listing().await?;
        info!(
            "Refreshed listing for {}: {} entries.",
            self.viewer,
            listing.len()
        );
        Ok(listing)
    }

    /// Find the RSVP that counts as the viewer's for an event
    ///
    /// The oldest match wins when several exist.
    async fn find_rsvp(&self, event_id: &str) -> Result<Option<Rsvp>> {
        let rsvps = self.db.fetch_rsvps_by_event(event_id).await?;

        Ok(match self.options.ownership {
            Ownership::Presence => rsvps.into_iter().next(),
            Ownership::Identity => rsvps.into_iter().find(|rsvp| rsvp.user_id == self.viewer),
        })
    }

    /// Whether the viewer is attending an event
    pub async fn rsvp_status(&self, event_id: &str) -> Result<RsvpState> {
        Ok(self
            .find_rsvp(event_id)
            .await?
            .as_ref()
            .map(RsvpState::from)
            .unwrap_or_default())
    }

    /// Flip the viewer's attendance for an event
    ///
    /// RSVPs are created from the event as given, which becomes the snapshot.
    pub async fn toggle_rsvp(&self, event: &Event) -> Result<RsvpState> {
        match self.find_rsvp(&event.id).await? {
            Some(rsvp) => settle_removal(
                Rsvp::delete(&self.db, &rsvp.id).await,
                self.options.rsvp_mode,
            ),
            None => {
                let rsvp = match self.options.rsvp_mode {
                    RsvpMode::Faithful => {
                        Rsvp::create(&self.db, &self.viewer, &event.id, event.snapshot()).await?
                    }
                    RsvpMode::Hardened => {
                        Rsvp::create_unique(&self.db, &self.viewer, &event.id, event.snapshot())
                            .await?
                    }
                };

                Ok(RsvpState::attending(rsvp.id))
            }
        }
    }

    /// Whether edit and delete controls should be offered for an event
    pub async fn is_owned_by_viewer(&self, event_id: &str) -> Result<bool> {
        match self.db.fetch_event(event_id).await {
            Ok(event) => Ok(match self.options.ownership {
                Ownership::Presence => true,
                Ownership::Identity => event.owner_id == self.viewer,
            }),
            Err(error) if matches!(error.error_type, ErrorType::NotFound) => Ok(false),
            Err(error) => Err(error),
        }
    }

    /// Fail with `NotOwner` if the viewer may not change this event
    async fn check_owner(&self, event_id: &str) -> Result<()> {
        if self.options.ownership == Ownership::Presence {
            return Ok(());
        }

        let event = self.db.fetch_event(event_id).await?;
        if event.owner_id == self.viewer {
            Ok(())
        } else {
            Err(create_error!(NotOwner))
        }
    }

    /// Create an event owned by the viewer
    pub async fn create_event(&self, data: DataCreateEvent) -> Result<Event> {
        Event::create(&self.db, &self.viewer, data).await
    }

    /// Edit an event
    pub async fn update_event(&self, event_id: &str, data: DataEditEvent) -> Result<Event> {
        self.check_owner(event_id).await?;
        Event::update(&self.db, event_id, data).await
    }

    /// Delete an event, its RSVPs are left behind
    pub async fn delete_event(&self, event_id: &str) -> Result<()> {
        self.check_owner(event_id).await?;
        Event::delete(&self.db, event_id).await
    }

    /// Browse all events, filtered by a free text query
    pub async fn search_events(&self, query: &str) -> Result<Vec<Event>> {
        Ok(self
            .db
            .fetch_events()
            .await?
            .into_iter()
            .filter(|event| matches_query(event, query))
            .collect())
    }
}
