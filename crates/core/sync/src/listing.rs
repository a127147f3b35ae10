use std::cmp::Ordering;

use eventflow_database::util::timestamp;
use eventflow_database::{Event, Rsvp};
use eventflow_models::v0::CombinedListing;

/// Merge events and RSVPs into one listing, most recent first
///
/// Events come before RSVPs prior to sorting, the sort is stable so entries
/// with equal timestamps keep that order. Entries whose timestamp cannot be
/// parsed are kept at the end.
pub fn merge_listing(events: Vec<Event>, rsvps: Vec<Rsvp>) -> Vec<CombinedListing> {
    let mut entries: Vec<_> = events
        .into_iter()
        .map(CombinedListing::from)
        .chain(rsvps.into_iter().map(CombinedListing::from))
        .map(|entry| {
            let time = entry.timestamp.as_deref().and_then(timestamp::parse);
            (time, entry)
        })
        .collect();

    entries.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    entries.into_iter().map(|(_, entry)| entry).collect()
}

/// Whether an event matches a free text search
///
/// Case-insensitive substring match over title, location and description.
pub fn matches_query(event: &Event, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    [&event.title, &event.location, &event.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use eventflow_database::{Event, Rsvp};
    use eventflow_models::v0::ListingKind;

    use crate::{matches_query, merge_listing};

    fn event(id: &str, created_at: &str) -> Event {
        Event {
            id: id.to_string(),
            owner_id: "owner".to_string(),
            title: format!("Event {id}"),
            description: "Live music".to_string(),
            date: "2024-12-25".to_string(),
            time: "18:00".to_string(),
            location: "City Park".to_string(),
            capacity: 100,
            created_at: created_at.to_string(),
            updated_at: None,
        }
    }

    fn rsvp(id: &str, event_id: &str, rsvped_at: &str) -> Rsvp {
        Rsvp {
            id: id.to_string(),
            event_id: event_id.to_string(),
            user_id: "viewer".to_string(),
            event_title: "Snapshot".to_string(),
            event_date: "2024-12-25".to_string(),
            event_time: String::new(),
            event_location: "Hall".to_string(),
            event_description: "d".to_string(),
            rsvped_at: rsvped_at.to_string(),
        }
    }

    #[test]
    fn later_rsvp_precedes_earlier_event() {
        let listing = merge_listing(
            vec![event("evt-1", "2024-01-01T10:00:00.000000Z")],
            vec![rsvp("r-1", "evt-2", "2024-01-02T10:00:00.000000Z")],
        );

        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].kind, ListingKind::Rsvp);
        assert_eq!(listing[0].id, "evt-2");
        assert_eq!(listing[0].rsvp_id.as_deref(), Some("r-1"));
        assert_eq!(listing[1].kind, ListingKind::Created);
        assert_eq!(listing[1].rsvp_id, None);
    }

    #[test]
    fn entries_keep_their_source_fields() {
        let listing = merge_listing(
            vec![event("evt-1", "2024-01-01T10:00:00.000000Z")],
            vec![rsvp("r-1", "evt-1", "2023-01-01T10:00:00.000000Z")],
        );

        // Same event listed under both tags
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].title, "Event evt-1");
        assert_eq!(listing[0].date, "2024-12-25 at 18:00");
        assert_eq!(listing[0].location, "City Park");
        assert_eq!(
            listing[0].timestamp.as_deref(),
            Some("2024-01-01T10:00:00.000000Z")
        );
        assert_eq!(listing[1].title, "Snapshot");
        assert_eq!(listing[1].date, "2024-12-25");
        assert_eq!(listing[1].location, "Hall");
    }

    #[test]
    fn unparsable_timestamps_sort_last() {
        let listing = merge_listing(
            vec![
                event("broken", "yesterday"),
                event("old", "2020-01-01T00:00:00Z"),
                event("empty", ""),
            ],
            vec![rsvp("r-1", "evt-9", "2021-06-01 12:00:00")],
        );

        let ids: Vec<&str> = listing.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["evt-9", "old", "broken", "empty"]);
    }

    #[test]
    fn ties_keep_events_before_rsvps() {
        let listing = merge_listing(
            vec![event("evt-1", "2024-01-01T10:00:00.000000Z")],
            vec![rsvp("r-1", "evt-2", "2024-01-01T10:00:00Z")],
        );

        assert_eq!(listing[0].kind, ListingKind::Created);
        assert_eq!(listing[1].kind, ListingKind::Rsvp);
    }

    #[test]
    fn search_is_case_insensitive() {
        let event = event("evt-1", "");

        assert!(matches_query(&event, ""));
        assert!(matches_query(&event, "   "));
        assert!(matches_query(&event, "MUSIC"));
        assert!(matches_query(&event, "city park"));
        assert!(matches_query(&event, "event EVT"));
        assert!(!matches_query(&event, "gala"));
    }
}
