use eventflow_models::v0::*;

impl From<crate::Event> for Event {
    fn from(value: crate::Event) -> Self {
        Event {
            id: value.id,
            owner_id: value.owner_id,
            title: value.title,
            description: value.description,
            date: value.date,
            time: value.time,
            location: value.location,
            capacity: value.capacity,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<crate::Rsvp> for Rsvp {
    fn from(value: crate::Rsvp) -> Self {
        Rsvp {
            id: value.id,
            event_id: value.event_id,
            user_id: value.user_id,
            event_title: value.event_title,
            event_date: value.event_date,
            event_time: value.event_time,
            event_location: value.event_location,
            event_description: value.event_description,
            rsvped_at: value.rsvped_at,
        }
    }
}

impl From<crate::Event> for CombinedListing {
    fn from(value: crate::Event) -> Self {
        CombinedListing {
            date: display_date(&value.date, &value.time),
            id: value.id,
            title: value.title,
            location: value.location,
            description: value.description,
            kind: ListingKind::Created,
            rsvp_id: None,
            timestamp: Some(value.created_at),
        }
    }
}

impl From<crate::Rsvp> for CombinedListing {
    fn from(value: crate::Rsvp) -> Self {
        CombinedListing {
            date: display_date(&value.event_date, &value.event_time),
            id: value.event_id,
            title: value.event_title,
            location: value.event_location,
            description: value.event_description,
            kind: ListingKind::Rsvp,
            rsvp_id: Some(value.id),
            timestamp: Some(value.rsvped_at),
        }
    }
}

impl From<&crate::Rsvp> for RsvpState {
    fn from(value: &crate::Rsvp) -> Self {
        RsvpState::attending(value.id.clone())
    }
}
