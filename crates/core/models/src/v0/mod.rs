mod events;
mod listing;
mod rsvps;

pub use events::*;
pub use listing::*;
pub use rsvps::*;
