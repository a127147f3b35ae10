use eventflow_config::{config, Ownership, RsvpMode};

/// Policies the sync service runs under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub rsvp_mode: RsvpMode,
    pub ownership: Ownership,
}

impl SyncOptions {
    /// Read the policies from the `[sync]` configuration section
    pub async fn from_config() -> SyncOptions {
        let config = config().await;

        SyncOptions {
            rsvp_mode: config.sync.rsvp_mode,
            ownership: config.sync.ownership,
        }
    }

    /// Faithful toggle, ownership by presence
    pub fn faithful() -> SyncOptions {
        SyncOptions::default()
    }

    /// Unique RSVPs, ownership by owner id
    pub fn hardened() -> SyncOptions {
        SyncOptions {
            rsvp_mode: RsvpMode::Hardened,
            ownership: Ownership::Identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use eventflow_config::{Ownership, RsvpMode};

    use crate::SyncOptions;

    #[async_std::test]
    async fn defaults_match_configuration() {
        let options = SyncOptions::from_config().await;
        assert_eq!(options, SyncOptions::faithful());
        assert_eq!(options.rsvp_mode, RsvpMode::Faithful);
        assert_eq!(options.ownership, Ownership::Presence);
    }
}
