use cached::proc_macro::cached;
use config::{Config, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[macro_use]
extern crate log;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../EventFlow.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("EventFlow.toml").exists() {
            builder = builder.add_source(File::new("EventFlow.toml", FileFormat::Toml));
        }

        builder = builder.add_source(Environment::with_prefix("EVENTFLOW").separator("__"));

        builder.build().expect("configuration sources should be valid TOML")
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
    pub database_name: String,
}

/// How the RSVP toggle guards against concurrent callers
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RsvpMode {
    /// Read-then-write with no coordination
    #[default]
    Faithful,
    /// Insert through a unique (user_id, event_id) constraint
    Hardened,
}

/// What counts as "owned by the viewer"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    /// Any event reachable in the collection
    #[default]
    Presence,
    /// Events whose owner id equals the viewer
    Identity,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sync {
    pub rsvp_mode: RsvpMode,
    pub ownership: Ownership,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub sync: Sync,
}

pub async fn init() {
    info!("EventFlow configuration: {:?}", config().await);
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read()
        .await
        .try_deserialize::<Settings>()
        .expect("configuration should match the Settings layout")
}

/// Configure logging and load variables from `.env`
pub fn setup_logging() {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    // Tests and embedding hosts may have installed a logger already
    pretty_env_logger::try_init().ok();
}
