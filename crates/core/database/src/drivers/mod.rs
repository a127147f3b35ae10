#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

use eventflow_config::{config, RsvpMode};
use eventflow_result::Result;
use rand::Rng;

#[cfg(feature = "mongodb")]
pub use self::mongodb::*;
pub use self::reference::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Auto-detect the database in use and create an empty testing database
    Test(String),
    /// Use the in-memory reference database
    Reference,
    /// Connect to MongoDB
    #[cfg(feature = "mongodb")]
    MongoDb { uri: String, database_name: String },
    /// Use existing MongoDB connection
    #[cfg(feature = "mongodb")]
    MongoDbFromClient(::mongodb::Client, String),
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// In-memory reference database
    Reference(ReferenceDb),
    /// MongoDB database
    #[cfg(feature = "mongodb")]
    MongoDb(MongoDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    #[async_recursion]
    pub async fn connect(self) -> Result<Database, String> {
        let config = config().await;

        match self {
            DatabaseInfo::Auto => {
                if std::env::var("TEST_DB").is_ok() {
                    DatabaseInfo::Test(format!(
                        "eventflow_test_{}",
                        rand::thread_rng().gen_range(1_000_000..10_000_000)
                    ))
                    .connect()
                    .await
                } else if !config.database.mongodb.is_empty() {
                    #[cfg(feature = "mongodb")]
                    return DatabaseInfo::MongoDb {
                        uri: config.database.mongodb,
                        database_name: config.database.database_name,
                    }
                    .connect()
                    .await;

                    #[cfg(not(feature = "mongodb"))]
                    return Err("MongoDB not enabled.".to_string());
                } else {
                    DatabaseInfo::Reference.connect().await
                }
            }
            DatabaseInfo::Test(database_name) => {
                // Tests run against the reference database unless told otherwise
                match std::env::var("TEST_DB")
                    .unwrap_or_else(|_| "REFERENCE".to_string())
                    .as_str()
                {
                    "REFERENCE" => DatabaseInfo::Reference.connect().await,
                    "MONGODB" => {
                        #[cfg(feature = "mongodb")]
                        return DatabaseInfo::MongoDb {
                            uri: config.database.mongodb,
                            database_name,
                        }
                        .connect()
                        .await;

                        #[cfg(not(feature = "mongodb"))]
                        return Err("MongoDB not enabled.".to_string());
                    }
                    other => Err(format!(
                        "TEST_DB must be REFERENCE or MONGODB, got {other} for {database_name}"
                    )),
                }
            }
            DatabaseInfo::Reference => {
                info!("Using in-memory reference database.");
                Ok(Database::Reference(Default::default()))
            }
            #[cfg(feature = "mongodb")]
            DatabaseInfo::MongoDb { uri, database_name } => {
                let client = ::mongodb::Client::with_uri_str(uri)
                    .await
                    .map_err(|_| "Failed to init db connection.".to_string())?;

                info!("Connected to MongoDB, using database {database_name}.");
                Ok(Database::MongoDb(MongoDb(client, database_name)))
            }
            #[cfg(feature = "mongodb")]
            DatabaseInfo::MongoDbFromClient(client, database_name) => {
                Ok(Database::MongoDb(MongoDb(client, database_name)))
            }
        }
    }
}

impl Database {
    /// Prepare the database for use
    ///
    /// Creates the query indexes, plus the unique `(user_id, event_id)`
    /// index on RSVPs when the RSVP toggle runs in hardened mode.
    pub async fn migrate_database(&self) -> Result<()> {
        let unique_rsvps = config().await.sync.rsvp_mode == RsvpMode::Hardened;

        match self {
            Database::Reference(_) => Ok(()),
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo.create_indexes(unique_rsvps).await,
        }
    }

    /// Create the unique `(user_id, event_id)` index on RSVPs
    ///
    /// The reference driver enforces uniqueness on insert instead.
    pub async fn ensure_unique_rsvps(&self) -> Result<()> {
        match self {
            Database::Reference(_) => Ok(()),
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo.ensure_unique_rsvps().await,
        }
    }

    /// Drop all data held by this database
    pub async fn drop_database(&self) {
        match self {
            Database::Reference(reference) => reference.clear().await,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => {
                if mongo.db().drop().await.is_err() {
                    warn!("Failed to drop database {}.", mongo.1);
                }
            }
        }
    }
}
