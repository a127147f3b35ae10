use eventflow_database::DatabaseInfo;

#[async_std::main]
async fn main() {
    eventflow_config::setup_logging();
    eventflow_config::init().await;

    let db = DatabaseInfo::Auto.connect().await.unwrap();
    db.migrate_database().await.unwrap();
}
