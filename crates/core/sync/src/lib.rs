#[macro_use]
extern crate log;

#[macro_use]
extern crate eventflow_result;

#[cfg(test)]
macro_rules! sync_test {
    ( $options: expr, | $service: ident, $db: ident | $test:expr ) => {
        let db = eventflow_database::DatabaseInfo::Test(format!(
            "{}:{}",
            file!().replace('/', "_").replace(".rs", ""),
            line!()
        ))
        .connect()
        .await
        .expect("Database connection failed.");

        db.drop_database().await;

        let service = $crate::EventSyncService::new(db.clone(), "viewer", $options);

        #[allow(clippy::redundant_closure_call)]
        (|$service: $crate::EventSyncService, $db: eventflow_database::Database| $test)(
            service,
            db.clone(),
        )
        .await;

        db.drop_database().await
    };
}

mod cancel;
mod listing;
mod options;
mod service;

pub use cancel::*;
pub use listing::*;
pub use options::*;
pub use service::*;
