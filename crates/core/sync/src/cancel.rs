use std::future::Future;

use eventflow_result::Result;
use futures::future::{AbortRegistration, Abortable};

/// Run a service call that can be abandoned through the matching `AbortHandle`
///
/// Aborting drops the call at its next suspension point and fails with
/// `Cancelled`. Writes the store already accepted are not rolled back.
pub async fn cancellable<T, F>(registration: AbortRegistration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match Abortable::new(future, registration).await {
        Ok(result) => result,
        Err(_) => {
            debug!("Request was cancelled by the caller.");
            Err(create_error!(Cancelled))
        }
    }
}
