use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::log_warn;
use crate::shared::errors::{AppError, AppResult};

/// Run one request's workflow under a fresh cancellation token.
///
/// The token is cancelled when the deadline passes or when the request future
/// is dropped (client went away).
pub async fn with_request_deadline<T, F, Fut>(
    timeout: Duration,
    operation: &str,
    run: F,
) -> AppResult<T>
where
    F: FnOnce(CancellationToken) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    match tokio::time::timeout(timeout, run(cancel.clone())).await {
        Ok(result) => result,
        Err(_) => {
            cancel.cancel();
            log_warn!("{} exceeded its {:?} deadline", operation, timeout);
            Err(AppError::Timeout(format!(
                "{} did not finish within {:?}",
                operation, timeout
            )))
        }
    }
}
