use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::shared::errors::{AppError, AppResult};

/// Await `future` unless `cancel` fires first.
///
/// Work already handed to the database (a blocking diesel call) keeps running
/// to completion in the background; only the caller stops waiting for it.
pub async fn run_cancellable<T, F>(
    cancel: &CancellationToken,
    operation: &str,
    future: F,
) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::Cancelled(operation.to_string())),
        result = future => result,
    }
}

/// Fail fast between sequential steps of a workflow
pub fn ensure_not_cancelled(cancel: &CancellationToken, operation: &str) -> AppResult<()> {
    if cancel.is_cancelled() {
        return Err(AppError::Cancelled(operation.to_string()));
    }
    Ok(())
}
