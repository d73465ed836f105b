/// Base traits for command and query handlers
///
/// Every handler is a single-purpose object wired explicitly in the
/// composition root. A handler validates its input, does its work and
/// reports the result through [`Outcome`]; infrastructure failures travel
/// through the outer [`AppResult`].
///
/// # Example
///
/// ```rust,ignore
/// struct CreateMovieCommand {
///     title: String,
///     year: i32,
/// }
///
/// struct CreateMovieHandler {
///     repository: Arc<dyn MovieRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<CreateMovieCommand, MovieResponse> for CreateMovieHandler {
///     async fn execute(
///         &self,
///         command: CreateMovieCommand,
///         cancel: &CancellationToken,
///     ) -> AppResult<Outcome<MovieResponse>> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::outcome::Outcome;
use crate::shared::errors::AppResult;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult>: Send + Sync {
    /// Execute the use case with the given command
    async fn execute(
        &self,
        command: TCommand,
        cancel: &CancellationToken,
    ) -> AppResult<Outcome<TResult>>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult>: Send + Sync {
    /// Execute the query
    async fn execute(&self, query: TQuery, cancel: &CancellationToken)
        -> AppResult<Outcome<TResult>>;
}
