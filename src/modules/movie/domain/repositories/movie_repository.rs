use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::modules::movie::domain::entities::Movie;
use crate::shared::errors::AppResult;

/// Port (interface) for movie persistence following Hexagonal Architecture
///
/// Every call takes the caller's cancellation token and gives up waiting as
/// soon as it fires.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find movie by ID
    async fn find_by_id(&self, id: Uuid, cancel: &CancellationToken) -> AppResult<Option<Movie>>;

    /// Check whether a movie with this exact title and year is stored
    async fn exists_by_title_and_year(
        &self,
        title: &str,
        year: i32,
        cancel: &CancellationToken,
    ) -> AppResult<bool>;

    /// Insert a new movie.
    ///
    /// Fails with `AppError::DuplicateEntry` when the store's own uniqueness
    /// constraint on (title, year) rejects the row.
    async fn insert(&self, movie: &Movie, cancel: &CancellationToken) -> AppResult<()>;
}
