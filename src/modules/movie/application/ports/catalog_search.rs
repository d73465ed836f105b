use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::shared::errors::AppResult;

/// One hit from the external movie catalog, exactly as the catalog reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSearchResult {
    pub title: String,
    /// Free-form year text: "2010", "2010–2012", "N/A", ...
    pub year: String,
    pub imdb_id: String,
}

impl CatalogSearchResult {
    pub fn new(title: impl Into<String>, year: impl Into<String>, imdb_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            imdb_id: imdb_id.into(),
        }
    }
}

/// Port for the external catalog search (OMDb in production)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Search by free-text term. Returns the first page of hits in catalog
    /// order; an empty list when the catalog has no match.
    async fn search_movies(
        &self,
        term: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Vec<CatalogSearchResult>>;
}
