//! Application wiring: handlers built once, shared by every request

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::movie::{
    self,
    application::{CreateMovieHandler, GetMovieByIdHandler, ImportMoviesHandler},
    CatalogSearch, MovieRepository,
};

/// Movie workflows
pub struct MovieUseCases {
    pub create: CreateMovieHandler,
    pub get_by_id: GetMovieByIdHandler,
    pub import: ImportMoviesHandler,
}

impl MovieUseCases {
    pub fn new(repository: Arc<dyn MovieRepository>, catalog: Arc<dyn CatalogSearch>) -> Self {
        Self {
            create: CreateMovieHandler::new(Arc::clone(&repository)),
            get_by_id: GetMovieByIdHandler::new(Arc::clone(&repository)),
            import: ImportMoviesHandler::new(catalog, repository),
        }
    }
}

pub struct App {
    pub movies: MovieUseCases,
    pub request_timeout: Duration,
}

impl App {
    pub fn new(
        repository: Arc<dyn MovieRepository>,
        catalog: Arc<dyn CatalogSearch>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            movies: MovieUseCases::new(repository, catalog),
            request_timeout,
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

/// Create all HTTP routes
pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(movie::routes::routes())
        .with_state(app)
}
