/// In-memory stand-ins for the store and the external catalog
use async_trait::async_trait;
use cinedex_lib::modules::movie::application::{CatalogSearch, CatalogSearchResult};
use cinedex_lib::modules::movie::domain::{Movie, MovieRepository};
use cinedex_lib::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Store keeping movies in insertion order, unique on (title, year)
#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: Mutex<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.lock().unwrap().len()
    }

    pub fn titles(&self) -> Vec<String> {
        self.movies
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.title().to_string())
            .collect()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_by_id(&self, id: Uuid, _cancel: &CancellationToken) -> AppResult<Option<Movie>> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    async fn exists_by_title_and_year(
        &self,
        title: &str,
        year: i32,
        _cancel: &CancellationToken,
    ) -> AppResult<bool> {
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.title() == title && m.year() == year))
    }

    async fn insert(&self, movie: &Movie, _cancel: &CancellationToken) -> AppResult<()> {
        let mut movies = self.movies.lock().unwrap();
        if movies
            .iter()
            .any(|m| m.title() == movie.title() && m.year() == movie.year())
        {
            return Err(AppError::DuplicateEntry(
                "movies_title_year_unique".to_string(),
            ));
        }
        movies.push(movie.clone());
        Ok(())
    }
}

/// Catalog answering from a fixed term -> results table
#[derive(Default)]
pub struct ScriptedCatalog {
    results: HashMap<String, Vec<CatalogSearchResult>>,
    failing: bool,
    calls: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, term: &str, results: Vec<CatalogSearchResult>) -> Self {
        self.results.insert(term.to_string(), results);
        self
    }

    /// Every search fails as if the service were down
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSearch for ScriptedCatalog {
    async fn search_movies(
        &self,
        term: &str,
        _cancel: &CancellationToken,
    ) -> AppResult<Vec<CatalogSearchResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(AppError::ExternalServiceError(
                "Failed to connect to external service".to_string(),
            ));
        }
        Ok(self.results.get(term).cloned().unwrap_or_default())
    }
}

/// The two catalog hits for "Inception"
pub fn inception_results() -> Vec<CatalogSearchResult> {
    vec![
        CatalogSearchResult::new("Inception", "2010", "tt1375666"),
        CatalogSearchResult::new("Inception: The Cobol Job", "2010", "tt1790736"),
    ]
}
