use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::movie::application::dto::MovieResponse;
use crate::modules::movie::application::ports::{CatalogSearch, CatalogSearchResult};
use crate::modules::movie::domain::value_objects::is_valid_imdb_id;
use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::shared::application::{ensure_not_cancelled, Outcome, UseCase};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_info};

use super::{command::ImportMoviesCommand, validator, year_parser::parse_release_year};

/// Use case handler importing catalog search hits into the store
///
/// Hits are processed one at a time in catalog order. A hit is skipped,
/// without being reported, when its year cannot be parsed, when the store
/// already holds the same title and year, or when it cannot form a valid
/// movie. A malformed catalog IMDb id is dropped rather than stored. Inserts made before a failure or cancellation are kept.
pub struct ImportMoviesHandler {
    catalog: Arc<dyn CatalogSearch>,
    movie_repository: Arc<dyn MovieRepository>,
}

/// What happened to a single catalog hit
enum EntryOutcome {
    Imported(MovieResponse),
    Skipped(&'static str),
}

impl ImportMoviesHandler {
    pub fn new(catalog: Arc<dyn CatalogSearch>, movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self {
            catalog,
            movie_repository,
        }
    }

    async fn import_entry(
        &self,
        entry: &CatalogSearchResult,
        cancel: &CancellationToken,
    ) -> AppResult<EntryOutcome> {
        let Some(year) = parse_release_year(&entry.year) else {
            return Ok(EntryOutcome::Skipped("unparsable year"));
        };
        let title = entry.title.trim();

        if self
            .movie_repository
            .exists_by_title_and_year(title, year, cancel)
            .await?
        {
            return Ok(EntryOutcome::Skipped("already stored"));
        }

        // Catalog ids that are malformed or too wide are dropped, the movie is kept
        let imdb_id = Some(entry.imdb_id.trim()).filter(|id| is_valid_imdb_id(id));
        if imdb_id.is_none() && !entry.imdb_id.trim().is_empty() {
            log_debug!(
                "Import: dropping malformed imdb id '{}' for '{}'",
                entry.imdb_id,
                title
            );
        }

        let movie = match Movie::create(title, year, imdb_id) {
            Ok(movie) => movie,
            Err(_) => return Ok(EntryOutcome::Skipped("not a valid movie")),
        };

        match self.movie_repository.insert(&movie, cancel).await {
            Ok(()) => Ok(EntryOutcome::Imported(MovieResponse::from(&movie))),
            // Lost a race with a concurrent import of the same title/year
            Err(AppError::DuplicateEntry(_)) => Ok(EntryOutcome::Skipped("already stored")),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl UseCase<ImportMoviesCommand, Vec<MovieResponse>> for ImportMoviesHandler {
    async fn execute(
        &self,
        command: ImportMoviesCommand,
        cancel: &CancellationToken,
    ) -> AppResult<Outcome<Vec<MovieResponse>>> {
        if let Err(errors) = validator::validate(&command) {
            return Ok(Outcome::validation_error(errors));
        }
        ensure_not_cancelled(cancel, "import movies")?;

        let term = command.search_term.trim();
        let timer = TimedOperation::new(&format!("import movies '{}'", term));

        let results = self.catalog.search_movies(term, cancel).await?;
        LogContext::search_operation(term, Some("catalog"), Some(results.len()));

        if results.is_empty() {
            return Ok(Outcome::not_found(format!(
                "No movies found in the catalog for '{}'.",
                term
            )));
        }

        let total = results.len();
        let mut imported = Vec::with_capacity(total);

        for (index, entry) in results.iter().enumerate() {
            ensure_not_cancelled(cancel, "import movies")?;
            LogContext::import_progress(index + 1, total, &entry.title);

            match self.import_entry(entry, cancel).await? {
                EntryOutcome::Imported(movie) => imported.push(movie),
                EntryOutcome::Skipped(reason) => {
                    log_debug!(
                        "Import: skipped '{}' (year '{}'): {}",
                        entry.title,
                        entry.year,
                        reason
                    );
                }
            }
        }

        log_info!(
            "Import for '{}' stored {} of {} catalog results",
            term,
            imported.len(),
            total
        );
        timer.finish();

        Ok(Outcome::success(imported))
    }
}
