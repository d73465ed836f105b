use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::movie::application::dto::MovieResponse;
use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::shared::application::{ensure_not_cancelled, Outcome, UseCase, ValidationErrors};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

use super::{command::CreateMovieCommand, validator};

/// Use case handler for creating a new movie
pub struct CreateMovieHandler {
    movie_repository: Arc<dyn MovieRepository>,
}

impl CreateMovieHandler {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }

    fn duplicate_message(title: &str, year: i32) -> String {
        format!(
            "A movie with title '{}' and year {} already exists.",
            title, year
        )
    }
}

#[async_trait]
impl UseCase<CreateMovieCommand, MovieResponse> for CreateMovieHandler {
    async fn execute(
        &self,
        command: CreateMovieCommand,
        cancel: &CancellationToken,
    ) -> AppResult<Outcome<MovieResponse>> {
        if let Err(errors) = validator::validate(&command) {
            return Ok(Outcome::validation_error(errors));
        }
        ensure_not_cancelled(cancel, "create movie")?;

        let title = command.title.trim();

        if self
            .movie_repository
            .exists_by_title_and_year(title, command.year, cancel)
            .await?
        {
            log_debug!("Create rejected, '{}' ({}) already stored", title, command.year);
            return Ok(Outcome::conflict(Self::duplicate_message(
                title,
                command.year,
            )));
        }

        // Factory errors are reported like validator errors
        let movie = match Movie::create(title, command.year, command.imdb_id.as_deref()) {
            Ok(movie) => movie,
            Err(err) => {
                let mut errors = ValidationErrors::new();
                errors.insert(err.field().to_string(), vec![err.to_string()]);
                return Ok(Outcome::validation_error(errors));
            }
        };

        match self.movie_repository.insert(&movie, cancel).await {
            Ok(()) => {}
            Err(AppError::DuplicateEntry(_)) => {
                return Ok(Outcome::conflict(Self::duplicate_message(
                    movie.title(),
                    movie.year(),
                )));
            }
            Err(err) => return Err(err),
        }

        log_info!(
            "Created movie {} '{}' ({})",
            movie.id(),
            movie.title(),
            movie.year()
        );

        Ok(Outcome::success(MovieResponse::from(&movie)))
    }
}
