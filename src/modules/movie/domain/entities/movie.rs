use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::movie::domain::value_objects::release_year::{
    is_valid_release_year, latest_release_year, EARLIEST_RELEASE_YEAR,
};
use crate::shared::errors::AppError;

pub const MAX_TITLE_LENGTH: usize = 200;

/// Invariant violations raised by [`Movie::create`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovieError {
    #[error("Movie title is required.")]
    EmptyTitle,

    #[error("Movie title must not exceed {max} characters.")]
    TitleTooLong { max: usize },

    #[error("Movie year must be between {min} and {max}.")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

impl MovieError {
    /// Input field the violation refers to
    pub fn field(&self) -> &'static str {
        match self {
            MovieError::EmptyTitle | MovieError::TitleTooLong { .. } => "title",
            MovieError::YearOutOfRange { .. } => "year",
        }
    }
}

impl From<MovieError> for AppError {
    fn from(err: MovieError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

/// A catalog entry. Only obtainable through [`Movie::create`] (or from the
/// store), so title and year bounds always hold; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    id: Uuid,
    title: String,
    year: i32,
    imdb_id: Option<String>,
}

impl Movie {
    /// Validate and normalize raw input into a new movie with a fresh id.
    ///
    /// The title is trimmed; a blank IMDb id becomes `None`.
    pub fn create(title: &str, year: i32, imdb_id: Option<&str>) -> Result<Self, MovieError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MovieError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(MovieError::TitleTooLong {
                max: MAX_TITLE_LENGTH,
            });
        }

        if !is_valid_release_year(year) {
            return Err(MovieError::YearOutOfRange {
                year,
                min: EARLIEST_RELEASE_YEAR,
                max: latest_release_year(),
            });
        }

        let imdb_id = imdb_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            year,
            imdb_id,
        })
    }

    /// Rebuild a movie previously persisted through [`Movie::create`]
    pub(crate) fn restore(id: Uuid, title: String, year: i32, imdb_id: Option<String>) -> Self {
        Self {
            id,
            title,
            year,
            imdb_id,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn imdb_id(&self) -> Option<&str> {
        self.imdb_id.as_deref()
    }
}
