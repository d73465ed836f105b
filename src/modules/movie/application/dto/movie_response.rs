use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::movie::domain::Movie;

/// Read-facing projection of a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub imdb_id: Option<String>,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id(),
            title: movie.title().to_string(),
            year: movie.year(),
            imdb_id: movie.imdb_id().map(str::to_string),
        }
    }
}
