use serde::Deserialize;

/// Command for creating a new movie
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieCommand {
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

impl CreateMovieCommand {
    pub fn new(title: impl Into<String>, year: i32, imdb_id: Option<String>) -> Self {
        Self {
            title: title.into(),
            year,
            imdb_id,
        }
    }
}
