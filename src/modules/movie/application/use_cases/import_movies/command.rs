use serde::Deserialize;

/// Command for importing every new match of a search term from the external catalog
#[derive(Debug, Clone, Deserialize)]
pub struct ImportMoviesCommand {
    pub search_term: String,
}

impl ImportMoviesCommand {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
        }
    }
}
