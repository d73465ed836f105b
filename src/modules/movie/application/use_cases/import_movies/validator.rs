use crate::shared::application::ValidationErrors;
use crate::shared::validation::{validation_rules as rules, ValidationChain};

use super::command::ImportMoviesCommand;

pub const MIN_SEARCH_TERM_LENGTH: usize = 2;

pub fn validate(command: &ImportMoviesCommand) -> Result<(), ValidationErrors> {
    ValidationChain::new()
        .rule(
            "search_term",
            rules::not_blank(&command.search_term),
            "Search term is required.",
        )
        .rule(
            "search_term",
            rules::min_chars(&command.search_term, MIN_SEARCH_TERM_LENGTH),
            format!(
                "Search term must be at least {} characters.",
                MIN_SEARCH_TERM_LENGTH
            ),
        )
        .finish()
}
