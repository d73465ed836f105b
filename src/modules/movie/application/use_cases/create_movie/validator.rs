use crate::modules::movie::domain::entities::MAX_TITLE_LENGTH;
use crate::modules::movie::domain::value_objects::{
    is_valid_imdb_id, latest_release_year, EARLIEST_RELEASE_YEAR,
};
use crate::shared::application::ValidationErrors;
use crate::shared::validation::{validation_rules as rules, ValidationChain};

use super::command::CreateMovieCommand;

pub fn validate(command: &CreateMovieCommand) -> Result<(), ValidationErrors> {
    let latest = latest_release_year();
    let imdb_id = command.imdb_id.as_deref();

    ValidationChain::new()
        .rule("title", rules::not_blank(&command.title), "Title is required.")
        .rule(
            "title",
            rules::max_chars(&command.title, MAX_TITLE_LENGTH),
            format!("Title must not exceed {} characters.", MAX_TITLE_LENGTH),
        )
        .rule(
            "year",
            rules::in_range(command.year, EARLIEST_RELEASE_YEAR, latest),
            format!("Year must be between {} and {}.", EARLIEST_RELEASE_YEAR, latest),
        )
        .rule_when(
            rules::is_present(imdb_id),
            "imdb_id",
            imdb_id.map(is_valid_imdb_id).unwrap_or(true),
            "IMDb id must be in format 'tt' followed by digits (e.g. tt1234567).",
        )
        .finish()
}
