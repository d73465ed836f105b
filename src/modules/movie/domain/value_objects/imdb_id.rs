use once_cell::sync::Lazy;
use regex::Regex;

/// Width of the `imdb_id` column
pub const MAX_IMDB_ID_LENGTH: usize = 20;

static IMDB_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^tt\d+$").expect("IMDb id pattern is valid"));

/// `tt` followed by one or more digits, e.g. `tt1375666`, and short enough to store
pub fn is_valid_imdb_id(value: &str) -> bool {
    value.len() <= MAX_IMDB_ID_LENGTH && IMDB_ID_PATTERN.is_match(value)
}
