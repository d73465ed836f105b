//! Release year bounds
//!
//! The first motion picture dates from 1888; announced releases are accepted
//! up to five years ahead of the current calendar year (UTC).

use chrono::{Datelike, Utc};

pub const EARLIEST_RELEASE_YEAR: i32 = 1888;
pub const FUTURE_RELEASE_WINDOW: i32 = 5;

/// Latest accepted release year, relative to today
pub fn latest_release_year() -> i32 {
    Utc::now().year() + FUTURE_RELEASE_WINDOW
}

pub fn is_valid_release_year(year: i32) -> bool {
    (EARLIEST_RELEASE_YEAR..=latest_release_year()).contains(&year)
}
