//! Catalog year text -> release year
//!
//! Catalogs report series and re-releases as ranges ("2010–2012", "2019-")
//! and unknown years as "N/A". Only the leading year is kept.

/// Separators seen between the years of a range: hyphen, en dash, em dash
const RANGE_SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Parse the leading year of a catalog year field; `None` when it is not a number
pub fn parse_release_year(raw: &str) -> Option<i32> {
    raw.split(RANGE_SEPARATORS)
        .next()
        .map(str::trim)
        .and_then(|segment| segment.parse::<i32>().ok())
}
