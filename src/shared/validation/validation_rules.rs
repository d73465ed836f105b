//! Plain predicates used by the per-command rule tables

/// Not empty and not only whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Trimmed value has at most `max` characters
pub fn max_chars(value: &str, max: usize) -> bool {
    value.trim().chars().count() <= max
}

/// Trimmed value has at least `min` characters
pub fn min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

pub fn in_range(value: i32, min: i32, max: i32) -> bool {
    (min..=max).contains(&value)
}

/// `Some` with non-whitespace content
pub fn is_present(value: Option<&str>) -> bool {
    value.map(not_blank).unwrap_or(false)
}
