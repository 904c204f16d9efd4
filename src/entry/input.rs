//! Free-text numeric input.
//!
//! Score fields accept digits only. Anything that does not parse to a
//! score, including an empty field or a value too large for `Score`,
//! becomes 0.

use crate::core::Score;

/// Keep only ASCII digits.
#[must_use]
pub fn sanitize_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Coerce entry text to a non-negative score.
///
/// ```
/// use rummy_scorer::entry::coerce_score;
///
/// assert_eq!(coerce_score("42"), 42);
/// assert_eq!(coerce_score("4x2"), 42);
/// assert_eq!(coerce_score(""), 0);
/// assert_eq!(coerce_score("-7"), 7);
/// ```
#[must_use]
pub fn coerce_score(text: &str) -> Score {
    sanitize_digits(text).parse().unwrap_or(0)
}
