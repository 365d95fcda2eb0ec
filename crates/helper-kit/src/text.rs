//! Small text helpers: excerpts, containment checks and name splitting.

use serde::Serialize;

/// Marker appended to truncated excerpts.
pub const EXCERPT_ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters plus an ellipsis.
///
/// Returns `None` for empty text. Text that already fits is returned
/// unchanged.
///
/// ```
/// use helper_kit::excerpt;
///
/// assert_eq!(excerpt("Hello, world", 5).as_deref(), Some("Hello..."));
/// assert_eq!(excerpt("Hi", 5).as_deref(), Some("Hi"));
/// assert_eq!(excerpt("", 5), None);
/// ```
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text
            .get(..cut)
            .map(|head| format!("{head}{EXCERPT_ELLIPSIS}")),
        None => Some(text.to_owned()),
    }
}

/// Case-insensitive substring test. An empty needle never matches.
///
/// ```
/// use helper_kit::contains_ignore_case;
///
/// assert!(contains_ignore_case("WORLD", "hello world"));
/// assert!(!contains_ignore_case("", "hello world"));
/// ```
#[must_use]
pub fn contains_ignore_case(needle: &str, haystack: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A full name split into given and family parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    /// Everything except the last word.
    pub first_name: String,
    /// The last word, or the fallback for single-word names.
    pub last_name: String,
}

/// Split a full name on spaces into first and last name.
///
/// A single-word name is used as both parts unless `default_last_name`
/// supplies the family name.
///
/// ```
/// use helper_kit::split_full_name;
///
/// let name = split_full_name("Ada King Lovelace", None);
/// assert_eq!(name.first_name, "Ada King");
/// assert_eq!(name.last_name, "Lovelace");
///
/// let mononym = split_full_name("Plato", Some("-"));
/// assert_eq!((mononym.first_name.as_str(), mononym.last_name.as_str()), ("Plato", "-"));
/// ```
#[must_use]
pub fn split_full_name(full_name: &str, default_last_name: Option<&str>) -> FullName {
    match full_name.rsplit_once(' ') {
        Some((first, last)) => FullName {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
        },
        None => FullName {
            first_name: full_name.to_owned(),
            last_name: default_last_name
                .filter(|fallback| !fallback.is_empty())
                .unwrap_or(full_name)
                .to_owned(),
        },
    }
}
