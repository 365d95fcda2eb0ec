//! URL slug generation and validation.
//!
//! Slugs are lowercase ASCII identifiers composed of letters, digits and
//! hyphens, never starting or ending with a hyphen.

/// Maximum slug length when [`SlugOptions::cap_length`] is enabled.
pub const SLUG_IDEAL_MAX_LEN: usize = 98;

/// Options controlling [`slugify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    /// Truncate the slug to [`SLUG_IDEAL_MAX_LEN`] characters.
    pub cap_length: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self { cap_length: true }
    }
}

/// Turn arbitrary text into a URL-safe slug.
///
/// Latin-1 and a handful of Latin Extended-A letters are transliterated to
/// ASCII first (`é` becomes `e`, `Đ` becomes `Dj`). Every run of characters
/// outside `[A-Za-z0-9-]` then collapses into a single hyphen, so any other
/// non-ASCII character is dropped rather than transliterated.
///
/// # Examples
///
/// ```
/// use helper_kit::{SlugOptions, slugify};
///
/// assert_eq!(slugify("Café día", SlugOptions::default()), "cafe-dia");
/// assert_eq!(slugify("  Hello, World!  ", SlugOptions::default()), "hello-world");
/// ```
#[must_use]
pub fn slugify(text: &str, options: SlugOptions) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_separator_run = false;

    for ch in text.chars() {
        if let Some(ascii) = transliterate(ch) {
            slug.push_str(ascii);
            in_separator_run = false;
        } else if ch.is_ascii_alphanumeric() || ch == '-' {
            slug.push(ch);
            in_separator_run = false;
        } else if !in_separator_run {
            slug.push('-');
            in_separator_run = true;
        }
    }

    slug.make_ascii_lowercase();
    if options.cap_length {
        // Every character is ASCII by now, so byte truncation is char-safe.
        slug.truncate(SLUG_IDEAL_MAX_LEN);
    }

    slug.trim_matches('-').to_owned()
}

/// [`slugify`] with the default options (length capped).
#[must_use]
pub fn slugify_capped(text: &str) -> String {
    slugify(text, SlugOptions::default())
}

/// Return `true` when `value` is a well-formed slug.
///
/// ```
/// use helper_kit::is_valid_slug;
///
/// assert!(is_valid_slug("cafe-dia"));
/// assert!(!is_valid_slug("-cafe"));
/// assert!(!is_valid_slug("Cafe"));
/// ```
#[must_use]
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && has_no_edge_hyphen(value) && has_allowed_slug_chars(value)
}

fn has_no_edge_hyphen(value: &str) -> bool {
    !value.starts_with('-') && !value.ends_with('-')
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// ASCII replacement for the supported accented letters.
const fn transliterate(ch: char) -> Option<&'static str> {
    let ascii = match ch {
        'Š' => "S",
        'š' => "s",
        'Đ' => "Dj",
        'đ' => "dj",
        'Ž' => "Z",
        'ž' => "z",
        'Č' | 'Ć' | 'Ç' => "C",
        'č' | 'ć' | 'ç' => "c",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Æ' => "A",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ' => "a",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'ð' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        // No entry for `ü`: it falls through to the separator pass.
        'ù' | 'ú' | 'û' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'Þ' => "B",
        'þ' => "b",
        'ß' => "Ss",
        'Ŕ' => "R",
        'ŕ' => "r",
        _ => return None,
    };
    Some(ascii)
}
