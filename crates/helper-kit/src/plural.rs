//! English pluralisation by suffix heuristics.
//!
//! This is not a dictionary lookup: irregular nouns (`child`, `mouse`) and
//! words ending in a double `f` (`staff` becomes `stavfs`) come out wrong.

/// Lowercase `noun` and pluralise it when `count` is greater than one.
///
/// Rules, first match wins:
///
/// 1. second-to-last letter `f`: `knife` → `knives`;
/// 2. ends in `s` or `z`: append `es`;
/// 3. ends in `f`: `leaf` → `leaves`;
/// 4. ends in `y`: vowel before it appends `s`, otherwise `y` → `ies`;
/// 5. ends in `o` or `h`: vowel before it appends `s`, otherwise `es`;
/// 6. anything else appends `s`.
///
/// # Examples
///
/// ```
/// use helper_kit::pluralize;
///
/// assert_eq!(pluralize("Category", 2), "categories");
/// assert_eq!(pluralize("knife", 3), "knives");
/// assert_eq!(pluralize("dog", 1), "dog");
/// ```
#[must_use]
pub fn pluralize(noun: &str, count: i64) -> String {
    let word = noun.to_lowercase();
    if count <= 1 {
        return word;
    }

    let mut tail = word.chars().rev();
    let last = tail.next();
    let before_last = tail.next();

    match (before_last, last) {
        (_, None) => word,
        (Some('f'), Some(final_letter)) => {
            format!("{}v{final_letter}s", drop_last_chars(&word, 2))
        }
        (_, Some('s' | 'z')) => format!("{word}es"),
        (_, Some('f')) => format!("{}ves", drop_last_chars(&word, 1)),
        (Some(prev), Some('y')) if is_vowel(prev) => format!("{word}s"),
        (_, Some('y')) => format!("{}ies", drop_last_chars(&word, 1)),
        (Some(prev), Some('o' | 'h')) if is_vowel(prev) => format!("{word}s"),
        (_, Some('o' | 'h')) => format!("{word}es"),
        _ => format!("{word}s"),
    }
}

fn drop_last_chars(word: &str, count: usize) -> String {
    let mut stem = word.to_owned();
    for _ in 0..count {
        stem.pop();
    }
    stem
}

const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}
