//! Phone number canonicalisation.
//!
//! Numbers are reduced to their ASCII digits, checked for a plausible length
//! and then prefixed with a country calling code. Prefix handling is a literal
//! string comparison: to turn `0812…` into `62812…` the caller passes `"0"` as
//! the prefix to replace.

use serde::Serialize;
use tracing::debug;

use crate::error::FormatError;

/// Minimum number of digits accepted after sanitisation.
pub const PHONE_DIGITS_MIN: usize = 10;

/// Maximum number of digits accepted after sanitisation.
pub const PHONE_DIGITS_MAX: usize = 18;

const INVALID_LENGTH_MESSAGE: &str = "The length of a phone number is around 10-14 digits";
const SUCCESS_MESSAGE: &str = "Successfully validate phone number";

/// Outcome of [`normalize_phone`].
///
/// `value` only ever holds ASCII digits when `ok` is `true`, and is empty when
/// the number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneResult {
    /// Whether the number was accepted.
    pub ok: bool,
    /// Human-readable status message.
    pub message: String,
    /// The canonical digits, or an empty string on rejection.
    pub value: String,
    #[serde(skip)]
    digit_count: usize,
}

impl PhoneResult {
    fn accepted(value: String, digit_count: usize) -> Self {
        Self {
            ok: true,
            message: SUCCESS_MESSAGE.to_owned(),
            value,
            digit_count,
        }
    }

    fn rejected(digit_count: usize) -> Self {
        Self {
            ok: false,
            message: INVALID_LENGTH_MESSAGE.to_owned(),
            value: String::new(),
            digit_count,
        }
    }

    /// Convert the structured result into a `Result` for `?`-style callers.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidLength`] with the sanitised digit count
    /// when the number was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use helper_kit::normalize_phone;
    ///
    /// let digits = normalize_phone("0812-3456-7890", Some("62"), Some("0"))
    ///     .into_result()
    ///     .expect("valid phone");
    /// assert_eq!(digits, "6281234567890");
    /// ```
    pub fn into_result(self) -> Result<String, FormatError> {
        if self.ok {
            Ok(self.value)
        } else {
            Err(FormatError::InvalidLength {
                length: self.digit_count,
            })
        }
    }
}

/// Canonicalise a raw phone number.
///
/// Non-digit characters are discarded first. Numbers outside
/// [`PHONE_DIGITS_MIN`]..=[`PHONE_DIGITS_MAX`] digits are rejected. When a
/// country code is supplied the result always starts with it:
///
/// - numbers already starting with the code are returned unchanged;
/// - numbers starting with `replace_prefix` have exactly that prefix swapped
///   for the code;
/// - anything else has the code prepended.
///
/// Only the digits of `country_code` and `replace_prefix` are used, so `+62`
/// acts as `62`. Values without any digits behave as if absent.
///
/// # Examples
///
/// ```
/// use helper_kit::normalize_phone;
///
/// assert_eq!(normalize_phone("081234567890", Some("62"), Some("0")).value, "6281234567890");
/// assert_eq!(normalize_phone("081234567890", Some("62"), None).value, "62081234567890");
/// assert!(!normalize_phone("12345", Some("62"), None).ok);
/// ```
#[must_use]
pub fn normalize_phone(
    raw: &str,
    country_code: Option<&str>,
    replace_prefix: Option<&str>,
) -> PhoneResult {
    let digits = sanitize_digits(raw);
    let digit_count = digits.len();
    if !(PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digit_count) {
        debug!(length = digit_count, "rejecting phone number with invalid length");
        return PhoneResult::rejected(digit_count);
    }

    let Some(code) = country_code.and_then(non_empty_digits) else {
        return PhoneResult::accepted(digits, digit_count);
    };

    if digits.starts_with(&code) {
        return PhoneResult::accepted(digits, digit_count);
    }

    let prefix = replace_prefix.and_then(non_empty_digits);
    let local = prefix
        .as_deref()
        .and_then(|stripped| digits.strip_prefix(stripped))
        .unwrap_or(&digits);

    PhoneResult::accepted(format!("{code}{local}"), digit_count)
}

/// Digits of `value`, or `None` when it has none.
fn non_empty_digits(value: &str) -> Option<String> {
    Some(sanitize_digits(value)).filter(|digits| !digits.is_empty())
}

/// Keep only ASCII digits.
fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    //! Covers length validation and country-code prefixing rules.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("081234567890", Some("62"), Some("0"), "6281234567890")]
    #[case("6281234567890", Some("62"), Some("0"), "6281234567890")]
    #[case("081234567890", Some("62"), None, "62081234567890")]
    #[case("81234567890", Some("62"), None, "6281234567890")]
    #[case("081234567890", None, Some("0"), "081234567890")]
    #[case("081234567890", Some(""), Some("0"), "081234567890")]
    #[case("081234567890", Some("62"), Some(""), "62081234567890")]
    #[case("081234567890", Some("62"), Some("9"), "62081234567890")]
    #[case("081234567890", Some("+62"), Some("0"), "6281234567890")]
    #[case("081234567890", Some("+62"), Some("(0)"), "6281234567890")]
    #[case("6281234567890", Some("+62"), Some("0"), "6281234567890")]
    #[case("081234567890", Some("+"), Some("0"), "081234567890")]
    #[case("+62 812-3456-7890", Some("62"), Some("0"), "6281234567890")]
    #[case("(0812) 3456 7890", Some("62"), Some("0"), "6281234567890")]
    fn normalizes_accepted_numbers(
        #[case] raw: &str,
        #[case] country_code: Option<&str>,
        #[case] replace_prefix: Option<&str>,
        #[case] expected: &str,
    ) {
        let result = normalize_phone(raw, country_code, replace_prefix);
        assert!(result.ok, "expected {raw} to be accepted");
        assert_eq!(result.value, expected);
        assert!(result.value.chars().all(|ch| ch.is_ascii_digit()));
        assert_eq!(result.message, SUCCESS_MESSAGE);
    }

    #[rstest]
    #[case("")]
    #[case("123456789")]
    #[case("1234567890123456789")]
    #[case("phone: 12-34-56")]
    fn rejects_numbers_outside_length_bounds(#[case] raw: &str) {
        let result = normalize_phone(raw, Some("62"), Some("0"));
        assert!(!result.ok);
        assert!(result.value.is_empty());
        assert_eq!(result.message, INVALID_LENGTH_MESSAGE);
    }

    #[rstest]
    #[case("1234567890")]
    #[case("123456789012345678")]
    fn accepts_numbers_at_length_bounds(#[case] raw: &str) {
        assert!(normalize_phone(raw, None, None).ok);
    }

    #[test]
    fn prefix_replacement_strips_only_the_literal_prefix() {
        let result = normalize_phone("0081234567890", Some("62"), Some("0"));
        assert_eq!(result.value, "62081234567890");
    }

    #[test]
    fn into_result_reports_digit_count() {
        let err = normalize_phone("12-34", None, None)
            .into_result()
            .expect_err("short numbers are rejected");
        assert_eq!(err, FormatError::InvalidLength { length: 4 });
    }

    #[test]
    fn into_result_yields_the_canonical_digits() {
        let digits = normalize_phone("0812 3456 7890", Some("+62"), Some("0"))
            .into_result()
            .expect("valid phone");
        assert_eq!(digits, "6281234567890");
    }
}
