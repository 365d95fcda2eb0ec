//! Grouped decimal formatting and zero padding.

use crate::error::FormatError;

/// Separators, precision and affixes used by [`format_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat<'a> {
    /// Digits after the decimal separator.
    pub decimals: u8,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: &'a str,
    /// Separator inserted between groups of three integer digits.
    pub thousands_separator: &'a str,
    /// Text placed before the number, such as a currency symbol.
    pub prefix: Option<&'a str>,
    /// Text placed after the number.
    pub suffix: Option<&'a str>,
}

impl Default for NumberFormat<'_> {
    fn default() -> Self {
        Self {
            decimals: 0,
            decimal_separator: ".",
            thousands_separator: ",",
            prefix: None,
            suffix: None,
        }
    }
}

/// Format `value` with grouped thousands, rounding half away from zero.
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] for NaN or infinite values, and
/// for finite values too large to carry `decimals` fractional digits.
///
/// # Examples
///
/// ```
/// use helper_kit::{NumberFormat, format_number};
///
/// let rupiah = NumberFormat {
///     thousands_separator: ".",
///     decimal_separator: ",",
///     prefix: Some("Rp "),
///     ..NumberFormat::default()
/// };
/// assert_eq!(format_number(1_250_000.0, &rupiah).expect("finite"), "Rp 1.250.000");
/// ```
pub fn format_number(value: f64, format: &NumberFormat<'_>) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::invalid_argument(format!(
            "cannot format non-finite number {value}"
        )));
    }
    if !scale_to_decimals(value, format.decimals).is_finite() {
        return Err(FormatError::invalid_argument(format!(
            "{value} is too large to format with {} decimals",
            format.decimals
        )));
    }

    let number = format_finite(
        value,
        format.decimals,
        format.decimal_separator,
        format.thousands_separator,
    );
    Ok(format!(
        "{}{number}{}",
        format.prefix.unwrap_or_default(),
        format.suffix.unwrap_or_default()
    ))
}

/// `|value|` shifted left by `decimals` digits and rounded half away from
/// zero. Infinite when the shift overflows.
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by a power of ten"
)]
fn scale_to_decimals(value: f64, decimals: u8) -> f64 {
    (value.abs() * 10_f64.powi(i32::from(decimals))).round()
}

/// Format a value whose scaled magnitude is finite; callers check that.
pub(crate) fn format_finite(
    value: f64,
    decimals: u8,
    decimal_separator: &str,
    thousands_separator: &str,
) -> String {
    let scaled = scale_to_decimals(value, decimals);
    let precision = usize::from(decimals);
    let digits = format!("{scaled:0>width$.0}", width = precision + 1);
    let (integer, fraction) = digits.split_at(digits.len() - precision);

    let sign = if value.is_sign_negative() && scaled > 0.0 {
        "-"
    } else {
        ""
    };
    let grouped = group_thousands(integer, thousands_separator);

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}{decimal_separator}{fraction}")
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = chars
        .rchunks(3)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();
    groups.join(separator)
}

/// Left-pad a string of digits with zeros up to `width` characters.
///
/// Inputs that are not made of ASCII digits collapse to `"0"`; inputs that
/// are already `width` characters or longer are returned unchanged.
///
/// ```
/// use helper_kit::zero_pad;
///
/// assert_eq!(zero_pad("42", 4), "0042");
/// assert_eq!(zero_pad("12345", 4), "12345");
/// assert_eq!(zero_pad("4a", 4), "0");
/// ```
#[must_use]
pub fn zero_pad(input: &str, width: usize) -> String {
    if input.is_empty() || !input.chars().all(|ch| ch.is_ascii_digit()) {
        return "0".to_owned();
    }
    format!("{input:0>width$}")
}
