//! Human-readable byte sizes ("1.5 KB", "2 MB").
//!
//! Sizes are divided by 1024 until they fit the current unit, then shown with
//! one decimal place, dropping a trailing `.0`. Terabytes are the largest
//! unit: anything bigger stays in TB with grouped thousands ("2,048 TB").

use std::fmt;

use crate::error::FormatError;
use crate::number::format_finite;

/// Step between consecutive units.
pub const BYTE_THRESHOLD: u64 = 1024;

const SCALED_UNITS: [ByteUnit; 4] = [
    ByteUnit::Kilobytes,
    ByteUnit::Megabytes,
    ByteUnit::Gigabytes,
    ByteUnit::Terabytes,
];

/// Unit chosen by [`humanize_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ByteUnit {
    /// Plain bytes.
    Bytes,
    /// 1024 bytes.
    Kilobytes,
    /// 1024² bytes.
    Megabytes,
    /// 1024³ bytes.
    Gigabytes,
    /// 1024⁴ bytes, the largest unit.
    Terabytes,
}

impl ByteUnit {
    /// Label printed after the value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bytes => "Bytes",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A formatted size and its unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSize {
    /// Formatted numeric part.
    pub value: String,
    /// Unit the value is expressed in.
    pub unit: ByteUnit,
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Express a byte count in the largest sensible unit.
///
/// # Examples
///
/// ```
/// use helper_kit::humanize_bytes;
///
/// assert_eq!(humanize_bytes(500).to_string(), "500 Bytes");
/// assert_eq!(humanize_bytes(1536).to_string(), "1.5 KB");
/// assert_eq!(humanize_bytes(2 * 1024 * 1024).to_string(), "2 MB");
/// ```
#[must_use]
pub fn humanize_bytes(bytes: u64) -> ByteSize {
    if bytes < BYTE_THRESHOLD {
        return ByteSize {
            value: bytes.to_string(),
            unit: ByteUnit::Bytes,
        };
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "only one decimal place of the scaled value is shown"
    )]
    let amount = bytes as f64;
    scale(amount)
}

/// Fallible variant of [`humanize_bytes`] for fractional byte counts.
///
/// Values below 1024 are echoed as-is (`"512.5 Bytes"`).
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] for negative, NaN or infinite
/// input.
pub fn humanize_bytes_f64(bytes: f64) -> Result<ByteSize, FormatError> {
    if !bytes.is_finite() || bytes < 0.0 {
        return Err(FormatError::invalid_argument(format!(
            "byte count must be a finite, non-negative number, got {bytes}"
        )));
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "the threshold is exactly representable"
    )]
    let threshold = BYTE_THRESHOLD as f64;
    if bytes < threshold {
        return Ok(ByteSize {
            value: bytes.to_string(),
            unit: ByteUnit::Bytes,
        });
    }
    Ok(scale(bytes))
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "dividing by 1024 is an exact power-of-two rescale"
)]
fn scale(bytes: f64) -> ByteSize {
    let threshold = BYTE_THRESHOLD as f64;
    let mut divided = bytes;
    let mut unit = ByteUnit::Bytes;

    for next_unit in SCALED_UNITS {
        divided /= threshold;
        unit = next_unit;
        if divided <= threshold {
            break;
        }
    }

    let mut value = format_finite(divided, 1, ".", ",");
    if value.ends_with(".0") {
        value.truncate(value.len() - ".0".len());
    }
    ByteSize { value, unit }
}

#[cfg(test)]
mod tests {
    //! Covers unit selection, decimal trimming and the terabyte ceiling.

    use rstest::rstest;

    use super::*;

    const KIB: u64 = 1024;
    const MIB: u64 = KIB * KIB;
    const GIB: u64 = MIB * KIB;
    const TIB: u64 = GIB * KIB;

    #[rstest]
    #[case(0, "0 Bytes")]
    #[case(500, "500 Bytes")]
    #[case(1023, "1023 Bytes")]
    #[case(1024, "1 KB")]
    #[case(1536, "1.5 KB")]
    #[case(2048, "2 KB")]
    #[case(1280, "1.3 KB")]
    #[case(MIB, "1,024 KB")]
    #[case(MIB + 1, "1 MB")]
    #[case(2 * MIB, "2 MB")]
    #[case(5 * GIB + 256 * MIB, "5.3 GB")]
    #[case(3 * TIB, "3 TB")]
    #[case(2048 * TIB, "2,048 TB")]
    fn humanizes_byte_counts(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(humanize_bytes(bytes).to_string(), expected);
    }

    #[test]
    fn reports_the_chosen_unit() {
        let size = humanize_bytes(3 * GIB);
        assert_eq!(size.unit, ByteUnit::Gigabytes);
        assert_eq!(size.value, "3");
    }

    #[test]
    fn largest_inputs_stay_in_terabytes() {
        assert_eq!(humanize_bytes(u64::MAX).unit, ByteUnit::Terabytes);
    }

    #[rstest]
    #[case(512.5, "512.5 Bytes")]
    #[case(1536.0, "1.5 KB")]
    fn humanizes_fractional_counts(#[case] bytes: f64, #[case] expected: &str) {
        let size = humanize_bytes_f64(bytes).expect("valid byte count");
        assert_eq!(size.to_string(), expected);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_fractional_counts(#[case] bytes: f64) {
        assert!(matches!(
            humanize_bytes_f64(bytes),
            Err(FormatError::InvalidArgument { .. })
        ));
    }
}
