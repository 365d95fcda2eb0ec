//! Error types for the helper-kit crate.
//!
//! Validation failures that callers are expected to branch on (for example a
//! phone number of the wrong length) are reported as structured results by the
//! individual helpers. [`FormatError`] covers the cases that should fail fast
//! instead of producing silently wrong output.

use thiserror::Error;

/// Errors raised by the formatting and normalisation helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A phone number had fewer than 10 or more than 18 digits.
    #[error("phone number must contain 10-18 digits, found {length}")]
    InvalidLength {
        /// Number of digits left after sanitisation.
        length: usize,
    },

    /// A numeric argument was negative, NaN or infinite.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected value.
        message: String,
    },

    /// A Unix timestamp could not be represented as a UTC date-time.
    #[error("timestamp {seconds} is outside the supported date range")]
    InvalidTimestamp {
        /// The rejected number of seconds since the Unix epoch.
        seconds: i64,
    },

    /// An opaque token could not be decoded.
    #[error("invalid token: {reason}")]
    InvalidToken {
        /// Why decoding failed.
        reason: String,
    },
}

impl FormatError {
    /// Build a [`FormatError::InvalidArgument`] from any message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build a [`FormatError::InvalidToken`] from any reason.
    #[must_use]
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_formats_correctly() {
        let err = FormatError::InvalidLength { length: 7 };
        assert_eq!(
            err.to_string(),
            "phone number must contain 10-18 digits, found 7"
        );
    }

    #[test]
    fn invalid_argument_formats_correctly() {
        let err = FormatError::invalid_argument("byte count must be finite");
        assert_eq!(
            err.to_string(),
            "invalid argument: byte count must be finite"
        );
    }

    #[test]
    fn invalid_timestamp_formats_correctly() {
        let err = FormatError::InvalidTimestamp { seconds: i64::MAX };
        assert_eq!(
            err.to_string(),
            format!("timestamp {} is outside the supported date range", i64::MAX)
        );
    }

    #[test]
    fn invalid_token_formats_correctly() {
        let err = FormatError::invalid_token("payload is not valid base64");
        assert_eq!(err.to_string(), "invalid token: payload is not valid base64");
    }
}
