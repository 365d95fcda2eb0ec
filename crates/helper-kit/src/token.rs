//! Salted, URL-safe opaque tokens.
//!
//! A token is `urlencode(salt ++ base64(payload))` where the salt is a random
//! alphanumeric string. The token does not record how long its salt is, so
//! the decoder must be given the same salt length as the encoder.
//! [`TokenCodec`] carries that length so both sides can share one value.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormatError;

/// Salt length used when none is configured.
pub const DEFAULT_SALT_LENGTH: usize = 15;

/// Source of random alphanumeric salts.
pub trait SaltSource: Send + Sync {
    /// Return `length` characters drawn from `[A-Za-z0-9]`.
    fn alphanumeric(&self, length: usize) -> String;
}

/// [`SaltSource`] backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSalt;

impl SaltSource for ThreadRngSalt {
    fn alphanumeric(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

/// Generate a random alphanumeric string of `length` characters.
///
/// ```
/// use helper_kit::random_string;
///
/// let value = random_string(16);
/// assert_eq!(value.len(), 16);
/// assert!(value.chars().all(|ch| ch.is_ascii_alphanumeric()));
/// ```
#[must_use]
pub fn random_string(length: usize) -> String {
    ThreadRngSalt.alphanumeric(length)
}

/// Serialisable token settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenConfig {
    /// Number of salt characters prefixed to every token.
    pub salt_length: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            salt_length: DEFAULT_SALT_LENGTH,
        }
    }
}

/// Encoder and decoder for salted opaque tokens.
///
/// # Examples
///
/// ```
/// use helper_kit::TokenCodec;
///
/// let codec = TokenCodec::new(8);
/// let token = codec.encode("order:1042");
/// assert_eq!(codec.decode(&token).expect("valid token"), "order:1042");
/// ```
#[derive(Clone)]
pub struct TokenCodec<S = ThreadRngSalt> {
    salt_length: usize,
    salt_source: S,
}

impl TokenCodec {
    /// Create a codec using the thread-local RNG for salts.
    #[must_use]
    pub const fn new(salt_length: usize) -> Self {
        Self {
            salt_length,
            salt_source: ThreadRngSalt,
        }
    }

    /// Create a codec from serialised settings.
    #[must_use]
    pub const fn from_config(config: TokenConfig) -> Self {
        Self::new(config.salt_length)
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new(DEFAULT_SALT_LENGTH)
    }
}

impl<S> fmt::Debug for TokenCodec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("salt_length", &self.salt_length)
            .finish_non_exhaustive()
    }
}

impl<S: SaltSource> TokenCodec<S> {
    /// Create a codec drawing salts from `salt_source`.
    #[must_use]
    pub const fn with_salt_source(salt_length: usize, salt_source: S) -> Self {
        Self {
            salt_length,
            salt_source,
        }
    }

    /// Configured salt length.
    #[must_use]
    pub const fn salt_length(&self) -> usize {
        self.salt_length
    }

    /// Wrap `payload` in a freshly salted token.
    #[must_use]
    pub fn encode(&self, payload: &str) -> String {
        let salt = self.salt_source.alphanumeric(self.salt_length);
        let body = STANDARD.encode(payload);
        urlencoding::encode(&format!("{salt}{body}")).into_owned()
    }

    /// Recover the payload from a token produced with the same salt length.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidToken`] when the token is not valid
    /// percent-encoding, is shorter than the salt, or its body is not
    /// base64-encoded UTF-8.
    pub fn decode(&self, token: &str) -> Result<String, FormatError> {
        decode_token(token, self.salt_length)
    }
}

/// Encode `payload` with a salt of `salt_length` characters.
///
/// ```
/// use helper_kit::{decode_token, encode_token};
///
/// let token = encode_token("hello world", 15);
/// assert_eq!(decode_token(&token, 15).expect("valid token"), "hello world");
/// ```
#[must_use]
pub fn encode_token(payload: &str, salt_length: usize) -> String {
    TokenCodec::new(salt_length).encode(payload)
}

/// Decode a token produced by [`encode_token`] with the same salt length.
///
/// # Errors
///
/// See [`TokenCodec::decode`].
pub fn decode_token(token: &str, salt_length: usize) -> Result<String, FormatError> {
    let unescaped = urlencoding::decode(token).map_err(|err| {
        debug!(error = %err, "token is not valid percent-encoded UTF-8");
        FormatError::invalid_token("token is not valid percent-encoded UTF-8")
    })?;

    let mut chars = unescaped.chars();
    for _ in 0..salt_length {
        if chars.next().is_none() {
            debug!(salt_length, "token is shorter than its salt");
            return Err(FormatError::invalid_token("token is shorter than its salt"));
        }
    }

    let bytes = STANDARD.decode(chars.as_str()).map_err(|err| {
        debug!(error = %err, "token body is not valid base64");
        FormatError::invalid_token("token body is not valid base64")
    })?;
    String::from_utf8(bytes)
        .map_err(|_| FormatError::invalid_token("token payload is not valid UTF-8"))
}
