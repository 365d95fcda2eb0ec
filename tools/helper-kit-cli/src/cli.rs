//! Argument definitions for the `helper-kit` command.

use clap::{Args, Parser, Subcommand};

/// `helper-kit` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "helper-kit",
    about = "Normalise phone numbers, build slugs and render display strings",
    version
)]
pub struct Cli {
    /// Helper to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available helpers.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Normalise a phone number to country-code-prefixed digits.
    Phone(PhoneArgs),
    /// Turn text into a URL slug.
    Slug(SlugArgs),
    /// Describe how long ago a Unix timestamp was.
    Ago(TimestampArgs),
    /// Describe how long remains until a Unix timestamp.
    More(TimestampArgs),
    /// Render a byte count with a binary unit.
    Bytes(BytesArgs),
    /// Pluralise a noun for a count.
    Plural(PluralArgs),
    /// Wrap a payload in a salted, URL-safe token.
    TokenEncode(TokenEncodeArgs),
    /// Recover the payload from a token.
    TokenDecode(TokenDecodeArgs),
    /// Compute the page count and row offset for a page request.
    Paginate(PaginateArgs),
}

/// Arguments for `phone`.
#[derive(Debug, Clone, Args)]
pub struct PhoneArgs {
    /// Raw phone number; non-digits are ignored.
    #[arg(value_name = "number")]
    pub number: String,
    /// Country code to prefix. Falls back to `HELPER_KIT_COUNTRY_CODE`.
    #[arg(long = "country-code", value_name = "digits")]
    pub country_code: Option<String>,
    /// Local prefix replaced by the country code, e.g. `0`.
    #[arg(long = "replace-prefix", value_name = "digits")]
    pub replace_prefix: Option<String>,
}

/// Arguments for `slug`.
#[derive(Debug, Clone, Args)]
pub struct SlugArgs {
    /// Text to slugify.
    #[arg(value_name = "text")]
    pub text: String,
    /// Keep the full slug instead of truncating it.
    #[arg(long)]
    pub uncapped: bool,
}

/// Arguments for `ago` and `more`.
#[derive(Debug, Clone, Args)]
pub struct TimestampArgs {
    /// Seconds since the Unix epoch.
    #[arg(value_name = "seconds", allow_negative_numbers = true)]
    pub timestamp: i64,
}

/// Arguments for `bytes`.
#[derive(Debug, Clone, Args)]
pub struct BytesArgs {
    /// Number of bytes.
    #[arg(value_name = "count")]
    pub count: u64,
}

/// Arguments for `plural`.
#[derive(Debug, Clone, Args)]
pub struct PluralArgs {
    /// Singular noun.
    #[arg(value_name = "noun")]
    pub noun: String,
    /// How many of the noun there are.
    #[arg(value_name = "count", allow_negative_numbers = true)]
    pub count: i64,
}

/// Arguments for `token-encode`.
#[derive(Debug, Clone, Args)]
pub struct TokenEncodeArgs {
    /// Payload to wrap.
    #[arg(value_name = "payload")]
    pub payload: String,
    /// Salt length. Falls back to `HELPER_KIT_SALT_LENGTH`.
    #[arg(long = "salt-length", value_name = "n")]
    pub salt_length: Option<usize>,
}

/// Arguments for `token-decode`.
#[derive(Debug, Clone, Args)]
pub struct TokenDecodeArgs {
    /// Token produced by `token-encode`.
    #[arg(value_name = "token")]
    pub token: String,
    /// Salt length used when the token was encoded.
    #[arg(long = "salt-length", value_name = "n")]
    pub salt_length: Option<usize>,
}

/// Arguments for `paginate`.
#[derive(Debug, Clone, Args)]
pub struct PaginateArgs {
    /// Total number of rows.
    #[arg(long, value_name = "n")]
    pub rows: u64,
    /// 1-based page index.
    #[arg(long, value_name = "n", default_value_t = 1)]
    pub page: u64,
    /// Rows per page. Falls back to `HELPER_KIT_PAGE_SIZE`.
    #[arg(long = "page-size", value_name = "n", allow_negative_numbers = true)]
    pub page_size: Option<i64>,
    /// Largest permitted page size. Falls back to `HELPER_KIT_MAX_PAGE_SIZE`.
    #[arg(long = "max-page-size", value_name = "n", allow_negative_numbers = true)]
    pub max_page_size: Option<i64>,
}
