//! Deterministic text and data formatting helpers.
//!
//! Every helper is a free function over explicit inputs. The only ambient
//! reads are the clock used by the relative-time formatters and the random
//! source used to salt tokens; both are injectable.
//!
//! # Overview
//!
//! - [`normalize_phone`]: canonical, country-code-prefixed phone digits
//! - [`slugify`]: URL-safe slugs with Latin-1 transliteration
//! - [`time_ago`] / [`time_more`]: "3 hours ago" and "1 hour more"
//! - [`humanize_bytes`]: "1.5 KB", "2 MB"
//! - [`pluralize`]: suffix-based English plurals
//! - [`TokenCodec`]: salted, URL-safe opaque tokens
//! - [`paginate`]: page count and row offset
//! - [`group_by_parent`] / [`group_records`]: flat rows folded under their parent
//! - [`convert_datepicker`] / [`days_in_month`]: date-picker values and month lengths
//! - [`format_number`], [`zero_pad`], [`excerpt`], [`split_full_name`]
//!
//! # Example
//!
//! ```
//! use helper_kit::{humanize_bytes, normalize_phone, paginate, pluralize, slugify_capped};
//!
//! assert_eq!(normalize_phone("0812 3456 7890", Some("62"), Some("0")).value, "6281234567890");
//! assert_eq!(slugify_capped("Café día"), "cafe-dia");
//! assert_eq!(humanize_bytes(1536).to_string(), "1.5 KB");
//! assert_eq!(pluralize("category", 2), "categories");
//! assert_eq!(paginate(95, 2, 30, 100).row_offset, 30);
//! ```

mod bytes;
mod calendar;
mod duration;
mod error;
mod group;
mod number;
mod pagination;
mod phone;
mod plural;
mod slug;
mod text;
mod token;

pub use bytes::{BYTE_THRESHOLD, ByteSize, ByteUnit, humanize_bytes, humanize_bytes_f64};
pub use calendar::{
    DATEPICKER_DELIMITER, DATEPICKER_GLUE, DATEPICKER_ORDER, convert_datepicker, days_in_month,
    month_length, reorder_date,
};
pub use duration::{
    CASCADE_DIVISORS, DurationPhrase, ELAPSED_MORE, ENGLISH_AGO, ENGLISH_MORE, PeriodLabels,
    bucket_duration, time_ago, time_ago_with, time_more, time_more_with, timestamp_from_unix,
};
pub use error::FormatError;
pub use group::{DEFAULT_CHILD_FIELD, ParentGroup, group_by_parent, group_records};
pub use number::{NumberFormat, format_number, zero_pad};
pub use pagination::{
    DEFAULT_MAX_PAGE_SIZE, DEFAULT_PAGE_SIZE, Pagination, PaginationConfig, paginate,
};
pub use phone::{PHONE_DIGITS_MAX, PHONE_DIGITS_MIN, PhoneResult, normalize_phone};
pub use plural::pluralize;
pub use slug::{SLUG_IDEAL_MAX_LEN, SlugOptions, is_valid_slug, slugify, slugify_capped};
pub use text::{EXCERPT_ELLIPSIS, FullName, contains_ignore_case, excerpt, split_full_name};
pub use token::{
    DEFAULT_SALT_LENGTH, SaltSource, ThreadRngSalt, TokenCodec, TokenConfig, decode_token,
    encode_token, random_string,
};
