//! Relative duration phrases such as "3 hours ago" or "2 day more".
//!
//! A signed delta in seconds is bucketed through a cascade of unit
//! conversions (seconds, minutes, hours, days, weeks, months, years,
//! decades) until it no longer reaches the next divisor, then rounded to the
//! nearest whole number.
//!
//! Only phrases built from labels carrying a plural suffix are pluralised.
//! The English "ago" labels do; the English "more" labels do not, so a
//! countdown reads "3 hour more".

use std::fmt;

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::debug;

use crate::error::FormatError;

/// Conversion factors between consecutive units of [`PeriodLabels::units`].
pub const CASCADE_DIVISORS: [f64; 7] = [60.0, 60.0, 24.0, 7.0, 4.35, 12.0, 10.0];

/// Phrase rendered by [`time_more`] once the target time has been reached.
pub const ELAPSED_MORE: &str = "0";

/// Unit names and tense word used to render a [`DurationPhrase`].
///
/// Callers can supply their own table to localise phrases; the built-in
/// English tables are never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodLabels<'a> {
    /// Singular unit names from second to decade.
    pub units: [&'a str; 8],
    /// Word appended after the unit, such as `ago`.
    pub tense: &'a str,
    /// Suffix appended to the unit when the magnitude is not exactly one.
    pub plural_suffix: Option<&'a str>,
}

const ENGLISH_UNITS: [&str; 8] = [
    "second", "minute", "hour", "day", "week", "month", "year", "decade",
];

/// English labels for elapsed time ("3 hours ago").
pub const ENGLISH_AGO: PeriodLabels<'static> = PeriodLabels {
    units: ENGLISH_UNITS,
    tense: "ago",
    plural_suffix: Some("s"),
};

/// English labels for remaining time ("3 hour more").
pub const ENGLISH_MORE: PeriodLabels<'static> = PeriodLabels {
    units: ENGLISH_UNITS,
    tense: "more",
    plural_suffix: None,
};

/// A bucketed duration ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationPhrase {
    /// Rounded number of units.
    pub magnitude: i64,
    /// Unit name, already pluralised where the labels ask for it.
    pub unit: String,
    /// Tense word.
    pub tense: String,
}

impl fmt::Display for DurationPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.magnitude, self.unit, self.tense)
    }
}

/// Bucket a delta in seconds into the coarsest unit it reaches.
///
/// # Examples
///
/// ```
/// use helper_kit::{ENGLISH_AGO, bucket_duration};
///
/// let phrase = bucket_duration(3 * 3600, &ENGLISH_AGO);
/// assert_eq!(phrase.magnitude, 3);
/// assert_eq!(phrase.to_string(), "3 hours ago");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "cascade divisors are fractional and the rounded magnitude never exceeds the delta"
)]
pub fn bucket_duration(delta_seconds: i64, labels: &PeriodLabels<'_>) -> DurationPhrase {
    let [finest, coarser @ ..] = labels.units;

    let mut magnitude = delta_seconds as f64;
    let mut unit = finest;

    for (divisor, next_unit) in CASCADE_DIVISORS.iter().zip(coarser) {
        if magnitude < *divisor {
            break;
        }
        magnitude /= divisor;
        unit = next_unit;
    }

    let rounded = magnitude.round() as i64;

    let unit_label = match labels.plural_suffix {
        Some(suffix) if rounded != 1 => format!("{unit}{suffix}"),
        _ => unit.to_owned(),
    };

    DurationPhrase {
        magnitude: rounded,
        unit: unit_label,
        tense: labels.tense.to_owned(),
    }
}

/// Render an elapsed-time phrase for `timestamp` relative to the clock.
///
/// Timestamps in the future yield a negative magnitude in seconds, for
/// example `-5 seconds ago`.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use helper_kit::time_ago;
/// use mockable::{Clock, DefaultClock};
///
/// let clock = DefaultClock;
/// let three_hours_back = clock.utc() - Duration::hours(3);
/// assert_eq!(time_ago(&clock, three_hours_back), "3 hours ago");
/// ```
#[must_use]
pub fn time_ago(clock: &dyn Clock, timestamp: DateTime<Utc>) -> String {
    time_ago_with(clock, timestamp, &ENGLISH_AGO)
}

/// [`time_ago`] with caller-supplied labels.
#[must_use]
pub fn time_ago_with(
    clock: &dyn Clock,
    timestamp: DateTime<Utc>,
    labels: &PeriodLabels<'_>,
) -> String {
    let delta = (clock.utc() - timestamp).num_seconds();
    if delta < 0 {
        debug!(delta, "formatting a future timestamp as elapsed time");
    }
    bucket_duration(delta, labels).to_string()
}

/// Render a remaining-time phrase for `timestamp` relative to the clock.
///
/// Returns [`ELAPSED_MORE`] once the timestamp is not in the future.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use helper_kit::time_more;
/// use mockable::{Clock, DefaultClock};
///
/// let clock = DefaultClock;
/// let past = clock.utc() - Duration::minutes(1);
/// assert_eq!(time_more(&clock, past), "0");
/// ```
#[must_use]
pub fn time_more(clock: &dyn Clock, timestamp: DateTime<Utc>) -> String {
    time_more_with(clock, timestamp, &ENGLISH_MORE)
}

/// [`time_more`] with caller-supplied labels.
#[must_use]
pub fn time_more_with(
    clock: &dyn Clock,
    timestamp: DateTime<Utc>,
    labels: &PeriodLabels<'_>,
) -> String {
    let delta = (timestamp - clock.utc()).num_seconds();
    if delta <= 0 {
        return ELAPSED_MORE.to_owned();
    }
    bucket_duration(delta, labels).to_string()
}

/// Convert seconds since the Unix epoch into a UTC timestamp.
///
/// # Errors
///
/// Returns [`FormatError::InvalidTimestamp`] when `seconds` is outside the
/// range chrono can represent.
pub fn timestamp_from_unix(seconds: i64) -> Result<DateTime<Utc>, FormatError> {
    DateTime::from_timestamp(seconds, 0).ok_or(FormatError::InvalidTimestamp { seconds })
}

#[cfg(test)]
mod tests {
    //! Covers cascade bucketing, tense asymmetry and clock injection.

    use chrono::{Local, TimeDelta, TimeZone};
    use rstest::{fixture, rstest};

    use super::*;

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    #[fixture]
    fn clock() -> FixtureClock {
        FixtureClock {
            utc_now: Utc
                .with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
                .single()
                .expect("valid fixture timestamp"),
        }
    }

    #[rstest]
    #[case(0, "0 seconds ago")]
    #[case(1, "1 second ago")]
    #[case(59, "59 seconds ago")]
    #[case(60, "1 minute ago")]
    #[case(90, "2 minutes ago")]
    #[case(3 * 3600, "3 hours ago")]
    #[case(86_400, "1 day ago")]
    #[case(14 * 86_400, "2 weeks ago")]
    #[case(60 * 86_400, "2 months ago")]
    #[case(400 * 86_400, "1 year ago")]
    #[case(30 * 365 * 86_400, "3 decades ago")]
    #[case(-5, "-5 seconds ago")]
    fn buckets_elapsed_time(#[case] delta: i64, #[case] expected: &str) {
        assert_eq!(bucket_duration(delta, &ENGLISH_AGO).to_string(), expected);
    }

    #[test]
    fn decades_are_the_coarsest_unit() {
        let phrase = bucket_duration(1_000 * 365 * 86_400, &ENGLISH_AGO);
        assert_eq!(phrase.unit, "decades");
        assert!(phrase.magnitude > 10);
    }

    #[rstest]
    #[case(1, "1 second more")]
    #[case(3600, "1 hour more")]
    #[case(3 * 3600, "3 hour more")]
    #[case(2 * 86_400, "2 day more")]
    fn never_pluralises_remaining_time(#[case] delta: i64, #[case] expected: &str) {
        assert_eq!(bucket_duration(delta, &ENGLISH_MORE).to_string(), expected);
    }

    #[rstest]
    fn time_ago_reads_the_clock(clock: FixtureClock) {
        let timestamp = clock.utc_now - TimeDelta::hours(3);
        assert_eq!(time_ago(&clock, timestamp), "3 hours ago");
    }

    #[rstest]
    fn time_more_reads_the_clock(clock: FixtureClock) {
        let timestamp = clock.utc_now + TimeDelta::hours(1);
        assert_eq!(time_more(&clock, timestamp), "1 hour more");
    }

    #[rstest]
    #[case(0)]
    #[case(-30)]
    fn time_more_is_terminal_once_reached(clock: FixtureClock, #[case] offset: i64) {
        let timestamp = clock.utc_now + TimeDelta::seconds(offset);
        assert_eq!(time_more(&clock, timestamp), ELAPSED_MORE);
    }

    #[rstest]
    fn custom_labels_localise_phrases(clock: FixtureClock) {
        let labels = PeriodLabels {
            units: [
                "detik", "menit", "jam", "hari", "minggu", "bulan", "tahun", "dekade",
            ],
            tense: "yang lalu",
            plural_suffix: None,
        };
        let timestamp = clock.utc_now - TimeDelta::days(2);
        assert_eq!(time_ago_with(&clock, timestamp, &labels), "2 hari yang lalu");
        assert_eq!(ENGLISH_AGO.units[3], "day");
    }

    #[test]
    fn converts_unix_seconds() {
        let timestamp = timestamp_from_unix(0).expect("epoch is representable");
        assert_eq!(timestamp.timestamp(), 0);
    }

    #[test]
    fn rejects_unrepresentable_unix_seconds() {
        assert_eq!(
            timestamp_from_unix(i64::MAX),
            Err(FormatError::InvalidTimestamp { seconds: i64::MAX })
        );
    }
}
