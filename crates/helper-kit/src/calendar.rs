//! Date-picker reformatting and month lengths.

use chrono::{Datelike, NaiveDate};
use mockable::Clock;

use crate::error::FormatError;

/// Field separator produced by typical date pickers (`31/01/2020`).
pub const DATEPICKER_DELIMITER: &str = "/";

/// Field separator of ISO-style dates (`2020-01-31`).
pub const DATEPICKER_GLUE: &str = "-";

/// Field order turning `dd/mm/yyyy` into `yyyy-mm-dd`.
pub const DATEPICKER_ORDER: [usize; 3] = [2, 1, 0];

/// Split `input` on `delimiter` and join the fields picked by `order` with
/// `glue`.
///
/// Each entry of `order` is a zero-based index into the split fields. Fields
/// beyond the third are ignored unless `order` names them.
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] when `input` or `delimiter` is
/// empty, when `input` has fewer than three fields, or when `order` names a
/// field that does not exist.
///
/// # Examples
///
/// ```
/// use helper_kit::reorder_date;
///
/// let reordered = reorder_date("2020.01.31", ".", "/", [2, 1, 0]).expect("valid date");
/// assert_eq!(reordered, "31/01/2020");
/// ```
pub fn reorder_date(
    input: &str,
    delimiter: &str,
    glue: &str,
    order: [usize; 3],
) -> Result<String, FormatError> {
    if input.is_empty() {
        return Err(FormatError::invalid_argument("no input date"));
    }
    if delimiter.is_empty() {
        return Err(FormatError::invalid_argument("date delimiter must not be empty"));
    }

    let fields: Vec<&str> = input.split(delimiter).collect();
    if fields.len() < 3 {
        return Err(FormatError::invalid_argument(format!(
            "date {input:?} does not have three {delimiter:?}-separated fields"
        )));
    }

    let picked = order
        .iter()
        .map(|index| {
            fields.get(*index).copied().ok_or_else(|| {
                FormatError::invalid_argument(format!("date {input:?} has no field {index}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(picked.join(glue))
}

/// Convert a `dd/mm/yyyy` date-picker value into `yyyy-mm-dd`.
///
/// # Errors
///
/// See [`reorder_date`].
///
/// # Examples
///
/// ```
/// use helper_kit::convert_datepicker;
///
/// assert_eq!(convert_datepicker("31/01/2020").expect("valid date"), "2020-01-31");
/// assert!(convert_datepicker("31-01-2020").is_err());
/// ```
pub fn convert_datepicker(input: &str) -> Result<String, FormatError> {
    reorder_date(
        input,
        DATEPICKER_DELIMITER,
        DATEPICKER_GLUE,
        DATEPICKER_ORDER,
    )
}

/// Number of days in `month` (1-12) of `year` in the proleptic Gregorian
/// calendar.
///
/// # Errors
///
/// Returns [`FormatError::InvalidArgument`] for a month outside 1-12.
///
/// # Examples
///
/// ```
/// use helper_kit::month_length;
///
/// assert_eq!(month_length(2024, 2).expect("valid month"), 29);
/// assert_eq!(month_length(1900, 2).expect("valid month"), 28);
/// assert!(month_length(2024, 13).is_err());
/// ```
pub fn month_length(year: i32, month: u32) -> Result<u32, FormatError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => Ok(29),
        2 => Ok(28),
        _ => Err(FormatError::invalid_argument(format!(
            "month {month} is outside 1-12"
        ))),
    }
}

/// [`month_length`] with the year and month defaulting to the clock's local
/// date.
///
/// # Errors
///
/// See [`month_length`].
pub fn days_in_month(
    clock: &dyn Clock,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<u32, FormatError> {
    let today = clock.local().date_naive();
    month_length(
        year.unwrap_or_else(|| today.year()),
        month.unwrap_or_else(|| today.month()),
    )
}
