//! Whole-day differences between a subject date and a conversion epoch, plus
//! the `YYYY-MM-DD` shape check both directions share.

use jiff::{Unit, civil::Date, tz::TimeZone};

use crate::consts::{
    DATE_SEPARATOR, FIRST_MONTH, GREGORIAN_REFERENCE_DATE, MAX_FIELD_DIGITS, MONTHS_IN_YEAR,
    YEAR_DIGITS,
};
use crate::ConvertError;
use crate::types::{CalendarKind, DateComponents};
use crate::walk::EpochWalker;

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const GREGORIAN_EPOCH: Date = Date::constant(
    GREGORIAN_REFERENCE_DATE.0 as i16,
    GREGORIAN_REFERENCE_DATE.1 as i8,
    GREGORIAN_REFERENCE_DATE.2 as i8,
);

fn is_digits(field: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

/// Checks that `input` has the `YYYY-MM-DD` shape and splits it.
///
/// Only the shape and the month range are checked; the day is not compared
/// against the month's length. Surrounding whitespace is rejected.
///
/// # Errors
/// Returns `ConvertError::InvalidDate` carrying `input` if the shape check fails.
pub fn parse_date(input: &str) -> Result<DateComponents, ConvertError> {
    let invalid = || ConvertError::InvalidDate(input.to_owned());

    let mut parts = input.split(DATE_SEPARATOR);
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    if !is_digits(year, YEAR_DIGITS, YEAR_DIGITS)
        || !is_digits(month, 1, MAX_FIELD_DIGITS)
        || !is_digits(day, 1, MAX_FIELD_DIGITS)
    {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u8 = month.parse().map_err(|_| invalid())?;
    let day: u8 = day.parse().map_err(|_| invalid())?;

    if !(FIRST_MONTH..=MONTHS_IN_YEAR).contains(&month) {
        return Err(invalid());
    }

    Ok(DateComponents::from((year, month, day)))
}

/// Parses `input` as a real Gregorian date.
///
/// # Errors
/// Returns `ConvertError::InvalidDate` if the shape check fails or the day
/// does not exist in that month.
pub fn parse_gregorian_date(input: &str) -> Result<Date, ConvertError> {
    let parsed = parse_date(input)?;
    let invalid = || ConvertError::InvalidDate(input.to_owned());

    let year = i16::try_from(parsed.year).map_err(|_| invalid())?;
    let month = i8::try_from(parsed.month).map_err(|_| invalid())?;
    let day = i8::try_from(parsed.day).map_err(|_| invalid())?;
    Date::new(year, month, day).map_err(|_| invalid())
}

/// Looks up an IANA timezone identifier such as `GMT` or `Asia/Tehran`.
///
/// # Errors
/// Returns `ConvertError::InvalidTimeZone` if the name is unknown.
pub fn resolve_timezone(name: &str) -> Result<TimeZone, ConvertError> {
    TimeZone::get(name).map_err(|source| ConvertError::InvalidTimeZone {
        name: name.to_owned(),
        source,
    })
}

/// Whole calendar days from `epoch` to `subject`.
///
/// Both dates are civil dates in the same zone, so the count is the same for
/// every timezone and needs no instant arithmetic. Negative when `subject`
/// precedes `epoch`.
///
/// # Errors
/// Returns `ConvertError::DayArithmetic` only if jiff rejects the span, which
/// does not happen for dates in jiff's civil range.
pub fn gregorian_elapsed_days(epoch: Date, subject: Date) -> Result<i64, ConvertError> {
    let span = epoch.until((Unit::Day, subject))?;
    Ok(i64::from(span.get_days()))
}

/// Whole days from `epoch` to `subject` in the Jalali month model `walker` uses.
pub(crate) fn jalali_elapsed_days(
    walker: &EpochWalker,
    epoch: DateComponents,
    subject: DateComponents,
) -> i64 {
    debug_assert_eq!(walker.calendar(), CalendarKind::Jalali);

    walker.days_between(epoch, subject)
}
