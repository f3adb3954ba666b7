//! Template substitution for converted dates.
//!
//! Recognized tokens are `Y` (year), `m` (two-digit month), `M` (month name)
//! and `d` (two-digit day). Every other character is copied through.

use std::fmt::{self, Write};

use crate::consts::{TOKEN_DAY, TOKEN_MONTH, TOKEN_MONTH_NAME, TOKEN_YEAR};
use crate::types::{CalendarKind, DateComponents, month_name};

/// A date paired with a template, rendered lazily through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct FormattedDate<'a> {
    template: &'a str,
    date: DateComponents,
    calendar: CalendarKind,
}

impl<'a> FormattedDate<'a> {
    pub const fn new(template: &'a str, date: DateComponents, calendar: CalendarKind) -> Self {
        Self {
            template,
            date,
            calendar,
        }
    }
}

impl fmt::Display for FormattedDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.template.chars() {
            match c {
                TOKEN_YEAR => write!(f, "{}", self.date.year)?,
                TOKEN_MONTH => f.write_str(&pad_two_digits(i64::from(self.date.month)))?,
                // Out-of-range months have no name; substitute nothing
                TOKEN_MONTH_NAME => {
                    f.write_str(month_name(self.calendar, self.date.month).unwrap_or_default())?;
                }
                TOKEN_DAY => f.write_str(&pad_two_digits(self.date.day))?,
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}

/// Renders `date` through `template` using `calendar`'s month names.
pub fn format_date(template: &str, date: &DateComponents, calendar: CalendarKind) -> String {
    FormattedDate::new(template, *date, calendar).to_string()
}

/// Values of 10 and above are emitted as-is, anything smaller gets a leading `0`.
pub fn pad_two_digits(value: i64) -> String {
    if value >= 10 {
        value.to_string()
    } else {
        format!("0{value}")
    }
}
