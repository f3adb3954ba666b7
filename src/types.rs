use crate::consts::{
    CENTURY_CYCLE, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_DAY,
    GREGORIAN_EPOCH_OFFSET, GREGORIAN_MONTH_NAMES, GREGORIAN_REFERENCE_DATE,
    GREGORIAN_START_MONTH, INITIAL_GREGORIAN_YEAR, INITIAL_JALALI_YEAR, JALALI_DAYS_IN_MONTH,
    JALALI_EPOCH_DAY, JALALI_EPOCH_OFFSET, JALALI_MONTH_NAMES, JALALI_REFERENCE_DATE,
    JALALI_START_MONTH, LEAP_YEAR_CYCLE, MONTHS_IN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// The two calendars this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "jalali")]
    Jalali,
}

impl CalendarKind {
    /// Day counts per month for this calendar, indexed by `month - 1`
    pub const fn month_lengths(self) -> &'static [u8; 12] {
        match self {
            Self::Gregorian => &GREGORIAN_DAYS_IN_MONTH,
            Self::Jalali => &JALALI_DAYS_IN_MONTH,
        }
    }

    /// Month names for this calendar, indexed by `month - 1`
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::Gregorian => &GREGORIAN_MONTH_NAMES,
            Self::Jalali => &JALALI_MONTH_NAMES,
        }
    }
}

/// A (year, month, day) triple produced by a conversion.
///
/// `day` is the remaining day budget at the point the walk stopped. It is not
/// re-validated against the month's length and can be 0 in the first month of
/// a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct DateComponents {
    pub year: i32,
    pub month: u8,
    pub day: i64,
}

impl DateComponents {
    pub const fn new(year: i32, month: u8, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Converts to a plain `(year, month, day)` tuple
    pub const fn to_tuple(self) -> (i32, u8, i64) {
        (self.year, self.month, self.day)
    }
}

impl From<(i32, u8, u8)> for DateComponents {
    fn from((year, month, day): (i32, u8, u8)) -> Self {
        Self::new(year, month, i64::from(day))
    }
}

/// Which leap-year rule the walkers apply at each year rollover.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapRule {
    /// Every year divisible by 4 is leap, century years included.
    /// Matches the dates this converter has always produced.
    #[default]
    #[display(fmt = "legacy")]
    Legacy,
    /// Proleptic Gregorian rule: centuries are leap only when divisible by 400.
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl LeapRule {
    pub const fn is_leap(self, year: i32) -> bool {
        match self {
            Self::Legacy => is_leap_year(year),
            Self::Gregorian => is_gregorian_leap_year(year),
        }
    }
}

/// Seed values that align one conversion direction with its epoch.
///
/// The walk starts at `start_year`/`start_month` with a budget of
/// `elapsed_days + offset`. An elapsed count of zero lands on `epoch_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAnchor {
    /// Calendar the elapsed days are measured in
    pub source: CalendarKind,
    /// Calendar the walk produces
    pub target: CalendarKind,
    /// Reference date in the source calendar
    pub epoch: (i32, u8, u8),
    pub start_year: i32,
    pub start_month: u8,
    /// Day of month the epoch falls on in the target calendar
    pub epoch_day: u8,
    pub offset: i64,
}

impl ReferenceAnchor {
    /// 1970-01-01 is 11 Dey 1348. The walk starts in Bahman, 19 days after
    /// the epoch's month ends.
    pub const GREGORIAN_TO_JALALI: Self = Self {
        source: CalendarKind::Gregorian,
        target: CalendarKind::Jalali,
        epoch: GREGORIAN_REFERENCE_DATE,
        start_year: INITIAL_JALALI_YEAR,
        start_month: JALALI_START_MONTH,
        epoch_day: JALALI_EPOCH_DAY,
        offset: JALALI_EPOCH_OFFSET,
    };

    pub const JALALI_TO_GREGORIAN: Self = Self {
        source: CalendarKind::Jalali,
        target: CalendarKind::Gregorian,
        epoch: JALALI_REFERENCE_DATE,
        start_year: INITIAL_GREGORIAN_YEAR,
        start_month: GREGORIAN_START_MONTH,
        epoch_day: GREGORIAN_EPOCH_DAY,
        offset: GREGORIAN_EPOCH_OFFSET,
    };

    /// Initial day budget for a subject `elapsed_days` after the epoch
    pub const fn seed_budget(&self, elapsed_days: i64) -> i64 {
        elapsed_days + self.offset
    }
}

// Helper functions

/// Leap rule this converter has always used.
///
/// Any year divisible by 4 is leap, so 1900 and 2100 count as leap years here,
/// unlike the proleptic Gregorian calendar. See [`LeapRule::Gregorian`].
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 || (year % GREGORIAN_CYCLE == 0 && year % CENTURY_CYCLE != 0)
}

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Table length of `month` in `kind`, or `None` when `month` is outside `1..=12`.
/// Leap days are not included.
pub fn month_length(kind: CalendarKind, month: u8) -> Option<i64> {
    let index = usize::from(month.checked_sub(1)?);
    kind.month_lengths().get(index).copied().map(i64::from)
}

/// Table length for a month the caller has already normalized to `1..=12`.
pub(crate) const fn table_length(kind: CalendarKind, month: u8) -> i64 {
    debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);

    kind.month_lengths()[(month - 1) as usize] as i64
}

/// Name of `month` in `kind`, or `None` when `month` is outside `1..=12`.
pub fn month_name(kind: CalendarKind, month: u8) -> Option<&'static str> {
    let index = usize::from(month.checked_sub(1)?);
    kind.month_names().get(index).copied()
}
