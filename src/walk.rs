//! Month-by-month redistribution of a day budget over a calendar's months.

use crate::consts::{FIRST_MONTH, MONTHS_IN_YEAR};
use crate::types::{CalendarKind, DateComponents, LeapRule, ReferenceAnchor, table_length};

/// Walks a day budget across one calendar's month-length table.
///
/// The walker holds no per-call state; every walk runs on locals and returns
/// a fresh [`DateComponents`], so one walker can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EpochWalker {
    calendar: CalendarKind,
    leap_rule: LeapRule,
}

impl EpochWalker {
    pub const fn new(calendar: CalendarKind, leap_rule: LeapRule) -> Self {
        Self {
            calendar,
            leap_rule,
        }
    }

    /// Walker producing dates in the anchor's target calendar
    pub const fn for_anchor(anchor: &ReferenceAnchor, leap_rule: LeapRule) -> Self {
        Self::new(anchor.target, leap_rule)
    }

    pub const fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    /// Distributes `budget` days starting at the first day of
    /// `start_year`/`start_month`, where a budget of 1 is that first day.
    ///
    /// A budget below 1 borrows whole months backwards first. Entering a leap
    /// year going forward costs one extra day; leaving one going backward
    /// refunds it. The walk stops once the budget fits the current month.
    pub(crate) fn walk(&self, start_year: i32, start_month: u8, budget: i64) -> DateComponents {
        debug_assert!(start_month >= FIRST_MONTH && start_month <= MONTHS_IN_YEAR);

        let mut year = start_year;
        let mut month = start_month;
        let mut days = budget;

        while days < 1 {
            if month == FIRST_MONTH {
                if self.leap_rule.is_leap(year) {
                    days += 1;
                }
                year -= 1;
                month = MONTHS_IN_YEAR;
            } else {
                month -= 1;
            }
            days += table_length(self.calendar, month);
        }

        while days > table_length(self.calendar, month) {
            days -= table_length(self.calendar, month);
            month += 1;

            if month > MONTHS_IN_YEAR {
                year += 1;
                if self.leap_rule.is_leap(year) {
                    days -= 1;
                }
                month = FIRST_MONTH;
            }
        }

        log::trace!(
            "{} walk from {start_year}-{start_month:02} with {budget} days ended at {year}-{month:02}-{days:02}",
            self.calendar
        );

        DateComponents::new(year, month, days)
    }

    /// Walks from the anchor's start month for a subject `elapsed_days` after
    /// the anchor's epoch.
    pub(crate) fn walk_from(
        &self,
        anchor: &ReferenceAnchor,
        elapsed_days: i64,
    ) -> DateComponents {
        debug_assert_eq!(anchor.target, self.calendar);

        self.walk(
            anchor.start_year,
            anchor.start_month,
            anchor.seed_budget(elapsed_days),
        )
    }

    /// Inverse of [`Self::walk`]: the budget that walks from
    /// `start_year`/`start_month` to `target`.
    pub(crate) fn budget_for(
        &self,
        start_year: i32,
        start_month: u8,
        target: DateComponents,
    ) -> i64 {
        debug_assert!(target.month >= FIRST_MONTH && target.month <= MONTHS_IN_YEAR);

        let start = (start_year, start_month);
        let mut year = target.year;
        let mut month = target.month;
        let mut days = target.day;

        while (year, month) > start {
            if month == FIRST_MONTH {
                if self.leap_rule.is_leap(year) {
                    days += 1;
                }
                year -= 1;
                month = MONTHS_IN_YEAR;
            } else {
                month -= 1;
            }
            days += table_length(self.calendar, month);
        }

        while (year, month) < start {
            days -= table_length(self.calendar, month);
            month += 1;

            if month > MONTHS_IN_YEAR {
                year += 1;
                if self.leap_rule.is_leap(year) {
                    days -= 1;
                }
                month = FIRST_MONTH;
            }
        }

        days
    }

    /// Whole days from `from` to `to`, counted in this walker's calendar model.
    pub(crate) fn days_between(&self, from: DateComponents, to: DateComponents) -> i64 {
        self.budget_for(from.year, from.month, to) - from.day
    }
}
