mod config;
mod consts;
mod elapsed;
mod format;
mod prelude;
mod types;
mod walk;

pub use config::ConverterConfig;
pub use consts::*;
pub use elapsed::{
    GREGORIAN_EPOCH, gregorian_elapsed_days, parse_date, parse_gregorian_date, resolve_timezone,
};
pub use format::{FormattedDate, format_date, pad_two_digits};
pub use types::{
    CalendarKind, DateComponents, LeapRule, ReferenceAnchor, is_gregorian_leap_year,
    is_leap_year, month_length, month_name,
};

use elapsed::jalali_elapsed_days;
use walk::EpochWalker;

/// Error type for date conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input is not a `YYYY-MM-DD` date. Carries the raw input.
    #[error("Invalid date format {0}")]
    InvalidDate(String),

    /// Timezone identifier could not be resolved.
    #[error("Unknown timezone {name}")]
    InvalidTimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    /// Day difference could not be computed in the requested timezone.
    #[error(transparent)]
    DayArithmetic(#[from] jiff::Error),
}

/// Converts dates between the Gregorian and Jalali calendars.
///
/// Holds only configuration; each call keeps its walk state on the stack, so
/// a shared `&DateConverter` can be used from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct DateConverter {
    config: ConverterConfig,
}

impl DateConverter {
    /// Converter using the `Y-M-d` template, `GMT` and the legacy leap rule
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts a Gregorian `YYYY-MM-DD` date using the configured template and timezone.
    ///
    /// # Errors
    /// See [`Self::gregorian_to_jalali_with`].
    pub fn gregorian_to_jalali(&self, date: &str) -> Result<String, ConvertError> {
        self.gregorian_to_jalali_with(
            date,
            &self.config.default_format,
            &self.config.default_timezone,
        )
    }

    /// Converts a Gregorian `YYYY-MM-DD` date and renders it through `format`.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidDate` if `date` is not a valid Gregorian
    /// `YYYY-MM-DD` date, `ConvertError::InvalidTimeZone` if `timezone` is unknown.
    pub fn gregorian_to_jalali_with(
        &self,
        date: &str,
        format: &str,
        timezone: &str,
    ) -> Result<String, ConvertError> {
        let converted = self.gregorian_to_jalali_components(date, timezone)?;
        Ok(format_date(format, &converted, CalendarKind::Jalali))
    }

    /// Converts a Gregorian `YYYY-MM-DD` date without formatting it.
    ///
    /// # Errors
    /// See [`Self::gregorian_to_jalali_with`].
    pub fn gregorian_to_jalali_components(
        &self,
        date: &str,
        timezone: &str,
    ) -> Result<DateComponents, ConvertError> {
        log::debug!("converting gregorian {date} to jalali in {timezone}");

        let subject = parse_gregorian_date(date)?;
        // Whole-day counts do not depend on the zone, but unknown names are still rejected
        resolve_timezone(timezone)?;
        let elapsed = gregorian_elapsed_days(GREGORIAN_EPOCH, subject)?;

        let anchor = &ReferenceAnchor::GREGORIAN_TO_JALALI;
        let walker = EpochWalker::for_anchor(anchor, self.config.leap_rule);
        Ok(walker.walk_from(anchor, elapsed))
    }

    /// Converts a Jalali `YYYY-MM-DD` date using the configured template and timezone.
    ///
    /// # Errors
    /// See [`Self::jalali_to_gregorian_with`].
    pub fn jalali_to_gregorian(&self, date: &str) -> Result<String, ConvertError> {
        self.jalali_to_gregorian_with(
            date,
            &self.config.default_format,
            &self.config.default_timezone,
        )
    }

    /// Converts a Jalali `YYYY-MM-DD` date and renders it through `format`.
    ///
    /// The day is not checked against the Jalali month's length.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidDate` if `date` is not `YYYY-MM-DD` with a
    /// month in `1..=12`, `ConvertError::InvalidTimeZone` if `timezone` is unknown.
    pub fn jalali_to_gregorian_with(
        &self,
        date: &str,
        format: &str,
        timezone: &str,
    ) -> Result<String, ConvertError> {
        let converted = self.jalali_to_gregorian_components(date, timezone)?;
        Ok(format_date(format, &converted, CalendarKind::Gregorian))
    }

    /// Converts a Jalali `YYYY-MM-DD` date without formatting it.
    ///
    /// # Errors
    /// See [`Self::jalali_to_gregorian_with`].
    pub fn jalali_to_gregorian_components(
        &self,
        date: &str,
        timezone: &str,
    ) -> Result<DateComponents, ConvertError> {
        log::debug!("converting jalali {date} to gregorian in {timezone}");

        let subject = parse_date(date)?;
        // Whole-day counts do not depend on the zone, but unknown names are still rejected
        resolve_timezone(timezone)?;

        let anchor = &ReferenceAnchor::JALALI_TO_GREGORIAN;
        let jalali = EpochWalker::new(anchor.source, self.config.leap_rule);
        let elapsed = jalali_elapsed_days(&jalali, DateComponents::from(anchor.epoch), subject);

        let walker = EpochWalker::for_anchor(anchor, self.config.leap_rule);
        Ok(walker.walk_from(anchor, elapsed))
    }
}

/// Converts a Gregorian `YYYY-MM-DD` date to a Jalali date rendered through `format`.
///
/// # Errors
/// Returns `ConvertError::InvalidDate` carrying `date` if it does not parse.
pub fn convert_gregorian_to_jalali(
    date: &str,
    format: &str,
    timezone: &str,
) -> Result<String, ConvertError> {
    DateConverter::new().gregorian_to_jalali_with(date, format, timezone)
}

/// Converts a Jalali `YYYY-MM-DD` date to a Gregorian date rendered through `format`.
///
/// # Errors
/// Returns `ConvertError::InvalidDate` carrying `date` if it does not parse.
pub fn convert_jalali_to_gregorian(
    date: &str,
    format: &str,
    timezone: &str,
) -> Result<String, ConvertError> {
    DateConverter::new().jalali_to_gregorian_with(date, format, timezone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_gregorian_epoch_to_jalali() {
        let result = convert_gregorian_to_jalali("1970-01-01", "Y-m-d", "GMT").unwrap();
        assert_eq!(result, "1348-10-11");
    }

    #[test]
    fn test_jalali_epoch_to_gregorian() {
        let result = convert_jalali_to_gregorian("1348-10-11", "Y-m-d", "GMT").unwrap();
        assert_eq!(result, "1970-01-01");
    }

    #[test]
    fn test_gregorian_to_jalali_known_dates() {
        struct TestCase {
            gregorian: &'static str,
            jalali: &'static str,
        }

        let cases = [
            TestCase {
                gregorian: "2024-03-20",
                jalali: "1403-01-01",
            },
            TestCase {
                gregorian: "2024-03-19",
                jalali: "1402-12-29",
            },
            TestCase {
                gregorian: "2023-03-21",
                jalali: "1402-01-01",
            },
            TestCase {
                gregorian: "1979-02-11",
                jalali: "1357-11-22",
            },
            TestCase {
                gregorian: "2025-01-01",
                jalali: "1403-10-12",
            },
            TestCase {
                gregorian: "2020-06-15",
                jalali: "1399-03-26",
            },
            TestCase {
                gregorian: "1969-12-31",
                jalali: "1348-10-10",
            },
        ];

        for case in &cases {
            assert_eq!(
                convert_gregorian_to_jalali(case.gregorian, "Y-m-d", "GMT").unwrap(),
                case.jalali,
                "{} to jalali",
                case.gregorian
            );
        }
    }

    #[test]
    fn test_jalali_to_gregorian_known_dates() {
        let converter = DateConverter::new();
        for (jalali, gregorian) in [
            ("1403-01-01", "2024-03-20"),
            ("1402-12-29", "2024-03-19"),
            ("1357-11-22", "1979-02-11"),
            ("1400-07-15", "2021-10-07"),
            ("1300-01-01", "1921-03-21"),
            ("1348-10-10", "1969-12-31"),
        ] {
            assert_eq!(
                converter
                    .jalali_to_gregorian_with(jalali, "Y-m-d", "GMT")
                    .unwrap(),
                gregorian,
                "{jalali} to gregorian"
            );
        }
    }

    #[test]
    fn test_default_format_uses_month_names() {
        let converter = DateConverter::new();
        assert_eq!(
            converter.gregorian_to_jalali("2024-03-20").unwrap(),
            "1403-فروردین-01"
        );
        assert_eq!(
            converter.jalali_to_gregorian("1403-01-01").unwrap(),
            "2024-March-20"
        );
    }

    #[test]
    fn test_configured_defaults() {
        let converter = DateConverter::with_config(
            ConverterConfig::new()
                .with_default_format("d M Y")
                .with_default_timezone("Asia/Tehran"),
        );
        assert_eq!(
            converter.gregorian_to_jalali("1979-02-11").unwrap(),
            "22 بهمن 1357"
        );
        assert_eq!(converter.config().default_timezone, "Asia/Tehran");
    }

    #[test]
    fn test_timezone_does_not_shift_whole_days() {
        let converter = DateConverter::new();
        for tz in ["GMT", "UTC", "Asia/Tehran", "America/Los_Angeles", "Pacific/Kiritimati"] {
            assert_eq!(
                converter
                    .gregorian_to_jalali_with("2024-03-20", "Y-m-d", tz)
                    .unwrap(),
                "1403-01-01",
                "timezone {tz}"
            );
            assert_eq!(
                converter
                    .jalali_to_gregorian_with("1403-01-01", "Y-m-d", tz)
                    .unwrap(),
                "2024-03-20",
                "timezone {tz}"
            );
        }
    }

    #[test]
    fn test_civil_range_edges_convert_in_every_timezone() {
        for tz in ["GMT", "UTC", "Pacific/Kiritimati", "Etc/GMT+12"] {
            assert_eq!(
                convert_gregorian_to_jalali("9999-12-31", "Y-m-d", tz).unwrap(),
                "9378-08-10",
                "timezone {tz}"
            );
        }
        assert!(convert_gregorian_to_jalali("0001-01-01", "Y-m-d", "GMT").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_invalid() {
        let result = convert_gregorian_to_jalali(" 2024-03-20", "Y-m-d", "GMT");
        assert!(matches!(result, Err(ConvertError::InvalidDate(ref raw)) if raw == " 2024-03-20"));

        let result = convert_jalali_to_gregorian("1403-01-01 ", "Y-m-d", "GMT");
        assert!(matches!(result, Err(ConvertError::InvalidDate(_))));
    }

    #[test]
    fn test_invalid_date_both_directions() {
        let result = convert_gregorian_to_jalali("not-a-date", "Y-m-d", "GMT");
        assert!(matches!(result, Err(ConvertError::InvalidDate(ref raw)) if raw == "not-a-date"));

        let result = convert_jalali_to_gregorian("not-a-date", "Y-m-d", "GMT");
        assert!(matches!(result, Err(ConvertError::InvalidDate(ref raw)) if raw == "not-a-date"));
    }

    #[test]
    fn test_invalid_date_message() {
        let err = convert_gregorian_to_jalali("1991/08/15", "Y-m-d", "GMT").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format 1991/08/15");
    }

    #[test]
    fn test_nonexistent_gregorian_day_is_invalid() {
        let result = convert_gregorian_to_jalali("2023-02-29", "Y-m-d", "GMT");
        assert!(matches!(result, Err(ConvertError::InvalidDate(_))));
    }

    #[test]
    fn test_jalali_day_not_range_checked() {
        // Esfand has 29 days in the table; day 30 is accepted and walks on
        let result = convert_jalali_to_gregorian("1402-12-30", "Y-m-d", "GMT").unwrap();
        assert_eq!(result, "2024-03-20");
    }

    #[test]
    fn test_invalid_timezone() {
        let result = convert_gregorian_to_jalali("2024-03-20", "Y-m-d", "Not/AZone");
        assert!(matches!(
            result,
            Err(ConvertError::InvalidTimeZone { ref name, .. }) if name == "Not/AZone"
        ));

        let result = convert_jalali_to_gregorian("1403-01-01", "Y-m-d", "Not/AZone");
        assert!(matches!(result, Err(ConvertError::InvalidTimeZone { .. })));
    }

    #[test]
    fn test_invalid_date_reported_before_timezone() {
        let result = convert_gregorian_to_jalali("not-a-date", "Y-m-d", "Not/AZone");
        assert!(matches!(result, Err(ConvertError::InvalidDate(_))));
    }

    #[test]
    fn test_round_trip_outside_leap_january_february() {
        let converter = DateConverter::new();
        let mut day = date(1990, 1, 1);
        let end = date(2040, 1, 1);

        while day < end {
            let skip = day.month() <= 2 && is_leap_year(i32::from(day.year()));
            if !skip {
                let gregorian = day.to_string();
                let jalali = converter
                    .gregorian_to_jalali_with(&gregorian, "Y-m-d", "GMT")
                    .unwrap();
                let back = converter
                    .jalali_to_gregorian_with(&jalali, "Y-m-d", "GMT")
                    .unwrap();
                assert_eq!(back, gregorian, "{gregorian} -> {jalali} -> {back}");
            }
            day = day.tomorrow().unwrap();
        }
    }

    #[test]
    fn test_round_trip_leap_january_is_off_by_one() {
        let converter = DateConverter::new();
        let jalali = converter
            .gregorian_to_jalali_with("2000-01-01", "Y-m-d", "GMT")
            .unwrap();
        assert_eq!(jalali, "1378-10-11");

        let back = converter
            .jalali_to_gregorian_with(&jalali, "Y-m-d", "GMT")
            .unwrap();
        assert_eq!(back, "2000-01-00");
    }

    #[test]
    fn test_gregorian_leap_rule_flag() {
        let legacy = DateConverter::new();
        let standard =
            DateConverter::with_config(ConverterConfig::new().with_leap_rule(LeapRule::Gregorian));

        assert_eq!(
            legacy
                .gregorian_to_jalali_components("1900-05-05", "GMT")
                .unwrap(),
            DateComponents::new(1279, 2, 16)
        );
        assert_eq!(
            standard
                .gregorian_to_jalali_components("1900-05-05", "GMT")
                .unwrap(),
            DateComponents::new(1279, 2, 15)
        );
    }

    #[test]
    fn test_components_api() {
        let converter = DateConverter::new();
        let jalali = converter
            .gregorian_to_jalali_components("2024-03-20", "GMT")
            .unwrap();
        assert_eq!(jalali, DateComponents::new(1403, 1, 1));

        let gregorian = converter
            .jalali_to_gregorian_components("1403-01-01", "GMT")
            .unwrap();
        assert_eq!(gregorian, DateComponents::new(2024, 3, 20));
    }

    #[test]
    fn test_concurrent_conversions_do_not_interfere() {
        let converter = DateConverter::new();
        let inputs = ["1970-01-01", "2024-03-20", "1979-02-11", "2025-01-01"];
        let expected = ["1348-10-11", "1403-01-01", "1357-11-22", "1403-10-12"];

        std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let converter = &converter;
                    scope.spawn(move || {
                        (0..200)
                            .map(|_| {
                                converter
                                    .gregorian_to_jalali_with(input, "Y-m-d", "GMT")
                                    .unwrap()
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for (handle, want) in handles.into_iter().zip(expected) {
                for got in handle.join().unwrap() {
                    assert_eq!(got, want);
                }
            }
        });
    }
}
