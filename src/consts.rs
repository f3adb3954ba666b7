/// Number of months in both supported calendars
pub const MONTHS_IN_YEAR: u8 = 12;

/// Month number for January / Farvardin
pub const FIRST_MONTH: u8 = 1;

/// Days per Gregorian month, indexed by `month - 1`.
/// February is fixed at 28; leap days are absorbed by the walker at year rollover.
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days per Jalali month, indexed by `month - 1`.
/// Esfand is fixed at 29; leap days are absorbed by the walker at year rollover.
pub const JALALI_DAYS_IN_MONTH: [u8; 12] = [
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand
];

pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Jalali month names in Persian script.
// These spellings are what callers render verbatim; do not transliterate.
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Gregorian epoch the Gregorian → Jalali direction measures from
pub const GREGORIAN_REFERENCE_DATE: (i32, u8, u8) = (1970, 1, 1);
/// The same instant expressed in the Jalali calendar
pub const JALALI_REFERENCE_DATE: (i32, u8, u8) = (1348, 10, 11);

/// First Gregorian year of the Jalali → Gregorian walk
pub const INITIAL_GREGORIAN_YEAR: i32 = 1970;
/// First Jalali year of the Gregorian → Jalali walk
pub const INITIAL_JALALI_YEAR: i32 = 1348;

/// The Gregorian → Jalali walk starts in Bahman
pub const JALALI_START_MONTH: u8 = 11;
/// Day of Dey the Gregorian epoch lands on
pub const JALALI_EPOCH_DAY: u8 = 11;
/// Days from the Gregorian epoch to the last day of Dey 1348
pub const JALALI_EPOCH_OFFSET: i64 = -19;

/// The Jalali → Gregorian walk starts in January
pub const GREGORIAN_START_MONTH: u8 = 1;
/// Day of January the Jalali epoch lands on
pub const GREGORIAN_EPOCH_DAY: u8 = 1;
/// Budget counts from the first day of the start month
pub const GREGORIAN_EPOCH_OFFSET: i64 = 1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Template used when the caller does not supply one
pub const DEFAULT_FORMAT: &str = "Y-M-d";
/// Timezone used when the caller does not supply one
pub const DEFAULT_TIMEZONE: &str = "GMT";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Width of the year field in `YYYY-MM-DD` input
pub const YEAR_DIGITS: usize = 4;
/// Maximum width of the month and day fields in `YYYY-MM-DD` input
pub const MAX_FIELD_DIGITS: usize = 2;

/// Format tokens recognized by the formatter
pub const TOKEN_YEAR: char = 'Y';
pub const TOKEN_MONTH: char = 'm';
pub const TOKEN_MONTH_NAME: char = 'M';
pub const TOKEN_DAY: char = 'd';
