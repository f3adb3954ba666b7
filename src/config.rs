//! Converter-wide defaults.

use serde::{Deserialize, Serialize};

use crate::ConvertError;
use crate::consts::{DEFAULT_FORMAT, DEFAULT_TIMEZONE};
use crate::elapsed::resolve_timezone;
use crate::types::LeapRule;

/// Settings shared by every conversion a [`crate::DateConverter`] performs.
///
/// Missing fields fall back to their defaults when deserializing, so
/// `{"leap_rule": "gregorian"}` is a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Leap rule applied at every year rollover, in both directions.
    pub leap_rule: LeapRule,
    /// Template used by the conversions that take no explicit format.
    pub default_format: String,
    /// Timezone used by the conversions that take no explicit timezone.
    pub default_timezone: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            leap_rule: LeapRule::default(),
            default_format: DEFAULT_FORMAT.to_owned(),
            default_timezone: DEFAULT_TIMEZONE.to_owned(),
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_leap_rule(mut self, leap_rule: LeapRule) -> Self {
        self.leap_rule = leap_rule;
        self
    }

    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = format.into();
        self
    }

    pub fn with_default_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = timezone.into();
        self
    }

    /// Checks that the default timezone resolves.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidTimeZone` for an unknown timezone name.
    pub fn validate(&self) -> Result<(), ConvertError> {
        resolve_timezone(&self.default_timezone).map(|_| ())
    }
}
