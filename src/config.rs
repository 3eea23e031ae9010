//! Calculator settings, loadable from a TOML file.
//!
//! ```toml
//! utc_offset_minutes = 540
//!
//! [zodiac_cutoff]
//! month = 2
//! day = 4
//! ```

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_UTC_OFFSET_MINUTES, Day, FieldError, Month, SystemClock, ZODIAC_CUTOFF_DAY, ZODIAC_CUTOFF_MONTH,
};

/// Largest offset accepted, just under a full day either way
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;
/// Leap year used to validate cutoff days, so Feb 29 is accepted
const CUTOFF_REFERENCE_YEAR: u16 = 2000;

/// Error type for loading and validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The fixed timezone offset is out of range.
    #[error("Invalid UTC offset: {0} minutes (must be within ±1439)")]
    InvalidOffset(i32),
}

/// Month and day on which a zodiac year begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CutoffFields", into = "CutoffFields")]
pub struct ZodiacCutoff {
    month: u8,
    day:   u8,
}

#[derive(Serialize, Deserialize)]
struct CutoffFields {
    month: u8,
    day:   u8,
}

impl ZodiacCutoff {
    /// # Errors
    /// Returns a `FieldError` if the month or the day within it is invalid.
    pub fn new(month: u8, day: u8) -> Result<Self, FieldError> {
        let month = Month::new(month)?;
        let day = Day::new(day, CUTOFF_REFERENCE_YEAR, month.get())?;
        Ok(Self {
            month: month.get(),
            day:   day.get(),
        })
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl Default for ZodiacCutoff {
    /// Feb 4, the usual date of the "start of spring" solar term
    fn default() -> Self {
        Self {
            month: ZODIAC_CUTOFF_MONTH,
            day:   ZODIAC_CUTOFF_DAY,
        }
    }
}

impl TryFrom<CutoffFields> for ZodiacCutoff {
    type Error = FieldError;

    fn try_from(fields: CutoffFields) -> Result<Self, Self::Error> {
        Self::new(fields.month, fields.day)
    }
}

impl From<ZodiacCutoff> for CutoffFields {
    fn from(cutoff: ZodiacCutoff) -> Self {
        Self {
            month: cutoff.month(),
            day:   cutoff.day(),
        }
    }
}

impl std::fmt::Display for ZodiacCutoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month(), self.day())
    }
}

/// Settings shared by every calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Offset of the fixed local timezone from UTC, used only to read "now"
    pub utc_offset_minutes: i32,
    /// Start of the zodiac year
    pub zodiac_cutoff:      ZodiacCutoff,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            zodiac_cutoff:      ZodiacCutoff::default(),
        }
    }
}

impl CalcConfig {
    /// Parses and validates a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or bad values, and
    /// `ConfigError::InvalidOffset` for an out-of-range offset.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        tracing::debug!(?config, "loaded config");
        Ok(config)
    }

    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`CalcConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidOffset` for an offset of a day or more.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.offset().map(|_| ())
    }

    /// The configured fixed timezone
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOffset` for an offset of a day or more.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        let minutes = self.utc_offset_minutes;
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(ConfigError::InvalidOffset(minutes));
        }
        FixedOffset::east_opt(minutes * 60).ok_or(ConfigError::InvalidOffset(minutes))
    }

    /// A clock reading the current time in the configured timezone
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidOffset` for an invalid offset.
    pub fn clock(&self) -> Result<SystemClock, ConfigError> {
        Ok(SystemClock::new(self.offset()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalcConfig::default();
        assert_eq!(config.utc_offset_minutes, 540);
        assert_eq!(config.zodiac_cutoff.month(), 2);
        assert_eq!(config.zodiac_cutoff.day(), 4);
        assert_eq!(config.offset().unwrap().local_minus_utc(), 9 * 3_600);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(CalcConfig::from_toml_str("").unwrap(), CalcConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = CalcConfig::from_toml_str(
            r"
            utc_offset_minutes = -300

            [zodiac_cutoff]
            month = 2
            day = 5
            ",
        )
        .unwrap();
        assert_eq!(config.utc_offset_minutes, -300);
        assert_eq!(config.zodiac_cutoff, ZodiacCutoff::new(2, 5).unwrap());
    }

    #[test]
    fn test_rejects_bad_offset() {
        let result = CalcConfig::from_toml_str("utc_offset_minutes = 1440");
        assert!(matches!(result, Err(ConfigError::InvalidOffset(1440))));

        let result = CalcConfig::from_toml_str("utc_offset_minutes = -1440");
        assert!(matches!(result, Err(ConfigError::InvalidOffset(-1440))));

        let result = CalcConfig::from_toml_str("utc_offset_minutes = -2147483648");
        assert!(matches!(result, Err(ConfigError::InvalidOffset(i32::MIN))));

        assert!(CalcConfig::from_toml_str("utc_offset_minutes = -1439").is_ok());
    }

    #[test]
    fn test_rejects_bad_cutoff() {
        let result = CalcConfig::from_toml_str("[zodiac_cutoff]\nmonth = 2\nday = 30");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        assert!(ZodiacCutoff::new(2, 29).is_ok());
        assert!(ZodiacCutoff::new(13, 1).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = CalcConfig::from_file("/nonexistent/calendar_calc.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_cutoff_display() {
        assert_eq!(ZodiacCutoff::default().to_string(), "02-04");
    }
}
