//! Calendar arithmetic behind a set of everyday date and time calculators:
//! date differences, Korean and international age, zodiac years, D-day
//! countdowns and time-of-day addition.
//!
//! Every calculation is a pure function over validated values. Raw form
//! fields are turned into those values by [`input`], and [`fmt`] renders
//! results the way the calculator pages display them.

mod age;
pub mod clock;
pub mod config;
mod consts;
mod dday;
pub mod fmt;
pub mod input;
mod interval;
mod prelude;
mod time_of_day;
mod types;
mod zodiac;

#[cfg(test)]
mod test_utils;

pub use age::{AgeReport, international_age, traditional_age, year_age};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalcConfig, ConfigError, ZodiacCutoff};
pub use consts::*;
pub use dday::{DDay, Direction, d_day, d_day_count};
pub use interval::{CalendarDelta, ElapsedTotals, Interval, TimeUnit, calendar_delta, total_elapsed};
pub use time_of_day::{HmsDelta, Meridiem, TimeOfDay, TimeOffset, add_time_of_day, time_of_day_delta};
pub use types::{Day, Field, Hour, Minute, Month, Second, Year, is_leap_year};
pub use zodiac::{Zodiac, zodiac_label};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use std::str::FromStr;

/// A wall-clock timestamp in the calculator's fixed local timezone.
///
/// Every component is validated on construction, so arithmetic on an
/// instant never has to re-check its fields. No timezone conversion is ever
/// applied to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarInstant {
    inner: NaiveDateTime,
}

/// Rejected input, reported before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Missing required {_0}")]
    Missing(Field),
    #[display(fmt = "Invalid {field}: {value:?} is not a number")]
    NotNumeric { field: Field, value: String },
    #[display(fmt = "Invalid {field}: {value} (must be {min}-{max})")]
    OutOfRange {
        field: Field,
        value: i64,
        min:   i64,
        max:   i64,
    },
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for FieldError {}

/// Error type for calculations over already-validated values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// An input field was rejected.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Date arithmetic left the supported calendar range.
    #[error("Date arithmetic out of range: {0}")]
    Overflow(String),
}

impl CalendarInstant {
    /// Creates an instant from raw components, validating each field and then
    /// the day against its month.
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` for a field outside its bounds and
    /// `FieldError::InvalidDay` for a day the month does not have.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self, FieldError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month.get())?;
        let hour = Hour::new(hour)?;
        let minute = Minute::new(minute)?;
        let second = Second::new(second)?;
        Self::from_parts(year, month, day, hour, minute, second)
    }

    /// Creates a midnight instant for a date-only input
    ///
    /// # Errors
    /// Same as [`CalendarInstant::new`].
    pub fn date(year: u16, month: u8, day: u8) -> Result<Self, FieldError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Creates an instant from components that are already validated on their own
    ///
    /// # Errors
    /// Returns `FieldError::InvalidDay` if the day does not exist in the month.
    pub fn from_parts(
        year: Year,
        month: Month,
        day: Day,
        hour: Hour,
        minute: Minute,
        second: Second,
    ) -> Result<Self, FieldError> {
        let invalid_day = || FieldError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   day.get(),
        };
        let date = NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
        .ok_or_else(invalid_day)?;
        let time = NaiveTime::from_hms_opt(
            u32::from(hour.get()),
            u32::from(minute.get()),
            u32::from(second.get()),
        )
        .ok_or(FieldError::OutOfRange {
            field: Field::Hour,
            value: i64::from(hour.get()),
            min:   0,
            max:   i64::from(MAX_HOUR),
        })?;
        Ok(Self {
            inner: date.and_time(time),
        })
    }

    pub fn year(&self) -> u16 {
        // validated to 1..=9999 on construction
        u16::try_from(self.inner.year()).unwrap_or(MAX_YEAR)
    }

    pub fn month(&self) -> u8 {
        narrow(self.inner.month())
    }

    pub fn day(&self) -> u8 {
        narrow(self.inner.day())
    }

    pub fn hour(&self) -> u8 {
        narrow(self.inner.hour())
    }

    pub fn minute(&self) -> u8 {
        narrow(self.inner.minute())
    }

    pub fn second(&self) -> u8 {
        narrow(self.inner.second())
    }

    /// Day of the week this instant falls on
    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// The same date at 00:00:00
    pub fn start_of_day(&self) -> Self {
        Self {
            inner: self.inner.date().and_time(NaiveTime::MIN),
        }
    }

    /// Returns true if no time-of-day component is set
    pub fn is_start_of_day(&self) -> bool {
        self.inner.time() == NaiveTime::MIN
    }

    /// The wrapped `chrono` value, for arithmetic
    pub const fn naive(&self) -> NaiveDateTime {
        self.inner
    }

    /// Returns the calendar date without the time of day
    pub fn date_naive(&self) -> NaiveDate {
        self.inner.date()
    }

    /// Returns the time of day without the date
    pub fn time(&self) -> TimeOfDay {
        TimeOfDay::from(self.inner.time())
    }
}

/// Narrows a chrono calendar component; every one of them is below 256.
fn narrow(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

impl TryFrom<NaiveDateTime> for CalendarInstant {
    type Error = FieldError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        let year = i64::from(value.year());
        Field::Year.check(year)?;
        Ok(Self {
            inner: value.with_nanosecond(0).unwrap_or(value),
        })
    }
}

impl TryFrom<NaiveDate> for CalendarInstant {
    type Error = FieldError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::try_from(value.and_time(NaiveTime::MIN))
    }
}

impl From<CalendarInstant> for NaiveDateTime {
    fn from(instant: CalendarInstant) -> Self {
        instant.inner
    }
}

impl std::fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02} {:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl FromStr for CalendarInstant {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::EmptyInput);
        }

        // Date and time may be separated by a space or an ISO 8601 'T'
        let (date_part, time_part) = match trimmed.split_once([' ', 'T']) {
            Some((date, time)) => (date.trim(), Some(time.trim())),
            None => (trimmed, None),
        };

        let date_parts: Vec<&str> = date_part.split(DATE_SEPARATOR).map(str::trim).collect();
        if date_parts.len() != 3 {
            return Err(FieldError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {date_part:?}"
            )));
        }
        let year = Self::parse_u16(date_parts[0])?;
        let month = Self::parse_u8(date_parts[1])?;
        let day = Self::parse_u8(date_parts[2])?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0),
            Some(time) => Self::parse_time(time)?,
        };

        Self::new(year, month, day, hour, minute, second)
    }
}

impl CalendarInstant {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, FieldError> {
        s.parse::<u16>()
            .map_err(|_| FieldError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, FieldError> {
        s.parse::<u8>()
            .map_err(|_| FieldError::InvalidFormat(s.to_owned()))
    }

    /// Parses `HH:MM` or `HH:MM:SS`
    fn parse_time(s: &str) -> Result<(u8, u8, u8), FieldError> {
        let parts: Vec<&str> = s.split(TIME_SEPARATOR).map(str::trim).collect();
        match parts.len() {
            2 => Ok((Self::parse_u8(parts[0])?, Self::parse_u8(parts[1])?, 0)),
            3 => Ok((
                Self::parse_u8(parts[0])?,
                Self::parse_u8(parts[1])?,
                Self::parse_u8(parts[2])?,
            )),
            _ => Err(FieldError::InvalidFormat(format!(
                "Expected HH{TIME_SEPARATOR}MM[{TIME_SEPARATOR}SS], found {s:?}"
            ))),
        }
    }
}

impl serde::Serialize for CalendarInstant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarInstant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
