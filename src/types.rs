use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::FieldError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Names the input field a value came from, so errors can point at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl Field {
    /// Inclusive range accepted for this field before any composite check
    pub const fn bounds(self) -> (i64, i64) {
        match self {
            Self::Year => (MIN_YEAR as i64, MAX_YEAR as i64),
            Self::Month => (1, MAX_MONTH as i64),
            Self::Day => (MIN_DAY as i64, MAX_DAY as i64),
            Self::Hour => (0, MAX_HOUR as i64),
            Self::Minute => (0, MAX_MINUTE as i64),
            Self::Second => (0, MAX_SECOND as i64),
        }
    }

    /// Checks `value` against [`Field::bounds`]
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if the value falls outside the bounds.
    pub fn check(self, value: i64) -> Result<i64, FieldError> {
        let (min, max) = self.bounds();
        if value < min || value > max {
            return Err(FieldError::OutOfRange {
                field: self,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }
}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, FieldError> {
        Field::Year.check(i64::from(value))?;
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(FieldError::OutOfRange {
                field: Field::Year,
                value: i64::from(value),
                min: i64::from(MIN_YEAR),
                max: i64::from(MAX_YEAR),
            })
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = FieldError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        Field::Month.check(i64::from(value))?;
        NonZeroU8::new(value).map(Self).ok_or(FieldError::OutOfRange {
            field: Field::Month,
            value: i64::from(value),
            min: 1,
            max: i64::from(MAX_MONTH),
        })
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against `1..=31` first and then against
    /// the length of the given month.
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if the value is outside `1..=31` or the
    /// month outside `1..=12`, and `FieldError::InvalidDay` if the month is
    /// shorter than the value.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, FieldError> {
        let non_zero = Self::try_from(value)?;

        let max_day = days_in_month(year, Month::new(month)?);
        if value > max_day {
            return Err(FieldError::InvalidDay {
                year,
                month,
                day: value,
            });
        }

        Ok(non_zero)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate the month length without year/month context
        Field::Day.check(i64::from(value))?;
        NonZeroU8::new(value).map(Self).ok_or(FieldError::OutOfRange {
            field: Field::Day,
            value: i64::from(value),
            min: i64::from(MIN_DAY),
            max: i64::from(MAX_DAY),
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declares a zero-based clock component (hour, minute or second).
macro_rules! clock_component {
    ($(#[$meta:meta])* $name:ident, $field:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            /// Creates a new value, validating it against the field bounds
            ///
            /// # Errors
            /// Returns `FieldError::OutOfRange` if the value is too large.
            pub fn new(value: u8) -> Result<Self, FieldError> {
                Field::check($field, i64::from(value))?;
                Ok(Self(value))
            }

            #[inline]
            pub const fn get(self) -> u8 {
                self.0
            }
        }

        impl TryFrom<u8> for $name {
            type Error = FieldError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:02}", self.0)
            }
        }
    };
}

clock_component!(
    /// An hour on a 24-hour clock, `0..=23`
    Hour,
    Field::Hour
);
clock_component!(
    /// A minute, `0..=59`
    Minute,
    Field::Minute
);
clock_component!(
    /// A second, `0..=59`
    Second,
    Field::Second
);

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: u16, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
