//! Raw text fields as a form submits them, and their validation.
//!
//! Required fields must be present and numeric. Optional fields (the time of
//! day on date-time inputs, the parts of a time offset) read blank as zero.
//! Both are range checked before any value is built, so a rejected field
//! never produces a partial result.

use serde::{Deserialize, Serialize};

use crate::{CalendarInstant, Field, FieldError, TimeOfDay, TimeOffset};

/// Parses a field that must be filled in.
///
/// # Errors
/// Returns `FieldError::Missing` for blank text, `FieldError::NotNumeric` for
/// text that is not an integer, and `FieldError::OutOfRange` for a value
/// outside the field's bounds.
pub fn parse_required(field: Field, text: &str) -> Result<i64, FieldError> {
    let value = parse_number(field, text)?.ok_or(FieldError::Missing(field))?;
    field.check(value)
}

/// Parses a field that may be left blank, in which case it reads as zero.
///
/// # Errors
/// Returns `FieldError::NotNumeric` for text that is not an integer and
/// `FieldError::OutOfRange` for a value outside the field's bounds.
pub fn parse_optional(field: Field, text: &str) -> Result<i64, FieldError> {
    field.check(parse_number(field, text)?.unwrap_or(0))
}

fn parse_number(field: Field, text: &str) -> Result<Option<i64>, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| FieldError::NotNumeric {
            field,
            value: trimmed.to_owned(),
        })
}

fn to_u8(field: Field, value: i64) -> Result<u8, FieldError> {
    let (min, max) = field.bounds();
    u8::try_from(value).map_err(|_| FieldError::OutOfRange {
        field,
        value,
        min,
        max,
    })
}

fn to_u16(field: Field, value: i64) -> Result<u16, FieldError> {
    let (min, max) = field.bounds();
    u16::try_from(value).map_err(|_| FieldError::OutOfRange {
        field,
        value,
        min,
        max,
    })
}

/// Year, month and day, all required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFields {
    pub year:  String,
    pub month: String,
    pub day:   String,
}

impl DateFields {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year:  year.into(),
            month: month.into(),
            day:   day.into(),
        }
    }

    /// Validates the fields into a midnight instant
    ///
    /// # Errors
    /// Returns the first `FieldError` found, checking year, month and day in
    /// that order, then the day against the month.
    pub fn parse(&self) -> Result<CalendarInstant, FieldError> {
        let year = to_u16(Field::Year, parse_required(Field::Year, &self.year)?)?;
        let month = to_u8(Field::Month, parse_required(Field::Month, &self.month)?)?;
        let day = to_u8(Field::Day, parse_required(Field::Day, &self.day)?)?;
        CalendarInstant::date(year, month, day)
    }
}

/// A required date with an optional time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeFields {
    pub year:   String,
    pub month:  String,
    pub day:    String,
    pub hour:   String,
    pub minute: String,
    pub second: String,
}

impl DateTimeFields {
    /// Date-only fields; the time of day stays blank
    pub fn date(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
            ..Self::default()
        }
    }

    /// Sets the time-of-day fields
    #[must_use]
    pub fn with_time(mut self, hour: impl Into<String>, minute: impl Into<String>, second: impl Into<String>) -> Self {
        self.hour = hour.into();
        self.minute = minute.into();
        self.second = second.into();
        self
    }

    /// Validates the fields; blank time fields read as zero
    ///
    /// # Errors
    /// Returns the first `FieldError` found, then the composite day check.
    pub fn parse(&self) -> Result<CalendarInstant, FieldError> {
        let year = to_u16(Field::Year, parse_required(Field::Year, &self.year)?)?;
        let month = to_u8(Field::Month, parse_required(Field::Month, &self.month)?)?;
        let day = to_u8(Field::Day, parse_required(Field::Day, &self.day)?)?;
        let hour = to_u8(Field::Hour, parse_optional(Field::Hour, &self.hour)?)?;
        let minute = to_u8(Field::Minute, parse_optional(Field::Minute, &self.minute)?)?;
        let second = to_u8(Field::Second, parse_optional(Field::Second, &self.second)?)?;
        CalendarInstant::new(year, month, day, hour, minute, second)
    }
}

/// Hour, minute and second of a time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFields {
    pub hour:   String,
    pub minute: String,
    pub second: String,
}

impl TimeFields {
    pub fn new(hour: impl Into<String>, minute: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            hour:   hour.into(),
            minute: minute.into(),
            second: second.into(),
        }
    }

    /// Validates the fields as a time of day; every field is required
    ///
    /// # Errors
    /// Returns the first `FieldError` found.
    pub fn time(&self) -> Result<TimeOfDay, FieldError> {
        let hour = to_u8(Field::Hour, parse_required(Field::Hour, &self.hour)?)?;
        let minute = to_u8(Field::Minute, parse_required(Field::Minute, &self.minute)?)?;
        let second = to_u8(Field::Second, parse_required(Field::Second, &self.second)?)?;
        TimeOfDay::new(hour, minute, second)
    }

    /// Validates the fields as an amount to add; blank fields read as zero
    ///
    /// # Errors
    /// Returns the first `FieldError` found.
    pub fn offset(&self) -> Result<TimeOffset, FieldError> {
        let hours = to_u8(Field::Hour, parse_optional(Field::Hour, &self.hour)?)?;
        let minutes = to_u8(Field::Minute, parse_optional(Field::Minute, &self.minute)?)?;
        let seconds = to_u8(Field::Second, parse_optional(Field::Second, &self.second)?)?;
        TimeOffset::new(hours, minutes, seconds)
    }
}
