//! Wall-clock arithmetic confined to a single 24-hour day.
//!
//! Adding to a time of day may wrap past midnight; only the resulting time
//! is kept, never the date it would have landed on.

use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, Hour, Minute, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, Second,
    TIME_SEPARATOR, prelude::*,
};

/// A time of day on a 24-hour clock, to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

impl Meridiem {
    /// The Korean label shown before a 12-hour time (오전 / 오후)
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Am => "오전",
            Self::Pm => "오후",
        }
    }
}

/// An amount of time to add to a time of day. Every part defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOffset {
    pub hours:   Hour,
    pub minutes: Minute,
    pub seconds: Second,
}

/// Elapsed time split into hours, minutes and seconds by plain division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HmsDelta {
    pub hours:   u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeOfDay {
    /// Creates a time of day, validating each component
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` for an hour above 23 or a minute or
    /// second above 59.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, FieldError> {
        Ok(Self::from_parts(Hour::new(hour)?, Minute::new(minute)?, Second::new(second)?))
    }

    /// Creates a time of day from validated components
    pub fn from_parts(hour: Hour, minute: Minute, second: Second) -> Self {
        let seconds = u32::from(hour.get()) * 3_600 + u32::from(minute.get()) * 60 + u32::from(second.get());
        Self::from_seconds_from_midnight(seconds)
    }

    /// Midnight, 00:00:00
    pub const fn midnight() -> Self {
        Self(NaiveTime::MIN)
    }

    fn from_seconds_from_midnight(seconds: u32) -> Self {
        let wrapped = seconds % day_seconds();
        Self(NaiveTime::from_num_seconds_from_midnight_opt(wrapped, 0).unwrap_or(NaiveTime::MIN))
    }

    pub fn hour(&self) -> u8 {
        narrow(self.0.hour())
    }

    pub fn minute(&self) -> u8 {
        narrow(self.0.minute())
    }

    pub fn second(&self) -> u8 {
        narrow(self.0.second())
    }

    /// Seconds elapsed since midnight, `0..86400`
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.0.hour() >= 12 { Meridiem::Pm } else { Meridiem::Am }
    }

    /// Hour on a 12-hour clock, where midnight and noon both read 12
    pub fn hour12(&self) -> u8 {
        match self.hour() % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Adds `offset`, wrapping past midnight
    pub fn add(self, offset: TimeOffset) -> Self {
        let (time, _wrapped_days) = self
            .0
            .overflowing_add_signed(TimeDelta::seconds(i64::from(offset.as_seconds())));
        Self(time)
    }

    /// Time elapsed going forward from `self` until the clock next reads `to`.
    /// Wraps past midnight when `to` is earlier in the day than `self`.
    pub fn forward_delta(self, to: Self) -> HmsDelta {
        let day = day_seconds();
        let elapsed = (to.seconds_from_midnight() + day - self.seconds_from_midnight()) % day;
        HmsDelta::from_seconds(elapsed)
    }

    /// The wrapped `chrono` value
    pub const fn naive(&self) -> NaiveTime {
        self.0
    }
}

fn day_seconds() -> u32 {
    u32::try_from(SECONDS_PER_DAY).unwrap_or(86_400)
}

fn narrow(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_seconds_from_midnight(time.num_seconds_from_midnight())
    }
}

impl TimeOffset {
    /// Creates an offset, validating each component like a time of day
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` for hours above 23 or minutes or
    /// seconds above 59.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, FieldError> {
        Ok(Self {
            hours:   Hour::new(hours)?,
            minutes: Minute::new(minutes)?,
            seconds: Second::new(seconds)?,
        })
    }

    pub fn as_seconds(&self) -> u32 {
        u32::from(self.hours.get()) * 3_600
            + u32::from(self.minutes.get()) * 60
            + u32::from(self.seconds.get())
    }
}

impl HmsDelta {
    /// Splits a second count into hours, minutes and seconds
    pub fn from_seconds(total: u32) -> Self {
        let total = u64::from(total);
        Self {
            hours:   narrow32(total / SECONDS_PER_HOUR),
            minutes: narrow32(total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE),
            seconds: narrow32(total % SECONDS_PER_MINUTE),
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

fn narrow32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Adds hours, minutes and seconds to a time of day, wrapping past midnight.
///
/// # Errors
/// Returns `FieldError::OutOfRange` if an offset component is out of range.
pub fn add_time_of_day(base: TimeOfDay, hours: u8, minutes: u8, seconds: u8) -> Result<TimeOfDay, FieldError> {
    let offset = TimeOffset::new(hours, minutes, seconds)?;
    let result = base.add(offset);
    tracing::debug!(%base, %result, offset = offset.as_seconds(), "time of day addition");
    Ok(result)
}

/// Absolute time between two times of day on the same nominal day.
pub fn time_of_day_delta(a: TimeOfDay, b: TimeOfDay) -> HmsDelta {
    let (earlier, later) = if a > b { (b, a) } else { (a, b) };
    let delta = HmsDelta::from_seconds(later.seconds_from_midnight() - earlier.seconds_from_midnight());
    tracing::debug!(%earlier, %later, ?delta, "time of day difference");
    delta
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::EmptyInput);
        }

        let parse = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| FieldError::InvalidFormat(trimmed.to_owned()))
        };
        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).collect();
        match parts.as_slice() {
            [h, m] => Self::new(parse(h)?, parse(m)?, 0),
            [h, m, s] => Self::new(parse(h)?, parse(m)?, parse(s)?),
            _ => Err(FieldError::InvalidFormat(format!(
                "Expected HH{TIME_SEPARATOR}MM[{TIME_SEPARATOR}SS], found {trimmed:?}"
            ))),
        }
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use crate::test_utils::time;

    fn hms(hours: u32, minutes: u32, seconds: u32) -> HmsDelta {
        HmsDelta {
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn test_new_validates() {
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
        assert!(matches!(
            TimeOfDay::new(24, 0, 0),
            Err(FieldError::OutOfRange { field: Field::Hour, .. })
        ));
        assert!(matches!(
            TimeOfDay::new(0, 60, 0),
            Err(FieldError::OutOfRange { field: Field::Minute, .. })
        ));
    }

    #[test]
    fn test_add_within_day() {
        let result = add_time_of_day(time(9, 30, 0), 2, 45, 30).unwrap();
        assert_eq!(result, time(12, 15, 30));
    }

    #[test]
    fn test_add_wraps_past_midnight() {
        let result = add_time_of_day(time(22, 0, 0), 3, 30, 0).unwrap();
        assert_eq!(result, time(1, 30, 0));
    }

    #[test]
    fn test_add_defaults_to_zero() {
        let base = time(7, 8, 9);
        assert_eq!(base.add(TimeOffset::default()), base);
    }

    #[test]
    fn test_add_rejects_out_of_range_offset() {
        assert!(matches!(
            add_time_of_day(time(0, 0, 0), 24, 0, 0),
            Err(FieldError::OutOfRange { field: Field::Hour, .. })
        ));
        assert!(matches!(
            add_time_of_day(time(0, 0, 0), 0, 0, 60),
            Err(FieldError::OutOfRange { field: Field::Second, .. })
        ));
    }

    #[test]
    fn test_delta_orders_operands() {
        let a = time(18, 0, 5);
        let b = time(9, 15, 0);
        assert_eq!(time_of_day_delta(a, b), hms(8, 45, 5));
        assert_eq!(time_of_day_delta(b, a), hms(8, 45, 5));
        assert_eq!(time_of_day_delta(a, a), HmsDelta::default());
    }

    #[test]
    fn test_forward_delta_wraps() {
        assert_eq!(time(22, 0, 0).forward_delta(time(1, 30, 0)), hms(3, 30, 0));
        assert_eq!(time(1, 30, 0).forward_delta(time(22, 0, 0)), hms(20, 30, 0));
    }

    #[test]
    fn test_meridiem_and_hour12() {
        struct TestCase {
            hour:     u8,
            meridiem: Meridiem,
            hour12:   u8,
        }

        let cases = [
            TestCase {
                hour:     0,
                meridiem: Meridiem::Am,
                hour12:   12,
            },
            TestCase {
                hour:     11,
                meridiem: Meridiem::Am,
                hour12:   11,
            },
            TestCase {
                hour:     12,
                meridiem: Meridiem::Pm,
                hour12:   12,
            },
            TestCase {
                hour:     23,
                meridiem: Meridiem::Pm,
                hour12:   11,
            },
        ];

        for case in &cases {
            let t = time(case.hour, 0, 0);
            assert_eq!(t.meridiem(), case.meridiem, "hour {}", case.hour);
            assert_eq!(t.hour12(), case.hour12, "hour {}", case.hour);
        }
        assert_eq!(Meridiem::Pm.korean(), "오후");
        assert_eq!(Meridiem::Am.to_string(), "AM");
    }

    #[test]
    fn test_hms_from_seconds() {
        assert_eq!(HmsDelta::from_seconds(3_661), hms(1, 1, 1));
        assert_eq!(hms(1, 1, 1).total_seconds(), 3_661);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("7:05".parse::<TimeOfDay>().unwrap(), time(7, 5, 0));
        assert_eq!("23:59:59".parse::<TimeOfDay>().unwrap().to_string(), "23:59:59");
        assert!(matches!("25:00".parse::<TimeOfDay>(), Err(FieldError::OutOfRange { .. })));
        assert!(matches!("noon".parse::<TimeOfDay>(), Err(FieldError::InvalidFormat(_))));
        assert_eq!("".parse::<TimeOfDay>(), Err(FieldError::EmptyInput));
    }

    #[test]
    fn test_serde() {
        let t = time(13, 4, 5);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#""13:04:05""#);
        assert_eq!(serde_json::from_str::<TimeOfDay>(&json).unwrap(), t);

        let offset: TimeOffset = serde_json::from_str(r#"{"minutes": 30}"#).unwrap();
        assert_eq!(offset, TimeOffset::new(0, 30, 0).unwrap());
    }
}
