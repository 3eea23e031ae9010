use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
    CalcError, CalendarInstant, FieldError, INTERVAL_SEPARATOR, MONTHS_PER_YEAR, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE, prelude::*,
};

/// A span between two instants, always stored earlier-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{earlier}/{later}")]
pub struct Interval {
    earlier: CalendarInstant,
    later:   CalendarInstant,
}

/// Calendar-aware breakdown of an interval, largest unit first.
///
/// Produced greedily: whole years are taken off the earlier instant first,
/// then whole months from what is left, then days, hours, minutes and
/// seconds. Re-adding the components in that order reconstructs the later
/// instant exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDelta {
    pub years:   u32,
    pub months:  u32,
    pub days:    u32,
    pub hours:   u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Units a total elapsed count can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
}

impl TimeUnit {
    /// Length of one unit in seconds
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Days => SECONDS_PER_DAY,
            Self::Hours => SECONDS_PER_HOUR,
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Seconds => 1,
        }
    }
}

/// Total elapsed time of an interval in every unit at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElapsedTotals {
    pub days:    u64,
    pub hours:   u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Interval {
    /// Creates an interval, swapping the operands if they arrive in reverse order.
    pub fn new(a: CalendarInstant, b: CalendarInstant) -> Self {
        if a > b {
            Self { earlier: b, later: a }
        } else {
            Self { earlier: a, later: b }
        }
    }

    /// Returns the earlier end of the interval
    pub const fn earlier(&self) -> CalendarInstant {
        self.earlier
    }

    /// Returns the later end of the interval
    pub const fn later(&self) -> CalendarInstant {
        self.later
    }

    /// Returns both ends as a tuple
    pub const fn instants(&self) -> (CalendarInstant, CalendarInstant) {
        (self.earlier, self.later)
    }

    /// True when both ends are the same instant
    pub fn is_empty(&self) -> bool {
        self.earlier == self.later
    }

    /// Checks if the interval contains a given instant (both ends inclusive)
    pub fn contains(&self, instant: &CalendarInstant) -> bool {
        self.earlier <= *instant && *instant <= self.later
    }

    /// Breaks the interval down into years, months, days, hours, minutes and seconds.
    ///
    /// # Errors
    /// Returns `CalcError::Overflow` if month arithmetic leaves chrono's range.
    pub fn delta(&self) -> Result<CalendarDelta, CalcError> {
        let from = self.earlier.naive();
        let to = self.later.naive();

        let years = whole_months_between(from, to)? / MONTHS_PER_YEAR;
        let after_years = add_months(from, years * MONTHS_PER_YEAR)?;

        let months = whole_months_between(after_years, to)?;
        let after_months = add_months(after_years, months)?;

        let rest = seconds_between(after_months, to);
        let delta = CalendarDelta {
            years,
            months,
            days: narrow(rest / SECONDS_PER_DAY),
            hours: narrow(rest % SECONDS_PER_DAY / SECONDS_PER_HOUR),
            minutes: narrow(rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE),
            seconds: narrow(rest % SECONDS_PER_MINUTE),
        };

        tracing::debug!(interval = %self, ?delta, "calendar delta");
        Ok(delta)
    }

    /// Total elapsed time in `unit`, rounded down
    pub fn total(&self, unit: TimeUnit) -> u64 {
        self.total_seconds() / unit.seconds()
    }

    /// Total elapsed time in every unit
    pub fn totals(&self) -> ElapsedTotals {
        let seconds = self.total_seconds();
        ElapsedTotals {
            days: seconds / SECONDS_PER_DAY,
            hours: seconds / SECONDS_PER_HOUR,
            minutes: seconds / SECONDS_PER_MINUTE,
            seconds,
        }
    }

    fn total_seconds(&self) -> u64 {
        seconds_between(self.earlier.naive(), self.later.naive())
    }
}

impl CalendarDelta {
    /// True when every component is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Re-adds the components to `start` in the order they were taken off:
    /// years, months, days, hours, minutes, seconds.
    ///
    /// # Errors
    /// Returns `CalcError::Overflow` if the result leaves the supported range.
    pub fn apply_to(&self, start: CalendarInstant) -> Result<CalendarInstant, CalcError> {
        let after_years = add_months(start.naive(), self.years * MONTHS_PER_YEAR)?;
        let after_months = add_months(after_years, self.months)?;
        let rest = chrono::TimeDelta::days(i64::from(self.days))
            + chrono::TimeDelta::hours(i64::from(self.hours))
            + chrono::TimeDelta::minutes(i64::from(self.minutes))
            + chrono::TimeDelta::seconds(i64::from(self.seconds));
        let end = after_months
            .checked_add_signed(rest)
            .ok_or_else(|| CalcError::Overflow(format!("{after_months} + {self:?}")))?;
        Ok(CalendarInstant::try_from(end)?)
    }
}

/// Breaks the span between two instants down, largest unit first.
/// The operands may be given in either order.
///
/// # Errors
/// Returns `CalcError::Overflow` if month arithmetic leaves chrono's range.
pub fn calendar_delta(earlier: CalendarInstant, later: CalendarInstant) -> Result<CalendarDelta, CalcError> {
    Interval::new(earlier, later).delta()
}

/// Straight difference between two instants in `unit`, never negative.
pub fn total_elapsed(earlier: CalendarInstant, later: CalendarInstant, unit: TimeUnit) -> u64 {
    Interval::new(earlier, later).total(unit)
}

// --- helpers for month arithmetic ---

/// Adds whole months, clamping the day to the length of the target month.
fn add_months(from: NaiveDateTime, months: u32) -> Result<NaiveDateTime, CalcError> {
    from.checked_add_months(Months::new(months))
        .ok_or_else(|| CalcError::Overflow(format!("{from} + {months} months")))
}

/// Largest `n` such that `from + n months <= to`. Requires `from <= to`.
fn whole_months_between(from: NaiveDateTime, to: NaiveDateTime) -> Result<u32, CalcError> {
    let span = (to.year() - from.year()) * 12 + to.month0() as i32 - from.month0() as i32;
    let estimate = u32::try_from(span).unwrap_or(0);
    if estimate == 0 {
        return Ok(0);
    }
    // Landing in `to`'s month may still overshoot on the day or time
    if add_months(from, estimate)? > to {
        Ok(estimate - 1)
    } else {
        Ok(estimate)
    }
}

fn seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> u64 {
    (to - from).num_seconds().unsigned_abs()
}

/// Day counts are bounded by the 1..=9999 year range, far below `u32::MAX`.
fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl FromStr for Interval {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(INTERVAL_SEPARATOR).count();

        match separator_count {
            0 => Err(FieldError::InvalidFormat(format!(
                "No interval separator found (expected '{INTERVAL_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(INTERVAL_SEPARATOR).ok_or_else(|| {
                    FieldError::InvalidFormat(format!(
                        "Separator '{INTERVAL_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let a = start.trim().parse::<CalendarInstant>()?;
                let b = end.trim().parse::<CalendarInstant>()?;
                Ok(Self::new(a, b))
            },
            _ => Err(FieldError::InvalidFormat(format!(
                "Too many '{INTERVAL_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
