//! Source of "now" for calculations measured against the current time.

use chrono::{FixedOffset, Offset, Utc};

use crate::{CalcError, CalendarInstant, DEFAULT_UTC_OFFSET_MINUTES};

/// Supplies the current wall-clock instant in the calculator's timezone.
pub trait Clock {
    /// # Errors
    /// Returns an error if the current time is outside the supported years.
    fn now(&self) -> Result<CalendarInstant, CalcError>;

    /// Today at 00:00:00
    ///
    /// # Errors
    /// Same as [`Clock::now`].
    fn today(&self) -> Result<CalendarInstant, CalcError> {
        Ok(self.now()?.start_of_day())
    }
}

/// Reads the system clock and shifts it into a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        let offset = FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix());
        Self::new(offset)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<CalendarInstant, CalcError> {
        let local = Utc::now().with_timezone(&self.offset).naive_local();
        Ok(CalendarInstant::try_from(local)?)
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarInstant);

impl Clock for FixedClock {
    fn now(&self) -> Result<CalendarInstant, CalcError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::instant;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(instant("2024-05-01 18:30:00"));
        assert_eq!(clock.now().unwrap(), instant("2024-05-01 18:30:00"));
        assert_eq!(clock.today().unwrap(), instant("2024-05-01 00:00:00"));
    }

    #[test]
    fn test_system_clock_default_offset() {
        let clock = SystemClock::default();
        assert_eq!(clock.offset().local_minus_utc(), 9 * 3_600);
        assert!(clock.now().is_ok());
    }
}
