//! Shorthand constructors for tests.

use crate::{CalendarInstant, TimeOfDay};

/// Parses `YYYY-MM-DD[ HH:MM:SS]`, panicking on bad test input
pub fn instant(s: &str) -> CalendarInstant {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test instant {s:?}: {e}"))
}

/// Builds a midnight instant
pub fn date(year: u16, month: u8, day: u8) -> CalendarInstant {
    CalendarInstant::date(year, month, day)
        .unwrap_or_else(|e| panic!("bad test date {year}-{month}-{day}: {e}"))
}

/// Builds a time of day
pub fn time(hour: u8, minute: u8, second: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute, second)
        .unwrap_or_else(|e| panic!("bad test time {hour}:{minute}:{second}: {e}"))
}
