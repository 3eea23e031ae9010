use chrono::Timelike;
use serde::Serialize;

use crate::{CalendarInstant, FEBRUARY, FEBRUARY_DAYS_LEAP, Zodiac, ZodiacCutoff, is_leap_year};

/// Ages and zodiac for one birth instant at one reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeReport {
    pub birth:         CalendarInstant,
    /// Counting age: the year of birth counts as one
    pub traditional:   i32,
    /// Full years lived, adjusted for whether this year's birthday has passed
    pub international: i32,
    pub zodiac:        Zodiac,
}

impl AgeReport {
    pub fn new(birth: CalendarInstant, now: CalendarInstant, cutoff: ZodiacCutoff) -> Self {
        let report = Self {
            birth,
            traditional: traditional_age(birth, now),
            international: international_age(birth, now),
            zodiac: Zodiac::for_birth(birth, cutoff),
        };
        tracing::debug!(%birth, %now, ?report, "age report");
        report
    }
}

/// Full years between `birth` and `now`: the difference in calendar years,
/// minus one while this year's birthday is still ahead of `now`.
///
/// The birthday keeps the time of birth. A Feb 29 birthday is clamped to
/// Feb 28 in non-leap years, the same way month arithmetic clamps days.
pub fn international_age(birth: CalendarInstant, now: CalendarInstant) -> i32 {
    let age = year_age(birth, now);
    let (month, day) = birthday_in_year(birth, now.year());
    let birthday = (month, day, birth.naive().num_seconds_from_midnight());
    let today = (now.month(), now.day(), now.naive().num_seconds_from_midnight());
    if today < birthday { age - 1 } else { age }
}

/// Counting age: the calendar-year difference plus one, with no birthday adjustment.
pub fn traditional_age(birth: CalendarInstant, now: CalendarInstant) -> i32 {
    year_age(birth, now) + 1
}

/// Plain calendar-year difference (연 나이).
pub fn year_age(birth: CalendarInstant, now: CalendarInstant) -> i32 {
    i32::from(now.year()) - i32::from(birth.year())
}

/// Month and day of the birthday re-anchored into `year`.
fn birthday_in_year(birth: CalendarInstant, year: u16) -> (u8, u8) {
    let leap_day = birth.month() == FEBRUARY && birth.day() == FEBRUARY_DAYS_LEAP;
    if leap_day && !is_leap_year(year) {
        (FEBRUARY, FEBRUARY_DAYS_LEAP - 1)
    } else {
        (birth.month(), birth.day())
    }
}
