//! The 12-year animal cycle.
//!
//! A zodiac year starts at a fixed cutoff date (Feb 4 by default, standing in
//! for the "start of spring" solar term) rather than on Jan 1. The real solar
//! term drifts by about a day between years; the fixed date is an accepted
//! approximation.

use serde::{Deserialize, Serialize};

use crate::{CalendarInstant, FieldError, ZODIAC_CYCLE, ZODIAC_EPOCH_YEAR, ZodiacCutoff, prelude::*};

/// One of the twelve zodiac animals, in cycle order starting from the Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    /// Every animal in cycle order; index 0 is the Rat
    pub const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Position in the cycle, `0..12`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English label, e.g. "Snake"
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Korean animal name, e.g. "뱀"
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Rat => "쥐",
            Self::Ox => "소",
            Self::Tiger => "호랑이",
            Self::Rabbit => "토끼",
            Self::Dragon => "용",
            Self::Snake => "뱀",
            Self::Horse => "말",
            Self::Goat => "양",
            Self::Monkey => "원숭이",
            Self::Rooster => "닭",
            Self::Dog => "개",
            Self::Pig => "돼지",
        }
    }

    /// The animal of an effective zodiac year. Works for any year, including
    /// those before the epoch.
    pub fn for_effective_year(year: i32) -> Self {
        let index = (year - ZODIAC_EPOCH_YEAR).rem_euclid(ZODIAC_CYCLE);
        // rem_euclid keeps the index in 0..12
        Self::ALL[usize::try_from(index).unwrap_or(0)]
    }

    /// The animal for someone born at `birth`, with the year starting at `cutoff`.
    pub fn for_birth(birth: CalendarInstant, cutoff: ZodiacCutoff) -> Self {
        let year = effective_year(birth, cutoff);
        let zodiac = Self::for_effective_year(year);
        tracing::trace!(%birth, effective_year = year, %zodiac, "zodiac lookup");
        zodiac
    }
}

/// Zodiac year a birth date belongs to: the calendar year, or the one before
/// it when the date falls strictly before the cutoff.
pub fn effective_year(birth: CalendarInstant, cutoff: ZodiacCutoff) -> i32 {
    let year = i32::from(birth.year());
    if (birth.month(), birth.day()) < (cutoff.month(), cutoff.day()) {
        year - 1
    } else {
        year
    }
}

/// English label of the zodiac for a birth date, using the Feb 4 cutoff.
///
/// # Errors
/// Returns a `FieldError` if the date fields are invalid.
pub fn zodiac_label(year: u16, month: u8, day: u8) -> Result<&'static str, FieldError> {
    let birth = CalendarInstant::date(year, month, day)?;
    Ok(Zodiac::for_birth(birth, ZodiacCutoff::default()).label())
}
