use serde::{Deserialize, Serialize};

use crate::{CalendarInstant, prelude::*};

/// Which way a D-day count runs relative to today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Counts from today forward: target minus today
    #[default]
    #[display(fmt = "from today")]
    FromToday,
    /// Counts up to today: today minus target
    #[display(fmt = "until today")]
    UntilToday,
}

/// Result of a D-day count, rendered as `D-<days>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "D-{days}")]
pub struct DDay {
    /// Day difference after direction and the "include today" shift
    pub signed: i64,
    /// Magnitude shown to the user
    pub days:   u64,
}

/// Counts days between `today` and `target`, both truncated to the start of
/// the day.
///
/// With `include_today` the start day counts as well, which moves the signed
/// difference one further away from zero.
pub fn d_day(target: CalendarInstant, today: CalendarInstant, direction: Direction, include_today: bool) -> DDay {
    let target_day = target.date_naive();
    let today_day = today.date_naive();
    let mut signed = match direction {
        Direction::FromToday => (target_day - today_day).num_days(),
        Direction::UntilToday => (today_day - target_day).num_days(),
    };
    if include_today {
        signed = if signed >= 0 { signed + 1 } else { signed - 1 };
    }

    let result = DDay {
        signed,
        days: signed.unsigned_abs(),
    };
    tracing::debug!(%target, %today, %direction, include_today, %result, "d-day count");
    result
}

/// The displayed D-day magnitude, see [`d_day`].
pub fn d_day_count(target: CalendarInstant, today: CalendarInstant, direction: Direction, include_today: bool) -> u64 {
    d_day(target, today, direction, include_today).days
}
