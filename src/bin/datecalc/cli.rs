use std::path::PathBuf;

use calendar_calc::{CalendarInstant, TimeOfDay};
use clap::{Parser, Subcommand};

/// Date and time calculators.
///
/// Dates are written `YYYY-MM-DD`, optionally followed by `HH:MM[:SS]`.
/// Times of day are written `HH:MM[:SS]`.
#[derive(Debug, Parser)]
#[command(name = "datecalc", version, about = "Date, age, D-day and time-of-day calculators")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Years, months and days between two dates, plus the total day count
    DateDiff(DateDiffArgs),
    /// Full difference between two instants, plus totals in every unit
    AgeDiff(AgeDiffArgs),
    /// Counting age, international age and zodiac for a birth date
    Age(AgeArgs),
    /// D-day count between today and a target date
    #[command(name = "dday")]
    DDay(DDayArgs),
    /// Time of day after adding hours, minutes and seconds
    TimeAdd(TimeAddArgs),
    /// Difference between two times of day on the same day
    TimeDiff(TimeDiffArgs),
}

#[derive(Debug, clap::Args)]
pub struct DateDiffArgs {
    pub from: CalendarInstant,
    pub to:   CalendarInstant,
}

#[derive(Debug, clap::Args)]
pub struct AgeDiffArgs {
    pub from: CalendarInstant,
    pub to:   CalendarInstant,
}

#[derive(Debug, clap::Args)]
pub struct AgeArgs {
    /// Date of birth, with an optional time of birth
    pub birth: CalendarInstant,

    /// Reference instant instead of the current time
    #[arg(long)]
    pub now: Option<CalendarInstant>,
}

#[derive(Debug, clap::Args)]
pub struct DDayArgs {
    pub target: CalendarInstant,

    /// Count from the target up to today instead of from today forward
    #[arg(long)]
    pub until: bool,

    /// Count today as day one
    #[arg(long)]
    pub include_today: bool,

    /// Reference date instead of today
    #[arg(long)]
    pub today: Option<CalendarInstant>,
}

#[derive(Debug, clap::Args)]
pub struct TimeAddArgs {
    pub base: TimeOfDay,

    /// Hours to add (0-23, blank for 0)
    #[arg(long, default_value = "")]
    pub hours: String,

    /// Minutes to add (0-59, blank for 0)
    #[arg(long, default_value = "")]
    pub minutes: String,

    /// Seconds to add (0-59, blank for 0)
    #[arg(long, default_value = "")]
    pub seconds: String,
}

#[derive(Debug, clap::Args)]
pub struct TimeDiffArgs {
    pub base:   TimeOfDay,
    pub target: TimeOfDay,
}
