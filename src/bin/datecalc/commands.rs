//! One handler per subcommand. Each returns the lines to print.

use anyhow::{Context, Result};
use tracing::info;

use calendar_calc::input::TimeFields;
use calendar_calc::{
    AgeReport, CalcConfig, Clock, Direction, Interval, add_time_of_day, d_day, fmt, time_of_day_delta,
};

use crate::cli::{AgeArgs, AgeDiffArgs, DDayArgs, DateDiffArgs, TimeAddArgs, TimeDiffArgs};

pub fn date_diff(args: &DateDiffArgs) -> Result<Vec<String>> {
    let interval = Interval::new(args.from.start_of_day(), args.to.start_of_day());
    let delta = interval.delta().context("failed to compute date difference")?;
    info!(%interval, "date difference");

    Ok(vec![
        fmt::date(&interval.earlier()),
        fmt::date(&interval.later()),
        fmt::date_delta(&delta),
        format!("또는 {}", fmt::total_days(&interval.totals())),
    ])
}

pub fn age_diff(args: &AgeDiffArgs) -> Result<Vec<String>> {
    let interval = Interval::new(args.from, args.to);
    let delta = interval.delta().context("failed to compute difference")?;
    info!(%interval, "instant difference");

    let mut lines = vec![
        fmt::date_time(&interval.earlier()),
        fmt::date_time(&interval.later()),
        fmt::full_delta(&delta),
    ];
    lines.extend(fmt::totals(&interval.totals()));
    Ok(lines)
}

pub fn age(args: &AgeArgs, config: &CalcConfig, clock: &impl Clock) -> Result<Vec<String>> {
    let now = match args.now {
        Some(now) => now,
        None => clock.now().context("failed to read the current time")?,
    };
    let report = AgeReport::new(args.birth, now, config.zodiac_cutoff);
    info!(birth = %args.birth, %now, "age");

    let mut lines = vec![fmt::date_time(&args.birth)];
    lines.extend(fmt::age_report(&report));
    Ok(lines)
}

pub fn dday(args: &DDayArgs, clock: &impl Clock) -> Result<Vec<String>> {
    let today = match args.today {
        Some(today) => today.start_of_day(),
        None => clock.today().context("failed to read today's date")?,
    };
    let direction = if args.until {
        Direction::UntilToday
    } else {
        Direction::FromToday
    };
    let result = d_day(args.target, today, direction, args.include_today);
    info!(target = %args.target, %today, %direction, "d-day");

    Ok(vec![fmt::date(&today), fmt::date(&args.target), result.to_string()])
}

pub fn time_add(args: &TimeAddArgs) -> Result<Vec<String>> {
    let offset = TimeFields::new(args.hours.as_str(), args.minutes.as_str(), args.seconds.as_str())
        .offset()
        .context("invalid time to add")?;
    let result = add_time_of_day(
        args.base,
        offset.hours.get(),
        offset.minutes.get(),
        offset.seconds.get(),
    )?;

    Ok(vec![
        format!("기준 시간 : {} 에서", fmt::time_12h(&args.base)),
        format!("추가 시간 : {} 후", fmt::offset(&offset)),
        fmt::time_12h(&result),
    ])
}

pub fn time_diff(args: &TimeDiffArgs) -> Result<Vec<String>> {
    let (earlier, later) = if args.base > args.target {
        (args.target, args.base)
    } else {
        (args.base, args.target)
    };
    let delta = time_of_day_delta(earlier, later);

    Ok(vec![
        format!("기준 시간 : {} 에서", fmt::time_12h(&earlier)),
        format!("비교 시간 : {} 까지 차이는", fmt::time_12h(&later)),
        fmt::hms(&delta),
    ])
}
