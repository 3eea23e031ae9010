use calendar_calc::{
    CalendarInstant, Direction, Interval, TimeOfDay, TimeOffset, TimeUnit, Zodiac, ZodiacCutoff, calendar_delta,
    d_day, international_age, time_of_day_delta, total_elapsed, traditional_age, year_age,
};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use proptest::prelude::*;

/// About two centuries of seconds, starting 1900-01-01.
const SPAN_SECONDS: i64 = 200 * 365 * 86_400;

fn instant_at(seconds: i64) -> CalendarInstant {
    let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    CalendarInstant::try_from(base + TimeDelta::seconds(seconds)).unwrap()
}

fn time_at(seconds: u32) -> TimeOfDay {
    TimeOfDay::from(NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap())
}

proptest! {
    /// Re-adding the delta to the earlier instant lands exactly on the later one.
    #[test]
    fn delta_reconstructs_later(a in 0..SPAN_SECONDS, b in 0..SPAN_SECONDS) {
        let interval = Interval::new(instant_at(a), instant_at(b));
        let delta = interval.delta().unwrap();
        prop_assert_eq!(delta.apply_to(interval.earlier()).unwrap(), interval.later());
        prop_assert!(delta.days < 31, "{:?}", delta);
        prop_assert!(delta.hours < 24 && delta.minutes < 60 && delta.seconds < 60);
    }

    /// Operand order never changes the result.
    #[test]
    fn delta_ignores_operand_order(a in 0..SPAN_SECONDS, b in 0..SPAN_SECONDS) {
        let (x, y) = (instant_at(a), instant_at(b));
        prop_assert_eq!(calendar_delta(x, y).unwrap(), calendar_delta(y, x).unwrap());
        prop_assert_eq!(
            total_elapsed(x, y, TimeUnit::Seconds),
            a.abs_diff(b)
        );
    }

    /// Totals are floor divisions of the same second count.
    #[test]
    fn totals_agree(a in 0..SPAN_SECONDS, b in 0..SPAN_SECONDS) {
        let (x, y) = (instant_at(a), instant_at(b));
        let seconds = total_elapsed(x, y, TimeUnit::Seconds);
        prop_assert_eq!(total_elapsed(x, y, TimeUnit::Days), seconds / 86_400);
        prop_assert_eq!(total_elapsed(x, y, TimeUnit::Hours), seconds / 3_600);
        prop_assert_eq!(total_elapsed(x, y, TimeUnit::Minutes), seconds / 60);
    }

    /// Counting age is one or two above international age; year age is zero or one above.
    #[test]
    fn age_relations(birth in 0..SPAN_SECONDS, lived in 0..(100 * 365 * 86_400_i64)) {
        let birth = instant_at(birth);
        let now = instant_at(birth_offset(birth) + lived);
        let international = international_age(birth, now);
        let traditional = traditional_age(birth, now);
        prop_assert!(international >= 0);
        prop_assert!(international <= traditional);
        prop_assert!((1..=2).contains(&(traditional - international)));
        prop_assert!((0..=1).contains(&(year_age(birth, now) - international)));
    }

    /// Birthdays are re-anchored with the same day clamp as month arithmetic,
    /// so full years lived match the whole years of the calendar delta.
    #[test]
    fn international_age_matches_delta_years(birth in 0..SPAN_SECONDS, lived in 0..(100 * 365 * 86_400_i64)) {
        let birth = instant_at(birth);
        let now = instant_at(birth_offset(birth) + lived);
        let delta = calendar_delta(birth, now).unwrap();
        prop_assert_eq!(i64::from(international_age(birth, now)), i64::from(delta.years));
    }

    #[test]
    fn zodiac_repeats_every_twelve_years(year in -5000_i32..5000) {
        prop_assert_eq!(Zodiac::for_effective_year(year), Zodiac::for_effective_year(year + 12));
        prop_assert_ne!(Zodiac::for_effective_year(year), Zodiac::for_effective_year(year + 1));
    }

    #[test]
    fn d_day_on_target_day(day in 0..SPAN_SECONDS / 86_400, clock in 0..86_400_i64) {
        let today = instant_at(day * 86_400 + clock);
        for direction in [Direction::FromToday, Direction::UntilToday] {
            prop_assert_eq!(d_day(today, today, direction, false).days, 0);
            prop_assert_eq!(d_day(today, today, direction, true).days, 1);
        }
    }

    /// Swapping direction flips the sign; including today adds one to the magnitude.
    #[test]
    fn d_day_directions(a in 0..SPAN_SECONDS, b in 0..SPAN_SECONDS) {
        let (target, today) = (instant_at(a), instant_at(b));
        let forward = d_day(target, today, Direction::FromToday, false);
        let backward = d_day(target, today, Direction::UntilToday, false);
        prop_assert_eq!(forward.signed, -backward.signed);
        prop_assert_eq!(d_day(target, today, Direction::FromToday, true).days, forward.days + 1);
    }

    /// Going forward from `t` to `t + offset` takes exactly `offset`.
    #[test]
    fn time_addition_round_trips(
        start in 0..86_400_u32,
        hours in 0..24_u8,
        minutes in 0..60_u8,
        seconds in 0..60_u8,
    ) {
        let start = time_at(start);
        let offset = TimeOffset::new(hours, minutes, seconds).unwrap();
        let delta = start.forward_delta(start.add(offset));
        prop_assert_eq!(delta.total_seconds(), offset.as_seconds());
    }

    #[test]
    fn time_difference_is_symmetric(a in 0..86_400_u32, b in 0..86_400_u32) {
        let (x, y) = (time_at(a), time_at(b));
        let delta = time_of_day_delta(x, y);
        prop_assert_eq!(delta, time_of_day_delta(y, x));
        prop_assert_eq!(delta.total_seconds(), a.abs_diff(b));
        prop_assert!(delta.minutes < 60 && delta.seconds < 60);
    }
}

fn birth_offset(birth: CalendarInstant) -> i64 {
    let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    (birth.naive() - base).num_seconds()
}

#[test]
fn test_whole_year_scenario() {
    let delta = calendar_delta(
        "2000-01-01".parse().unwrap(),
        "2001-02-03".parse().unwrap(),
    )
    .unwrap();
    assert_eq!(
        (delta.years, delta.months, delta.days, delta.hours, delta.minutes, delta.seconds),
        (1, 1, 2, 0, 0, 0)
    );
}

#[test]
fn test_zodiac_scenario() {
    let birth: CalendarInstant = "1990-02-03".parse().unwrap();
    assert_eq!(Zodiac::for_birth(birth, ZodiacCutoff::default()), Zodiac::Snake);
    assert_eq!(calendar_calc::zodiac_label(1990, 2, 3).unwrap(), "Snake");
}

#[test]
fn test_dday_scenario() {
    let today: CalendarInstant = "2024-05-01".parse().unwrap();
    assert_eq!(d_day(today, today, Direction::FromToday, true).to_string(), "D-1");
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let birth: CalendarInstant = "2000-02-29".parse().unwrap();
    let now: CalendarInstant = "2023-02-28 12:00:00".parse().unwrap();
    assert_eq!(international_age(birth, now), 23);
    assert_eq!(calendar_delta(birth, now).unwrap().years, 23);
}

#[test]
fn test_feb_29_anchor_can_leave_twelve_months() {
    // Years advance from Feb 29 to Feb 28, and months are then counted from the clamped day
    let delta = calendar_delta(
        "2000-02-29".parse().unwrap(),
        "2004-02-28 12:00:00".parse().unwrap(),
    )
    .unwrap();
    assert_eq!((delta.years, delta.months, delta.days, delta.hours), (3, 12, 0, 12));
}
