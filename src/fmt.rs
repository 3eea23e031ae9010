//! Korean renderings of calculator results

use chrono::Weekday;

use crate::{AgeReport, CalendarDelta, CalendarInstant, ElapsedTotals, HmsDelta, TimeOfDay, TimeOffset, Zodiac};

/// One-syllable weekday names, indexed from Sunday.
pub const WEEKDAY_KOREAN: &[&str] = &["일", "월", "화", "수", "목", "금", "토"];

/// Short Korean name of a weekday.
///
/// ```
/// use calendar_calc::fmt;
/// use chrono::Weekday;
///
/// assert_eq!("일", fmt::weekday(Weekday::Sun));
/// assert_eq!("토", fmt::weekday(Weekday::Sat));
/// ```
pub fn weekday(day: Weekday) -> &'static str {
    WEEKDAY_KOREAN[day.num_days_from_sunday() as usize]
}

/// `YYYY년 MM월 DD일(요)`
///
/// ```
/// use calendar_calc::{CalendarInstant, fmt};
///
/// let date = CalendarInstant::date(2024, 5, 1).unwrap();
/// assert_eq!("2024년 05월 01일(수)", fmt::date(&date));
/// ```
pub fn date(instant: &CalendarInstant) -> String {
    format!(
        "{:04}년 {:02}월 {:02}일({})",
        instant.year(),
        instant.month(),
        instant.day(),
        weekday(instant.weekday())
    )
}

/// `YYYY년 MM월 DD일 HH시 mm분 ss초(요)`
pub fn date_time(instant: &CalendarInstant) -> String {
    format!(
        "{:04}년 {:02}월 {:02}일 {:02}시 {:02}분 {:02}초({})",
        instant.year(),
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute(),
        instant.second(),
        weekday(instant.weekday())
    )
}

/// Years, months and days of a delta: `Y년 M개월 D일`
pub fn date_delta(delta: &CalendarDelta) -> String {
    format!("{}년 {}개월 {}일", delta.years, delta.months, delta.days)
}

/// Every component of a delta: `Y년 M개월 D일 H시 M분 S초`
pub fn full_delta(delta: &CalendarDelta) -> String {
    format!(
        "{} {}시 {}분 {}초",
        date_delta(delta),
        delta.hours,
        delta.minutes,
        delta.seconds
    )
}

/// `총 N일`
pub fn total_days(totals: &ElapsedTotals) -> String {
    format!("총 {}일", totals.days)
}

/// One line per unit, largest first.
pub fn totals(totals: &ElapsedTotals) -> [String; 4] {
    [
        total_days(totals),
        format!("총 {}시간", totals.hours),
        format!("총 {}분", totals.minutes),
        format!("총 {}초", totals.seconds),
    ]
}

/// 12-hour clock with a 오전/오후 prefix. Midnight and noon read as 12.
///
/// ```
/// use calendar_calc::{TimeOfDay, fmt};
///
/// let t = TimeOfDay::new(0, 5, 9).unwrap();
/// assert_eq!("오전 12시 05분 09초", fmt::time_12h(&t));
/// ```
pub fn time_12h(time: &TimeOfDay) -> String {
    format!(
        "{} {:02}시 {:02}분 {:02}초",
        time.meridiem().korean(),
        time.hour12(),
        time.minute(),
        time.second()
    )
}

/// `HH시 MM분 SS초`
pub fn hms(delta: &HmsDelta) -> String {
    format!("{:02}시 {:02}분 {:02}초", delta.hours, delta.minutes, delta.seconds)
}

/// An offset in the same shape as [`hms`]
pub fn offset(offset: &TimeOffset) -> String {
    format!(
        "{:02}시 {:02}분 {:02}초",
        offset.hours.get(),
        offset.minutes.get(),
        offset.seconds.get()
    )
}

/// Animal name with the 띠 suffix, e.g. `뱀띠`
pub fn zodiac(zodiac: Zodiac) -> String {
    format!("{}띠", zodiac.korean())
}

/// The three lines of the age calculator
pub fn age_report(report: &AgeReport) -> [String; 3] {
    [
        format!("나이 : {}세", report.traditional),
        format!("만 나이 : {}세", report.international),
        format!("띠 : {}", zodiac(report.zodiac)),
    ]
}
