/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Upper bound on any day field before month-specific validation
pub const MAX_DAY: u8 = 31;

/// Largest hour on a 24-hour clock
pub const MAX_HOUR: u8 = 23;
/// Largest minute value
pub const MAX_MINUTE: u8 = 59;
/// Largest second value
pub const MAX_SECOND: u8 = 59;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

pub const MONTHS_PER_YEAR: u32 = 12;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Zodiac cycle length in years
pub const ZODIAC_CYCLE: i32 = 12;
/// A year whose effective zodiac is the Rat (index 0)
pub const ZODIAC_EPOCH_YEAR: i32 = 4;
/// Default cutoff month for the zodiac year ("start of spring")
pub const ZODIAC_CUTOFF_MONTH: u8 = FEBRUARY;
/// Default cutoff day for the zodiac year ("start of spring")
pub const ZODIAC_CUTOFF_DAY: u8 = 4;

/// Korea Standard Time, UTC+09:00, in minutes
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Interval separator (ISO 8601 extended format)
pub const INTERVAL_SEPARATOR: char = '/';
