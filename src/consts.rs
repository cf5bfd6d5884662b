/// Minimum supported proleptic year (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Maximum supported proleptic year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Smallest year-of-era value in any era
pub const MIN_YEAR_OF_ERA: i32 = 1;
/// Largest year-of-era value the calendar can ever report
pub const MAX_YEAR_OF_ERA: i32 = MAX_YEAR;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Months in every year of this calendar
pub const MONTHS_PER_YEAR: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Longest month length
pub const MAX_DAYS_IN_MONTH: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a non-leap year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

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

/// Days elapsed before the first of each month in a non-leap year
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;
/// Days from 0000-01-01 to 1970-01-01
pub(crate) const DAYS_0000_TO_1970: i64 = DAYS_PER_CYCLE * 5 - (30 * 365 + 7);

/// ISO day-of-week (Monday = 1) of 1970-01-01, a Thursday
pub const EPOCH_DAY_OF_WEEK: i64 = 4;

/// Era transition table: `(code, name, start year, start month, start day)`.
///
/// Rows are ordered by code and start date. The first row is the open-ended
/// era before the modern imperial eras; its start is the domain minimum and
/// its year-of-era equals the proleptic year.
#[rustfmt::skip]
pub(crate) const ERA_TABLE: [(i32, &str, i32, u8, u8); 6] = [
    (-3, "Seireki", MIN_YEAR, 1,  1),
    (-2, "Meiji",   1868,     1,  1),
    (-1, "Taisho",  1912,     7,  30),
    ( 0, "Showa",   1926,     12, 25),
    ( 1, "Heisei",  1989,     1,  8),
    ( 2, "Reiwa",   2019,     5,  1),
];

/// Name of the chronology
pub const CHRONOLOGY_NAME: &str = "Japanese";
