use crate::consts::{
    CENTURY_CYCLE, DAYS_0000_TO_1970, DAYS_BEFORE_MONTH, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR,
    DAYS_IN_MONTH, DAYS_PER_WEEK, EPOCH_DAY_OF_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_DAYS_IN_MONTH, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::error::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero =
            NonZeroU8::new(value).ok_or_else(|| CalendarError::invalid_value("MonthOfYear", value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::invalid_value("MonthOfYear", value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day-of-month value in `1..=31`.
///
/// Only the context-free bounds are enforced here; [`ChronologyDate::new`]
/// checks the day against the length of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, CalendarError> {
        let non_zero =
            NonZeroU8::new(value).ok_or_else(|| CalendarError::invalid_value("DayOfMonth", value))?;

        if value > days_in_month(year, month.get()) {
            return Err(CalendarError::invalid_value("DayOfMonth", value));
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check the absolute bounds
        if value < MIN_DAY || value > MAX_DAYS_IN_MONTH {
            return Err(CalendarError::invalid_value("DayOfMonth", value));
        }
        let non_zero =
            NonZeroU8::new(value).ok_or_else(|| CalendarError::invalid_value("DayOfMonth", value))?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A date in the proleptic Gregorian calendar.
///
/// This is the input every field rule derives its value from. Month, day and
/// the upper year bound are validated on construction; dates before the first
/// era are rejected when an era is looked up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{}-{}", "year", "month", "day")]
#[serde(try_from = "(i32, u8, u8)", into = "(i32, u8, u8)")]
pub struct ChronologyDate {
    year: i32,
    month: Month,
    day: Day,
}

impl ChronologyDate {
    /// Creates a date from a proleptic year, month and day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the year is after
    /// `MAX_YEAR`, the month is not in `1..=12` or the day does not exist in
    /// that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year > MAX_YEAR {
            return Err(CalendarError::invalid_value("Year", year));
        }
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the proleptic year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month
    pub const fn length_of_month(&self) -> u8 {
        days_in_month(self.year, self.month.get())
    }

    /// Length of this date's year
    pub const fn length_of_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// One-based ordinal of this date within its year
    pub const fn day_of_year(&self) -> u16 {
        day_of_year(self.year, self.month.get(), self.day.get())
    }

    /// Days since 1970-01-01 (negative before it)
    pub const fn epoch_day(&self) -> i64 {
        epoch_day(self.year, self.month.get(), self.day.get())
    }

    /// ISO day of week, Monday = 1 through Sunday = 7
    pub const fn day_of_week(&self) -> u8 {
        day_of_week(self.epoch_day())
    }
}

impl TryFrom<(i32, u8, u8)> for ChronologyDate {
    type Error = CalendarError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChronologyDate> for (i32, u8, u8) {
    fn from(date: ChronologyDate) -> Self {
        date.to_ymd()
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// One-based ordinal of `(year, month, day)` within the year.
pub(crate) const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let mut doy = DAYS_BEFORE_MONTH[month as usize] + day as u16;
    if month > FEBRUARY && is_leap_year(year) {
        doy += 1;
    }
    doy
}

/// Days from 1970-01-01 to `(year, month, day)`.
pub(crate) const fn epoch_day(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let mut total = 365 * y;
    if y >= 0 {
        total += (y + 3) / 4 - (y + 99) / 100 + (y + 399) / 400;
    } else {
        total -= y / -4 - y / -100 + y / -400;
    }
    total += (367 * m - 362) / 12;
    total += day as i64 - 1;
    if m > 2 {
        total -= 1;
        if !is_leap_year(year) {
            total -= 1;
        }
    }
    total - DAYS_0000_TO_1970
}

/// ISO day of week for an epoch day, Monday = 1 through Sunday = 7.
pub const fn day_of_week(epoch_day: i64) -> u8 {
    ((epoch_day + EPOCH_DAY_OF_WEEK - 1).rem_euclid(DAYS_PER_WEEK) + 1) as u8
}
