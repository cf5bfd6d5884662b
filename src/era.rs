//! Imperial eras and the conversion between proleptic years and
//! `(era, year-of-era)`.
//!
//! An era begins at the first instant of its start date. The start date
//! itself is year 1 of the new era and the day before it is the final year of
//! the previous era. Year-of-era then advances on every 1 January, so the
//! first and last years of an era are usually partial calendar years.

use crate::consts::{ERA_TABLE, MAX_YEAR, MIN_YEAR_OF_ERA};
use crate::error::CalendarError;
use crate::types::ChronologyDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An era of the Japanese calendar.
///
/// `Seireki` is the open-ended era covering every supported date before
/// Meiji; its year-of-era equals the proleptic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum JapaneseEra {
    Seireki,
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

const ALL_ERAS: [JapaneseEra; 6] = [
    JapaneseEra::Seireki,
    JapaneseEra::Meiji,
    JapaneseEra::Taisho,
    JapaneseEra::Showa,
    JapaneseEra::Heisei,
    JapaneseEra::Reiwa,
];

impl JapaneseEra {
    /// All eras in chronological order
    pub const fn all() -> &'static [Self] {
        &ALL_ERAS
    }

    /// Looks up an era by its numeric code.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` for an unknown code.
    pub fn of(code: i32) -> Result<Self, CalendarError> {
        ALL_ERAS
            .iter()
            .copied()
            .find(|era| era.code() == code)
            .ok_or_else(|| {
                tracing::debug!(code, "unknown era code");
                CalendarError::invalid_value("Era", code)
            })
    }

    const fn row(self) -> (i32, &'static str, i32, u8, u8) {
        ERA_TABLE[self as usize]
    }

    /// Stable numeric code of the era
    pub const fn code(self) -> i32 {
        self.row().0
    }

    pub const fn name(self) -> &'static str {
        self.row().1
    }

    /// First day of the era as `(year, month, day)`
    pub const fn start(self) -> (i32, u8, u8) {
        let (_, _, year, month, day) = self.row();
        (year, month, day)
    }

    /// The era that follows this one, if any
    pub const fn next(self) -> Option<Self> {
        let idx = self as usize + 1;
        if idx < ALL_ERAS.len() {
            Some(ALL_ERAS[idx])
        } else {
            None
        }
    }

    /// Smallest era code
    pub const fn min_code() -> i32 {
        ERA_TABLE[0].0
    }

    /// Largest era code
    pub const fn max_code() -> i32 {
        ERA_TABLE[ERA_TABLE.len() - 1].0
    }
}

impl TryFrom<i32> for JapaneseEra {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<JapaneseEra> for i32 {
    fn from(era: JapaneseEra) -> Self {
        era.code()
    }
}

impl fmt::Display for JapaneseEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of year-of-era values the era covers.
///
/// Bounded eras run up to and including the year of the next era's start,
/// unless that start falls on 1 January. The last era runs to `MAX_YEAR`.
pub const fn year_of_era_span(era: JapaneseEra) -> i32 {
    let (start_year, _, _) = era.start();
    let last_year = match era.next() {
        Some(next) => {
            let (year, month, day) = next.start();
            if month == 1 && day == 1 { year - 1 } else { year }
        }
        None => MAX_YEAR,
    };
    last_year - start_year + 1
}

/// Finds the era containing `(year, month, day)` and the year-of-era within it.
///
/// # Errors
/// Returns `CalendarError::InvalidFieldValue` if the month or day is invalid
/// or the year is after `MAX_YEAR`, and `CalendarError::InvalidEraDate` if the
/// date lies before the first era's start.
pub fn era_and_year_of_era(
    year: i32,
    month: u8,
    day: u8,
) -> Result<(JapaneseEra, i32), CalendarError> {
    let date = ChronologyDate::new(year, month, day)?;
    era_of(&date)
}

/// Table scan behind [`era_and_year_of_era`] for an already validated date.
pub(crate) fn era_of(date: &ChronologyDate) -> Result<(JapaneseEra, i32), CalendarError> {
    let (year, month, day) = date.to_ymd();
    let era = ALL_ERAS
        .iter()
        .rev()
        .copied()
        .find(|era| era.start() <= (year, month, day))
        .ok_or_else(|| {
            tracing::debug!(%date, "date before supported range");
            CalendarError::InvalidEraDate { year, month, day }
        })?;

    let (start_year, _, _) = era.start();
    Ok((era, year - start_year + MIN_YEAR_OF_ERA))
}

/// Converts `(era code, year-of-era)` back to a proleptic year.
///
/// # Errors
/// Returns `CalendarError::InvalidFieldValue` for an unknown era code or a
/// year-of-era outside the era's span.
pub fn proleptic_year(era_code: i32, year_of_era: i32) -> Result<i32, CalendarError> {
    let era = JapaneseEra::of(era_code)?;
    if year_of_era < MIN_YEAR_OF_ERA || year_of_era > year_of_era_span(era) {
        tracing::debug!(%era, year_of_era, "year of era outside era span");
        return Err(CalendarError::invalid_value("YearOfEra", year_of_era));
    }
    let (start_year, _, _) = era.start();
    Ok(start_year + year_of_era - MIN_YEAR_OF_ERA)
}

impl ChronologyDate {
    /// Creates a date from era fields.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the year-of-era is
    /// outside the era, the month/day is invalid, or the resulting date falls
    /// outside the era (e.g. Heisei 1, January 1).
    pub fn from_era(
        era: JapaneseEra,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        let year = proleptic_year(era.code(), year_of_era)?;
        let date = Self::new(year, month, day)?;
        if date.era()? != era {
            tracing::debug!(%era, %date, "date does not belong to era");
            return Err(CalendarError::invalid_value("Era", era.code()));
        }
        Ok(date)
    }

    /// Era containing this date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEraDate` before the first era.
    pub fn era(&self) -> Result<JapaneseEra, CalendarError> {
        era_of(self).map(|(era, _)| era)
    }

    /// Year-of-era of this date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEraDate` before the first era.
    pub fn year_of_era(&self) -> Result<i32, CalendarError> {
        era_of(self).map(|(_, yoe)| yoe)
    }
}
