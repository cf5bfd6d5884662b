//! Field rules and era arithmetic for the Japanese imperial calendar.
//!
//! The calendar uses Gregorian months and days on a proleptic year count and
//! numbers years within imperial eras. Each calendrical field (era,
//! year-of-era, month, day-of-month, day-of-year, day-of-week) is described by
//! a singleton [`FieldRule`] that knows its absolute bounds and derives its
//! value, and its effective range, from a [`ChronologyDate`].
//!
//! ```
//! use japanese_chrono::{ChronologyDate, JapaneseChronology, JapaneseEra};
//!
//! let date = ChronologyDate::new(1989, 1, 8).unwrap();
//! assert_eq!(date.era().unwrap(), JapaneseEra::Heisei);
//!
//! let rule = JapaneseChronology::year_of_era_rule();
//! let year_of_era = rule.value_and_range(&date).unwrap();
//! assert_eq!(year_of_era.value(), 1);
//! assert_eq!(year_of_era.maximum(), 31);
//!
//! let feb = ChronologyDate::new(2011, 2, 1).unwrap();
//! let dom = JapaneseChronology::day_of_month_rule().value_and_range(&feb).unwrap();
//! assert_eq!(dom.maximum(), 28);
//! ```

mod chronology;
mod consts;
mod era;
mod error;
mod prelude;
mod rule;
mod types;
mod unit;

pub use chronology::JapaneseChronology;
pub use consts::*;
pub use era::{JapaneseEra, era_and_year_of_era, proleptic_year, year_of_era_span};
pub use error::CalendarError;
pub use rule::{FieldRule, FieldValue};
pub use types::{ChronologyDate, Day, Month, day_of_week, days_in_year, is_leap_year};
pub use unit::PeriodUnit;
