//! Field rules: immutable descriptors for each calendrical field, plus the
//! derivation of a field's value and effective range from a date.

use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, FEBRUARY, MAX_DAYS_IN_MONTH, MAX_YEAR_OF_ERA,
    MIN_DAY, MIN_YEAR_OF_ERA, MONTHS_PER_YEAR,
};
use crate::era::{JapaneseEra, era_of, year_of_era_span};
use crate::error::CalendarError;
use crate::prelude::*;
use crate::types::ChronologyDate;
use crate::unit::{DAYS, ERAS, MONTHS, PeriodUnit, WEEKS, YEARS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Selects the derivation a rule performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Era,
    YearOfEra,
    MonthOfYear,
    DayOfMonth,
    DayOfYear,
    DayOfWeek,
}

/// Descriptor of one calendrical field.
///
/// Rules exist only as the `static` singletons in this module and are handed
/// out as `&'static FieldRule`. They cannot be cloned or built elsewhere, and
/// deserializing one yields the same reference, so pointer identity and
/// id equality always agree.
#[derive(Debug, Display)]
#[display(fmt = "{}", "id")]
pub struct FieldRule {
    id: &'static str,
    name: &'static str,
    minimum: i32,
    maximum: i32,
    largest_minimum: i32,
    smallest_maximum: i32,
    period_unit: &'static PeriodUnit,
    period_range: Option<&'static PeriodUnit>,
    kind: FieldKind,
}

/// A field value derived from a date together with the field's effective
/// range at that date.
///
/// The value always lies inside `minimum..=maximum`, including when read
/// back through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFieldValue")]
pub struct FieldValue {
    value: i32,
    minimum: i32,
    maximum: i32,
}

#[derive(Deserialize)]
struct RawFieldValue {
    value: i32,
    minimum: i32,
    maximum: i32,
}

impl TryFrom<RawFieldValue> for FieldValue {
    type Error = CalendarError;

    fn try_from(raw: RawFieldValue) -> Result<Self, Self::Error> {
        if raw.value < raw.minimum || raw.value > raw.maximum {
            return Err(CalendarError::invalid_value("FieldValue", raw.value));
        }
        Ok(Self {
            value: raw.value,
            minimum: raw.minimum,
            maximum: raw.maximum,
        })
    }
}

impl FieldValue {
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Effective minimum in this context
    pub const fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Effective maximum in this context
    pub const fn maximum(&self) -> i32 {
        self.maximum
    }

    pub const fn range(&self) -> RangeInclusive<i32> {
        self.minimum..=self.maximum
    }
}

pub static ERA_RULE: FieldRule = FieldRule {
    id: "Japanese.Era",
    name: "Era",
    minimum: JapaneseEra::min_code(),
    maximum: JapaneseEra::max_code(),
    largest_minimum: JapaneseEra::min_code(),
    smallest_maximum: JapaneseEra::max_code(),
    period_unit: &ERAS,
    period_range: None,
    kind: FieldKind::Era,
};

// Reported at the calendar-wide bounds; the per-era cap shows up in the
// effective range returned by `value_and_range`.
pub static YEAR_OF_ERA_RULE: FieldRule = FieldRule {
    id: "Japanese.YearOfEra",
    name: "YearOfEra",
    minimum: MIN_YEAR_OF_ERA,
    maximum: MAX_YEAR_OF_ERA,
    largest_minimum: MIN_YEAR_OF_ERA,
    smallest_maximum: MAX_YEAR_OF_ERA,
    period_unit: &YEARS,
    period_range: Some(&ERAS),
    kind: FieldKind::YearOfEra,
};

pub static MONTH_OF_YEAR_RULE: FieldRule = FieldRule {
    id: "Japanese.MonthOfYear",
    name: "MonthOfYear",
    minimum: 1,
    maximum: MONTHS_PER_YEAR,
    largest_minimum: 1,
    smallest_maximum: MONTHS_PER_YEAR,
    period_unit: &MONTHS,
    period_range: Some(&YEARS),
    kind: FieldKind::MonthOfYear,
};

pub static DAY_OF_MONTH_RULE: FieldRule = FieldRule {
    id: "Japanese.DayOfMonth",
    name: "DayOfMonth",
    minimum: MIN_DAY as i32,
    maximum: MAX_DAYS_IN_MONTH as i32,
    largest_minimum: MIN_DAY as i32,
    // February in a common year
    smallest_maximum: DAYS_IN_MONTH[FEBRUARY as usize] as i32,
    period_unit: &DAYS,
    period_range: Some(&MONTHS),
    kind: FieldKind::DayOfMonth,
};

pub static DAY_OF_YEAR_RULE: FieldRule = FieldRule {
    id: "Japanese.DayOfYear",
    name: "DayOfYear",
    minimum: 1,
    maximum: DAYS_IN_LEAP_YEAR as i32,
    largest_minimum: 1,
    smallest_maximum: DAYS_IN_COMMON_YEAR as i32,
    period_unit: &DAYS,
    period_range: Some(&YEARS),
    kind: FieldKind::DayOfYear,
};

pub static DAY_OF_WEEK_RULE: FieldRule = FieldRule {
    id: "Japanese.DayOfWeek",
    name: "DayOfWeek",
    minimum: 1,
    maximum: 7,
    largest_minimum: 1,
    smallest_maximum: 7,
    period_unit: &DAYS,
    period_range: Some(&WEEKS),
    kind: FieldKind::DayOfWeek,
};

static RULES: [&FieldRule; 6] = [
    &ERA_RULE,
    &YEAR_OF_ERA_RULE,
    &MONTH_OF_YEAR_RULE,
    &DAY_OF_MONTH_RULE,
    &DAY_OF_YEAR_RULE,
    &DAY_OF_WEEK_RULE,
];

impl FieldRule {
    /// Looks up a rule by its full id, e.g. `Japanese.DayOfWeek`.
    pub fn of(id: &str) -> Option<&'static Self> {
        RULES.iter().copied().find(|rule| rule.id == id)
    }

    /// Looks up a rule by its plain name, e.g. `DayOfWeek`.
    pub fn by_name(name: &str) -> Option<&'static Self> {
        RULES.iter().copied().find(|rule| rule.name == name)
    }

    /// All rules, from era down to day-of-week
    pub fn all() -> &'static [&'static Self] {
        &RULES
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Smallest value the field can take in any context
    pub const fn minimum_value(&self) -> i32 {
        self.minimum
    }

    /// Largest value the field can take in any context
    pub const fn maximum_value(&self) -> i32 {
        self.maximum
    }

    /// Greatest value that is the effective minimum in some context
    pub const fn largest_minimum_value(&self) -> i32 {
        self.largest_minimum
    }

    /// Smallest value that is the effective maximum in some context
    pub const fn smallest_maximum_value(&self) -> i32 {
        self.smallest_maximum
    }

    /// True when the valid range never depends on context
    pub const fn is_fixed_value_set(&self) -> bool {
        self.minimum == self.largest_minimum && self.maximum == self.smallest_maximum
    }

    pub const fn period_unit(&self) -> &'static PeriodUnit {
        self.period_unit
    }

    /// Unit over which the field cycles; `None` for the era field
    pub const fn period_range(&self) -> Option<&'static PeriodUnit> {
        self.period_range
    }

    pub const fn is_valid_value(&self, value: i32) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    /// Checks a raw value against the field's absolute range.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFieldValue` if the value is out of range.
    pub fn check_value(&self, value: i32) -> Result<i32, CalendarError> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            tracing::debug!(rule = self.id, value, "value outside field range");
            Err(CalendarError::invalid_value(self.name, value))
        }
    }

    /// Derives this field's value from `date`.
    ///
    /// # Errors
    /// Same as [`FieldRule::value_and_range`].
    pub fn value(&self, date: &ChronologyDate) -> Result<i32, CalendarError> {
        self.value_and_range(date).map(|derived| derived.value)
    }

    /// Derives this field's value and its effective range at `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEraDate` if `date` is before the first
    /// era, or `CalendarError::ValueOutOfRange` if the derived
    /// value breaks the rule's bounds.
    pub fn value_and_range(&self, date: &ChronologyDate) -> Result<FieldValue, CalendarError> {
        let (era, year_of_era) = era_of(date)?;

        let (value, minimum, maximum) = match self.kind {
            FieldKind::Era => (era.code(), self.minimum, self.maximum),
            FieldKind::YearOfEra => (year_of_era, MIN_YEAR_OF_ERA, year_of_era_span(era)),
            FieldKind::MonthOfYear => (i32::from(date.month()), self.minimum, self.maximum),
            FieldKind::DayOfMonth => (
                i32::from(date.day()),
                self.minimum,
                i32::from(date.length_of_month()),
            ),
            FieldKind::DayOfYear => (
                i32::from(date.day_of_year()),
                self.minimum,
                i32::from(date.length_of_year()),
            ),
            FieldKind::DayOfWeek => (i32::from(date.day_of_week()), self.minimum, self.maximum),
        };

        self.bounded(value, minimum, maximum)
    }

    fn bounded(&self, value: i32, minimum: i32, maximum: i32) -> Result<FieldValue, CalendarError> {
        if !self.is_valid_value(value) || value < minimum || value > maximum {
            tracing::error!(rule = self.id, value, minimum, maximum, "derived value out of range");
            return Err(CalendarError::ValueOutOfRange {
                rule: self.id,
                value,
                min: minimum.max(self.minimum),
                max: maximum.min(self.maximum),
            });
        }
        Ok(FieldValue {
            value,
            minimum,
            maximum,
        })
    }
}

impl PartialEq for FieldRule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FieldRule {}

impl Hash for FieldRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Serialize for FieldRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id)
    }
}

impl<'de> Deserialize<'de> for &'static FieldRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        tracing::trace!(%id, "resolving field rule");
        FieldRule::of(&id).ok_or_else(|| serde::de::Error::custom(format!("Unknown field rule: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u8, day: u8) -> ChronologyDate {
        ChronologyDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_rule_metadata() {
        struct TestCase {
            rule: &'static FieldRule,
            id: &'static str,
            name: &'static str,
            min: i32,
            largest_min: i32,
            max: i32,
            smallest_max: i32,
            fixed: bool,
            unit: &'static PeriodUnit,
            range: Option<&'static PeriodUnit>,
        }

        let cases = [
            TestCase {
                rule: &ERA_RULE,
                id: "Japanese.Era",
                name: "Era",
                min: -3,
                largest_min: -3,
                max: 2,
                smallest_max: 2,
                fixed: true,
                unit: &ERAS,
                range: None,
            },
            TestCase {
                rule: &YEAR_OF_ERA_RULE,
                id: "Japanese.YearOfEra",
                name: "YearOfEra",
                min: MIN_YEAR_OF_ERA,
                largest_min: MIN_YEAR_OF_ERA,
                max: MAX_YEAR_OF_ERA,
                smallest_max: MAX_YEAR_OF_ERA,
                fixed: true,
                unit: &YEARS,
                range: Some(&ERAS),
            },
            TestCase {
                rule: &MONTH_OF_YEAR_RULE,
                id: "Japanese.MonthOfYear",
                name: "MonthOfYear",
                min: 1,
                largest_min: 1,
                max: 12,
                smallest_max: 12,
                fixed: true,
                unit: &MONTHS,
                range: Some(&YEARS),
            },
            TestCase {
                rule: &DAY_OF_MONTH_RULE,
                id: "Japanese.DayOfMonth",
                name: "DayOfMonth",
                min: 1,
                largest_min: 1,
                max: 31,
                smallest_max: 28,
                fixed: false,
                unit: &DAYS,
                range: Some(&MONTHS),
            },
            TestCase {
                rule: &DAY_OF_YEAR_RULE,
                id: "Japanese.DayOfYear",
                name: "DayOfYear",
                min: 1,
                largest_min: 1,
                max: 366,
                smallest_max: 365,
                fixed: false,
                unit: &DAYS,
                range: Some(&YEARS),
            },
            TestCase {
                rule: &DAY_OF_WEEK_RULE,
                id: "Japanese.DayOfWeek",
                name: "DayOfWeek",
                min: 1,
                largest_min: 1,
                max: 7,
                smallest_max: 7,
                fixed: true,
                unit: &DAYS,
                range: Some(&WEEKS),
            },
        ];

        for case in &cases {
            let rule = case.rule;
            assert_eq!(rule.id(), case.id);
            assert_eq!(rule.name(), case.name, "{}", case.id);
            assert_eq!(rule.minimum_value(), case.min, "{}", case.id);
            assert_eq!(rule.largest_minimum_value(), case.largest_min, "{}", case.id);
            assert_eq!(rule.maximum_value(), case.max, "{}", case.id);
            assert_eq!(rule.smallest_maximum_value(), case.smallest_max, "{}", case.id);
            assert_eq!(rule.is_fixed_value_set(), case.fixed, "{}", case.id);
            assert_eq!(rule.period_unit(), case.unit, "{}", case.id);
            assert_eq!(rule.period_range(), case.range, "{}", case.id);
        }
    }

    #[test]
    fn test_fixed_value_sets_are_consistent() {
        for rule in FieldRule::all() {
            if rule.is_fixed_value_set() {
                assert_eq!(rule.minimum_value(), rule.largest_minimum_value(), "{rule}");
                assert_eq!(rule.maximum_value(), rule.smallest_maximum_value(), "{rule}");
            } else {
                assert!(rule.smallest_maximum_value() < rule.maximum_value(), "{rule}");
            }
        }
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        for rule in FieldRule::all() {
            assert!(std::ptr::eq(FieldRule::of(rule.id()).unwrap(), *rule));
            assert!(std::ptr::eq(FieldRule::by_name(rule.name()).unwrap(), *rule));
        }
        assert!(FieldRule::of("ISO.DayOfWeek").is_none());
        assert!(FieldRule::by_name("HourOfDay").is_none());
    }

    #[test]
    fn test_serde_resolves_to_singleton() {
        for rule in FieldRule::all() {
            let json = serde_json::to_string(rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule.id()));

            let parsed: &'static FieldRule = serde_json::from_str(&json).unwrap();
            assert!(std::ptr::eq(parsed, *rule), "{rule} should round-trip to itself");
        }

        let result: Result<&'static FieldRule, _> = serde_json::from_str(r#""Japanese.Hour""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_of_month_february() {
        let common = DAY_OF_MONTH_RULE.value_and_range(&date(2011, 2, 14)).unwrap();
        assert_eq!(common.value(), 14);
        assert_eq!(common.maximum(), 28);
        assert_eq!(common.minimum(), 1);

        let leap = DAY_OF_MONTH_RULE.value_and_range(&date(2012, 2, 14)).unwrap();
        assert_eq!(leap.maximum(), 29);
        assert_eq!(leap.range(), 1..=29);

        let april = DAY_OF_MONTH_RULE.value_and_range(&date(2012, 4, 30)).unwrap();
        assert_eq!((april.value(), april.maximum()), (30, 30));
    }

    #[test]
    fn test_day_of_year() {
        let common = DAY_OF_YEAR_RULE.value_and_range(&date(2011, 12, 31)).unwrap();
        assert_eq!((common.value(), common.maximum()), (365, 365));

        let leap = DAY_OF_YEAR_RULE.value_and_range(&date(2012, 12, 31)).unwrap();
        assert_eq!((leap.value(), leap.maximum()), (366, 366));

        assert_eq!(DAY_OF_YEAR_RULE.value(&date(2012, 3, 1)).unwrap(), 61);
    }

    #[test]
    fn test_era_and_year_of_era_values() {
        let d = date(1989, 1, 8);
        assert_eq!(ERA_RULE.value(&d).unwrap(), JapaneseEra::Heisei.code());
        let yoe = YEAR_OF_ERA_RULE.value_and_range(&d).unwrap();
        assert_eq!(yoe.value(), 1);
        assert_eq!(yoe.range(), 1..=31);

        let d = date(1989, 1, 7);
        assert_eq!(ERA_RULE.value(&d).unwrap(), JapaneseEra::Showa.code());
        let yoe = YEAR_OF_ERA_RULE.value_and_range(&d).unwrap();
        assert_eq!((yoe.value(), yoe.maximum()), (64, 64));

        let era = ERA_RULE.value_and_range(&date(2024, 1, 1)).unwrap();
        assert_eq!(era.value(), 2);
        assert_eq!(era.range(), -3..=2);

        let reiwa = YEAR_OF_ERA_RULE.value_and_range(&date(2024, 1, 1)).unwrap();
        assert_eq!(reiwa.value(), 6);
        assert_eq!(reiwa.maximum(), year_of_era_span(JapaneseEra::Reiwa));
    }

    #[test]
    fn test_month_and_day_of_week_values() {
        let d = date(2000, 1, 1);
        assert_eq!(MONTH_OF_YEAR_RULE.value(&d).unwrap(), 1);
        let dow = DAY_OF_WEEK_RULE.value_and_range(&d).unwrap();
        assert_eq!(dow.value(), 6); // Saturday
        assert_eq!(dow.range(), 1..=7);
    }

    #[test]
    fn test_derivation_outside_supported_range() {
        let d = date(0, 6, 1);
        for rule in FieldRule::all() {
            assert!(
                matches!(rule.value(&d), Err(CalendarError::InvalidEraDate { year: 0, .. })),
                "{rule} should reject year 0"
            );
        }
    }

    #[test]
    fn test_check_value() {
        assert_eq!(MONTH_OF_YEAR_RULE.check_value(12), Ok(12));
        assert_eq!(
            MONTH_OF_YEAR_RULE.check_value(13),
            Err(CalendarError::InvalidFieldValue {
                field: "MonthOfYear",
                value: 13
            })
        );
        assert!(ERA_RULE.is_valid_value(-3));
        assert!(!ERA_RULE.is_valid_value(3));
        assert!(DAY_OF_MONTH_RULE.is_valid_value(31));
        assert!(!DAY_OF_WEEK_RULE.is_valid_value(0));
    }

    #[test]
    fn test_field_value_serde_checks_range() {
        let derived = DAY_OF_MONTH_RULE.value_and_range(&date(2012, 2, 29)).unwrap();
        let json = serde_json::to_string(&derived).unwrap();
        assert_eq!(json, r#"{"value":29,"minimum":1,"maximum":29}"#);

        let parsed: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, derived);

        for bad in [
            r#"{"value":30,"minimum":1,"maximum":29}"#,
            r#"{"value":0,"minimum":1,"maximum":7}"#,
        ] {
            let result: Result<FieldValue, _> = serde_json::from_str(bad);
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_bounded_rejects_contract_violation() {
        let result = DAY_OF_MONTH_RULE.bounded(30, 1, 28);
        assert_eq!(
            result,
            Err(CalendarError::ValueOutOfRange {
                rule: "Japanese.DayOfMonth",
                value: 30,
                min: 1,
                max: 28
            })
        );
        assert!(DAY_OF_WEEK_RULE.bounded(8, 1, 7).is_err());
        assert!(DAY_OF_WEEK_RULE.bounded(7, 1, 7).is_ok());
    }

    proptest! {
        #[test]
        fn prop_day_of_week_has_period_seven(epoch in -700_000i64..2_900_000) {
            let a = crate::types::day_of_week(epoch);
            let b = crate::types::day_of_week(epoch + 7);
            prop_assert_eq!(a, b);
            prop_assert!((1..=7).contains(&a));
            prop_assert_eq!(crate::types::day_of_week(epoch + 1), a % 7 + 1);
        }

        #[test]
        fn prop_effective_range_contains_value(y in 1..=9999i32, m in 1u8..=12, d in 1u8..=31) {
            prop_assume!(d <= crate::types::days_in_month(y, m));
            let date = ChronologyDate::new(y, m, d).unwrap();
            for rule in FieldRule::all() {
                let derived = rule.value_and_range(&date).unwrap();
                prop_assert!(derived.range().contains(&derived.value()));
                prop_assert!(derived.minimum() >= rule.minimum_value());
                prop_assert!(derived.maximum() <= rule.maximum_value());
                if !rule.is_fixed_value_set() {
                    prop_assert!(derived.maximum() >= rule.smallest_maximum_value());
                }
            }
        }
    }
}
