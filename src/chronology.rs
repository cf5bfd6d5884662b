//! The Japanese chronology façade.

use crate::consts::CHRONOLOGY_NAME;
use crate::era::JapaneseEra;
use crate::error::CalendarError;
use crate::prelude::*;
use crate::rule::{
    DAY_OF_MONTH_RULE, DAY_OF_WEEK_RULE, DAY_OF_YEAR_RULE, ERA_RULE, FieldRule, FieldValue,
    MONTH_OF_YEAR_RULE, YEAR_OF_ERA_RULE,
};
use crate::types::ChronologyDate;
use crate::unit::{DAYS, ERAS, MONTHS, PeriodUnit, WEEKS, YEARS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The Japanese imperial calendar: Gregorian months and days with
/// era-based year numbering.
///
/// There is exactly one instance, reached through
/// [`JapaneseChronology::instance`].
#[derive(Debug, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", "name")]
pub struct JapaneseChronology {
    name: &'static str,
}

static INSTANCE: JapaneseChronology = JapaneseChronology {
    name: CHRONOLOGY_NAME,
};

impl JapaneseChronology {
    pub fn instance() -> &'static Self {
        &INSTANCE
    }

    /// Returns `"Japanese"`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn era_rule() -> &'static FieldRule {
        &ERA_RULE
    }

    pub fn year_of_era_rule() -> &'static FieldRule {
        &YEAR_OF_ERA_RULE
    }

    pub fn month_of_year_rule() -> &'static FieldRule {
        &MONTH_OF_YEAR_RULE
    }

    pub fn day_of_month_rule() -> &'static FieldRule {
        &DAY_OF_MONTH_RULE
    }

    pub fn day_of_year_rule() -> &'static FieldRule {
        &DAY_OF_YEAR_RULE
    }

    pub fn day_of_week_rule() -> &'static FieldRule {
        &DAY_OF_WEEK_RULE
    }

    pub fn period_eras() -> &'static PeriodUnit {
        &ERAS
    }

    pub fn period_years() -> &'static PeriodUnit {
        &YEARS
    }

    pub fn period_months() -> &'static PeriodUnit {
        &MONTHS
    }

    pub fn period_weeks() -> &'static PeriodUnit {
        &WEEKS
    }

    pub fn period_days() -> &'static PeriodUnit {
        &DAYS
    }

    /// Eras of this calendar in chronological order
    pub fn eras() -> &'static [JapaneseEra] {
        JapaneseEra::all()
    }

    /// Every field rule of this calendar
    pub fn rules() -> &'static [&'static FieldRule] {
        FieldRule::all()
    }

    /// Looks up a rule by id (`Japanese.Era`) or plain name (`Era`).
    pub fn rule(key: &str) -> Option<&'static FieldRule> {
        Self::rule_by_id(key).or_else(|| Self::rule_by_name(key))
    }

    pub fn rule_by_id(id: &str) -> Option<&'static FieldRule> {
        FieldRule::of(id)
    }

    pub fn rule_by_name(name: &str) -> Option<&'static FieldRule> {
        FieldRule::by_name(name)
    }

    pub fn period_unit(id: &str) -> Option<&'static PeriodUnit> {
        PeriodUnit::of(id)
    }

    /// Derives every field of `date` in rule order.
    ///
    /// # Errors
    /// Fails with the first error any rule reports.
    pub fn fields(
        date: &ChronologyDate,
    ) -> Result<Vec<(&'static FieldRule, FieldValue)>, CalendarError> {
        Self::rules()
            .iter()
            .map(|rule| rule.value_and_range(date).map(|value| (*rule, value)))
            .collect()
    }
}

impl Serialize for JapaneseChronology {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for &'static JapaneseChronology {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        tracing::trace!(%name, "resolving chronology");
        if name == INSTANCE.name {
            Ok(&INSTANCE)
        } else {
            Err(serde::de::Error::custom(format!("Unknown chronology: {name}")))
        }
    }
}
