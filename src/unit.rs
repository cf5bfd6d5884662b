//! Period units attached to field rules as identity tokens.

use crate::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A named unit of calendrical granularity.
///
/// Every unit is a process-wide singleton handed out as `&'static PeriodUnit`.
/// Equality and hashing go by id; ordering goes by estimated duration.
#[derive(Debug, Display)]
#[display(fmt = "{}", "id")]
pub struct PeriodUnit {
    id: &'static str,
    rank: u8,
}

pub static DAYS: PeriodUnit = PeriodUnit { id: "Days", rank: 0 };
pub static WEEKS: PeriodUnit = PeriodUnit { id: "Weeks", rank: 1 };
pub static MONTHS: PeriodUnit = PeriodUnit { id: "Months", rank: 2 };
pub static YEARS: PeriodUnit = PeriodUnit { id: "Years", rank: 3 };
pub static ERAS: PeriodUnit = PeriodUnit { id: "Eras", rank: 4 };

static UNITS: [&PeriodUnit; 5] = [&DAYS, &WEEKS, &MONTHS, &YEARS, &ERAS];

impl PeriodUnit {
    /// Looks up the canonical unit for an id.
    pub fn of(id: &str) -> Option<&'static Self> {
        UNITS.iter().copied().find(|unit| unit.id == id)
    }

    /// All units, shortest first
    pub fn all() -> &'static [&'static Self] {
        &UNITS
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }
}

impl PartialEq for PeriodUnit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PeriodUnit {}

impl Hash for PeriodUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for PeriodUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PeriodUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl Serialize for PeriodUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id)
    }
}

impl<'de> Deserialize<'de> for &'static PeriodUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        tracing::trace!(%id, "resolving period unit");
        PeriodUnit::of(&id)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown period unit: {id}")))
    }
}
