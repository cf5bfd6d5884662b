//! Error type shared by the era arithmetic and the field rules.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A raw field value, or an (era, year-of-era) pair, lies outside any valid span.
    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue {
        /// Name of the offending field, e.g. `YearOfEra`.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The date precedes the earliest date the calendar supports.
    #[error("Date {year:04}-{month:02}-{day:02} is outside the supported calendar range")]
    InvalidEraDate { year: i32, month: u8, day: u8 },

    /// A derived value broke its own rule's bounds. Signals a bug upstream
    /// of the rule, not bad user input.
    #[error("Derived value {value} for {rule} is outside {min}..={max}")]
    ValueOutOfRange {
        rule: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl CalendarError {
    pub(crate) fn invalid_value(field: &'static str, value: impl Into<i64>) -> Self {
        Self::InvalidFieldValue {
            field,
            value: value.into(),
        }
    }
}
