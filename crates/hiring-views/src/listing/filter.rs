use serde::{Deserialize, Serialize};

use super::record::Record;

/// Sentinel filter value meaning "no constraint".
pub const ALL: &str = "all";

/// Predicate attached to a named filter control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    /// The selected value must equal the field's text form.
    FieldEquals { field: String },
    /// Each selectable value maps to its own condition. Values without a
    /// choice match nothing.
    Choices(Vec<FilterChoice>),
}

impl FilterRule {
    pub fn matches(&self, selected: &str, record: &Record) -> bool {
        if selected == ALL {
            return true;
        }

        match self {
            FilterRule::FieldEquals { field } => {
                record.text(field).is_some_and(|value| value == selected)
            }
            FilterRule::Choices(choices) => choices
                .iter()
                .find(|choice| choice.value == selected)
                .is_some_and(|choice| choice.condition.holds(record)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChoice {
    pub value: String,
    pub condition: Condition,
}

impl FilterChoice {
    pub fn new(value: impl Into<String>, condition: Condition) -> Self {
        Self {
            value: value.into(),
            condition,
        }
    }
}

/// Derived-bucket comparisons over a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Equals {
        field: String,
        value: String,
    },
    NotEquals {
        field: String,
        value: String,
    },
    /// Half-open `[min, max)`; absent or non-numeric values count as zero.
    NumberRange {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    Present {
        field: String,
    },
    Absent {
        field: String,
    },
    AllOf(Vec<Condition>),
    AnyOf(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn not_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::NotEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn number_range(field: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Condition::NumberRange {
            field: field.into(),
            min,
            max,
        }
    }

    pub fn holds(&self, record: &Record) -> bool {
        match self {
            Condition::Equals { field, value } => {
                record.text(field).is_some_and(|actual| &actual == value)
            }
            // A missing field differs from any concrete value.
            Condition::NotEquals { field, value } => {
                record.text(field).map_or(true, |actual| &actual != value)
            }
            Condition::NumberRange { field, min, max } => {
                let actual = record.get(field).map_or(0.0, |value| value.as_number());
                min.map_or(true, |min| actual >= min) && max.map_or(true, |max| actual < max)
            }
            Condition::Present { field } => {
                record.get(field).is_some_and(|value| !value.is_blank())
            }
            Condition::Absent { field } => record.get(field).map_or(true, |value| value.is_blank()),
            Condition::AllOf(conditions) => {
                conditions.iter().all(|condition| condition.holds(record))
            }
            Condition::AnyOf(conditions) => {
                conditions.iter().any(|condition| condition.holds(record))
            }
            Condition::Not(inner) => !inner.holds(record),
        }
    }
}
