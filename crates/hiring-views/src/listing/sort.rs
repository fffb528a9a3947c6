use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::{FieldValue, Record};
use super::ListViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ListViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ListViewError::InvalidDirection(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// How values of a field are compared when the field is the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
}

enum SortKey {
    Missing,
    Text(String),
    Number(f64),
    Timestamp(i64),
}

impl SortKey {
    fn extract(record: &Record, field: &str, kind: FieldKind) -> Self {
        let Some(value) = record.get(field).filter(|value| !value.is_blank()) else {
            return SortKey::Missing;
        };

        match kind {
            FieldKind::Date => value
                .as_timestamp()
                .map(|dt| SortKey::Timestamp(dt.and_utc().timestamp_micros()))
                .unwrap_or(SortKey::Missing),
            FieldKind::Number => SortKey::Number(value.as_number()),
            FieldKind::Text => SortKey::Text(lowercase(value)),
        }
    }
}

fn lowercase(value: &FieldValue) -> String {
    value.to_string().to_lowercase()
}

/// Sorts `records` in place by `sort`. Records lacking the key always land
/// after those that have it, in either direction; ties keep input order.
pub(crate) fn sort_records(records: &mut [&Record], sort: &SortState, kind: FieldKind) {
    let mut keyed: Vec<(SortKey, &Record)> = records
        .iter()
        .map(|record| (SortKey::extract(record, &sort.field, kind), *record))
        .collect();

    // `sort_by` is stable.
    keyed.sort_by(|(left, _), (right, _)| compare_keys(left, right, sort.direction));

    for (slot, (_, record)) in records.iter_mut().zip(keyed) {
        *slot = record;
    }
}

fn compare_keys(left: &SortKey, right: &SortKey, direction: SortDirection) -> Ordering {
    let ordering = match (left, right) {
        (SortKey::Missing, SortKey::Missing) => return Ordering::Equal,
        (SortKey::Missing, _) => return Ordering::Greater,
        (_, SortKey::Missing) => return Ordering::Less,
        (SortKey::Timestamp(a), SortKey::Timestamp(b)) => a.cmp(b),
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        // Keys of one field always share a kind.
        _ => Ordering::Equal,
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
