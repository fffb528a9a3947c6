use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single cell of a list row as supplied by the page payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Null,
}

impl FieldValue {
    /// Absent for ordering purposes: null or empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Number(number) => Some(format_number(*number)),
            FieldValue::Null => None,
        }
    }

    /// Numeric view used by sorting and range filters. Present values that do
    /// not parse count as zero.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(number) if number.is_finite() => *number,
            FieldValue::Number(_) => 0.0,
            FieldValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .unwrap_or(0.0),
            FieldValue::Null => 0.0,
        }
    }

    /// Numbers are read as milliseconds since the Unix epoch.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Text(text) => parse_timestamp(text),
            FieldValue::Number(millis) if millis.is_finite() => {
                DateTime::from_timestamp_millis(millis.trunc() as i64).map(|dt| dt.naive_utc())
            }
            FieldValue::Number(_) | FieldValue::Null => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => f.write_str(&format_number(*number)),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::String(text) => FieldValue::Text(text),
            Value::Number(number) => number
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::Text(number.to_string())),
            Value::Bool(flag) => FieldValue::Text(flag.to_string()),
            nested @ (Value::Array(_) | Value::Object(_)) => FieldValue::Text(nested.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(FieldValue::from)
    }
}

/// One row of a list view. Records are never mutated by the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns the value of `field` unless it is missing or null.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .get(field)
            .filter(|value| !matches!(value, FieldValue::Null))
    }

    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Record identifier used when building detail links.
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_mixed_json_rows() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "full_name": "Amy Lee",
            "total_years_experience": null,
            "remote": true,
            "skills": ["rust", "sql"],
        }))
        .expect("row deserializes");

        assert_eq!(record.id().as_deref(), Some("7"));
        assert_eq!(record.text("full_name").as_deref(), Some("Amy Lee"));
        assert!(record.get("total_years_experience").is_none());
        assert_eq!(record.text("remote").as_deref(), Some("true"));
        assert_eq!(record.text("skills").as_deref(), Some(r#"["rust","sql"]"#));
    }

    #[test]
    fn zero_is_present_but_empty_text_is_blank() {
        assert!(!FieldValue::Number(0.0).is_blank());
        assert!(FieldValue::Text(String::new()).is_blank());
        assert!(!FieldValue::Text("  ".to_string()).is_blank());
        assert!(FieldValue::Null.is_blank());
    }

    #[test]
    fn numbers_are_epoch_millis_timestamps() {
        let parsed = FieldValue::Number(1_735_812_000_000.0).as_timestamp();
        assert_eq!(parsed, parse_timestamp("2025-01-02T10:00:00Z"));
        assert!(FieldValue::Number(f64::NAN).as_timestamp().is_none());
    }

    #[test]
    fn non_numeric_text_counts_as_zero() {
        assert_eq!(FieldValue::from("n/a").as_number(), 0.0);
        assert_eq!(FieldValue::from(" 4.5 ").as_number(), 4.5);
    }

    #[test]
    fn parses_common_timestamp_shapes() {
        assert!(parse_timestamp("2025-01-02T10:00:00Z").is_some());
        assert!(parse_timestamp("2025-01-02T10:00:00.123456").is_some());
        assert!(parse_timestamp("2025-01-02").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
