//! Loading the row arrays a list screen is built from.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::listing::{FieldValue, Record};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset must be a JSON array of objects")]
    NotAnArray,
    #[error("dataset row {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("dataset is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported dataset format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Parses a JSON array of row objects.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Record>, DatasetError> {
    let value: Value = serde_json::from_reader(reader)?;
    let Value::Array(rows) = value else {
        return Err(DatasetError::NotAnArray);
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Object(fields) => Ok(fields
                .into_iter()
                .map(|(key, value)| (key, FieldValue::from(value)))
                .collect()),
            _ => Err(DatasetError::NotAnObject { index }),
        })
        .collect()
}

/// Parses a CSV export with a header row. Empty cells are absent; every other
/// cell keeps its text, so ids like `00042` survive untouched.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Record>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), csv_cell(cell)))
            .collect();
        records.push(record);
    }

    Ok(records)
}

/// Loads a dataset file, choosing the parser by extension.
pub fn load_path(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !matches!(extension.as_str(), "json" | "csv") {
        return Err(DatasetError::UnsupportedFormat(extension));
    }

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    let records = if extension == "csv" {
        from_csv_reader(reader)?
    } else {
        from_json_reader(reader)?
    };

    debug!(path = %path.display(), rows = records.len(), "dataset loaded");
    Ok(records)
}

fn csv_cell(cell: &str) -> FieldValue {
    if cell.is_empty() {
        FieldValue::Null
    } else {
        FieldValue::Text(cell.to_string())
    }
}
