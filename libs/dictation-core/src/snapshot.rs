//! Export and import of learning history.
//!
//! Snapshots are JSON arrays of records using the same camelCase field names
//! as the persisted history, so files exported by any revision can be loaded
//! back. CSV is export-only.

use crate::error::{DictationError, Result};
use crate::types::LearningRecord;
use chrono::SecondsFormat;
use std::collections::HashSet;
use std::str::FromStr;

/// CSV column order.
pub const CSV_HEADER: [&str; 5] = ["word", "correctCount", "skipCount", "lastAnswered", "sentence"];

/// Snapshot file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DictationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(DictationError::Validation(format!(
                "unknown export format: {other}"
            ))),
        }
    }
}

/// Serialize records in the requested format.
pub fn export(records: &[LearningRecord], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        ExportFormat::Csv => to_csv(records),
    }
}

/// Compact JSON used for the persisted history value.
pub(crate) fn to_json_compact(records: &[LearningRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

fn to_csv(records: &[LearningRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for record in records {
        let correct = record.correct_count.to_string();
        let skipped = record.skip_count.to_string();
        let last_answered = record
            .last_answered
            .to_rfc3339_opts(SecondsFormat::AutoSi, true);
        writer.write_record([
            record.word.as_str(),
            correct.as_str(),
            skipped.as_str(),
            last_answered.as_str(),
            record.sentence.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse and validate a JSON snapshot.
///
/// The top-level value must be an array, every element a well-formed record,
/// and each word may appear only once.
pub fn parse_json(data: &str) -> Result<Vec<LearningRecord>> {
    let value: serde_json::Value = serde_json::from_str(data)
        .map_err(|e| DictationError::Validation(format!("not valid JSON: {e}")))?;

    let serde_json::Value::Array(items) = value else {
        return Err(DictationError::Validation(
            "top-level value must be an array of records".to_string(),
        ));
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(items.len());

    for (idx, item) in items.into_iter().enumerate() {
        let record: LearningRecord = serde_json::from_value(item)
            .map_err(|e| DictationError::Validation(format!("record {idx}: {e}")))?;
        if !seen.insert(record.word.clone()) {
            return Err(DictationError::Validation(format!(
                "record {idx}: duplicate word {:?}",
                record.word
            )));
        }
        records.push(record);
    }

    Ok(records)
}
