//! Structured-record (JSON) parsing.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]` (each element is a record)
//! - Any single top-level JSON value, treated as one record

use crate::error::IntakeResult;
use crate::types::{Cell, RawTable, SAMPLE_ROW_LIMIT};

/// Parse a JSON document into a [`RawTable`].
///
/// Headers are the keys of the first record, in their original key order (or the empty
/// set when there are zero records or the first record is not an object). The sample is
/// the first [`SAMPLE_ROW_LIMIT`] records; `total_row_count` is the full record count.
pub fn parse_records(text: &str) -> IntakeResult<RawTable> {
    let value: serde_json::Value = serde_json::from_str(text.trim())?;

    let records: Vec<serde_json::Value> = match value {
        serde_json::Value::Array(items) => items,
        single => vec![single],
    };

    let headers: Vec<String> = records
        .first()
        .and_then(|r| r.as_object())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let total_row_count = records.len();
    let rows: Vec<Vec<Cell>> = records
        .iter()
        .take(SAMPLE_ROW_LIMIT)
        .map(|rec| {
            let obj = rec.as_object();
            headers
                .iter()
                .map(|h| obj.and_then(|o| o.get(h)).and_then(json_cell))
                .collect()
        })
        .collect();

    Ok(RawTable {
        headers,
        rows,
        total_row_count,
    })
}

fn json_cell(v: &serde_json::Value) -> Cell {
    match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        // Nested arrays/objects are kept as their compact JSON text.
        other => Some(other.to_string()),
    }
}
