//! Column profiling and role suggestion.
//!
//! The profiler inspects at most the first [`PROFILE_ROW_LIMIT`] sampled rows per column,
//! infers a [`ColumnType`] under a fixed precedence (number, then date, then boolean where
//! the source supports it, then text), and counts nulls and distinct values over the same
//! window. Role suggestion is purely name-driven: the first header containing a keyword
//! wins regardless of the column's inferred type.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::{
    Cell, ColumnProfile, ColumnType, DataSummary, RawTable, Table, PREVIEW_VALUE_LIMIT,
    PROFILE_ROW_LIMIT,
};

/// Keywords marking a likely timestamp column (case-insensitive substring match).
pub const TIMESTAMP_KEYWORDS: &[&str] = &["time", "date", "hour"];

/// Keywords marking a likely price column.
pub const PRICE_KEYWORDS: &[&str] = &["price", "mcp", "dam", "rtm"];

/// Keywords marking a likely volume column.
pub const VOLUME_KEYWORDS: &[&str] = &["volume", "quantity", "mw"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Profile a parsed [`RawTable`] into a finished [`Table`].
///
/// `detect_bool` enables the boolean predicate; only structured-record and spreadsheet
/// sources attempt boolean detection.
pub fn profile_table(raw: RawTable, detect_bool: bool) -> Table {
    let columns: Vec<ColumnProfile> = raw
        .headers
        .iter()
        .enumerate()
        .map(|(idx, name)| profile_column(name, idx, &raw.rows, detect_bool))
        .collect();

    let summary = summarize(&raw, &columns);

    Table {
        headers: raw.headers,
        rows: raw.rows,
        total_row_count: raw.total_row_count,
        columns,
        summary,
    }
}

fn profile_column(name: &str, idx: usize, rows: &[Vec<Cell>], detect_bool: bool) -> ColumnProfile {
    let inspected: Vec<Option<&str>> = rows
        .iter()
        .take(PROFILE_ROW_LIMIT)
        .map(|row| row.get(idx).and_then(|c| c.as_deref()))
        .collect();

    let non_null: Vec<&str> = inspected
        .iter()
        .filter_map(|c| c.filter(|s| !s.trim().is_empty()))
        .collect();

    let null_count = inspected.len() - non_null.len();
    let unique_count = non_null.iter().collect::<HashSet<_>>().len();

    let sample_values: Vec<Cell> = rows
        .iter()
        .take(PREVIEW_VALUE_LIMIT)
        .map(|row| row.get(idx).cloned().flatten())
        .collect();

    ColumnProfile {
        name: name.to_owned(),
        column_type: infer_type(&non_null, detect_bool),
        sample_values,
        null_count,
        unique_count,
    }
}

/// Fixed-precedence type inference over the non-null inspected values.
///
/// The first predicate holding over *all* values wins. With an empty value set every
/// predicate holds vacuously, so an all-blank column types as `Number`.
fn infer_type(values: &[&str], detect_bool: bool) -> ColumnType {
    if values.iter().all(|v| is_number(v)) {
        return ColumnType::Number;
    }
    if values.iter().all(|v| is_date(v)) {
        return ColumnType::Date;
    }
    if detect_bool && values.iter().all(|v| is_bool_literal(v)) {
        return ColumnType::Boolean;
    }
    ColumnType::Text
}

fn is_number(s: &str) -> bool {
    // f64::from_str accepts "NaN"/"inf"; those are sentinels in real exports, not numbers.
    s.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_date(s: &str) -> bool {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s).is_ok()
        || DATE_FORMATS
            .iter()
            .any(|f| NaiveDate::parse_from_str(s, f).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|f| NaiveDateTime::parse_from_str(s, f).is_ok())
}

fn is_bool_literal(s: &str) -> bool {
    matches!(s.trim(), "true" | "false")
}

fn summarize(raw: &RawTable, columns: &[ColumnProfile]) -> DataSummary {
    let names_of = |ty: ColumnType| -> Vec<String> {
        columns
            .iter()
            .filter(|c| c.column_type == ty)
            .map(|c| c.name.clone())
            .collect()
    };

    DataSummary {
        row_count: raw.total_row_count,
        column_count: raw.headers.len(),
        date_columns: names_of(ColumnType::Date),
        numeric_columns: names_of(ColumnType::Number),
        suggested_timestamp_column: suggest_role(&raw.headers, TIMESTAMP_KEYWORDS),
        suggested_price_column: suggest_role(&raw.headers, PRICE_KEYWORDS),
        suggested_volume_column: suggest_role(&raw.headers, VOLUME_KEYWORDS),
    }
}

/// First header (in column order) whose lowercased name contains any keyword.
fn suggest_role(headers: &[String], keywords: &[&str]) -> Option<String> {
    headers
        .iter()
        .find(|h| {
            let lower = h.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .cloned()
}
