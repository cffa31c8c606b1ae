//! Core data model types for tabular intake.
//!
//! Every parser produces the same in-memory [`Table`] shape regardless of source format, so
//! downstream code never branches on where the data came from. A [`Table`] carries a bounded
//! row *sample* plus the true source row count; per-column statistics live in
//! [`ColumnProfile`] and table-level aggregates in [`DataSummary`].

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Maximum number of data rows retained as the table sample.
pub const SAMPLE_ROW_LIMIT: usize = 50;

/// Number of sampled rows inspected for type inference and null/uniqueness stats.
pub const PROFILE_ROW_LIMIT: usize = 10;

/// Number of sampled values kept per column for UI preview.
pub const PREVIEW_VALUE_LIMIT: usize = 5;

/// A single cell in a sampled row. `None` means the value was absent in the source.
pub type Cell = Option<String>;

/// One user-supplied file: name, declared media type, and raw content.
///
/// Text formats decode `content` lossily as UTF-8; the spreadsheet parser reads the raw bytes.
#[derive(Debug, Clone)]
pub struct FileInput {
    /// Original file name, including extension.
    pub name: String,
    /// Declared media type, if the selection surface provided one.
    pub media_type: Option<String>,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl FileInput {
    /// Create a new file input.
    pub fn new(name: impl Into<String>, media_type: Option<&str>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.map(str::to_owned),
            content,
        }
    }

    /// Content decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// Content size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Supported intake formats, derived once at classification and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileFormat {
    /// Comma-delimited text.
    Delimited,
    /// Spreadsheet workbook (first sheet only).
    Spreadsheet,
    /// Structured records (JSON array-of-objects or a single object).
    Record,
    /// Markup text. Parsed best-effort through the delimited parser; the tag marks the
    /// result as approximate rather than a true markup parse.
    Markup,
    /// No media type or extension matched. Not an error until a parser is requested.
    Unrecognized,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileFormat::Delimited => "delimited",
            FileFormat::Spreadsheet => "spreadsheet",
            FileFormat::Record => "record",
            FileFormat::Markup => "markup",
            FileFormat::Unrecognized => "unrecognized",
        };
        f.write_str(s)
    }
}

/// Lifecycle state of an [`UploadedFile`].
///
/// Transitions are `Uploading -> Parsing -> {Ready | Failed}`. `Ready` and `Failed` are
/// terminal; a retry is a brand-new record, never a resurrection of an old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileStatus {
    /// Accepted into the session, not yet parsed.
    Uploading,
    /// Parse in progress.
    Parsing,
    /// Parsed and profiled; `table` is present.
    Ready,
    /// Classification or parsing failed; `error` is present.
    Failed,
}

/// Inferred semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    /// Every non-empty inspected value parses as a number.
    Number,
    /// Every non-empty inspected value parses as a calendar date.
    Date,
    /// Every non-empty inspected value is literally `true`/`false` (record and
    /// spreadsheet sources only).
    Boolean,
    /// Fallback type.
    Text,
}

/// Per-column statistics computed over at most the first [`PROFILE_ROW_LIMIT`] sampled rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    /// The column's header string.
    pub name: String,
    /// Inferred type, see [`ColumnType`].
    pub column_type: ColumnType,
    /// First [`PREVIEW_VALUE_LIMIT`] sampled values verbatim, for UI preview.
    pub sample_values: Vec<Cell>,
    /// Count of null values among the inspected rows. A cell counts as null when it is
    /// absent, empty, or whitespace-only; the same predicate excludes a value from type
    /// inference and `unique_count`.
    pub null_count: usize,
    /// Cardinality of distinct non-null values among the inspected rows.
    pub unique_count: usize,
}

/// Aggregate over a [`Table`]'s columns, including heuristic column-role suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSummary {
    /// True source row count (not the sample size).
    pub row_count: usize,
    /// Header count.
    pub column_count: usize,
    /// Names of columns typed [`ColumnType::Date`], in column order.
    pub date_columns: Vec<String>,
    /// Names of columns typed [`ColumnType::Number`], in column order.
    pub numeric_columns: Vec<String>,
    /// First header whose lowercased name contains a timestamp keyword.
    pub suggested_timestamp_column: Option<String>,
    /// First header whose lowercased name contains a price keyword.
    pub suggested_price_column: Option<String>,
    /// First header whose lowercased name contains a volume keyword.
    pub suggested_volume_column: Option<String>,
}

/// Headers plus sampled rows, before profiling. Produced by the format parsers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Ordered column names. Duplicates are kept, not deduplicated.
    pub headers: Vec<String>,
    /// Row-major sampled cells, each row aligned positionally to `headers`.
    /// Capped at [`SAMPLE_ROW_LIMIT`] rows.
    pub rows: Vec<Vec<Cell>>,
    /// True number of data rows in the source, independent of the sampling cap.
    pub total_row_count: usize,
}

/// The uniform parsed representation of one file's content.
///
/// Owned exclusively by its [`UploadedFile`]; never shared or mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Ordered column names.
    pub headers: Vec<String>,
    /// Sampled rows, at most [`SAMPLE_ROW_LIMIT`].
    pub rows: Vec<Vec<Cell>>,
    /// True source row count.
    pub total_row_count: usize,
    /// One profile per header, same order.
    pub columns: Vec<ColumnProfile>,
    /// Derived aggregate.
    pub summary: DataSummary,
}

impl Table {
    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Look up a column profile by header name (first match on duplicate headers).
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// One user-supplied file and its processing state within a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedFile {
    /// Opaque generated id.
    pub id: String,
    /// Original file name.
    pub name: String,
    /// Byte size of the original content.
    pub size: usize,
    /// Classified format, immutable after creation.
    pub format: FileFormat,
    /// Lifecycle state.
    pub status: FileStatus,
    /// 0-100, monotonically non-decreasing.
    pub progress: u8,
    /// Present only when `status == Ready`.
    pub table: Option<Table>,
    /// Present only when `status == Failed`.
    pub error: Option<String>,
}

impl UploadedFile {
    /// Create a freshly queued record for `input` with the given classified format.
    pub(crate) fn queued(input: &FileInput, format: FileFormat) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name.clone(),
            size: input.size(),
            format,
            status: FileStatus::Uploading,
            progress: 0,
            table: None,
            error: None,
        }
    }

    /// Raise `progress` to `to` (clamped to 100). Progress never decreases.
    pub fn advance_progress(&mut self, to: u8) {
        let to = to.min(100);
        if to > self.progress {
            self.progress = to;
        }
    }

    /// True when the file parsed successfully.
    pub fn is_ready(&self) -> bool {
        self.status == FileStatus::Ready
    }
}
