//! `tabular-intake` is a small library for taking user-supplied tabular files (CSV, JSON,
//! spreadsheets, best-effort markup) into a uniform in-memory [`types::Table`] with an
//! inferred per-column schema.
//!
//! The pipeline is: classify the file by declared media type or extension
//! ([`classify::classify`]) → parse it into headers plus a bounded row sample
//! ([`parse::parse_table`]) → infer per-column types and null/uniqueness statistics and
//! suggest timestamp/price/volume columns by name ([`profile`]). A bounded
//! [`session::UploadSession`] drives the whole pipeline per file and tracks each file's
//! `uploading → parsing → {ready | failed}` lifecycle.
//!
//! ## What you can ingest
//!
//! **File formats (classified by media type, falling back to extension):**
//!
//! - **Delimited text**: `text/csv`, `application/csv`, `.csv`
//! - **Structured records**: `application/json`, `.json` (array-of-objects or one object)
//! - **Spreadsheets** (requires the Cargo feature `excel`, on by default):
//!   legacy and OOXML media types, `.xlsx`, `.xls`; first sheet only
//! - **Markup**: `text/xml`, `application/xml`, `.xml`, a labeled best-effort path that
//!   feeds the raw text through the delimited parser
//!
//! **Inferred column types:** number, calendar date, boolean (record/spreadsheet sources
//! only), text. The sample is capped at [`types::SAMPLE_ROW_LIMIT`] rows; the true source
//! row count is always reported separately.
//!
//! ## Quick example: a session accepting one CSV
//!
//! ```rust
//! use tabular_intake::{FileInput, SessionConfig, UploadSession};
//! use tabular_intake::types::ColumnType;
//!
//! let mut session = UploadSession::new(SessionConfig::default());
//! let ids = session.accept(vec![FileInput::new(
//!     "prices.csv",
//!     Some("text/csv"),
//!     b"date,price\n2024-01-01,42.5\n2024-01-02,40.1\n".to_vec(),
//! )]);
//!
//! let file = session.file(&ids[0]).unwrap();
//! let table = file.table.as_ref().unwrap();
//! assert_eq!(table.total_row_count, 2);
//! assert_eq!(table.column("price").unwrap().column_type, ColumnType::Number);
//! assert_eq!(table.summary.suggested_price_column.as_deref(), Some("price"));
//! ```
//!
//! ## Modules
//!
//! - [`session`]: the bounded upload session (accept/remove, ready-set publication)
//! - [`classify`]: media-type and extension classification
//! - [`parse`]: the parse dispatcher and format-specific parsers
//! - [`profile`]: column type inference and role suggestion
//! - [`types`]: the uniform table / profile / session-record data model
//! - [`observe`]: observer interface for session outcomes
//! - [`error`]: error types used across the pipeline

pub mod classify;
pub mod error;
pub mod observe;
pub mod parse;
pub mod profile;
pub mod session;
pub mod types;

pub use classify::classify;
pub use error::{IntakeError, IntakeResult};
pub use observe::{CompositeObserver, SessionObserver, StdErrObserver};
pub use parse::parse_table;
pub use session::{SessionConfig, UploadSession, DEFAULT_MAX_FILES};
pub use types::{FileFormat, FileInput, FileStatus, Table, UploadedFile};
