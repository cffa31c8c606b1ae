//! Format parsers and the parse dispatcher.
//!
//! Each parser converts raw content into a [`crate::types::RawTable`] (headers plus a
//! bounded row sample); [`parse_table`] dispatches on the classified [`FileFormat`] and
//! runs the column profiler over the result, so every format ends in the same
//! [`crate::types::Table`] shape.
//!
//! Format-specific functions are also available under:
//! - [`delimited`]
//! - [`record`]
//! - [`sheet`] (feature-gated behind `excel`)

pub mod delimited;
pub mod record;
#[cfg(feature = "excel")]
pub mod sheet;

use crate::error::{IntakeError, IntakeResult};
use crate::profile;
use crate::types::{FileFormat, FileInput, Table};

/// Parse `input` according to `format` and profile the result.
///
/// - `Delimited` and `Markup` both go through the delimited parser; `Markup` is the
///   labeled best-effort path and produces meaningless columns for real markup.
/// - Boolean column detection is attempted only for `Record` and `Spreadsheet` sources.
/// - `Unrecognized` fails with [`IntakeError::UnsupportedFormat`].
///
/// Parsing is a pure function of the content: the same input always yields the same table.
pub fn parse_table(input: &FileInput, format: FileFormat) -> IntakeResult<Table> {
    let raw = match format {
        FileFormat::Delimited | FileFormat::Markup => delimited::parse_delimited(&input.text())?,
        FileFormat::Record => record::parse_records(&input.text())?,
        FileFormat::Spreadsheet => parse_sheet_dispatch(input)?,
        FileFormat::Unrecognized => {
            return Err(IntakeError::UnsupportedFormat {
                name: input.name.clone(),
                format,
            });
        }
    };

    let detect_bool = matches!(format, FileFormat::Record | FileFormat::Spreadsheet);
    Ok(profile::profile_table(raw, detect_bool))
}

fn parse_sheet_dispatch(input: &FileInput) -> IntakeResult<crate::types::RawTable> {
    #[cfg(feature = "excel")]
    {
        sheet::parse_sheet(&input.content)
    }

    #[cfg(not(feature = "excel"))]
    {
        let _ = input;
        Err(IntakeError::Parse {
            message: "spreadsheet parsing not enabled (enable cargo feature 'excel')".to_string(),
        })
    }
}
