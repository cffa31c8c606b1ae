#![cfg(feature = "excel")]

//! Spreadsheet parsing from in-memory workbook bytes.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::{IntakeError, IntakeResult};
use crate::types::{Cell, RawTable, SAMPLE_ROW_LIMIT};

/// Parse the first sheet of a workbook into a [`RawTable`].
///
/// Behavior:
/// - Reads the first sheet only.
/// - The first row is the header row; header cells are coerced to strings and trimmed.
/// - The sample is the next [`SAMPLE_ROW_LIMIT`] rows; `total_row_count` is the sheet
///   row count minus the header.
/// - Fails when the workbook has no sheets or the first sheet has zero rows.
pub fn parse_sheet(bytes: &[u8]) -> IntakeResult<RawTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IntakeError::Parse {
            message: "workbook has no sheets".to_string(),
        })?;

    let range = workbook.worksheet_range(&sheet)?;
    let mut sheet_rows = range.rows();

    let header_row = sheet_rows.next().ok_or_else(|| IntakeError::Parse {
        message: format!("sheet '{sheet}' has no rows"),
    })?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|c| cell_to_string(c).trim().to_owned())
        .collect();

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut total_row_count = 0usize;
    for row in sheet_rows {
        total_row_count += 1;
        if rows.len() < SAMPLE_ROW_LIMIT {
            let out: Vec<Cell> = (0..headers.len())
                .map(|i| cell_value(row.get(i).unwrap_or(&Data::Empty)))
                .collect();
            rows.push(out);
        }
    }

    Ok(RawTable {
        headers,
        rows,
        total_row_count,
    })
}

fn cell_value(c: &Data) -> Cell {
    match c {
        Data::Empty => None,
        other => Some(cell_to_string(other)),
    }
}

fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => String::new(),
    }
}
