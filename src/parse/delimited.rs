//! Delimited-text parsing.

use crate::error::IntakeResult;
use crate::types::{Cell, RawTable, SAMPLE_ROW_LIMIT};

/// Parse comma-delimited text into a [`RawTable`].
///
/// Rules:
///
/// - The first line is the header row.
/// - At most [`SAMPLE_ROW_LIMIT`] data records are retained as the sample.
/// - `total_row_count` is the full record count, read to the end of the input.
/// - Records shorter than the header row are padded with absent cells; longer records
///   are truncated to the header width.
///
/// Quoting is handled by the csv reader, so commas (and newlines) inside quoted fields
/// are not treated as separators.
pub fn parse_delimited(text: &str) -> IntakeResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut total_row_count = 0usize;
    for result in rdr.records() {
        let record = result?;
        total_row_count += 1;
        if rows.len() < SAMPLE_ROW_LIMIT {
            let row: Vec<Cell> = (0..headers.len())
                .map(|i| record.get(i).map(str::to_owned))
                .collect();
            rows.push(row);
        }
    }

    Ok(RawTable {
        headers,
        rows,
        total_row_count,
    })
}
