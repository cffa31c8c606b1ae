use tabular_intake::parse_table;
use tabular_intake::types::{ColumnType, FileFormat, FileInput, PREVIEW_VALUE_LIMIT};

fn csv_table(text: &str) -> tabular_intake::Table {
    let input = FileInput::new("data.csv", Some("text/csv"), text.as_bytes().to_vec());
    parse_table(&input, FileFormat::Delimited).unwrap()
}

#[test]
fn one_offending_value_demotes_a_column_to_text() {
    // Precedence is fixed: a single value that is neither number, date, nor boolean
    // forces text, regardless of the other values.
    let table = csv_table("v\n1\n2\nnot-a-number\n");
    assert_eq!(table.column("v").unwrap().column_type, ColumnType::Text);
}

#[test]
fn all_numeric_column_is_number() {
    let table = csv_table("v\n1\n2.5\n-3e2\n");
    assert_eq!(table.column("v").unwrap().column_type, ColumnType::Number);
}

#[test]
fn all_date_column_is_date() {
    let table = csv_table("day\n2024-01-01\n2024/01/02\n01/03/2024\n");
    let col = table.column("day").unwrap();
    assert_eq!(col.column_type, ColumnType::Date);
    assert_eq!(table.summary.date_columns, vec!["day"]);
}

#[test]
fn non_finite_sentinels_do_not_type_as_number() {
    let table = csv_table("v\nNaN\ninf\ninfinity\n");
    assert_eq!(table.column("v").unwrap().column_type, ColumnType::Text);
}

#[test]
fn all_blank_column_types_as_number() {
    // The numeric predicate is vacuously true over an empty inspected set and wins
    // by precedence. Pinned so a future change to this edge is deliberate.
    let table = csv_table("a,b\n1,\n2,\n");
    assert_eq!(table.column("b").unwrap().column_type, ColumnType::Number);
}

#[test]
fn boolean_literals_are_text_for_delimited_sources() {
    // Only record and spreadsheet sources attempt boolean detection.
    let table = csv_table("flag\ntrue\nfalse\n");
    assert_eq!(table.column("flag").unwrap().column_type, ColumnType::Text);
}

#[test]
fn inference_inspects_at_most_the_first_ten_rows() {
    let mut text = String::from("v\n");
    for i in 0..10 {
        text.push_str(&format!("{i}\n"));
    }
    text.push_str("garbage\n");

    let table = csv_table(&text);
    // The offending value sits in row 11 and is outside the inspection window.
    assert_eq!(table.column("v").unwrap().column_type, ColumnType::Number);
    assert_eq!(table.total_row_count, 11);
}

#[test]
fn null_and_unique_counts_cover_the_inspection_window() {
    let table = csv_table("k,v\n1,a\n2,a\n3,b\n4,\n");
    let col = table.column("v").unwrap();
    assert_eq!(col.null_count, 1);
    assert_eq!(col.unique_count, 2);
}

#[test]
fn sample_values_keep_the_first_five() {
    let table = csv_table("v\n1\n2\n3\n4\n5\n6\n7\n");
    let col = table.column("v").unwrap();
    assert_eq!(col.sample_values.len(), PREVIEW_VALUE_LIMIT);
    assert_eq!(col.sample_values[0], Some("1".to_string()));
    assert_eq!(col.sample_values[4], Some("5".to_string()));
}

#[test]
fn role_suggestion_is_name_driven_and_type_independent() {
    // A column named like a price is suggested even when every value is a string.
    let table = csv_table("price_usd\nN/A\nN/A\n");
    assert_eq!(table.column("price_usd").unwrap().column_type, ColumnType::Text);
    assert_eq!(
        table.summary.suggested_price_column.as_deref(),
        Some("price_usd")
    );
}

#[test]
fn role_suggestion_takes_the_first_matching_header() {
    let table = csv_table("delivery_hour,trade_date,mcp,volume_mw\n1,2024-01-01,50,10\n");
    assert_eq!(
        table.summary.suggested_timestamp_column.as_deref(),
        Some("delivery_hour")
    );
    assert_eq!(table.summary.suggested_price_column.as_deref(), Some("mcp"));
    assert_eq!(
        table.summary.suggested_volume_column.as_deref(),
        Some("volume_mw")
    );
}

#[test]
fn role_keywords_match_case_insensitively() {
    let table = csv_table("Trade_Date,RTM_Price\n2024-01-01,42\n");
    assert_eq!(
        table.summary.suggested_timestamp_column.as_deref(),
        Some("Trade_Date")
    );
    assert_eq!(
        table.summary.suggested_price_column.as_deref(),
        Some("RTM_Price")
    );
}

#[test]
fn summary_row_count_reports_the_true_source_count() {
    let mut text = String::from("n\n");
    for i in 0..75 {
        text.push_str(&format!("{i}\n"));
    }
    let table = csv_table(&text);
    assert_eq!(table.summary.row_count, 75);
    assert_eq!(table.summary.column_count, 1);
    assert_eq!(table.rows.len(), 50);
}
