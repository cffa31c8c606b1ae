use tabular_intake::classify;
use tabular_intake::types::FileFormat;

#[test]
fn media_type_is_the_primary_signal() {
    assert_eq!(classify(Some("text/csv"), "data.bin"), FileFormat::Delimited);
    assert_eq!(classify(Some("application/csv"), "x"), FileFormat::Delimited);
    assert_eq!(classify(Some("application/json"), "x"), FileFormat::Record);
    assert_eq!(classify(Some("text/xml"), "x"), FileFormat::Markup);
    assert_eq!(classify(Some("application/xml"), "x"), FileFormat::Markup);
    assert_eq!(
        classify(Some("application/vnd.ms-excel"), "x"),
        FileFormat::Spreadsheet
    );
    assert_eq!(
        classify(
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            "x"
        ),
        FileFormat::Spreadsheet
    );
}

#[test]
fn media_type_wins_over_extension() {
    // Declared type takes priority even when the extension disagrees.
    assert_eq!(
        classify(Some("application/json"), "export.csv"),
        FileFormat::Record
    );
}

#[test]
fn unrecognized_media_type_falls_back_to_extension() {
    assert_eq!(
        classify(Some("application/octet-stream"), "data.csv"),
        FileFormat::Delimited
    );
    assert_eq!(classify(None, "data.CSV"), FileFormat::Delimited);
    assert_eq!(classify(None, "book.XLSX"), FileFormat::Spreadsheet);
    assert_eq!(classify(None, "book.xls"), FileFormat::Spreadsheet);
    assert_eq!(classify(None, "records.json"), FileFormat::Record);
    assert_eq!(classify(None, "feed.xml"), FileFormat::Markup);
}

#[test]
fn neither_signal_matching_is_unrecognized() {
    assert_eq!(classify(None, "archive.zip"), FileFormat::Unrecognized);
    assert_eq!(classify(None, "noextension"), FileFormat::Unrecognized);
    assert_eq!(
        classify(Some("application/octet-stream"), "blob"),
        FileFormat::Unrecognized
    );
}
