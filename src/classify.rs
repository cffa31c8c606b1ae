//! File classification: map a declared media type or filename extension to a [`FileFormat`].

use crate::types::FileFormat;

/// Extensions the classifier recognizes, lowercased. Also the advisory allow-list a
/// file-selection surface can present to users.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls", "json", "xml"];

/// Classify a file from its declared media type and name.
///
/// The declared media type is the primary signal (exact lookup against a fixed table);
/// if it is absent or unrecognized, the filename extension decides (case-insensitive).
/// When neither matches, the result is [`FileFormat::Unrecognized`], which is not an
/// error by itself.
///
/// Pure function of `(media_type, name)`; no side effects.
pub fn classify(media_type: Option<&str>, name: &str) -> FileFormat {
    if let Some(fmt) = media_type.and_then(from_media_type) {
        return fmt;
    }
    extension_of(name)
        .and_then(from_extension)
        .unwrap_or(FileFormat::Unrecognized)
}

fn from_media_type(media_type: &str) -> Option<FileFormat> {
    match media_type {
        "text/csv" | "application/csv" => Some(FileFormat::Delimited),
        "application/vnd.ms-excel"
        | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
            Some(FileFormat::Spreadsheet)
        }
        "application/json" => Some(FileFormat::Record),
        "text/xml" | "application/xml" => Some(FileFormat::Markup),
        _ => None,
    }
}

fn from_extension(ext: &str) -> Option<FileFormat> {
    match ext.to_ascii_lowercase().as_str() {
        "csv" => Some(FileFormat::Delimited),
        "xlsx" | "xls" => Some(FileFormat::Spreadsheet),
        "json" => Some(FileFormat::Record),
        "xml" => Some(FileFormat::Markup),
        _ => None,
    }
}

fn extension_of(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() { None } else { Some(ext) }
}
