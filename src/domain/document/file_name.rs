//! Export file naming scheme.
//!
//! Generated names embed a sanitized project title, a format label, and the
//! calendar date: `Smart_Meter_Documentation_PDF_2024-01-15.pdf`. Re-exports
//! on the same day therefore reuse the name; the storage layer overwrites
//! the file while every export still gets its own record row.

use chrono::NaiveDate;

use super::ExportFormat;

/// Maximum length of the sanitized title portion.
const MAX_TITLE_LEN: usize = 80;

/// Builds the file name for an export artifact.
pub fn export_file_name(title: &str, format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.{}",
        sanitize_title(title),
        format.file_label(),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Collapses non-alphanumeric runs to single underscores and trims them from
/// both ends. Falls back to "project" when nothing usable remains.
fn sanitize_title(title: &str) -> String {
    let mut sanitized = String::with_capacity(title.len());
    let mut last_was_separator = true;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch);
            last_was_separator = false;
        } else if !last_was_separator {
            sanitized.push('_');
            last_was_separator = true;
        }
        if sanitized.len() >= MAX_TITLE_LEN {
            break;
        }
    }

    let sanitized = sanitized.trim_matches('_');
    if sanitized.is_empty() {
        "project".to_string()
    } else {
        sanitized.to_string()
    }
}
