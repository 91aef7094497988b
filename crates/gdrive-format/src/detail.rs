//! Key/value view of a single file record.

use std::fmt::Write as _;
use std::io::Write;

use gdrive_common::config::DetailOptions;
use gdrive_common::error::Result;
use gdrive_common::types::FileRecord;

use crate::datetime::format_datetime;
use crate::size::format_size;
use crate::value::{format_bool, format_list};

/// Formatted attributes of `record` in display order, empty values
/// included.
#[must_use]
pub fn detail_items(record: &FileRecord, options: &DetailOptions) -> Vec<(&'static str, String)> {
    vec![
        ("Id", record.id.to_string()),
        ("Name", record.name.clone()),
        ("Description", record.description.clone()),
        ("Mime", record.mime_type.clone()),
        ("Size", format_size(record.size, options.size_in_bytes)),
        ("Created", format_datetime(&record.created_time)),
        ("Modified", format_datetime(&record.modified_time)),
        ("Md5sum", record.md5_checksum.clone()),
        ("Shared", format_bool(record.shared).to_owned()),
        ("Parents", format_list(&record.parents)),
    ]
}

/// One `Key: value` line per non-empty attribute.
#[must_use]
pub fn detail_to_string(record: &FileRecord, options: &DetailOptions) -> String {
    let mut out = String::new();
    for (key, value) in detail_items(record, options) {
        if value.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{key}: {value}");
    }
    out
}

/// Renders the detail view to `out` in a single write.
///
/// # Errors
///
/// Returns [`GdriveError::Output`](gdrive_common::error::GdriveError::Output)
/// if writing to `out` fails.
pub fn render_detail<W: Write>(
    out: &mut W,
    record: &FileRecord,
    options: &DetailOptions,
) -> Result<()> {
    tracing::debug!(id = %record.id, "rendering file info");
    let text = detail_to_string(record, options);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
