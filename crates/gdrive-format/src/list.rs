//! Tabular view of many file records.

use std::io::Write;

use gdrive_common::config::ListOptions;
use gdrive_common::error::Result;
use gdrive_common::types::FileRecord;

use crate::datetime::format_datetime;
use crate::size::format_size;
use crate::table::Table;
use crate::truncate::truncate;

/// Column labels of the header line.
pub const HEADER: [&str; 4] = ["Id", "Name", "Size", "Created"];

/// Lays out `records` in input order, preceded by [`HEADER`] unless
/// `options.skip_header` is set.
#[must_use]
pub fn list_to_string(records: &[FileRecord], options: &ListOptions) -> String {
    let mut table = Table::new();
    if !options.skip_header {
        table.push_row(HEADER);
    }
    for file in records {
        table.push_row([
            file.id.to_string(),
            truncate(&file.name, options.name_width),
            format_size(file.size, options.size_in_bytes),
            format_datetime(&file.created_time),
        ]);
    }
    table.render()
}

/// Renders the file table to `out`.
///
/// The table is built completely before anything is written; the
/// destination receives it in one write followed by a flush.
///
/// # Errors
///
/// Returns [`GdriveError::Output`](gdrive_common::error::GdriveError::Output)
/// if writing to `out` fails.
pub fn render_list<W: Write>(
    out: &mut W,
    records: &[FileRecord],
    options: &ListOptions,
) -> Result<()> {
    tracing::debug!(
        records = records.len(),
        name_width = options.name_width,
        skip_header = options.skip_header,
        "rendering file list"
    );
    let text = list_to_string(records, options);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
