//! Local record source.
//!
//! Reads file records from a JSON document, either a bare array of
//! records or a `{"files": [...]}` list response, and applies the
//! selection options that belong to the retrieval side (query and
//! max-files) before anything is rendered.

use std::io::Read;
use std::path::{Path, PathBuf};

use gdrive_common::config::ListOptions;
use gdrive_common::error::{GdriveError, Result};
use gdrive_common::types::{FileList, FileRecord};
use serde::Deserialize;

/// Path argument that selects stdin.
const STDIN_PATH: &str = "-";

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Records(Vec<FileRecord>),
    Envelope(FileList),
}

/// Parses records from JSON text.
///
/// # Errors
///
/// Returns an error if the text is neither a record array nor a list
/// response.
pub fn parse_records(content: &str) -> Result<Vec<FileRecord>> {
    let records = match serde_json::from_str(content)? {
        RecordsDocument::Records(records) => records,
        RecordsDocument::Envelope(list) => list.files,
    };
    Ok(records)
}

/// Loads records from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed.
pub fn load_records(path: Option<&Path>) -> Result<Vec<FileRecord>> {
    let content = match path {
        Some(p) if p != Path::new(STDIN_PATH) => {
            tracing::debug!(path = %p.display(), "reading records");
            std::fs::read_to_string(p).map_err(|e| GdriveError::Io {
                path: p.to_path_buf(),
                source: e,
            })?
        }
        _ => {
            tracing::debug!("reading records from stdin");
            let mut buf = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| GdriveError::Io {
                    path: PathBuf::from(STDIN_PATH),
                    source: e,
                })?;
            buf
        }
    };
    parse_records(&content)
}

/// Keeps records whose name contains the query (case-insensitive), up to
/// `max_files` of them, in input order.
pub fn select(records: Vec<FileRecord>, options: &ListOptions) -> Vec<FileRecord> {
    let needle = options.query.to_lowercase();
    let limit = usize::try_from(options.max_files).unwrap_or(usize::MAX);
    records
        .into_iter()
        .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Finds the record with the given id.
///
/// # Errors
///
/// Returns [`GdriveError::NotFound`] if no record matches.
pub fn find_by_id<'a>(records: &'a [FileRecord], id: &str) -> Result<&'a FileRecord> {
    records
        .iter()
        .find(|f| f.id.as_str() == id)
        .ok_or_else(|| GdriveError::NotFound {
            kind: "file",
            id: id.to_owned(),
        })
}
