//! Domain primitive types used across the gdrive workspace.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier of a remote file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(String);

impl FileId {
    /// Creates a new file ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of one remote file, as handed over by the retrieval layer.
///
/// Field names follow the remote API's JSON encoding. Renderers only
/// read records; every transformation produces new strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Opaque file identifier.
    pub id: FileId,
    /// Display name, arbitrary Unicode.
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// MIME type of the content.
    #[serde(default)]
    pub mime_type: String,
    /// Content size in bytes.
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: u64,
    /// RFC 3339 creation timestamp, possibly malformed.
    #[serde(default)]
    pub created_time: String,
    /// RFC 3339 modification timestamp, possibly malformed.
    #[serde(default)]
    pub modified_time: String,
    /// Hex MD5 of the content, empty for folders and native documents.
    #[serde(default)]
    pub md5_checksum: String,
    /// Whether the file is shared.
    #[serde(default)]
    pub shared: bool,
    /// Identifiers of the parent folders, in API order.
    #[serde(default)]
    pub parents: Vec<String>,
}

/// List response envelope: `{ "files": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileList {
    /// Records in the order the API returned them.
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Number(u64),
    Text(String),
}

/// The API encodes 64-bit integers as decimal strings; plain numbers are
/// accepted as well.
fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match SizeRepr::deserialize(deserializer)? {
        SizeRepr::Number(n) => Ok(n),
        SizeRepr::Text(s) => s
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid size {s:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_id_displays_inner_value() {
        let id = FileId::new("0B3X9GlR6EmbnQ0FtZmJJUXEyRTA");
        assert_eq!(id.to_string(), "0B3X9GlR6EmbnQ0FtZmJJUXEyRTA");
        assert_eq!(id.as_str(), "0B3X9GlR6EmbnQ0FtZmJJUXEyRTA");
    }

    #[test]
    fn record_deserializes_api_json() {
        let json = r#"{
            "id": "abc",
            "name": "report.pdf",
            "mimeType": "application/pdf",
            "size": "1500000",
            "createdTime": "2021-06-15T10:30:00.000Z",
            "modifiedTime": "2021-06-16T08:00:00.000Z",
            "md5Checksum": "d41d8cd98f00b204e9800998ecf8427e",
            "shared": true,
            "parents": ["root"]
        }"#;
        let record: FileRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.id.as_str(), "abc");
        assert_eq!(record.mime_type, "application/pdf");
        assert_eq!(record.size, 1_500_000);
        assert!(record.shared);
        assert_eq!(record.parents, vec!["root"]);
        assert!(record.description.is_empty());
    }

    #[test]
    fn record_accepts_numeric_size() {
        let record: FileRecord =
            serde_json::from_str(r#"{"id": "x", "size": 42}"#).expect("parse record");
        assert_eq!(record.size, 42);
    }

    #[test]
    fn record_missing_size_defaults_to_zero() {
        let record: FileRecord = serde_json::from_str(r#"{"id": "folder"}"#).expect("parse");
        assert_eq!(record.size, 0);
        assert!(record.parents.is_empty());
    }

    #[test]
    fn record_rejects_non_numeric_size() {
        let result = serde_json::from_str::<FileRecord>(r#"{"id": "x", "size": "big"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn file_list_envelope_keeps_order() {
        let json = r#"{"files": [{"id": "b"}, {"id": "a"}]}"#;
        let list: FileList = serde_json::from_str(json).expect("parse list");
        let ids: Vec<_> = list.files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
