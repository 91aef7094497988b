//! Configuration models: the per-call render options and the tool-level
//! defaults read from the user's config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FILES, DEFAULT_NAME_WIDTH};
use crate::error::{GdriveError, Result};

/// Options of one `list` render call.
///
/// `max_files` and `query` are applied by the retrieval layer before the
/// records reach the renderer; the renderer consumes the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Upper bound on the number of records fetched.
    pub max_files: u64,
    /// Maximum display width of the name column, in characters.
    pub name_width: usize,
    /// Search query used to select records.
    pub query: String,
    /// Omit the header line.
    pub skip_header: bool,
    /// Print sizes as raw byte counts.
    pub size_in_bytes: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            name_width: DEFAULT_NAME_WIDTH,
            query: String::new(),
            skip_header: false,
            size_in_bytes: false,
        }
    }
}

/// Options of one `info` render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailOptions {
    /// Print the size as a raw byte count.
    pub size_in_bytes: bool,
}

/// Root configuration for the gdrive tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdriveConfig {
    /// Default number of records listed.
    pub max_files: u64,
    /// Default width of the name column.
    pub name_width: usize,
    /// Print raw byte counts unless overridden.
    pub size_in_bytes: bool,
}

impl Default for GdriveConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            name_width: DEFAULT_NAME_WIDTH,
            size_in_bytes: false,
        }
    }
}

impl GdriveConfig {
    /// Loads the config from a JSON file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| GdriveError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Rejects values no render call could use.
    ///
    /// # Errors
    ///
    /// Returns [`GdriveError::Config`] when `max_files` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_files == 0 {
            return Err(GdriveError::Config {
                message: "max_files must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Builds the options of a `list` call, preferring explicit flags over
    /// configured defaults.
    #[must_use]
    pub fn list_options(
        &self,
        max_files: Option<u64>,
        name_width: Option<usize>,
        query: impl Into<String>,
        skip_header: bool,
        size_in_bytes: bool,
    ) -> ListOptions {
        ListOptions {
            max_files: max_files.unwrap_or(self.max_files),
            name_width: name_width.unwrap_or(self.name_width),
            query: query.into(),
            skip_header,
            size_in_bytes: size_in_bytes || self.size_in_bytes,
        }
    }

    /// Builds the options of an `info` call.
    #[must_use]
    pub const fn detail_options(&self, size_in_bytes: bool) -> DetailOptions {
        DetailOptions {
            size_in_bytes: size_in_bytes || self.size_in_bytes,
        }
    }
}
