//! System-wide constants and default paths.

use std::path::PathBuf;

/// Name of the per-user config directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".gdrive";

/// File name of the JSON config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default number of files requested by `list`.
pub const DEFAULT_MAX_FILES: u64 = 30;

/// Default display width of the name column.
pub const DEFAULT_NAME_WIDTH: usize = 40;

/// Returns the per-user config directory, preferring `$HOME/.gdrive` and
/// falling back to a relative `.gdrive` when no home is set.
pub fn config_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(
            |_| PathBuf::from(CONFIG_DIR_NAME),
            |home| PathBuf::from(home).join(CONFIG_DIR_NAME),
        )
}

/// Returns the default config file path.
pub fn default_config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}
