//! `gdrive list` — List files as an aligned table.

use std::path::PathBuf;

use clap::Args;
use gdrive_common::config::GdriveConfig;

use crate::source;

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// JSON file holding the file records ("-" or absent reads stdin).
    #[arg(long, env = "GDRIVE_RECORDS")]
    pub file: Option<PathBuf>,

    /// Max files to list.
    #[arg(short, long)]
    pub max: Option<u64>,

    /// Width of the name column, minimum 9; use 0 for full width.
    #[arg(long)]
    pub name_width: Option<usize>,

    /// Only list files whose name contains this text.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Do not print the header line.
    #[arg(long)]
    pub no_header: bool,

    /// Show sizes in bytes.
    #[arg(long)]
    pub bytes: bool,
}

/// Executes the `list` command.
///
/// Loads the records, applies the query and the max-files limit, and
/// prints the table to stdout.
///
/// # Errors
///
/// Returns an error if the records cannot be loaded or stdout is closed.
pub fn execute(args: ListArgs, config: &GdriveConfig) -> anyhow::Result<()> {
    let options = config.list_options(
        args.max,
        args.name_width,
        args.query,
        args.no_header,
        args.bytes,
    );

    let records = source::load_records(args.file.as_deref())?;
    let total = records.len();
    let selected = source::select(records, &options);
    tracing::info!(total, selected = selected.len(), "listing files");

    let mut stdout = std::io::stdout().lock();
    gdrive_format::render_list(&mut stdout, &selected, &options)?;
    Ok(())
}
