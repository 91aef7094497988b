//! `gdrive info` — Show the details of one file.

use std::path::PathBuf;

use clap::Args;
use gdrive_common::config::GdriveConfig;

use crate::source;

/// Arguments for the `info` command.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// File ID.
    pub id: String,

    /// JSON file holding the file records ("-" or absent reads stdin).
    #[arg(long, env = "GDRIVE_RECORDS")]
    pub file: Option<PathBuf>,

    /// Show size in bytes.
    #[arg(long)]
    pub bytes: bool,
}

/// Executes the `info` command.
///
/// # Errors
///
/// Returns an error if the records cannot be loaded, no record has the
/// given id, or stdout is closed.
pub fn execute(args: InfoArgs, config: &GdriveConfig) -> anyhow::Result<()> {
    let options = config.detail_options(args.bytes);
    let records = source::load_records(args.file.as_deref())?;
    let record = source::find_by_id(&records, &args.id)?;
    tracing::info!(id = %record.id, "showing file info");

    let mut stdout = std::io::stdout().lock();
    gdrive_format::render_detail(&mut stdout, record, &options)?;
    Ok(())
}
