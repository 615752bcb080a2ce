use std::path::PathBuf;

use mediashelf_catalog::{LoadOptions, release_delta_summaries};

use crate::error::CliError;

use super::load_for_query;

/// List each title with the day count between January 1 of its release
/// year and the date it entered the catalog.
pub(crate) fn run_deltas(file: Option<PathBuf>, options: &LoadOptions) -> Result<(), CliError> {
    let report = load_for_query(file, options)?;

    for line in release_delta_summaries(&report.titles) {
        log::info!("{line}");
    }

    Ok(())
}
