use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediashelf_catalog::{LoadOptions, most_common_country};

use crate::error::CliError;

use super::load_for_query;

pub(crate) fn run_country(file: Option<PathBuf>, options: &LoadOptions) -> Result<(), CliError> {
    let report = load_for_query(file, options)?;
    let country = most_common_country(&report.titles);

    log::info!(
        "Most common production country: {}",
        country.if_supports_color(Stdout, |t| t.bold()),
    );

    Ok(())
}
