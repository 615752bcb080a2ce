use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediashelf_catalog::{LoadOptions, sort_by_date_added};

use crate::error::CliError;

use super::{display_or_dash, load_for_query, truncate_str};

pub(crate) fn run_sort(
    file: Option<PathBuf>,
    options: &LoadOptions,
    descending: bool,
) -> Result<(), CliError> {
    let report = load_for_query(file, options)?;
    let sorted = sort_by_date_added(&report.titles, !descending);

    log::info!(
        "{}",
        format!("{:<8} {:<7} {:<42} Date added", "ID", "Kind", "Title")
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for title in &sorted {
        log::info!(
            "{:<8} {:<7} {:<42} {}",
            title.id,
            title.kind.display_name(),
            truncate_str(&title.title, 42),
            display_or_dash(&title.date_added),
        );
    }

    Ok(())
}
