use std::collections::HashSet;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediashelf_catalog::{LoadOptions, TitleKind, most_common_country};

use crate::error::CliError;

use super::load_for_query;

pub(crate) fn run_stats(file: Option<PathBuf>, options: &LoadOptions) -> Result<(), CliError> {
    let report = load_for_query(file, options)?;

    let movies = report
        .titles
        .iter()
        .filter(|t| t.kind == TitleKind::Movie)
        .count();
    let series = report.titles.len() - movies;
    let countries: HashSet<&str> = report
        .titles
        .iter()
        .map(|t| t.country.as_str())
        .filter(|c| !c.is_empty() && *c != "Unknown")
        .collect();

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Titles:     {:>8}", report.titles.len());
    log::info!("  Movies:     {:>8}", movies);
    log::info!("  Series:     {:>8}", series);
    log::info!("  Countries:  {:>8}", countries.len());
    log::info!("  Most common country: {}", most_common_country(&report.titles));

    if !report.diagnostics.is_empty() {
        log::info!(
            "  {} {} row(s) skipped or degraded during load",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.diagnostics.len(),
        );
        for diag in &report.diagnostics {
            log::debug!("    {diag}");
        }
    }

    Ok(())
}
