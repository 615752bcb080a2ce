pub(crate) mod config;
pub(crate) mod country;
pub(crate) mod deltas;
pub(crate) mod lookup;
pub(crate) mod sort;
pub(crate) mod stats;

use std::path::PathBuf;

use mediashelf_catalog::{LoadOptions, LoadReport, load_catalog};

use crate::error::CliError;
use crate::settings;

/// Load the catalog for a query command, resolving the file path chain.
pub(crate) fn load_for_query(
    file: Option<PathBuf>,
    options: &LoadOptions,
) -> Result<LoadReport, CliError> {
    let path = settings::resolve_catalog_path(file);
    if !path.exists() {
        return Err(CliError::config(format!(
            "No catalog file found at {}. Pass --file or run 'mediashelf config set-catalog'.",
            path.display()
        )));
    }

    let report = load_catalog(&path, options)?;
    log::debug!(
        "Loaded {} title(s) from {} ({} diagnostic(s))",
        report.titles.len(),
        path.display(),
        report.diagnostics.len(),
    );
    Ok(report)
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

/// Render an empty field as "-".
pub(crate) fn display_or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
