//! CLI settings (default catalog file, config file location).
//!
//! The settings file is `~/.config/mediashelf/settings.toml`; catalog
//! path resolution is consistent across every subcommand.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/mediashelf/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mediashelf").join("settings.toml")
}

/// Resolve the catalog CSV path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.current_file` in `settings.toml`
/// 3. `titles.csv` in the current working directory
pub(crate) fn resolve_catalog_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_catalog_path() {
        return p;
    }
    PathBuf::from("titles.csv")
}

/// Read `catalog.current_file` from `settings.toml`, if set.
fn load_catalog_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let file = doc.get("catalog")?.get("current_file")?.as_str()?;
    if file.is_empty() {
        None
    } else {
        Some(PathBuf::from(file))
    }
}

/// Save (or clear) the catalog path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated fields are
/// preserved.
pub(crate) fn save_catalog_path(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [catalog] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;

    match path {
        Some(p) => {
            catalog_table.insert(
                "current_file".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            catalog_table.remove("current_file");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
