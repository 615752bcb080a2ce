use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::ConfigAction;
use crate::error::CliError;
use crate::settings;

pub(crate) fn run_config(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => match settings::load_settings_string() {
            Some(contents) => {
                log::info!(
                    "{}",
                    "Current settings".if_supports_color(Stdout, |t| t.bold()),
                );
                for line in contents.lines() {
                    log::info!("  {line}");
                }
            }
            None => {
                log::info!("No settings saved yet.");
                log::info!("Run 'mediashelf config set-catalog <FILE>' to save a catalog path.");
            }
        },
        ConfigAction::Path => {
            log::info!("{}", settings::settings_path().display());
        }
        ConfigAction::SetCatalog { file } => {
            settings::save_catalog_path(Some(&file))?;
            log::info!("Saved catalog file: {}", file.display());
        }
        ConfigAction::Clear => {
            settings::save_catalog_path(None)?;
            log::info!("Cleared saved catalog file.");
        }
    }

    Ok(())
}
