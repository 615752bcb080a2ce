use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediashelf_catalog::{LoadOptions, UNKNOWN_DELTA, find_by_id, release_addition_delta};

use crate::error::CliError;

use super::{display_or_dash, load_for_query};

pub(crate) fn run_lookup(
    file: Option<PathBuf>,
    options: &LoadOptions,
    id: &str,
    json: bool,
) -> Result<(), CliError> {
    let report = load_for_query(file, options)?;

    let title = match find_by_id(&report.titles, id)? {
        Some(t) => t,
        None => {
            log::warn!("No title with identifier '{id}'.");
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(title)?);
        return Ok(());
    }

    log::info!("{}", title.title.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Identifier:  {}", title.id);
    log::info!("  Kind:        {}", title.kind.display_name());
    log::info!("  Director:    {}", display_or_dash(&title.director));
    log::info!("  Cast:        {}", display_or_dash(&title.cast));
    log::info!("  Country:     {}", display_or_dash(&title.country));
    if title.release_year == 0 {
        log::info!("  Released:    -");
    } else {
        log::info!("  Released:    {}", title.release_year);
    }
    log::info!("  Date added:  {}", display_or_dash(&title.date_added));
    log::info!("  Rating:      {}", display_or_dash(&title.rating));
    log::info!("  Duration:    {}", title.duration);
    log::info!("  Genres:      {}", display_or_dash(&title.genres));

    let delta = release_addition_delta(title);
    if delta == UNKNOWN_DELTA {
        log::info!("  Release-to-catalog delta: unknown");
    } else {
        log::info!("  Release-to-catalog delta: {delta} days");
    }

    if !title.description.is_empty() {
        log::info!("  {}", title.description);
    }

    Ok(())
}
