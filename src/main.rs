use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use series_seek::cli::Cli;
use series_seek::core::api::series_searching;
use series_seek::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::setup_logging(cli.log_level, cli.log_config.as_deref())?;

    debug!(
        "running with profile '{}', feature enabled: {}",
        cli.parameter_long, cli.feature
    );
    info!("searching for '{}'", cli.seriesname);

    let search_results = series_searching::search_series(&cli.seriesname)
        .await
        .context("Could not search for the series")?;

    if search_results.is_empty() {
        println!("No results found for '{}'", cli.seriesname);
        return Ok(());
    }

    for result in &search_results {
        let show = &result.show;
        let year = show.premiere_year().unwrap_or("unknown premiere");

        if show.genres.is_empty() {
            println!("{} ({})", show.name, year);
        } else {
            println!("{} ({}) - {}", show.name, year, show.genres.join(", "));
        }
    }

    Ok(())
}
