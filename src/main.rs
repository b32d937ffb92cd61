//! # u-tour CLI
//!
//! Command-line interface for the u-tour library.
//! Reads a location file, resolves city names, and prints one line per
//! requested heuristic.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, LevelFilter};
use u_tour::io::{resolve_cities, LocationTable};
use u_tour::runner::TourRunner;
use u_tour::TourError;

mod cli;

use cli::{split_args, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.target(env_logger::Target::Stderr);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let invocation = split_args(&cli.args);

    if invocation.cities.len() < 2 {
        return Err(TourError::TooFewCities {
            count: invocation.cities.len(),
        })
        .context("usage: u-tour <LOCATION_FILE> [heuristic flags] <city names>");
    }
    if invocation.heuristics.is_empty() {
        debug!("no heuristics requested");
        return Ok(());
    }

    let table = LocationTable::load(&cli.location_file)?;
    let cities = resolve_cities(&table, &invocation.cities)?;
    let runner = TourRunner::new(cities, &config.metric());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for result in runner.run_all(&invocation.heuristics) {
        match result {
            Ok(report) => {
                let line = report
                    .render(config.format())
                    .context("failed to format report")?;
                writeln!(out, "{line}")?;
            }
            Err(e @ TourError::UnknownHeuristic(_)) => error!("{e}"),
            Err(e) => return Err(e.into()),
        }
    }
    out.flush()?;

    Ok(())
}
