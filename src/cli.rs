//! Command-line definition and argument splitting.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use u_tour::config::{OutputFormat, TourConfig};
use u_tour::distance::MetricKind;

/// Command-line interface for u-tour
#[derive(Parser, Debug)]
#[command(name = "u-tour")]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Builds closed tours of named cities with one or more heuristics")]
#[command(long_about = "Builds closed tours of named cities with one or more heuristics:
  u-tour ne_6.dat -given -nearest -insert HVN ALB MHT BDL ORH PVD

Every argument after the location file that starts with '-' names a heuristic
(-given, -nearest, -insert); the remaining arguments are city names. Each
heuristic prints one line:
  <heuristic> : <total distance> <tour>

Options such as --metric must come before the location file.")]
pub struct Cli {
    /// Distance metric between cities
    #[arg(long, value_enum, default_value_t = MetricKind::GreatCircle)]
    pub metric: MetricKind,

    /// Output format for report lines
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Location file with one `name,latitude,longitude` record per line
    pub location_file: PathBuf,

    /// Heuristic flags followed by city names
    #[arg(value_name = "ARGS", allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Run settings selected by the options.
    pub fn config(&self) -> TourConfig {
        TourConfig::new()
            .with_metric(self.metric)
            .with_format(self.format)
            .with_verbose(self.verbose)
    }
}

/// Positional arguments after the location file, split into heuristic flags
/// and city names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Flags as typed, e.g. `-nearest`, in command-line order.
    pub heuristics: Vec<String>,
    /// City names in command-line order.
    pub cities: Vec<String>,
}

/// Leading arguments that start with `-` are heuristics; the first one that
/// does not starts the city names.
pub fn split_args(args: &[String]) -> Invocation {
    let split = args
        .iter()
        .position(|a| !a.starts_with('-'))
        .unwrap_or(args.len());
    let (heuristics, cities) = args.split_at(split);
    Invocation {
        heuristics: heuristics.to_vec(),
        cities: cities.to_vec(),
    }
}
