use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trip_finder::catalog::{Catalog, CatalogError};
use trip_finder::domain::Airport;
use trip_finder::output::to_json;
use trip_finder::planner::{Planner, SearchConfig, SearchError, SearchRequest};

/// Find and rank flight itineraries from a CSV catalog.
///
/// Example: trip-finder flights.csv WIW RFZ --bags 1 --stops 1 --return
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// CSV file with one flight per row
    csv_file: PathBuf,

    /// Airport the trip starts from
    origin: Airport,

    /// Airport to travel to
    destination: Airport,

    /// Number of checked bags
    #[arg(long, default_value_t = 0)]
    bags: u32,

    /// Maximum number of intermediate stops in each direction
    #[arg(long, default_value_t = 0)]
    stops: usize,

    /// Also search for a way back
    #[arg(long = "return")]
    return_trip: bool,

    /// Shortest acceptable layover, in minutes
    #[arg(long, default_value_t = 60)]
    min_layover_mins: i64,

    /// Longest acceptable layover, in minutes
    #[arg(long, default_value_t = 360)]
    max_layover_mins: i64,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn to_config(&self) -> SearchConfig {
        SearchConfig::new(self.stops, self.bags, self.return_trip)
            .with_layover_window(self.min_layover_mins, self.max_layover_mins)
    }
}

/// Everything that can stop a run.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, AppError> {
    let catalog = Catalog::from_path(&args.csv_file)?;
    if catalog.is_empty() {
        warn!(path = %args.csv_file.display(), "catalog has no flights");
    }

    let config = args.to_config();
    let request = SearchRequest::new(args.origin, args.destination);
    let results = Planner::new(&catalog, &config).plan(&request)?;

    info!(
        origin = %args.origin,
        destination = %args.destination,
        results = results.len(),
        "search complete"
    );

    Ok(to_json(&results, !args.compact)?)
}
