//! Command-line entry point: load the data directory, then either answer
//! a single query or hand over to the interactive console.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use metro_query::console;
use metro_query::console::dto::ItineraryDto;
use metro_query::domain::Criterion;
use metro_query::fare::FareSchedule;
use metro_query::loader;
use metro_query::network::MetroNetwork;
use metro_query::planner::Planner;

/// Journey queries over a metro network loaded from line data files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding one timetable file per line.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Departure station; with --to, answers one query and exits.
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Arrival station.
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Criterion to minimise: time, distance, fare or interchanges.
    #[arg(long, default_value = "time")]
    by: Criterion,

    /// Print the one-shot result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let records = loader::load_dir(&args.data_dir)?;
    let network = MetroNetwork::build(records);
    if network.lines().is_empty() {
        return Err(format!("no usable line data in {}", args.data_dir.display()).into());
    }
    let planner = Planner::new(&network, FareSchedule::default());

    match (&args.from, &args.to) {
        (Some(from), Some(to)) => one_shot(&planner, from, to, args.by, args.json),
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            console::run(&planner, &mut input, &mut out)?;
            Ok(())
        }
    }
}

fn one_shot(
    planner: &Planner<'_>,
    from: &str,
    to: &str,
    criterion: Criterion,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let network = planner.network();
    let from_id = network
        .station_id(from)
        .ok_or_else(|| format!("unknown station: {from}"))?;
    let to_id = network
        .station_id(to)
        .ok_or_else(|| format!("unknown station: {to}"))?;

    let itinerary = planner.query(from_id, to_id, criterion);
    if json {
        println!("{}", serde_json::to_string_pretty(&ItineraryDto::from(&itinerary))?);
    } else {
        print!("{}", console::render_itinerary(&itinerary, criterion, from, to));
    }
    Ok(())
}
