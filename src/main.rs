use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use atlas_launch::config::load_configuration;
use atlas_launch::errors::SimulationError;
use atlas_launch::telemetry_system::export::{read_snapshot, write_csv, write_snapshot};
use atlas_launch::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CSV_PATH: &str = "rocket_simulation_results.csv";
const DEFAULT_SNAPSHOT_PATH: &str = "rocketData.txt";

struct Options {
    config_path: Option<PathBuf>,
    snapshot_path: Option<PathBuf>,
    stride: TableStride,
    csv_path: PathBuf,
    save_path: PathBuf,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, SimulationError> {
    let mut options = Options {
        config_path: None,
        snapshot_path: None,
        stride: TableStride::Whole,
        csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        save_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| SimulationError::ParseError(format!("{} needs a value", flag)))
        };
        match arg.as_str() {
            "--snapshot" => options.snapshot_path = Some(PathBuf::from(value("--snapshot")?)),
            "--csv" => options.csv_path = PathBuf::from(value("--csv")?),
            "--save" => options.save_path = PathBuf::from(value("--save")?),
            "--stride" => {
                let raw = value("--stride")?;
                options.stride = raw
                    .parse::<usize>()
                    .ok()
                    .and_then(TableStride::from_steps)
                    .ok_or_else(|| {
                        SimulationError::ParseError(format!("stride must be 1, 5 or 10, got {}", raw))
                    })?;
            }
            flag if flag.starts_with("--") => {
                return Err(SimulationError::ParseError(format!(
                    "unknown option {}. Usage: atlas-launch [CONFIG.yaml] [--snapshot FILE] [--stride 1|5|10] [--csv FILE] [--save FILE]",
                    flag
                )));
            }
            path => options.config_path = Some(PathBuf::from(path)),
        }
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {}", e);
    }

    let options = parse_args(std::env::args().skip(1))?;

    let mut configuration = match &options.config_path {
        Some(path) => load_configuration(path)?,
        None => {
            info!("No configuration file given, using Atlas V defaults");
            RocketConfiguration::default()
        }
    };

    if let Some(path) = &options.snapshot_path {
        let snapshot = read_snapshot(BufReader::new(File::open(path)?))?;
        let candidate = snapshot.apply_to(&configuration);
        match candidate.validate() {
            Ok(()) => {
                info!("Applied saved parameters from {}", path.display());
                configuration = candidate;
            }
            Err(e) => warn!("Ignoring saved parameters in {}. {}", path.display(), e),
        }
    }

    println!("A simulation of the first 250 seconds of an Atlas V 500 series launch");
    println!(
        "Boosters: {} | SRBs: {} | Liftoff mass: {:.1} kg | Liftoff thrust: {:.1} kN",
        configuration.booster_count,
        configuration.srb_count,
        configuration.liftoff_mass(),
        configuration.liftoff_thrust()
    );
    println!(
        "Core dry mass: {:.1} kg | SRB mass: {:.1} kg",
        configuration.core_dry_mass(),
        configuration.total_srb_mass()
    );
    let pad = AtmosphereModel::new().conditions_at(configuration.initial_altitude);
    println!(
        "Launch site: {:.2} °C | {:.2} kPa | {:.4} kg/m³",
        pad.temperature, pad.pressure, pad.air_density
    );

    let run = run_simulation(&configuration);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run.trace.write_table(&mut out, options.stride)?;
    out.flush()?;
    FlightSummary::from_run(&run).display_data();

    let mut csv = BufWriter::new(File::create(&options.csv_path)?);
    write_csv(&mut csv, &run.trace)?;
    csv.flush()?;
    println!("Results written to file \"{}\"", options.csv_path.display());

    let mut saved = BufWriter::new(File::create(&options.save_path)?);
    write_snapshot(&mut saved, &configuration.snapshot())?;
    saved.flush()?;
    println!("Configuration saved to \"{}\"", options.save_path.display());

    Ok(())
}
