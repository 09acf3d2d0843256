use clap::Parser;
use emtrace::config::{ScenarioConfig, PRESET_NAMES};
use emtrace::simulation::Tracer;
use log::info;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Trace charged particles and dynamical systems with fixed-step Runge-Kutta schemes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML scenario file
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in scenario
    #[arg(short, long, default_value = "cyclotron")]
    preset: String,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the step size
    #[arg(long, allow_negative_numbers = true)]
    step: Option<f64>,

    /// Override the ensemble seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the built-in scenario names and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list_presets {
        for name in PRESET_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => ScenarioConfig::from_file(path)?,
        None => ScenarioConfig::preset(&args.preset)?,
    };
    if let Some(step) = args.step {
        config.step = step;
    }
    if let Some(seed) = args.seed {
        if let Some(ensemble) = config.ensemble.as_mut() {
            ensemble.seed = seed;
        }
    }

    let tracer = Tracer::new(&config)?;
    let out: Box<dyn Write> = match &args.output {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let summary = tracer.run(out)?;

    if let Some(path) = &args.output {
        info!("{} rows written to {}", summary.rows, path.display());
    }
    Ok(())
}
