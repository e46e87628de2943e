//! Motorpool demo CLI
//!
//! Drives vehicles through their start/stop lifecycle, either with a fixed
//! sequence on a single vehicle or from a TOML drive script.
//!
//! Usage:
//!   cargo run -p demo -- drive --brand Toyota --year 2020
//!   cargo run -p demo -- script demo/scripts/fleet.toml
//!   cargo run -p demo -- script demo/scripts/fleet.toml --json

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use motorpool_contracts::error::{MotorpoolError, MotorpoolResult};
use motorpool_core::{ConsoleSink, RecordingSink, StatusSink, Vehicle};
use motorpool_script::{run_script, DriveScript, Outcome, ScriptReport};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Motorpool: start and stop some engines.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Motorpool vehicle demo",
    long_about = "Runs vehicles through guarded engine start/stop transitions,\n\
                  printing a status line for every successful transition."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run start, start, stop, stop, start, stop on one vehicle.
    Drive {
        #[arg(long, default_value = "Toyota")]
        brand: String,
        /// Manufacture year. Any integer is accepted.
        #[arg(long, default_value_t = 2020, allow_negative_numbers = true)]
        year: i32,
    },
    /// Load a TOML drive script and run every vehicle in it.
    Script {
        path: PathBuf,
        /// Print the full report as JSON instead of a summary. Status lines
        /// are suppressed so stdout stays valid JSON.
        #[arg(long)]
        json: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every start/stop call, including no-ops.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Drive { brand, year } => {
            drive(brand, year);
            Ok(())
        }
        Command::Script { path, json } => script(&path, json),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn drive(brand: String, year: i32) {
    let mut vehicle = Vehicle::new(brand, year);
    println!("Vehicle: {}", vehicle);

    println!("start -> {}", vehicle.start_engine());
    println!("start -> {}", vehicle.start_engine());
    vehicle.stop_engine();
    vehicle.stop_engine();
    println!("start -> {}", vehicle.start_engine());
    vehicle.stop_engine();

    println!("Final state: {}", vehicle.engine_state());
}

fn script(path: &Path, json: bool) -> MotorpoolResult<()> {
    let script = DriveScript::from_file(path)?;
    info!(path = %path.display(), "drive script loaded");

    let report = run_script(&script, |_| -> Box<dyn StatusSink> {
        if json {
            Box::new(RecordingSink::new())
        } else {
            Box::new(ConsoleSink)
        }
    });

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).map_err(|e| MotorpoolError::Config {
                reason: format!("failed to render report: {}", e),
            })?;
        println!("{}", rendered);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &ScriptReport) {
    println!();
    println!("Drive script summary");
    println!("====================");
    for vehicle in &report.vehicles {
        let ignored = vehicle
            .steps
            .iter()
            .filter(|s| s.outcome == Outcome::AlreadyRunning)
            .count();
        println!(
            "  {} ({}): {} steps, {} ignored starts, final state {}",
            vehicle.brand,
            vehicle.year,
            vehicle.steps.len(),
            ignored,
            vehicle.final_state
        );
    }
    println!("Successful starts across fleet: {}", report.starts());
}
