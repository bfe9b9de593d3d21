//! tasktop - Simulated process-table dashboard.
//!
//! Usage:
//!   tasktop                      # built-in scenario, default seed
//!   tasktop --seed 7             # a different simulated process mix
//!   tasktop --scenario ./p.json  # load processes from a JSON scenario
//!   tasktop --log-file ./t.log   # append tracing output to a file

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tasktop::registry::{FileRegistry, ProcessRegistry, builtin_scenario};
use tasktop::tui::{App, ControllerConfig};

/// Simulated process-table dashboard.
#[derive(Parser)]
#[command(name = "tasktop", about = "Simulated process-table dashboard", version)]
struct Args {
    /// Seed for the built-in scenario generator.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Load processes from a JSON scenario file instead of generating them.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Render tick in milliseconds.
    #[arg(long, default_value = "250", value_name = "MS")]
    tick_ms: u64,

    /// Let Escape close an open kill-dropdown (variant behavior; off keeps
    /// the dropdown open and Escape only closes the advanced panel).
    #[arg(long)]
    escape_closes_dropdown: bool,

    /// Append logs to this file. Nothing is logged to the terminal while
    /// the TUI owns it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasktop=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path)
    {
        eprintln!("Error opening log file '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    let registry = match &args.scenario {
        Some(path) => match ProcessRegistry::from_scenario_file(path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error loading scenario '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ProcessRegistry::new(builtin_scenario(args.seed)),
    };

    let app = App::new(
        registry,
        FileRegistry::with_fixtures(),
        ControllerConfig {
            escape_closes_dropdown: args.escape_closes_dropdown,
        },
        Duration::from_millis(args.tick_ms),
    );

    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
