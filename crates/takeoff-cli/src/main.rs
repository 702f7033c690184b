mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "takeoff=info,takeoff_core=info";

#[derive(Parser)]
#[command(
    name = "takeoff",
    version,
    about = "Extract mechanical equipment records from construction drawing PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract equipment records from a drawing PDF (or saved pdftotext output)
    Extract(commands::extract::ExtractArgs),
    /// Inspect and validate drawing-set profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List predefined profiles
    List,
    /// Show the codes and mounting phrases of a predefined profile
    Show {
        /// Preset name (e.g., "mechanical")
        preset: String,
    },
    /// Print the JSON profile schema with field descriptions and example
    Schema,
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Profiles { action } => match action {
            ProfilesAction::List => commands::profiles::list(),
            ProfilesAction::Show { preset } => commands::profiles::show(&preset),
            ProfilesAction::Schema => commands::profiles::schema(),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only extracted data.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}
