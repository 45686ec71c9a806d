//! CLI entry point for pedigree posterior inference.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ped_common::{OutputFormat, Result};
use ped_config::Priors;
use ped_core::exit_codes::ExitCode;
use ped_core::output::{render_json, render_text};
use ped_core::{load_pedigree, run_inference};

/// Exact gene/trait posterior inference over a family pedigree.
#[derive(Debug, Parser)]
#[command(name = "ped-core", version, about)]
struct Cli {
    /// Pedigree CSV (columns: name, mother, father, trait).
    data: PathBuf,

    /// Priors file in JSON; embedded defaults are used when omitted.
    #[arg(long, env = "PED_PRIORS")]
    priors: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(rendered) => print!("{rendered}"),
        Err(err) => {
            error!(code = err.code(), "{err}");
            eprintln!("error: {err}");
            process::exit(ExitCode::from_error(&err).as_i32());
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let priors = match &cli.priors {
        Some(path) => Priors::from_path(path)?,
        None => Priors::default(),
    };

    let population = load_pedigree(&cli.data)?;
    let table = run_inference(&population, &priors)?;

    match cli.format {
        OutputFormat::Text => Ok(render_text(&table)),
        OutputFormat::Json => render_json(&table),
    }
}

fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
