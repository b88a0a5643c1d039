use std::{path::PathBuf, process::ExitCode};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use portfolio_client::{DirectorySink, FormController, HttpGenerateTransport, SubmitOutcome};
use portfolio_shared::{
    domain::PortfolioConfiguration,
    fields::{ChoiceField, SKILL_CATEGORIES},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;
mod edits;

use config::load_settings;
use edits::FormEdits;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-builder",
    about = "Configure a portfolio and download it from the generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a configuration from the flags, submit it and save the archive.
    Generate {
        /// Generator server URL. `/generate` is resolved against its origin, so
        /// any path on the URL is replaced.
        #[arg(long)]
        server_url: Option<String>,
        /// Directory the archive is written to.
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Submit even when required fields are blank.
        #[arg(long)]
        allow_incomplete: bool,
        #[command(flatten)]
        edits: FormEdits,
    },
    /// List the known values of every choice field.
    Options,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            server_url,
            output_dir,
            allow_incomplete,
            edits,
        } => generate(server_url, output_dir, allow_incomplete, &edits).await,
        Command::Options => {
            print_options();
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn generate(
    server_url: Option<String>,
    output_dir: Option<PathBuf>,
    allow_incomplete: bool,
    edits: &FormEdits,
) -> Result<ExitCode> {
    let settings = load_settings().with_overrides(server_url, output_dir);

    let mut controller = FormController::new();
    edits.apply(&mut controller);

    check_required(controller.configuration(), allow_incomplete)?;

    let transport = HttpGenerateTransport::new(&settings.generator_url)?;
    let sink = DirectorySink::new(&settings.output_dir);

    match controller.submit(&transport, &sink).await {
        Ok(SubmitOutcome::Saved { path, size_bytes }) => {
            println!("Saved {} ({size_bytes} bytes)", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Ok(SubmitOutcome::AlreadyInFlight) => {
            warn!("a submission is already running");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Fails on blank required fields unless `allow_incomplete` is set, in which
/// case they are only logged.
fn check_required(config: &PortfolioConfiguration, allow_incomplete: bool) -> Result<()> {
    let missing = config.missing_required_fields();
    if missing.is_empty() {
        return Ok(());
    }
    let names = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if !allow_incomplete {
        bail!("missing required fields: {names}");
    }
    warn!(missing = %names, "submitting with blank required fields");
    Ok(())
}

fn options_lines() -> Vec<String> {
    let mut lines: Vec<String> = ChoiceField::ALL
        .iter()
        .map(|field| format!("{field}: {}", field.options().join(", ")))
        .collect();
    lines.push(format!("skillsCategories: {}", SKILL_CATEGORIES.join(", ")));
    lines
}

fn print_options() {
    for line in options_lines() {
        println!("{line}");
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
