//! `crowdnest` command line

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crowdnest_app::{
    check_submission_file, fader_timeline, run_loaded_scenario, CrowdnestConfig, HeadlessScenario,
};

#[derive(Parser, Debug)]
#[command(name = "crowdnest")]
#[command(about = "Crowdnest front-end tooling: headless gallery runs, registration checks")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./crowdnest.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gallery scenario headlessly and print a JSON report
    Run {
        /// Scenario JSON file
        scenario: PathBuf,
        /// Also write the report to this relative path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Validate a registration submission and print field errors as JSON
    Register {
        /// Submission JSON file
        form: PathBuf,
    },
    /// Print the hero headline fader timeline
    Fader {
        /// Passes through the text list
        #[arg(long, default_value = "1")]
        cycles: u32,
        /// Sampling interval in milliseconds
        #[arg(long, default_value = "100")]
        step_ms: u32,
        /// Print samples as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the command succeeded
fn run(cli: Cli) -> Result<bool> {
    let config = CrowdnestConfig::resolve(cli.config.as_deref(), Path::new("."))?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Run { scenario, report } => {
            let loaded = HeadlessScenario::from_path(&scenario)?;
            tracing::info!(scenario = %scenario.display(), steps = loaded.steps.len(), "running scenario");
            let outcome = run_loaded_scenario(&loaded, &config)?;
            outcome.report().write_to_writer(&mut stdout)?;
            if let Some(path) = report {
                outcome.report().write_to_path(&path)?;
            }
            Ok(!outcome.is_failed())
        }
        Command::Register { form } => {
            let report = check_submission_file(&form)?;
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
            Ok(report.valid)
        }
        Command::Fader {
            cycles,
            step_ms,
            json,
        } => {
            let samples = fader_timeline(&config.hero, cycles, step_ms);
            if json {
                serde_json::to_writer_pretty(&mut stdout, &samples)?;
                writeln!(stdout)?;
            } else {
                for sample in &samples {
                    writeln!(stdout, "{sample}")?;
                }
            }
            Ok(true)
        }
        Command::Config => {
            let text = config.to_toml()?;
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write configuration")?;
            Ok(true)
        }
    }
}
