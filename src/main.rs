use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use marine_etl::{LogReporter, Pipeline, PipelineConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Clean a marine biodiversity measurement table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input CSV with a header row.
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the cleaned CSV.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// JSON file overriding the cleaning rules.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log each filter step.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stdout)
        .init();

    let config = match &cli.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    let reporter = LogReporter;
    match Pipeline::new(&config, &reporter).run(&cli.input, &cli.output) {
        Ok(summary) => {
            log::debug!(
                "kept {} of {} rows",
                summary.rows_written,
                summary.rows_extracted
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
