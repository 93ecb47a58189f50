use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{error, info};

use crate::config::{self, OutputFormat};
use crate::evaluation::{evaluate, run_batch, BatchReport, Operation, Outcome};
use crate::properties::{parse_integer, verify_is_odd};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "numprops - integer predicates and digit utilities",
    long_about = "numprops evaluates pure integer predicates (parity, divisibility, \
                  balanced and palindrome digit splits) and arithmetic helpers \
                  (factorial, triangular sums) on values given on the command line \
                  or in batches defined in a YAML configuration file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one operation over one or more values
    Eval {
        /// Operation name, e.g. "is-odd" or "sum_from_one_to"
        operation: Operation,

        /// Values to evaluate
        #[arg(required = true, value_parser = parse_integer, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Divisor for the divides operation
        #[arg(short, long, value_parser = parse_integer, allow_negative_numbers = true)]
        divisor: Option<i64>,
    },
    /// Fail unless the value is odd
    VerifyOdd {
        #[arg(value_parser = parse_integer, allow_negative_numbers = true)]
        value: i64,
    },
    /// Run every batch defined in the configuration file
    Run,
}

pub fn handle_eval(
    operation: Operation,
    values: &[i64],
    divisor: Option<i64>,
    format: OutputFormat,
) -> Result<ExitCode> {
    if operation.requires_divisor() && divisor.is_none() {
        return Err(anyhow!("{} requires --divisor", operation));
    }

    let outcomes: Vec<Outcome> = values
        .iter()
        .map(|&value| evaluate(operation, value, divisor))
        .collect();

    println!("{}", render_outcomes(&outcomes, format)?);

    Ok(exit_code(outcomes.iter().filter(|o| o.is_error()).count()))
}

pub fn handle_verify_odd(value: i64) -> Result<ExitCode> {
    verify_is_odd(value)?;
    println!("{} is odd", value);

    Ok(ExitCode::SUCCESS)
}

pub fn handle_run(config_path: Option<PathBuf>, format: Option<OutputFormat>) -> Result<ExitCode> {
    let config_path = config_path
        .or_else(config::default_config_path)
        .context("Could not determine the configuration path; pass --config")?;
    info!("Using configuration file: {:?}", config_path);

    let config = config::load_config(&config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    info!("Loaded {} batch(es)", config.batches.len());

    let reports: Vec<BatchReport> = config.batches.iter().map(run_batch).collect();

    let format = resolve_format(format, config.output);
    println!("{}", render_reports(&reports, format)?);

    let failures: usize = reports.iter().map(BatchReport::failures).sum();
    if failures > 0 {
        error!("{} evaluation(s) failed", failures);
    }

    Ok(exit_code(failures))
}

pub fn render_outcomes(outcomes: &[Outcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcomes
            .iter()
            .map(Outcome::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(outcomes).context("Failed to serialize outcomes")
        }
    }
}

pub fn render_reports(reports: &[BatchReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut sections = Vec::with_capacity(reports.len());
            for report in reports {
                sections.push(format!(
                    "[{}]\n{}",
                    report.batch,
                    render_outcomes(&report.outcomes, format)?
                ));
            }
            Ok(sections.join("\n\n"))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("Failed to serialize batch reports")
        }
    }
}

/// The command line format wins over the configured one
pub fn resolve_format(requested: Option<OutputFormat>, configured: OutputFormat) -> OutputFormat {
    requested.unwrap_or(configured)
}

fn exit_code(failures: usize) -> ExitCode {
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
