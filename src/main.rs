use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use numprops::cli::{handle_eval, handle_run, handle_verify_odd, Cli, Commands};
use numprops::constants::logging::{DEBUG_FILTER, DEFAULT_FILTER, VERBOSE_FILTER};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);
    debug!("Parsed arguments: {:?}", cli);

    let result = match cli.command {
        Commands::Eval {
            operation,
            values,
            divisor,
        } => handle_eval(operation, &values, divisor, cli.format.unwrap_or_default()),
        Commands::VerifyOdd { value } => handle_verify_odd(value),
        Commands::Run => handle_run(cli.config, cli.format),
    };

    // Logged once; `main` never returns an `Err`
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that stdout carries only results.
/// `--verbose` wins over `RUST_LOG`.
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        1 => EnvFilter::new(VERBOSE_FILTER),
        _ => EnvFilter::new(DEBUG_FILTER),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
