//! spacetune CLI
//!
//! # Usage
//!
//! ```bash
//! # Print the node chain block of an experiment
//! spacetune extract experiment.yaml --key node_chain
//!
//! # Instantiate the node chain with concrete parameter values
//! spacetune instantiate experiment.yaml --key node_chain --params setting.yaml --set _c=0.5
//!
//! # Show resolved search spaces
//! spacetune space nodes.yaml --node SvmNode --format text
//! ```
//!
//! Warnings are logged to stderr; set `RUST_LOG` to override the level.

use clap::Parser;
use spacetune::cli::{run_command, Cli, LogLevel};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = LogLevel::from_flags(cli.quiet, cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.filter_directive().into()),
        )
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
