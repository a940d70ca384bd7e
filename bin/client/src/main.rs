//! File service client
//!
//! Fetches file metadata or content over REST or gRPC and prints it, or saves
//! it to a file.

mod backend;
mod config;
mod constants;
mod dispatch;
mod error;
mod logger;
mod output;

use clap::Parser;
use config::{ClientConfig, ConfigArgs};
use constants::FAILURE_EXIT_CODE;
use dispatch::Command;
use error::Outcome;
use log::{info, warn};
use output::OutputSink;
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "file-client")]
#[command(about = "CLI to retrieve file metadata and contents")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();

    let config = match ClientConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    info!(
        "Running {} via {:?} backend",
        cli.command.name(),
        config.backend
    );
    let backend = config.backend.initialize(&config);

    let outcome = {
        let mut sink = OutputSink::new(config.output.clone(), std::io::stdout().lock());
        match dispatch::run(&cli.command, backend.as_ref(), &mut sink) {
            Ok(()) => Outcome::Success,
            Err(err) => err.outcome(),
        }
    };

    if let Some(message) = outcome.message() {
        // stdout may already be gone, e.g. a closed pipe
        if let Err(e) = writeln!(std::io::stdout(), "{}", message) {
            warn!("Could not print outcome message: {}", e);
        }
    }
    ExitCode::from(outcome.exit_code())
}
