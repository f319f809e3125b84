//! src/main.rs

mod cli;

use crate::cli::Cli;
use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tron_address_converter::BatchConverter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    let inputs = if cli.addresses.is_empty() {
        match read_stdin() {
            Ok(lines) => lines,
            Err(e) => {
                error!("failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.addresses
    };

    // Determine the number of threads to use
    let num_threads = cli.threads.unwrap_or_else(num_cpus::get);
    let converter = match BatchConverter::new(num_threads) {
        Ok(converter) => converter,
        Err(e) => {
            error!("failed to start {} worker threads: {}", num_threads, e);
            return ExitCode::FAILURE;
        }
    };
    info!(inputs = inputs.len(), threads = num_threads, "converting");

    let mut failed = 0usize;
    for conversion in converter.convert_all(&inputs) {
        match conversion.result {
            Ok(Some(address)) => println!("{} -> {}", conversion.input, address),
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", conversion.input, e);
                if cli.strict {
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if failed > 0 {
        eprintln!("{} of {} inputs failed", failed, inputs.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Reads one trimmed input per line, skipping blank lines.
fn read_stdin() -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}
