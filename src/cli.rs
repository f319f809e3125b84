//! src/cli.rs

use clap::Parser;

/// Converts hex account identifiers to Base58Check Tron (TRX) addresses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hex addresses to convert, with or without a `0x` prefix. Longer inputs
    /// keep only their last 40 hex digits. Reads one per line from stdin when
    /// none are given.
    pub addresses: Vec<String>,

    /// Number of worker threads. Defaults to all available cores.
    #[arg(long)]
    pub threads: Option<usize>,

    /// Stop at the first invalid input instead of reporting it and continuing.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
