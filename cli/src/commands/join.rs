//! # Greeter Join Command
//!
//! File: cli/src/commands/join.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! Handles `greeter join [NAMES]...` and `greeter join --stdin`. With `--stdin`
//! each input line is one element, taken verbatim apart from its line
//! terminator.
//!
use anyhow::Context;
use clap::Parser;
use greeter::core::error::Result;
use greeter::formatting::join_with_commas;
use std::io::{self, BufRead};
use tracing::{debug, info};

/// Arguments for `greeter join`.
#[derive(Parser, Debug)]
pub struct JoinArgs {
    /// Elements to join, in order.
    #[arg(value_name = "NAMES")]
    names: Vec<String>,

    /// Read elements from standard input, one per line.
    #[arg(long, conflicts_with = "names")]
    stdin: bool,
}

/// Prints the joined elements followed by a newline.
pub fn handle_join(args: JoinArgs) -> Result<()> {
    let parts = if args.stdin {
        info!("Reading elements from standard input");
        read_parts(io::stdin().lock())?
    } else {
        args.names
    };
    debug!("Joining {} element(s)", parts.len());
    println!("{}", join_with_commas(&parts));
    Ok(())
}

/// Collects one element per line from `reader`.
fn read_parts<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.with_context(|| format!("Failed to read input line {}", i + 1)))
        .collect()
}
