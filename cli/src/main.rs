//! # Greeter Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! ## Overview
//!
//! This file serves as the entry point for the `greeter` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the `greet` and `join` handlers
//!
//! ## Examples
//!
//! ```bash
//! # Hello Alice, Bob, Carol!
//! greeter greet Alice Bob Carol
//!
//! # Alice, Bob
//! printf 'Alice\nBob\n' | greeter join --stdin
//!
//! # Show where configuration is loaded from
//! greeter -v greet
//! ```
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "greeter",
    about = "Join names with commas and greet them",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a greeting for the given (or configured) names.
    #[command(alias = "g")]
    Greet(commands::greet::GreetArgs),
    /// Print the names joined with ", ".
    #[command(alias = "j")]
    Join(commands::join::JoinArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Greet(args) => commands::greet::handle_greet(args),
        Commands::Join(args) => commands::join::handle_join(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
