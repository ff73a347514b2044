//! # Greeter Greet Command
//!
//! File: cli/src/commands/greet.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! ## Overview
//!
//! Handles `greeter greet`. Settings are resolved in this order:
//! 1. Command-line names, `--salutation` and `--punctuation` (highest priority)
//! 2. The loaded configuration (see `greeter::core::config`)
//! 3. Built-in defaults, which produce `Hello World!`
//!
//! ## Examples
//!
//! ```bash
//! greeter greet Alice Bob Carol        # Hello Alice, Bob, Carol!
//! greeter greet --salutation Hi Alice  # Hi Alice!
//! greeter greet --config ~/team.toml
//! ```
//!
use clap::{builder::NonEmptyStringValueParser, Parser};
use greeter::core::config::{self, Config};
use greeter::core::error::Result;
use greeter::greeting::Greeting;
use tracing::debug;

/// Arguments for `greeter greet`.
#[derive(Parser, Debug)]
pub struct GreetArgs {
    /// Names to greet. Overrides the configured names.
    #[arg(value_name = "NAMES")]
    names: Vec<String>,

    /// Word placed before the names (default: "Hello").
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    salutation: Option<String>,

    /// Text placed after the names (default: "!").
    #[arg(long)]
    punctuation: Option<String>,

    /// Read configuration from this file only, skipping discovery.
    #[arg(long, env = "GREETER_CONFIG", value_name = "PATH")]
    config: Option<String>,
}

pub fn handle_greet(args: GreetArgs) -> Result<()> {
    let cfg = config::load_config(args.config.as_deref())?;
    let greeting = build_greeting(&cfg, args);
    debug!("Resolved greeting: {:?}", greeting);
    println!("{}", greeting);
    Ok(())
}

/// Applies command-line overrides on top of the configured greeting.
fn build_greeting(cfg: &Config, args: GreetArgs) -> Greeting {
    let mut greeting = cfg.to_greeting();
    if !args.names.is_empty() {
        greeting.names = args.names;
    }
    if let Some(salutation) = args.salutation {
        greeting = greeting.with_salutation(salutation);
    }
    if let Some(punctuation) = args.punctuation {
        greeting = greeting.with_punctuation(punctuation);
    }
    greeting
}
