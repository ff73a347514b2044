//! # Greeter Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! ## Overview
//!
//! Aggregates the subcommands of the `greeter` binary. Each module defines its
//! own clap arguments struct and a handler that `main.rs` dispatches to.
//!
//! - `greet`: Prints a greeting addressed to the given or configured names
//! - `join`: Prints names joined with `", "`
//!

/// `greeter greet`: salutation, comma-joined names, punctuation.
pub mod greet;
/// `greeter join`: the bare comma-joined list.
pub mod join;
