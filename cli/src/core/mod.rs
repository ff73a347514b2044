//! # Greeter Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! ## Overview
//!
//! Foundational pieces shared by the library and the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the application `Result` alias
//!
//! ```rust
//! use greeter::core::config; // For loading configuration
//! use greeter::core::error::{GreeterError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
