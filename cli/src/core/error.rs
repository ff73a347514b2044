//! # Greeter Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! ## Overview
//!
//! This module defines the error types used throughout Greeter.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `GreeterError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by application code
//!
//! Library operations such as [`crate::formatting::try_join_with_commas`] return
//! `GreeterError` directly so callers can match on it. Command handlers and the
//! configuration loader work in `anyhow::Result` and attach context with
//! `.context(...)` / `.with_context(...)`.
//!
//! ## Examples
//!
//! ```rust
//! use greeter::core::error::GreeterError;
//! use greeter::formatting::try_join_with_commas;
//!
//! match try_join_with_commas([Some("Alice"), None]) {
//!     Err(GreeterError::InvalidArgument { index }) => assert_eq!(index, 1),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for Greeter.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GreeterError {
    /// An element of the sequence to join was absent.
    #[error("Invalid argument: element at index {index} is absent")]
    InvalidArgument { index: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for application code.
pub type Result<T> = anyhow::Result<T>;
