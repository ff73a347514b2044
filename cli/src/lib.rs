//! # Greeter Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! Joins names with `", "` and builds greetings from them. The `greeter`
//! binary (`main.rs`) is a thin command-line layer over this library; the
//! modules are public so integration tests and other crates can use them.
//!
//! ```rust
//! use greeter::formatting::join_with_commas;
//! use greeter::greeting::Greeting;
//!
//! assert_eq!(join_with_commas(["Alice", "Bob", "Carol"]), "Alice, Bob, Carol");
//! assert_eq!(Greeting::new(["Alice", "Bob"]).to_string(), "Hello Alice, Bob!");
//! ```

pub mod core;
pub mod formatting;
pub mod greeting;
