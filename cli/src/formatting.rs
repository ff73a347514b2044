//! # Greeter Formatting
//!
//! File: cli/src/formatting.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! ## Overview
//!
//! Joins an ordered sequence of strings with the `", "` delimiter. The delimiter
//! is inserted strictly between adjacent elements, never before the first or
//! after the last. Elements are copied verbatim: no trimming, no escaping, and
//! empty strings are ordinary elements.
//!
//! | Input                        | Output                |
//! |------------------------------|-----------------------|
//! | `[]`                         | `""`                  |
//! | `["Alice"]`                  | `"Alice"`             |
//! | `["Alice", "Bob", "Carol"]`  | `"Alice, Bob, Carol"` |
//!
//! ## Examples
//!
//! ```rust
//! use greeter::formatting::join_with_commas;
//!
//! assert_eq!(join_with_commas(["Alice", "Bob"]), "Alice, Bob");
//! assert_eq!(join_with_commas(Vec::<String>::new()), "");
//! ```
//!
use crate::core::error::GreeterError;

/// The literal delimiter placed between adjacent elements.
pub const DELIMITER: &str = ", ";

/// Joins `parts` in order, separated by [`DELIMITER`].
///
/// Accepts anything iterable over string-like items (`&[&str]`, `Vec<String>`,
/// arrays, iterator adapters). The caller keeps ownership of borrowed inputs.
pub fn join_with_commas<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(DELIMITER);
        }
        out.push_str(part.as_ref());
    }
    out
}

/// Fallible variant of [`join_with_commas`] for sequences that may contain
/// absent elements.
///
/// Returns [`GreeterError::InvalidArgument`] carrying the index of the first
/// `None`. No partial output is produced.
pub fn try_join_with_commas<I, S>(parts: I) -> Result<String, GreeterError>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (index, part) in parts.into_iter().enumerate() {
        let part = part.ok_or(GreeterError::InvalidArgument { index })?;
        if index > 0 {
            out.push_str(DELIMITER);
        }
        out.push_str(part.as_ref());
    }
    Ok(out)
}
