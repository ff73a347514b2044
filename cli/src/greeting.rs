//! # Greeter Greeting
//!
//! File: cli/src/greeting.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! A `Greeting` renders as `"{salutation} {names}{punctuation}"`, with the
//! names joined by [`join_with_commas`]. `Greeting::default()` renders
//! `Hello World!`.
//!
use crate::formatting::join_with_commas;
use std::fmt;

pub const DEFAULT_SALUTATION: &str = "Hello";
pub const DEFAULT_PUNCTUATION: &str = "!";
pub const DEFAULT_NAME: &str = "World";

/// A salutation addressed to an ordered list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub salutation: String,
    pub names: Vec<String>,
    pub punctuation: String,
}

impl Greeting {
    /// Creates a greeting for `names` using the default salutation and punctuation.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_salutation(mut self, salutation: impl Into<String>) -> Self {
        self.salutation = salutation.into();
        self
    }

    pub fn with_punctuation(mut self, punctuation: impl Into<String>) -> Self {
        self.punctuation = punctuation.into();
        self
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            salutation: DEFAULT_SALUTATION.to_string(),
            names: vec![DEFAULT_NAME.to_string()],
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No separating space when there is nobody to address.
        if self.names.is_empty() {
            write!(f, "{}{}", self.salutation, self.punctuation)
        } else {
            write!(
                f,
                "{} {}{}",
                self.salutation,
                join_with_commas(&self.names),
                self.punctuation
            )
        }
    }
}
