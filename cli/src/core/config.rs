//! # Greeter Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! ## Overview
//!
//! This module loads, merges and validates the optional TOML configuration
//! that supplies default names and greeting text for `greeter greet`.
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` (or `GREETER_CONFIG`), used on its own
//! 2. Project-specific `.greeter.toml` in the current directory or its ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! names = ["Alice", "Bob"]
//!
//! [greeting]
//! salutation = "Hi"
//! punctuation = "."
//! ```
//!
//! ```rust,no_run
//! let cfg = greeter::core::config::load_config(None)?;
//! println!("{}", cfg.to_greeting());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{GreeterError, Result};
use crate::greeting::{Greeting, DEFAULT_PUNCTUATION, DEFAULT_SALUTATION};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
///
/// Every field is optional so that a value written explicitly in a file,
/// even one equal to the built-in default, can be told apart from an absent one.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Names to greet when none are given on the command line.
    #[serde(default)]
    pub names: Option<Vec<String>>,
    #[serde(default)]
    pub greeting: GreetingConfig,
}

/// Text surrounding the joined names.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GreetingConfig {
    #[serde(default)]
    pub salutation: Option<String>,
    #[serde(default)]
    pub punctuation: Option<String>,
}

impl Config {
    /// Builds the greeting described by this configuration, filling unset
    /// fields with the defaults (`Hello`, `["World"]`, `!`).
    pub fn to_greeting(&self) -> Greeting {
        let greeting = match &self.names {
            Some(names) => Greeting::new(names.iter().cloned()),
            None => Greeting::default(),
        };
        greeting
            .with_salutation(
                self.greeting
                    .salutation
                    .as_deref()
                    .unwrap_or(DEFAULT_SALUTATION),
            )
            .with_punctuation(
                self.greeting
                    .punctuation
                    .as_deref()
                    .unwrap_or(DEFAULT_PUNCTUATION),
            )
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".greeter.toml";

/// Loads the effective configuration.
///
/// When `explicit_path` is given, only that file is read (after `~` expansion)
/// and it must exist. Otherwise user and project files are discovered and merged.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config> {
    let config = match explicit_path {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Greeter", "greeter") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.greeter.toml) found.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root, stopping at the first
/// directory holding `.greeter.toml` or a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let project_config = dir.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    Config {
        names: project_cfg.names.or(user.names),
        greeting: GreetingConfig {
            salutation: project_cfg.greeting.salutation.or(user.greeting.salutation),
            punctuation: project_cfg
                .greeting
                .punctuation
                .or(user.greeting.punctuation),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.greeting.salutation.as_deref() == Some("") {
        return Err(anyhow!(GreeterError::Config(
            "Salutation cannot be empty.".to_string()
        )));
    }
    Ok(())
}
