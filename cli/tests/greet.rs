//! # Greeter CLI Greet Integration Tests
//!
//! File: cli/tests/greet.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! Integration tests for `greeter greet`, including configuration discovery.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_greet_defaults() {
    let dir = sandbox();
    greeter_cmd(&dir)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello World!\n");
}

#[test]
fn test_greet_names() {
    let dir = sandbox();
    greeter_cmd(&dir)
        .args(["greet", "Alice", "Bob", "Carol"])
        .assert()
        .success()
        .stdout("Hello Alice, Bob, Carol!\n");
}

#[test]
fn test_greet_overrides() {
    let dir = sandbox();
    greeter_cmd(&dir)
        .args(["greet", "--salutation", "Goodbye", "--punctuation", ".", "Alice"])
        .assert()
        .success()
        .stdout("Goodbye Alice.\n");
}

#[test]
fn test_greet_uses_project_config() {
    let dir = sandbox();
    fs::write(
        dir.path().join(".greeter.toml"),
        "names = [\"Alice\", \"Bob\"]\n[greeting]\nsalutation = \"Hi\"\n",
    )
    .unwrap();

    greeter_cmd(&dir)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hi Alice, Bob!\n");
}

#[test]
fn test_greet_explicit_config_via_env() {
    let dir = sandbox();
    let path = dir.path().join("team.toml");
    fs::write(&path, "names = [\"Carol\"]\n").unwrap();

    greeter_cmd(&dir)
        .arg("greet")
        .env("GREETER_CONFIG", &path)
        .assert()
        .success()
        .stdout("Hello Carol!\n");
}

#[test]
fn test_greet_malformed_config_fails() {
    let dir = sandbox();
    fs::write(dir.path().join(".greeter.toml"), "names = [").unwrap();

    greeter_cmd(&dir)
        .arg("greet")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_greet_empty_salutation_in_config_fails() {
    let dir = sandbox();
    fs::write(
        dir.path().join(".greeter.toml"),
        "[greeting]\nsalutation = \"\"\n",
    )
    .unwrap();

    greeter_cmd(&dir)
        .arg("greet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Salutation cannot be empty"));
}

// `directories` resolves the user config dir from XDG_CONFIG_HOME on Linux only.
#[cfg(target_os = "linux")]
#[test]
fn test_greet_project_restoring_defaults_overrides_user_config() {
    let dir = sandbox();
    let user_dir = dir.path().join("xdg").join("greeter");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(
        user_dir.join("config.toml"),
        "names = [\"Alice\"]\n[greeting]\nsalutation = \"Hi\"\npunctuation = \"?\"\n",
    )
    .unwrap();

    greeter_cmd(&dir)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hi Alice?\n");

    fs::write(
        dir.path().join(".greeter.toml"),
        "[greeting]\nsalutation = \"Hello\"\npunctuation = \"!\"\n",
    )
    .unwrap();

    greeter_cmd(&dir)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello Alice!\n");
}
