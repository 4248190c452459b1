#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lw() -> Command {
    cargo_bin_cmd!("lifeweeks")
}

/// Create a unique settings snapshot path inside the system temp dir and
/// remove any existing file
pub fn setup_settings(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lifeweeks.json", name));
    let settings_path = path.to_string_lossy().to_string();
    fs::remove_file(&settings_path).ok();
    settings_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed a snapshot with a birthdate and two milestones via the CLI
pub fn seed_settings(settings_path: &str) {
    lw().args([
        "--settings",
        settings_path,
        "set",
        "--birthdate",
        "2000-01-01",
        "--expectancy",
        "90",
    ])
    .assert()
    .success();

    lw().args([
        "--settings",
        settings_path,
        "milestone",
        "add",
        "2005-06-15",
        "Started school",
        "--category",
        "education",
    ])
    .assert()
    .success();

    lw().args([
        "--settings",
        settings_path,
        "milestone",
        "add",
        "2018-09-01",
        "First job",
        "--color",
        "#4A90D9",
        "--category",
        "career",
    ])
    .assert()
    .success();
}
