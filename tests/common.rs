#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rss() -> Command {
    cargo_bin_cmd!("rsessionstats")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsessionstats.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rss()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add(db_path: &str, date: &str, time: &str, duration: &str, label: &str) {
    rss()
        .args([
            "--db", db_path, "add", date, time, duration, "--label", label,
        ])
        .assert()
        .success();
}

/// Initialize DB and add the Monday/Tuesday week used by many tests.
///
/// 2025-03-10 is a Monday; the reference "now" is the following Sunday.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add(db_path, "2025-03-10", "10:00", "1h", "Work");
    add(db_path, "2025-03-11", "10:00", "30m", "Study");
}

pub const SUNDAY_NOW: &str = "2025-03-16 20:00";

/// Run a command and parse its stdout as JSON.
pub fn json_output(args: &[&str]) -> serde_json::Value {
    let out = rss().args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid JSON on stdout")
}
