use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SUNDAY_NOW, init_db, init_db_with_data, rss, setup_test_db, temp_out};

#[test]
fn test_export_records_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    rss()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-03"])
        .assert()
        .success()
        .stdout(contains("CSV export completed (2 rows)"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,user_id,occurred_at,duration_seconds,hours,label,note")
    );
    assert!(content.contains("2025-03-10 10:00:00,3600,1.0,Work"));
    assert!(content.contains("2025-03-11 10:00:00,1800,0.5,Study"));
}

#[test]
fn test_export_records_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_json", "json");

    rss()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of records");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["label"], "Work");
    assert_eq!(rows[0]["duration_seconds"], 3600);
    assert_eq!(rows[1]["occurred_at"], "2025-03-11 10:00:00");
}

#[test]
fn test_export_buckets_json() {
    let db_path = setup_test_db("export_buckets");
    init_db_with_data(&db_path);
    let out = temp_out("export_buckets", "json");

    rss()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--buckets",
            "last7days", "--now", SUNDAY_NOW,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of buckets");

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["period"], "last7days");
    assert_eq!(rows[0]["label"], "Mon 10");
    assert_eq!(rows[0]["starts_at"], "2025-03-10 00:00:00");
    assert_eq!(rows[0]["total_hours"].as_f64(), Some(1.0));
    assert_eq!(rows[6]["record_count"], 0);
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db_with_data(&db_path);
    let out = temp_out("export_empty", "csv");

    rss()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2020"])
        .assert()
        .success()
        .stdout(contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    rss()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed file");

    rss()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("id,user_id"));
}

#[test]
fn test_export_range_conflicts_with_buckets() {
    let db_path = setup_test_db("export_conflict");
    init_db(&db_path);
    let out = temp_out("export_conflict", "csv");

    rss()
        .args([
            "--db", &db_path, "export", "--file", &out, "--range", "2025", "--buckets",
            "last7days",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_empty_range_leaves_existing_file_untouched() {
    let db_path = setup_test_db("export_empty_existing");
    init_db_with_data(&db_path);
    let out = temp_out("export_empty_existing", "csv");
    fs::write(&out, "keep me").expect("seed file");

    // no --force and no stdin answer: must not prompt nor fail
    rss()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2020"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("No records found"))
        .stdout(contains("Overwrite?").not());

    assert_eq!(fs::read_to_string(&out).expect("file kept"), "keep me");
}

#[test]
fn test_export_buckets_reports_success() {
    let db_path = setup_test_db("export_buckets_msg");
    init_db_with_data(&db_path);
    let out = temp_out("export_buckets_msg", "json");

    rss()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--buckets",
            "last7days", "--now", SUNDAY_NOW,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed (7 rows)"));
}
