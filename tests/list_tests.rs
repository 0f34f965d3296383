//! Integration tests for list command

#![allow(deprecated)]

use brag::domain::format_date;
use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{brag_cmd, line, write_day_file};

#[test]
fn test_list_date_shows_entries_with_metadata() {
    let temp = TempDir::new().unwrap();
    write_day_file(
        temp.path(),
        "2023-01-01",
        &[
            &line("Test entry", "2023-01-01T12:00:00Z"),
            r#"{"content": "Tagged", "timestamp": "2023-01-01T13:00:00Z", "tags": ["a", "b"], "project": "core"}"#,
        ],
    );

    brag_cmd(temp.path())
        .args(["list", "--date", "2023-01-01"])
        .assert()
        .success()
        .stdout("\n## 2023-01-01\n- Test entry\n- Tagged [core] #a, #b\n");
}

#[test]
fn test_list_date_without_entries() {
    let temp = TempDir::new().unwrap();

    brag_cmd(temp.path())
        .args(["list", "--date", "2023-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No brags found"));
}

#[test]
fn test_list_malformed_date_is_lenient() {
    let temp = TempDir::new().unwrap();
    write_day_file(temp.path(), "2023-01-01", &[&line("x", "2023-01-01T12:00:00Z")]);

    brag_cmd(temp.path())
        .args(["list", "--date", "January 1st"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No brags found"));
}

#[test]
fn test_list_recent_window() {
    let temp = TempDir::new().unwrap();
    let today = Local::now().date_naive();
    let recent = format_date(today - Duration::days(2));
    let old = format_date(today - Duration::days(30));

    write_day_file(
        temp.path(),
        &recent,
        &[&line("Recent brag", &format!("{}T12:00:00Z", recent))],
    );
    write_day_file(
        temp.path(),
        &old,
        &[&line("Old brag", &format!("{}T12:00:00Z", old))],
    );

    brag_cmd(temp.path())
        .args(["list", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("## {}\n- Recent brag", recent)))
        .stdout(predicate::str::contains("Old brag").not());

    brag_cmd(temp.path())
        .args(["list", "--days", "31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Old brag"));
}

#[test]
fn test_list_corrupt_day_file_fails() {
    let temp = TempDir::new().unwrap();
    write_day_file(temp.path(), "2023-01-01", &[r#"{"content": "no timestamp"}"#]);

    brag_cmd(temp.path())
        .args(["list", "--date", "2023-01-01"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("01.jsonl:1"));
}
