// crates/files_helper/tests/cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Creates a fake opener script that records its first argument in `record`.
#[cfg(unix)]
fn create_fake_opener(dir: &TempDir, record: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.path().join("fake_open");
    fs::write(&path, format!("#!/bin/sh\nprintf '%s' \"$1\" > \"{}\"\n", record.display())).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// The opener is not waited on, so poll for its output.
fn wait_for_file(path: &std::path::Path) -> Option<String> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Ok(content) = fs::read_to_string(path) {
            if !content.is_empty() {
                return Some(content);
            }
        }
        thread::sleep(Duration::from_millis(20));
    }
    None
}

#[test]
#[cfg(unix)]
fn test_open_file_runs_configured_opener() {
    let temp_dir = TempDir::new().unwrap();
    let record = temp_dir.path().join("opened.txt");
    let opener = create_fake_opener(&temp_dir, &record);

    Command::cargo_bin("open_file")
        .unwrap()
        .arg("report.pdf")
        .env("OPEN_FILE_COMMAND", &opener)
        .env_remove("DISABLE_OPEN_FILE")
        .assert()
        .success();

    assert_eq!(wait_for_file(&record).as_deref(), Some("report.pdf"));
}

#[test]
fn test_open_file_swallows_missing_opener() {
    Command::cargo_bin("open_file")
        .unwrap()
        .arg("report.pdf")
        .env("OPEN_FILE_COMMAND", "definitely-not-a-real-opener")
        .env_remove("DISABLE_OPEN_FILE")
        .assert()
        .success();
}

#[test]
fn test_open_file_verbose_logs_failure() {
    Command::cargo_bin("open_file")
        .unwrap()
        .args(["--verbose", "report.pdf"])
        .env("OPEN_FILE_COMMAND", "definitely-not-a-real-opener")
        .env_remove("DISABLE_OPEN_FILE")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("open_file failed"));
}

#[test]
#[cfg(unix)]
fn test_disable_open_file_skips_launch() {
    let temp_dir = TempDir::new().unwrap();
    let record = temp_dir.path().join("opened.txt");
    let opener = create_fake_opener(&temp_dir, &record);

    Command::cargo_bin("open_file")
        .unwrap()
        .arg("report.pdf")
        .env("OPEN_FILE_COMMAND", &opener)
        .env("DISABLE_OPEN_FILE", "1")
        .assert()
        .success();

    thread::sleep(Duration::from_millis(200));
    assert!(!record.exists());
}

#[test]
fn test_open_file_requires_path() {
    Command::cargo_bin("open_file")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<path>"));
}
