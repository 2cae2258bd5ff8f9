use std::{fs, path::Path, process::Command};

use asserting::prelude::*;
use tempfile::TempDir;

const LOG: &str = "\
http 2024-01-01T00:00:01.000000Z app/lb/1 10.0.0.1:5000 10.0.1.1:80 0.001 0.002 0.000 200 100 200 \"GET / HTTP/1.1\"
this line is not an access log entry
http 2024-01-01T00:00:02.000000Z app/lb/1 10.0.0.1:5000 10.0.1.2:80 0.001 0.002 0.000 200 924 1848 \"GET / HTTP/1.1\"
";

fn write_log(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn summarizes_log_given_on_command_line() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), "access.log", LOG);

    let output = Command::new(env!("CARGO_BIN_EXE_elb-bytes"))
        .arg(dir.path().join("access.log"))
        .output()
        .expect("Failed to run elb-bytes");

    assert_that!(output.status.success()).is_true();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines[1].split_whitespace().collect::<Vec<_>>(),
        ["10.0.0.1:5000", "1.00", "KB", "2.00", "KB"]
    );
    assert!(stdout.ends_with(
        "\nSummary:\nTotal Received Bytes: 1.00 KB\nTotal Sent Bytes: 2.00 KB\n"
    ));
}

#[test]
fn reads_default_path_relative_to_working_directory() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), "tmp/merged_log_file.log", LOG);

    let output = Command::new(env!("CARGO_BIN_EXE_elb-bytes"))
        .current_dir(dir.path())
        .output()
        .expect("Failed to run elb-bytes");

    assert_that!(output.status.success()).is_true();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Sent Bytes: 2.00 KB"));
}

#[test]
fn empty_log_reports_zero_totals() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), "empty.log", "");

    let output = Command::new(env!("CARGO_BIN_EXE_elb-bytes"))
        .arg(dir.path().join("empty.log"))
        .output()
        .expect("Failed to run elb-bytes");

    assert_that!(output.status.success()).is_true();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.contains("Total Received Bytes: 0.00 B\nTotal Sent Bytes: 0.00 B\n"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_elb-bytes"))
        .arg(dir.path().join("nope.log"))
        .output()
        .expect("Failed to run elb-bytes");

    assert_that!(output.status.success()).is_false();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read access log"));
}
