// tests/integration_test.rs
use serial_test::serial;
use std::process::Command;

#[test]
#[serial]
fn test_shipit_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "shipit", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("shipit"));
    assert!(stdout.contains("Bump the version"));
    assert!(stdout.contains("--skip-checks"));
}

#[test]
#[serial]
fn test_shipit_version_flag() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "shipit", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("shipit"));
}

#[test]
#[serial]
fn test_invalid_bump_level_rejected_before_any_mutation() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "shipit", "--", "huge"])
        .output()
        .expect("Failed to execute command");

    // clap rejects the value during argument parsing, before the workflow runs
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid value"));
    assert!(stderr.contains("huge"));
}

#[test]
#[serial]
fn test_missing_bump_level_rejected() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "shipit"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Missing bump level"));
}

#[test]
fn test_library_workflow_pieces() {
    use shipit::version::{bump, BumpLevel};

    // The pieces the binary wires together are usable as a library
    let current = semver::Version::new(1, 0, 0);
    let next = bump(&current, BumpLevel::Minor);
    let tag = "v{version}".replace("{version}", &next.to_string());
    assert_eq!(tag, "v1.1.0");
}
