// tests/integration_test.rs
use serial_test::serial;
use std::process::Command;

#[test]
fn test_release_tiers_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-tiers", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-tiers"));
    assert!(stdout.contains("Publish tiered GitHub releases"));
}

#[test]
fn test_release_tiers_version() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-tiers", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-tiers"));
}

#[test]
fn test_missing_env_var_fails() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-tiers"])
        .env_remove("GITHUB_REF_NAME")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing env var GITHUB_REF_NAME"));
}

#[test]
fn test_malformed_ref_name_fails_before_any_io() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "release-tiers", "--", "--ref-name", "widgets"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid reference name"));
}

#[test]
fn test_invalid_version_fails_before_any_io() {
    // Missing the leading 'v'
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "release-tiers",
            "--",
            "--ref-name",
            "checktypes/1.2.3",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Version parsing error"));
}

#[test]
#[serial]
fn test_from_env_reads_configured_variable() {
    std::env::set_var("RELEASE_TIERS_TEST_REF", "widgets/v1.0.0");
    let value = release_tiers::refname::from_env("RELEASE_TIERS_TEST_REF").unwrap();
    assert_eq!(value, "widgets/v1.0.0");
    std::env::remove_var("RELEASE_TIERS_TEST_REF");
}

#[test]
#[serial]
fn test_from_env_rejects_missing_and_empty() {
    std::env::remove_var("RELEASE_TIERS_TEST_REF");
    assert!(release_tiers::refname::from_env("RELEASE_TIERS_TEST_REF").is_err());

    std::env::set_var("RELEASE_TIERS_TEST_REF", "");
    assert!(release_tiers::refname::from_env("RELEASE_TIERS_TEST_REF").is_err());
    std::env::remove_var("RELEASE_TIERS_TEST_REF");
}
