//! Tests for configuration errors and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    let t = Test::new();

    let mut help = t.cmd("add-org-secrets");
    let mut assert = help.arg("--help").assert().success();
    for flag in ["--url", "--org", "--csvfile", "--overwrite"] {
        assert = assert.stdout(predicate::str::contains(flag));
    }
    assert.stdout(predicate::str::contains("https://api.github.com"));

    t.cmd("generate-secret-for-org")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd("add-org-secrets")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-org-secrets"));
}

#[test]
fn test_missing_token_fails_before_network() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();
    let csv = t.csv_from_pairs("secrets.csv", STANDARD_SECRETS);

    t.cmd("add-org-secrets")
        .env_remove("GITHUB_TOKEN")
        .args(["--url", gh.uri().as_str(), "--org", ORG, "--csvfile"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN must be set"));

    t.cmd("generate-secret-for-org")
        .env_remove("GITHUB_TOKEN")
        .args(["--url", gh.uri().as_str(), "--org", ORG, "--input", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN must be set"));

    assert!(gh.requests().is_empty());
}

#[test]
fn test_missing_required_flags() {
    let t = Test::new();

    let output = t
        .cmd("add-org-secrets")
        .args(["--csvfile", "secrets.csv"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--org");

    let output = t.cmd("add-org-secrets").args(["--org", ORG]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--csvfile");
}

#[test]
fn test_missing_csv_file() {
    let t = Test::new();
    let gh = MockGitHub::start();

    let output = t.add(&gh.uri(), &t.dir.path().join("nope.csv"), &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot open");
    assert!(gh.requests().is_empty());
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();

    let output = t
        .cmd("generate-secret-for-org")
        .args(["--verbose", "--url", gh.uri().as_str(), "--org", ORG, "--input", "x"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_stderr_excludes(&output, TOKEN);
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();

    let output = t.generate(&gh.uri(), "x");
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_log_env_var() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();

    let output = t
        .cmd("generate-secret-for-org")
        .env("ORG_SECRETS_LOG", "org_secrets=trace")
        .args(["--url", gh.uri().as_str(), "--org", ORG, "--input", "x"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "TRACE");
}
