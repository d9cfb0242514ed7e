//! Tests for `generate-secret-for-org`.

use crate::support::github::public_key_path;
use crate::support::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_prints_ciphertext_as_last_line() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();

    let output = t.generate(&gh.uri(), "hello world");
    assert_success(&output);

    let out = stdout(&output);
    let last = out.lines().last().expect("no output");
    assert_eq!(gh.open(last), "hello world");
}

#[test]
fn test_stdout_holds_only_the_ciphertext() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();

    let output = t.generate(&gh.uri(), "do-not-echo-me");
    assert_success(&output);
    assert_eq!(stdout(&output).lines().count(), 1);
    assert_stderr_excludes(&output, "do-not-echo-me");
    assert_stderr_contains(&output, ORG);
}

#[test]
fn test_two_runs_differ_but_open_identically() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();

    let first = stdout(&t.generate(&gh.uri(), "same"));
    let second = stdout(&t.generate(&gh.uri(), "same"));

    assert_ne!(first.trim(), second.trim());
    assert_eq!(gh.open(first.trim()), "same");
    assert_eq!(gh.open(second.trim()), "same");
}

#[test]
fn test_never_writes() {
    let t = Test::new();
    let gh = MockGitHub::with_public_key();

    assert_success(&t.generate(&gh.uri(), "value"));
    assert_eq!(gh.requests().len(), 1);
    assert!(gh.requests_with("PUT").is_empty());
}

#[test]
fn test_missing_key_field_fails() {
    let t = Test::new();
    let gh = MockGitHub::start();
    gh.mount(
        Mock::given(method("GET"))
            .and(path(public_key_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key_id": KEY_ID}))),
    );

    let output = t.generate(&gh.uri(), "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "could not get public key for octo-org");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_malformed_key_fails() {
    let t = Test::new();
    let gh = MockGitHub::start();
    gh.mount(
        Mock::given(method("GET"))
            .and(path(public_key_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key_id": KEY_ID,
                "key": "c2hvcnQ=",
            }))),
    );

    let output = t.generate(&gh.uri(), "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "expected 32 bytes");
}

#[test]
fn test_requires_input() {
    let t = Test::new();

    let output = t
        .cmd("generate-secret-for-org")
        .args(["--org", ORG])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--input");
}
