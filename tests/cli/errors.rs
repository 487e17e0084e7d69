//! Tests for argument handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_describes_modes() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("Usage"));
    assert!(out.contains("--endpoint-url"));
    assert!(out.contains("--page-size"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_two_keys_is_usage_error() {
    let t = Test::new();

    let output = t.cmd().args(["/a", "/b"]).output().unwrap();
    assert_exit_code(&output, 2);
    assert_stdout_empty(&output);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let t = Test::new();

    let output = t.cmd().args(["--nope", "/a"]).output().unwrap();
    assert_exit_code(&output, 2);
}

#[test]
fn test_page_size_out_of_range() {
    let t = Test::new();

    for size in ["0", "11", "abc"] {
        t.cmd()
            .args(["--page-size", size, "/a"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("page-size"));
    }
}

#[test]
fn test_page_size_from_env_is_checked() {
    let t = Test::new();

    t.cmd()
        .env("SSM_PAGE_SIZE", "42")
        .arg("/a")
        .assert()
        .code(2);
}
