//! Tests for single-key mode.

use crate::support::*;

#[test]
fn test_unreachable_store_reports_error() {
    let t = Test::new();

    let output = t.get_offline("/app/db/password");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "✗");
    assert_stdout_empty(&output);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let t = Test::new();

    let output = t
        .offline_cmd()
        .args(["--verbose", "/app/db/password"])
        .output()
        .unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "fetching parameter");
    assert_stdout_empty(&output);
}

#[test]
fn test_log_file_receives_json() {
    let t = Test::new();
    let log = t.dir.path().join("ssm.log");

    let output = t
        .offline_cmd()
        .args(["--verbose", "--log-file"])
        .arg(&log)
        .arg("/app/db/password")
        .output()
        .unwrap();
    assert_exit_code(&output, 1);

    let contents = std::fs::read_to_string(&log).unwrap();
    let first = contents.lines().next().expect("log file is empty");
    assert!(first.starts_with('{'), "not JSON: {}", first);
    assert!(contents.contains("fetching parameter"));
}
