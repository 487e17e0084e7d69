//! Tests for config file handling.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_malformed_config_fails_before_any_request() {
    let t = Test::new();
    let config = t.write_config("region = \n");

    let output = t.cmd_with_config(&config).arg("/a").output().unwrap();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "failed to parse config file");
    assert_stderr_contains(&output, "SSM_CONFIG");
    assert_stdout_empty(&output);
}

#[test]
fn test_unknown_config_field_fails() {
    let t = Test::new();
    let config = t.write_config("regoin = \"eu-west-1\"\n");

    t.cmd_with_config(&config)
        .arg("/a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("regoin"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let t = Test::new();
    let missing = t.dir.path().join("nope.toml");

    t.cmd_with_config(&missing)
        .arg("/a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_invalid_page_size_in_config() {
    let t = Test::new();
    let config = t.write_config("page_size = 50\n");

    t.cmd_with_config(&config)
        .arg("/a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config value for page_size"));
}

#[test]
fn test_flag_overrides_invalid_config_value() {
    let t = Test::new();
    let config = t.write_config("endpoint_url = \"localhost:4566\"\n");

    // The flag replaces the bad file value, so the failure comes from the
    // unreachable endpoint instead of validation.
    let output = t
        .offline_cmd()
        .env("SSM_CONFIG", &config)
        .arg("/a")
        .output()
        .unwrap();
    assert_exit_code(&output, 1);
    let err = stderr(&output);
    assert!(!err.contains("invalid config value"), "got: {}", err);
}

#[test]
fn test_invalid_endpoint_in_config() {
    let t = Test::new();
    let config = t.write_config("endpoint_url = \"localhost:4566\"\n");

    t.cmd_with_config(&config)
        .arg("/a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("endpoint_url"));
}

#[test]
fn test_absent_default_config_is_fine() {
    let t = Test::new();

    // No config anywhere: reaching the (closed) endpoint proves loading passed.
    let output = t.get_offline("/a");
    assert_exit_code(&output, 1);
    assert!(!stderr(&output).contains("config file"));
}
