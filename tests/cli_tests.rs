//! CLI integration tests that need no employees endpoint.

mod support;

use std::fs;

use predicates::prelude::*;
use support::cli::{empstats, stdout_of, workdir, UNREACHABLE};

#[test]
fn test_help() {
    let dir = workdir();
    empstats(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("empstats"))
        .stdout(predicate::str::contains("-treemap"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("flags must come before them"));
}

#[test]
fn test_version() {
    let dir = workdir();
    empstats(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("empstats"));
}

#[test]
fn test_help_option_lists_every_report_without_fetching() {
    let dir = workdir();
    let stdout = stdout_of(empstats(&dir).args(["--base-url", UNREACHABLE, "-help"]));
    for token in ["-salary", "-age", "-summary", "-modes", "-treemap", "-help"] {
        assert!(stdout.contains(token), "missing {token} in:\n{stdout}");
    }
}

#[test]
fn test_unknown_options_are_reported_and_skipped() {
    let dir = workdir();
    empstats(&dir)
        .args(["--base-url", UNREACHABLE, "-bogus", "-other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown option: -bogus"))
        .stdout(predicate::str::contains("Unknown option: -other"));
}

#[test]
fn test_flag_after_an_option_is_reported_as_unknown() {
    let dir = workdir();
    empstats(&dir)
        .args(["--base-url", UNREACHABLE, "-bogus", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown option: --json"))
        .stdout(predicate::str::contains(r#""type""#).not());
}

#[test]
fn test_unknown_option_in_json_mode() {
    let dir = workdir();
    empstats(&dir)
        .args(["--base-url", UNREACHABLE, "--json", "-bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"unknown_option""#))
        .stdout(predicate::str::contains(r#""option":"-bogus""#));
}

#[test]
fn test_unreachable_endpoint_exits_nonzero() {
    let dir = workdir();
    empstats(&dir)
        .args(["--base-url", UNREACHABLE, "-salary"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_invalid_config_file_exits_nonzero() {
    let dir = workdir();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[api]\nbase_url = \"ftp://example.com\"\n").expect("write config");

    empstats(&dir)
        .arg("--config")
        .arg(&path)
        .arg("-help")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported scheme 'ftp'"));
}

#[test]
fn test_config_file_in_working_directory_is_picked_up() {
    let dir = workdir();
    fs::write(
        dir.path().join("empstats.toml"),
        "[api]\nbase_url = \"not a url\"\n",
    )
    .expect("write config");

    empstats(&dir)
        .arg("-help")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config value for base_url"));
}

#[test]
fn test_env_override_is_validated() {
    let dir = workdir();
    empstats(&dir)
        .env("EMPSTATS_BASE_URL", "")
        .arg("-help")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config field `base_url` must not be empty"));
}

#[test]
fn test_invalid_color_choice_is_rejected() {
    let dir = workdir();
    empstats(&dir)
        .args(["--color", "sometimes", "-help"])
        .assert()
        .failure();
}
