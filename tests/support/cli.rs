use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// The binary, run from an empty directory with no `EMPSTATS_*` overrides
/// so that neither a stray config file nor the caller's environment leaks in.
pub fn empstats(workdir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("empstats");
    cmd.current_dir(workdir.path())
        .env_remove("EMPSTATS_BASE_URL")
        .env_remove("EMPSTATS_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

pub fn workdir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Base URL nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}
