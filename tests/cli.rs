//! Tests that drive the `version-gen` binary.

use std::path::Path;
use std::process::{Command, Output};

use version_gen::config::{RELEASE_ENV, UNKNOWN_VERSION_ENV};

fn version_gen(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_version-gen"));
    cmd.args(args)
        .current_dir(dir)
        .env_remove(RELEASE_ENV)
        // keeps git out of the picture
        .env(UNKNOWN_VERSION_ENV, "1")
        .env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run version-gen")
}

#[test]
fn missing_version_file_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&mut version_gen(dir.path(), &["--version-file", "VERSION"]));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: unable to read version file"), "{stderr}");
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
    assert!(!dir.path().join("version.go").exists());
}

#[test]
fn writes_version_go_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("VERSION"), "1.2.3\n").unwrap();

    let output = run(&mut version_gen(dir.path(), &["--version-file", "VERSION"]));

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(dir.path().join("version.go")).unwrap();
    assert!(written.contains("const Version = \"1.2.3\"\n"));
    assert!(written.contains("const GitDirty = true\n"));
    assert!(written.contains("const GitShortHash = \"UNKNOWN\"\n"));
}

#[test]
fn dry_run_json_prints_info() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("VERSION"), "1.2.3").unwrap();

    let output = run(&mut version_gen(
        dir.path(),
        &["--version-file", "VERSION", "-n", "--json"],
    ));

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "version": "1.2.3", "dirty": true, "hash": "UNKNOWN" })
    );
    assert!(!dir.path().join("version.go").exists());
}

#[cfg(unix)]
#[test]
fn non_utf8_unknown_version_skips_hash() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("VERSION"), "1.2.3").unwrap();

    let output = run(version_gen(
        dir.path(),
        &["--version-file", "VERSION", "-n", "--json"],
    )
    .env(UNKNOWN_VERSION_ENV, OsStr::from_bytes(b"\xff")));

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["hash"], "UNKNOWN");
}
