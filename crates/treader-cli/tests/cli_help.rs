use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    cargo_bin_cmd!("treader")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--opacity"))
        .stdout(predicate::str::contains("--log-file"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("treader")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_subcommand() {
    cargo_bin_cmd!("treader")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit:"))
        .stdout(predicate::str::contains("platform:"));
}

#[test]
fn test_invalid_opacity_is_rejected() {
    cargo_bin_cmd!("treader")
        .args(["--opacity", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("opacity"));
}

#[test]
fn test_narrow_width_is_rejected_before_terminal_setup() {
    cargo_bin_cmd!("treader")
        .args(["--width", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("width"));
}

#[test]
fn test_refuses_to_run_without_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("novel.txt");
    std::fs::write(&path, "chapter one\n").unwrap();

    cargo_bin_cmd!("treader")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("terminal"));
}
