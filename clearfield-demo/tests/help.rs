use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("clearfield-demo");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("clearfield"));
}

#[test]
fn rejects_bad_attrs() {
    let mut cmd = cargo::cargo_bin_cmd!("clearfield-demo");
    cmd.args(["--attrs", r#"{"icon_scale": 9}"#])
        .assert()
        .failure()
        .stderr(contains("icon scale"));
}
