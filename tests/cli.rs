use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const VIEW: &str = r##"{
  "metadata": { "objects": { "line": { "lineColor": "#ABCDEF" } } },
  "categorical": {
    "categories": [{ "source": { "displayName": "Year" }, "values": [2019, 2018, 2020] }],
    "values": [{ "source": { "displayName": "Sales" }, "values": [10, 5, 20] }]
  }
}"##;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("linechart"));
}

#[test]
fn render_writes_svg() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("view.json");
    let out = dir.path().join("chart.svg");
    fs::write(&data, VIEW).unwrap();

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("render")
        .arg("--data")
        .arg(&data)
        .arg("--out")
        .arg(&out)
        .args(["--width", "640", "--height", "400"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Rendered 3 points"));

    let svg = fs::read_to_string(&out).unwrap();
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.to_ascii_lowercase().contains("#abcdef"));
}

#[test]
fn render_empty_table_still_writes_frame() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("empty.json");
    let out = dir.path().join("empty.svg");
    fs::write(
        &data,
        r#"{ "categorical": { "categories": [{ "values": [] }], "values": [{ "values": [] }] } }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("render").arg("--data").arg(&data).arg("--out").arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("warning: No data"));
    assert!(out.exists());
}

#[test]
fn capabilities_and_objects() {
    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("capabilities");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("showAllDataPoints"));

    let dir = tempdir().unwrap();
    let data = dir.path().join("view.json");
    fs::write(&data, VIEW).unwrap();

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("objects").arg("--data").arg(&data).arg("line");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#ABCDEF"));

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("objects").arg("--data").arg(&data).arg("legend");
    cmd.assert().failure();
}
