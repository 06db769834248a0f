use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("payloads").join("two_officers.json");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_renders_svg_to_stdout() {
    let exe = assert_cmd::cargo_bin!("soctok-cli");
    let output = Command::new(exe)
        .args(["render", fixture().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).expect("utf-8 svg");
    assert!(stdout.starts_with("<svg"));
    assert_eq!(stdout.matches("<circle").count(), 2);
    assert_eq!(stdout.matches("<line").count(), 1);
    assert!(stdout.contains(r##"fill="#231f20""##));
}

#[test]
fn cli_renders_svg_to_a_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("token.svg");

    let exe = assert_cmd::cargo_bin!("soctok-cli");
    Command::new(exe)
        .args([
            "render",
            "--fit",
            "canvas",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.contains(r#"viewBox="-381 -200 762 400""#));
}

#[test]
fn cli_render_is_deterministic() {
    let exe = assert_cmd::cargo_bin!("soctok-cli");
    let run = || {
        let output = Command::new(&exe)
            .args(["render", fixture().to_string_lossy().as_ref()])
            .assert()
            .success();
        output.get_output().stdout.clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn cli_parse_validates_and_echoes_the_payload() {
    let exe = assert_cmd::cargo_bin!("soctok-cli");
    let output = Command::new(exe)
        .args(["parse", "--pretty", fixture().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).expect("utf-8 json");
    assert!(stdout.contains("\"focusedId\": 1"));
    assert!(stdout.contains("Steve Jobs"));
}

#[test]
fn cli_rejects_a_missing_focused_officer() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let bad = tmp.path().join("bad.json");
    fs::write(
        &bad,
        r#"{ "focusedId": 42, "nodes": [{ "id": 1, "name": "Solo" }], "links": [] }"#,
    )
    .expect("write fixture");

    let exe = assert_cmd::cargo_bin!("soctok-cli");
    let output = Command::new(exe)
        .args(["render", bad.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(output.get_output().stderr.clone()).expect("utf-8 stderr");
    assert!(stderr.contains("focused officer 42"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("soctok-cli");
    Command::new(exe)
        .args(["render", "--bogus"])
        .assert()
        .failure()
        .code(2);
}
