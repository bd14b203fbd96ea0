//! Integration tests for top-level CLI behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

const TEMPLATE: &str =
    r#"{"apdsRequest":{"messageMetaData":{"requestId":"X"},"identityAttributes":{"EDIPI":"Y"}}}"#;

fn run_apdsgen(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_apdsgen");
    Command::new(bin).args(args).output().expect("failed to run apdsgen binary")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn generate_writes_payloads_archive_and_index() {
    let dir = scratch_dir("apdsgen_it_generate");
    let template = dir.join("template.json");
    fs::write(&template, TEMPLATE).unwrap();
    let out = dir.join("out");

    let output = run_apdsgen(&[
        "generate",
        "--template",
        template.to_str().unwrap(),
        "--count",
        "3",
        "--prefix",
        "T",
        "--domain",
        "EX.COM",
        "--out",
        out.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Generated 3 payloads"));
    assert!(out.join("apds_payloads_3.zip").exists());
    assert!(out.join("index.json").exists());

    let payloads: Vec<_> = fs::read_dir(out.join("payloads"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(payloads.len(), 3);
    assert!(payloads.iter().all(|name| name.starts_with("T-") && name.ends_with(".json")));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_rejects_invalid_template_json() {
    let dir = scratch_dir("apdsgen_it_bad_template");
    let template = dir.join("template.json");
    fs::write(&template, "{ nope").unwrap();

    let output = run_apdsgen(&[
        "generate",
        "--template",
        template.to_str().unwrap(),
        "--out",
        dir.join("out").to_str().unwrap(),
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Template JSON is invalid"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn generate_rejects_missing_required_paths() {
    let dir = scratch_dir("apdsgen_it_wrong_shape");
    let template = dir.join("template.json");
    fs::write(&template, r#"{"somethingElse": 1}"#).unwrap();

    let output = run_apdsgen(&[
        "generate",
        "--template",
        template.to_str().unwrap(),
        "--out",
        dir.join("out").to_str().unwrap(),
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("expected structure"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn send_refuses_without_a_url() {
    let dir = scratch_dir("apdsgen_it_send_nourl");
    fs::write(dir.join("a.json"), "{\"x\":1}").unwrap();

    let output = run_apdsgen(&["send", "--dir", dir.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("destination URL"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn send_refuses_an_empty_directory() {
    let dir = scratch_dir("apdsgen_it_send_empty");

    let output = run_apdsgen(&[
        "send",
        "--dir",
        dir.to_str().unwrap(),
        "--url",
        "https://svc.example.com/apds",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Generate payloads first"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn curl_prints_a_reproduction_command() {
    let dir = scratch_dir("apdsgen_it_curl");
    let template = dir.join("template.json");
    fs::write(&template, TEMPLATE).unwrap();
    let out = dir.join("out");

    let generate = run_apdsgen(&[
        "generate",
        "--template",
        template.to_str().unwrap(),
        "--count",
        "1",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(generate.status.success());

    let output = run_apdsgen(&[
        "curl",
        "--dir",
        out.join("payloads").to_str().unwrap(),
        "--url",
        "https://svc.example.com/apds",
        "--header",
        "X-Env: test",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("curl -X POST"));
    assert!(stdout.contains("-H \"X-Env: test\""));
    assert!(stdout.contains("-H \"Content-Type: application/json\""));
    assert!(stdout.contains("--data-binary @"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_apdsgen(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
