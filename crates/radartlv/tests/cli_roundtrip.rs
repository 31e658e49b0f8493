#![cfg(feature = "cli")]

//! Drive the installed binary end to end: simulate a capture, decode it
//! back, and check the JSON the decoder prints.

use std::path::PathBuf;
use std::process::Command;

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/radartlv-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn radartlv() -> Command {
    Command::new(env!("CARGO_BIN_EXE_radartlv"))
}

#[test]
fn simulate_then_decode_roundtrips() {
    let dir = unique_temp_dir("roundtrip");
    let capture = dir.join("capture.bin");

    let simulate = radartlv()
        .args([
            "simulate",
            capture.to_str().unwrap(),
            "--frames",
            "3",
            "--points",
            "6",
            "--leading-noise",
            "17",
        ])
        .output()
        .expect("simulate should run");
    assert!(simulate.status.success(), "simulate failed: {simulate:?}");

    let decode = radartlv()
        .args([
            "decode",
            capture.to_str().unwrap(),
            "--format",
            "json",
            "--timeout",
            "200ms",
        ])
        .output()
        .expect("decode should run");
    assert!(decode.status.success(), "decode failed: {decode:?}");

    let stdout = String::from_utf8(decode.stdout).expect("stdout should be utf-8");
    let frames: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
        .collect();

    assert_eq!(frames.len(), 3);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame["sequence"], (i + 1) as u64);
        assert_eq!(frame["point_count"], 6);
        assert!(frame["summary"]["centroid"].is_array());
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn decode_writes_json_lines_file() {
    let dir = unique_temp_dir("outfile");
    let capture = dir.join("capture.bin");
    let out = dir.join("frames.jsonl");

    let simulate = radartlv()
        .args(["simulate", capture.to_str().unwrap(), "--frames", "2"])
        .output()
        .expect("simulate should run");
    assert!(simulate.status.success());

    let decode = radartlv()
        .args([
            "decode",
            capture.to_str().unwrap(),
            "--timeout",
            "200ms",
            "--quiet",
            "--out",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("decode should run");
    assert!(decode.status.success(), "decode failed: {decode:?}");
    assert!(decode.stdout.is_empty(), "--quiet should silence stdout");

    let contents = std::fs::read_to_string(&out).expect("out file should exist");
    assert_eq!(contents.lines().count(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let output = radartlv().arg("version").output().expect("version runs");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
