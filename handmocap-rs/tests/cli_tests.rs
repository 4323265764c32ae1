//! End-to-end CLI tests for handmocap-rs

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

/// Write a recording with `frames` valid lines plus one malformed line.
fn write_recording(frames: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for f in 0..frames {
        let mut line = f.to_string();
        for v in 0..63 {
            line.push_str(&format!(" {}.5", f * 10 + v));
        }
        writeln!(file, "{line}").expect("write line");
    }
    writeln!(file, "0 1.0 2.0").expect("write malformed line");
    file.flush().expect("flush");
    file
}

#[test]
fn test_help() {
    Command::cargo_bin("handmocap-rs")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("skeleton"))
        .stdout(predicate::str::contains("rig"));
}

#[test]
fn test_skeleton_info() {
    let recording = write_recording(4);

    Command::cargo_bin("handmocap-rs")
        .expect("binary")
        .args(["skeleton", "info"])
        .arg(recording.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames:        4"))
        .stdout(predicate::str::contains("Skipped lines: 1"));
}

#[test]
fn test_skeleton_info_missing_file_fails() {
    Command::cargo_bin("handmocap-rs")
        .expect("binary")
        .args(["skeleton", "info", "/nonexistent/skeleton.txt"])
        .assert()
        .failure();
}

#[test]
fn test_skeleton_bake_writes_scene_json() {
    let recording = write_recording(5);
    let out_dir = tempfile::tempdir().expect("temp dir");
    let out_path = out_dir.path().join("scene.json");

    Command::cargo_bin("handmocap-rs")
        .expect("binary")
        .args(["skeleton", "bake"])
        .arg(recording.path())
        .arg(&out_path)
        .args(["--frame-offset", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Baked 5 frames into [10, 14]"))
        .stdout(predicate::str::contains("15 markers bound"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).expect("read scene"))
            .expect("valid JSON");
    assert_eq!(json["frame_start"], 10);
    assert_eq!(json["frame_end"], 14);
    assert!(json["objects"]["Hand"].is_object());
    assert!(json["objects"]["PINKY_TIP"].is_object());
}

#[test]
fn test_rig_ring_writes_poses_json() {
    let out_dir = tempfile::tempdir().expect("temp dir");
    let out_path = out_dir.path().join("poses.json");

    Command::cargo_bin("handmocap-rs")
        .expect("binary")
        .args(["rig", "ring"])
        .arg(&out_path)
        .args(["--cameras", "4", "--height", "0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 camera poses"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).expect("read poses"))
            .expect("valid JSON");
    assert_eq!(json.as_array().map(Vec::len), Some(4));
    assert_eq!(json[0]["name"], "Cam_1");
}
