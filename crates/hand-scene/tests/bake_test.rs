//! End-to-end tests: parse a recording, bake it, inspect the scene.

use std::io::Cursor;

use fphab_skeleton::parser;
use hand_scene::{BakeConfig, Scene, bake};
use pretty_assertions::assert_eq;

/// A recording with `frames` valid lines and one corrupt line in the middle.
fn recording_with_corruption(frames: usize) -> String {
    let mut out = String::new();
    for f in 0..frames {
        if f == frames / 2 {
            out.push_str("corrupt line that is not a frame\n");
        }
        out.push_str(&f.to_string());
        for v in 0..63 {
            out.push_str(&format!(" {}", (f * 100 + v) as f64));
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_parse_and_bake_end_to_end() {
    let sequence = parser::parse_reader(Cursor::new(recording_with_corruption(10))).unwrap();
    assert_eq!(sequence.len(), 10);
    assert_eq!(sequence.skipped_lines, 1);

    let config = BakeConfig::default();
    let mut scene = Scene::with_hand_markers(&config.root_object);
    let report = bake(&mut scene, &sequence, &config).unwrap();

    // 10 kept frames, offset 1: range is exactly [1, 10] despite the skip.
    assert_eq!(report.frame_start, 1);
    assert_eq!(report.frame_end, 10);
    assert_eq!(scene.object("Hand").unwrap().track().len(), 10);
    assert_eq!(scene.object("MIDDLE_TIP").unwrap().track().len(), 10);
}

#[test]
fn test_end_to_end_rebake_matches_first_run() {
    let sequence = parser::parse_reader(Cursor::new(recording_with_corruption(6))).unwrap();
    let config = BakeConfig::default();

    let mut scene = Scene::with_hand_markers(&config.root_object);
    bake(&mut scene, &sequence, &config).unwrap();
    let baseline = scene.clone();

    bake(&mut scene, &sequence, &config).unwrap();
    assert_eq!(scene, baseline);
}
