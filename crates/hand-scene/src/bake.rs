//! The animation bake: drive the root and finger markers from a recording.
//!
//! For each parsed frame, all 21 joints are mapped through the
//! world → camera → scene transform; the wrist becomes the root object's
//! location and each of the 15 mapped joints becomes its marker's location,
//! with a keyframe recorded at `frame_offset + frame index`.
//!
//! Markers are resolved by name once at the start of the bake. Absent
//! markers are warned once per run and skipped every frame; an absent root
//! object is fatal and aborts before anything in the scene is touched.
//! Pre-existing animation on the root and all bound markers is cleared
//! first, so re-running the bake on the same input replaces the previous
//! keyframe set instead of accumulating.

use fphab_skeleton::{
    CameraExtrinsic, Joint, MARKER_JOINTS, SceneConvention, SkeletonSequence, SkeletonTransformer,
};
use log::{debug, info, warn};

use crate::error::{Result, SceneError};
use crate::scene::Scene;

/// Configuration of one bake run.
#[derive(Debug, Clone, PartialEq)]
pub struct BakeConfig {
    /// Name of the armature root object driven by the wrist joint
    pub root_object: String,
    /// Output frame number of the first recorded frame
    pub frame_offset: i32,
    /// World-to-camera stage of the joint transform
    pub extrinsic: CameraExtrinsic,
    /// Camera-to-scene stage of the joint transform
    pub convention: SceneConvention,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            root_object: "Hand".to_string(),
            frame_offset: 1,
            extrinsic: CameraExtrinsic::FPHAB,
            convention: SceneConvention::default(),
        }
    }
}

/// Summary of a completed bake run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeReport {
    /// Number of frames written
    pub frames_baked: usize,
    /// First output frame number
    pub frame_start: i32,
    /// Last output frame number
    pub frame_end: i32,
    /// Markers that were found and driven
    pub markers_bound: usize,
    /// Marker names that were absent from the scene (skipped, not fatal)
    pub missing_markers: Vec<String>,
}

/// A marker joint resolved against the scene, once per run.
struct MarkerBinding {
    joint: Joint,
    name: &'static str,
    present: bool,
}

/// Bake a parsed recording into the scene.
///
/// Fails before any mutation if the root object is absent or the sequence
/// is empty. On success the scene's frame range is exactly
/// `[frame_offset, frame_offset + N - 1]` for N recorded frames.
pub fn bake(
    scene: &mut Scene,
    sequence: &SkeletonSequence,
    config: &BakeConfig,
) -> Result<BakeReport> {
    if sequence.is_empty() {
        return Err(SceneError::EmptySequence);
    }
    if !scene.contains(&config.root_object) {
        return Err(SceneError::RootObjectMissing(config.root_object.clone()));
    }

    let transformer = SkeletonTransformer::new(config.extrinsic, config.convention);

    // Resolve markers once; absence is recorded, not re-queried per frame.
    let bindings: Vec<MarkerBinding> = MARKER_JOINTS
        .iter()
        .filter_map(|&joint| joint.marker_name().map(|name| (joint, name)))
        .map(|(joint, name)| {
            let present = scene.contains(name);
            if !present {
                warn!("missing marker '{name}' (joint {joint}), skipping");
            }
            MarkerBinding {
                joint,
                name,
                present,
            }
        })
        .collect();
    let missing_markers: Vec<String> = bindings
        .iter()
        .filter(|b| !b.present)
        .map(|b| b.name.to_string())
        .collect();
    let markers_bound = bindings.len() - missing_markers.len();

    // Clear previous animation so re-runs replace instead of accumulate.
    if let Some(root) = scene.object_mut(&config.root_object) {
        root.clear_animation();
    }
    for binding in bindings.iter().filter(|b| b.present) {
        if let Some(marker) = scene.object_mut(binding.name) {
            marker.clear_animation();
        }
    }

    let frame_start = config.frame_offset;
    let frame_end = config.frame_offset + sequence.len() as i32 - 1;
    scene.frame_start = frame_start;
    scene.frame_end = frame_end;

    for (index, frame) in sequence.frames.iter().enumerate() {
        let frame_no = config.frame_offset + index as i32;
        let points = transformer.transform_frame(frame);

        // The wrist drives the whole armature object.
        if let Some(root) = scene.object_mut(&config.root_object) {
            root.location = points[Joint::Wrist.index()];
            root.keyframe_location(frame_no);
        }

        for binding in bindings.iter().filter(|b| b.present) {
            if let Some(marker) = scene.object_mut(binding.name) {
                marker.location = points[binding.joint.index()];
                marker.keyframe_location(frame_no);
            }
        }
        debug!("baked frame {frame_no}");
    }

    info!(
        "baked {} frames into [{}, {}], {} markers bound, {} missing",
        sequence.len(),
        frame_start,
        frame_end,
        markers_bound,
        missing_markers.len()
    );

    Ok(BakeReport {
        frames_baked: sequence.len(),
        frame_start,
        frame_end,
        markers_bound,
        missing_markers,
    })
}
