//! Keyframed scene model and animation bake pipeline for hand skeleton
//! retargeting.
//!
//! This crate hosts the scene-side half of the F-PHAB conversion pipeline:
//! a minimal scene graph of named point objects with location keyframe
//! tracks, the bake step that drives an armature root plus finger markers
//! from a parsed recording, and synthetic camera ring placement for
//! multi-view rendering setups.
//!
//! The scene is an owned value, not a handle into a host application, so
//! the whole pipeline is testable without any 3D engine present. A baked
//! [`Scene`] serializes to JSON (with the `serde-support` feature) for
//! downstream consumers.
//!
//! # Examples
//!
//! ```no_run
//! use fphab_skeleton::parser;
//! use hand_scene::{BakeConfig, Scene, bake};
//!
//! let sequence = parser::parse_file("skeleton.txt")?;
//! let config = BakeConfig::default();
//! let mut scene = Scene::with_hand_markers(&config.root_object);
//! let report = bake(&mut scene, &sequence, &config)?;
//! println!("baked frames {}..={}", report.frame_start, report.frame_end);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bake;
pub mod error;
pub mod object;
pub mod rig;
pub mod scene;

pub use bake::{BakeConfig, BakeReport, bake};
pub use error::{Result, SceneError};
pub use object::{KeyframeTrack, SceneObject};
pub use rig::{CameraPose, RingConfig, ring_poses};
pub use scene::Scene;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
