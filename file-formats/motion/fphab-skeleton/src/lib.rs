//! Parser and coordinate transforms for F-PHAB hand skeleton recordings.
//!
//! The First-Person Hand Action Benchmark (F-PHAB) ships hand pose
//! annotations as plain-text `skeleton.txt` files: one line per frame,
//! a timestamp token followed by 63 floats (21 joints, xyz each, world
//! coordinates in millimeters).
//!
//! This crate covers the dataset-side half of the retargeting pipeline:
//!
//! - [`joint`] — the fixed 21-joint F-PHAB ordering and the mapping from
//!   joint indices to scene marker names
//! - [`parser`] — reading recordings into [`SkeletonSequence`] values,
//!   skipping malformed lines without aborting
//! - [`transform`] — the world → camera → scene coordinate pipeline
//!   (rigid extrinsic, unit conversion, axis convention remap)
//!
//! # Examples
//!
//! ```no_run
//! use fphab_skeleton::{SkeletonTransformer, parser};
//!
//! let sequence = parser::parse_file("skeleton.txt")?;
//! let transformer = SkeletonTransformer::fphab();
//! for frame in &sequence.frames {
//!     let points = transformer.transform_frame(frame);
//!     println!("wrist at {:?}", points[0]);
//! }
//! # Ok::<(), fphab_skeleton::SkeletonError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod joint;
pub mod parser;
pub mod transform;

pub use error::{Result, SkeletonError};
pub use joint::{JOINT_COUNT, Joint, MARKER_JOINTS};
pub use parser::{Frame, SkeletonSequence};
pub use transform::{CameraExtrinsic, SceneConvention, SkeletonTransformer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
