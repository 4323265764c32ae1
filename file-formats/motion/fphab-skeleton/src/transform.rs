//! Coordinate transforms from F-PHAB world space into a scene convention.
//!
//! Joint positions in a recording are world-space millimeters. Retargeting
//! runs every point through two composed pure stages:
//!
//! 1. **World → camera**: a fixed rigid extrinsic (rotation + translation)
//!    applied as a homogeneous 4x4 multiply. F-PHAB publishes this matrix
//!    for its reference RGB camera.
//! 2. **Camera → scene**: millimeters rescaled to the scene working unit,
//!    then the camera's right/down/forward axes remapped to the scene's
//!    right/forward/up convention, with an optional lateral "spread" scale.
//!
//! Both stages are stateless and deterministic: the same input point always
//! produces the bit-identical output. They are kept as separate functions so
//! each can be verified in isolation, with [`SkeletonTransformer`] composing
//! them for whole-frame use.

use glam::{DMat4, DVec3};

use crate::joint::JOINT_COUNT;
use crate::parser::Frame;

/// Millimeters to meters, the scene working unit
pub const MM_TO_METERS: f64 = 0.001;

/// A rigid world-to-camera transform (rotation + translation).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraExtrinsic {
    /// Homogeneous 4x4 matrix mapping world points into camera space
    pub matrix: DMat4,
}

impl CameraExtrinsic {
    /// The published extrinsic of the F-PHAB reference RGB camera.
    pub const FPHAB: Self = Self {
        // Column-major; rows of the published matrix are:
        //   ( 0.999988496304   -0.00468848412856   0.000982563360594  25.7  )
        //   ( 0.00469115935266   0.999985218048    -0.00273845880292   1.22 )
        //   (-0.000969709653873  0.00274303671904   0.99999576807      3.902)
        matrix: DMat4::from_cols_array(&[
            0.999988496304,
            0.00469115935266,
            -0.000969709653873,
            0.0,
            -0.00468848412856,
            0.999985218048,
            0.00274303671904,
            0.0,
            0.000982563360594,
            -0.00273845880292,
            0.99999576807,
            0.0,
            25.7,
            1.22,
            3.902,
            1.0,
        ]),
    };

    /// Wrap an arbitrary rigid transform
    pub fn new(matrix: DMat4) -> Self {
        Self { matrix }
    }

    /// Map a world-space point into camera space.
    ///
    /// Homogeneous multiply with w = 1, then drop back to 3D. Units are
    /// unchanged (still millimeters for F-PHAB data).
    pub fn world_to_camera(&self, world: DVec3) -> DVec3 {
        (self.matrix * world.extend(1.0)).truncate()
    }
}

/// Unit conversion and axis remap from camera space into the scene.
///
/// F-PHAB camera axes are x-right, y-down, z-forward. The scene convention
/// is x-right, y-forward, z-up (Blender-style, right-handed).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConvention {
    /// Scale from recording units to the scene working unit
    pub unit_scale: f64,
    /// Extra scale on the lateral (x) axis only; 1.0 keeps the hand as
    /// recorded, larger values spread the fingers apart horizontally
    pub spread: f64,
}

impl Default for SceneConvention {
    fn default() -> Self {
        Self {
            unit_scale: MM_TO_METERS,
            spread: 1.0,
        }
    }
}

impl SceneConvention {
    /// Map a camera-space point into scene coordinates.
    pub fn camera_to_scene(&self, camera: DVec3) -> DVec3 {
        let v = camera * self.unit_scale;
        DVec3::new(
            self.spread * v.x, // camera right → scene right
            v.z,               // camera forward → scene forward
            -v.y,              // camera down → scene up
        )
    }
}

/// Composes the extrinsic and convention stages for whole frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonTransformer {
    /// World-to-camera stage
    pub extrinsic: CameraExtrinsic,
    /// Camera-to-scene stage
    pub convention: SceneConvention,
}

impl SkeletonTransformer {
    /// Create a transformer from explicit stages
    pub fn new(extrinsic: CameraExtrinsic, convention: SceneConvention) -> Self {
        Self {
            extrinsic,
            convention,
        }
    }

    /// Transformer for F-PHAB recordings with the default scene convention
    pub fn fphab() -> Self {
        Self::new(CameraExtrinsic::FPHAB, SceneConvention::default())
    }

    /// Map one world-space point into scene coordinates
    pub fn transform_point(&self, world: DVec3) -> DVec3 {
        self.convention
            .camera_to_scene(self.extrinsic.world_to_camera(world))
    }

    /// Map all 21 joints of a frame into scene coordinates
    pub fn transform_frame(&self, frame: &Frame) -> [DVec3; JOINT_COUNT] {
        frame.joints.map(|p| self.transform_point(p))
    }
}
