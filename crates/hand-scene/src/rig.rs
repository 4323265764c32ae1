//! Synthetic camera ring placement for multi-view capture setups.
//!
//! Cameras sit evenly spaced on horizontal circles around a target point,
//! one circle per configured height, each oriented to look at the target
//! (camera -Z forward, +Y up). Pure pose math: the poses are handed to
//! whatever renders the scene.

use glam::{DMat4, DQuat, DVec3};

/// Layout of the camera ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingConfig {
    /// Cameras per circle
    pub cameras: usize,
    /// Circle radius in scene units
    pub radius: f64,
    /// Heights of the circles above the scene origin
    pub heights: Vec<f64>,
    /// Point every camera looks at
    pub target: DVec3,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            cameras: 8,
            radius: 0.7,
            heights: vec![0.1, 0.5],
            target: DVec3::ZERO,
        }
    }
}

/// A placed and oriented camera.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraPose {
    /// Camera name, `Cam_1` onward, numbered across all circles
    pub name: String,
    /// Position in scene coordinates
    pub position: DVec3,
    /// World-space orientation; -Z is the viewing direction
    pub rotation: DQuat,
}

/// Generate the camera poses for a ring configuration.
pub fn ring_poses(config: &RingConfig) -> Vec<CameraPose> {
    let mut poses = Vec::with_capacity(config.cameras * config.heights.len());

    for height in &config.heights {
        for i in 0..config.cameras {
            let angle = std::f64::consts::TAU * i as f64 / config.cameras as f64;
            let position = DVec3::new(
                config.target.x + config.radius * angle.cos(),
                config.target.y + config.radius * angle.sin(),
                *height,
            );
            poses.push(CameraPose {
                name: format!("Cam_{}", poses.len() + 1),
                position,
                rotation: look_at_rotation(position, config.target),
            });
        }
    }

    poses
}

/// Orientation that points the camera's -Z axis from `position` at `target`,
/// keeping +Y as close to world up as the geometry allows.
fn look_at_rotation(position: DVec3, target: DVec3) -> DQuat {
    let forward = target - position;
    if forward.length_squared() < f64::EPSILON {
        return DQuat::IDENTITY;
    }
    // World up, unless the camera sits straight above or below the target.
    let up = if forward.normalize().cross(DVec3::Z).length_squared() < f64::EPSILON {
        DVec3::Y
    } else {
        DVec3::Z
    };
    DQuat::from_mat4(&DMat4::look_at_rh(position, target, up).inverse())
}
