//! Scene objects and their location keyframe tracks.

use std::collections::BTreeMap;

use glam::DVec3;

/// Location keyframes of one object, ordered by frame number.
///
/// Inserting at an existing frame overwrites the previous key, so re-baking
/// the same range replaces rather than accumulates animation data.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyframeTrack {
    keys: BTreeMap<i32, DVec3>,
}

impl KeyframeTrack {
    /// Create an empty track
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value at a frame, replacing any existing key there
    pub fn insert(&mut self, frame: i32, value: DVec3) {
        self.keys.insert(frame, value);
    }

    /// Drop all keys
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the track holds no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The keyed value at a frame, if one exists
    pub fn value_at(&self, frame: i32) -> Option<DVec3> {
        self.keys.get(&frame).copied()
    }

    /// First and last keyed frame, if the track is non-empty
    pub fn frame_range(&self) -> Option<(i32, i32)> {
        let first = *self.keys.keys().next()?;
        let last = *self.keys.keys().next_back()?;
        Some((first, last))
    }

    /// Iterate keys in frame order
    pub fn iter(&self) -> impl Iterator<Item = (i32, DVec3)> + '_ {
        self.keys.iter().map(|(frame, value)| (*frame, *value))
    }
}

/// A named point object in the scene.
///
/// Mirrors the minimal surface the bake needs from a host object: a current
/// location and a location keyframe track.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneObject {
    name: String,
    /// Current location in scene coordinates
    pub location: DVec3,
    track: KeyframeTrack,
}

impl SceneObject {
    /// Create an object at the origin with no animation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: DVec3::ZERO,
            track: KeyframeTrack::new(),
        }
    }

    /// Object name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record the current location as a keyframe at the given frame
    pub fn keyframe_location(&mut self, frame: i32) {
        self.track.insert(frame, self.location);
    }

    /// Remove all keyframe data from this object
    pub fn clear_animation(&mut self) {
        self.track.clear();
    }

    /// The object's location keyframe track
    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }
}
