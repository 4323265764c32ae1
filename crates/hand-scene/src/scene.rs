//! The scene: a name-keyed table of objects plus the active frame range.

use std::collections::BTreeMap;

use fphab_skeleton::MARKER_JOINTS;

use crate::object::SceneObject;

/// A minimal scene graph: named objects and a frame range.
///
/// Objects are looked up by name, matching how the bake pipeline binds to a
/// pre-existing armature root and marker set. The frame range is written by
/// the bake step to cover exactly the baked frames.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    objects: BTreeMap<String, SceneObject>,
    /// First frame of the active range
    pub frame_start: i32,
    /// Last frame of the active range
    pub frame_end: i32,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard hand setup: a root object plus the 15 named
    /// finger markers (MCP/PIP/TIP per finger).
    pub fn with_hand_markers(root: &str) -> Self {
        let mut scene = Self::new();
        scene.add(SceneObject::new(root));
        for joint in MARKER_JOINTS {
            if let Some(name) = joint.marker_name() {
                scene.add(SceneObject::new(name));
            }
        }
        scene
    }

    /// Insert an object, replacing any existing object of the same name
    pub fn add(&mut self, object: SceneObject) {
        self.objects.insert(object.name().to_string(), object);
    }

    /// Remove an object by name, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<SceneObject> {
        self.objects.remove(name)
    }

    /// Look up an object by name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    /// Look up an object for mutation
    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.get_mut(name)
    }

    /// Whether an object of this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Object names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_hand_markers_builds_root_and_fifteen_markers() {
        let scene = Scene::with_hand_markers("Hand");

        assert_eq!(scene.len(), 16);
        assert!(scene.contains("Hand"));
        assert!(scene.contains("THUMB_MCP"));
        assert!(scene.contains("PINKY_TIP"));
        assert!(!scene.contains("THUMB_DIP"));
    }

    #[test]
    fn test_add_replaces_same_name() {
        let mut scene = Scene::new();
        let mut first = SceneObject::new("Hand");
        first.keyframe_location(1);
        scene.add(first);
        scene.add(SceneObject::new("Hand"));

        assert_eq!(scene.len(), 1);
        let hand = scene.object("Hand").unwrap();
        assert!(hand.track().is_empty());
    }
}
