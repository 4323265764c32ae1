//! Error types for scene baking

use thiserror::Error;

/// Error types for the bake pipeline
#[derive(Error, Debug)]
pub enum SceneError {
    /// The armature root object is not present in the scene.
    ///
    /// This is fatal: the bake aborts before clearing or writing anything.
    #[error("root object '{0}' not found in scene")]
    RootObjectMissing(String),

    /// The input recording holds no valid frames, so no frame range exists
    #[error("no frames to bake: input sequence is empty")]
    EmptySequence,
}

/// Result type using SceneError
pub type Result<T> = std::result::Result<T, SceneError>;
