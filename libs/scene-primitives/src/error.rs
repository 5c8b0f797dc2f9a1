//! # Primitive Errors
//!
//! Error types for primitive tessellation.

use scene_core::SceneError;
use thiserror::Error;

/// Errors that can occur while generating primitive geometry.
#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Error from the scene-core layer
    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl PrimitiveError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

impl From<PrimitiveError> for SceneError {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::DegenerateGeometry { message } => {
                SceneError::DegenerateGeometry { message }
            }
            PrimitiveError::Scene(err) => err,
        }
    }
}
