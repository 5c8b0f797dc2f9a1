//! # Scene Errors
//!
//! Error types shared by the renderable contracts and the persistence
//! registry.

use thiserror::Error;

/// Errors that can occur while rendering, tracing, or reviving scene objects.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A named parameter was absent from a parameter set
    #[error("Missing parameter: {name}")]
    MissingParameter { name: String },

    /// A named parameter carried a value of the wrong type
    #[error("Parameter '{name}' has wrong type (expected {expected})")]
    ParameterType { name: String, expected: &'static str },

    /// No factory is registered for a type tag
    #[error("Unknown type tag: {tag}")]
    UnknownTypeTag { tag: String },

    /// A parameter value was outside its valid range
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl SceneError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a missing parameter error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Creates a wrong-type parameter error.
    pub fn wrong_type(name: impl Into<String>, expected: &'static str) -> Self {
        Self::ParameterType {
            name: name.into(),
            expected,
        }
    }

    /// Creates an unknown type tag error.
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTypeTag { tag: tag.into() }
    }

    /// Creates an invalid parameter error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
