//! Error types shared by the orientation math and the scene drivers.

use thiserror::Error;

/// Errors raised when building orientations or driving scenes.
///
/// These are programming errors (a bad keyframe, a typo in a slider name),
/// never transient failures. They surface when a controller or a panel is
/// configured, not in the middle of a frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrientationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrientationError>;
