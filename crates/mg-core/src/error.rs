//! Error types

use thiserror::Error;

/// Errors from pointer-ray resolution.
///
/// Both variants are recoverable: a caller skips the pick for the current
/// frame and keeps its prior hover/drag state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// The projection (or projection-view) matrix is not invertible
    #[error("projection matrix is singular, cannot derive picking ray")]
    DegenerateProjection,
    /// Pointer coordinates are non-finite or far outside the viewport
    #[error("pointer sample is not a valid NDC position")]
    InvalidPointerSample,
}

/// Errors from configuration save/load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
