//! Error types for the action-mask contract.

use thiserror::Error;

/// Result type alias for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors raised when a model output breaks the action-mask contract.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Score vector length does not match the catalog size.
    #[error("score vector length {got} does not match catalog size {expected}")]
    LengthMismatch { expected: usize, got: usize },

    /// A masked-out action carries nonzero score.
    #[error("masked action {index} carries nonzero score {value}")]
    MaskViolation { index: usize, value: f32 },

    /// A valid flow action carries a non-positive value.
    #[error("flow for valid action {index} is not strictly positive: {value}")]
    NonPositiveFlow { index: usize, value: f32 },

    /// Core failure while encoding states for model input.
    #[error(transparent)]
    Core(#[from] faceflow_core::CoreError),
}
