//! Error types for lattice enumeration.

use thiserror::Error;

/// Result type alias for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Errors that can occur while enumerating or querying a state space.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// A core invariant failed while building faces or encodings.
    #[error(transparent)]
    Core(#[from] faceflow_core::CoreError),
}
