//! Error types for the state-space core.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building catalogs, faces, or encodings.
///
/// All of these indicate programming errors at the call site, never
/// transient conditions; there is no retry path anywhere in the core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog declares the same feature identifier twice.
    #[error("duplicate feature in catalog: {name}")]
    DuplicateFeature { name: String },

    /// An exclusion pair references a feature outside the catalog.
    #[error("exclusion references unknown feature: {name}")]
    ExclusionOutsideCatalog { name: String },

    /// An exclusion pair names the same feature on both sides.
    #[error("exclusion pairs a feature with itself: {name}")]
    SelfExclusion { name: String },

    /// A face carries a feature the catalog does not know about.
    #[error("feature not in catalog: {name}")]
    UnknownFeature { name: String },

    /// A feature was added to a face that already contains it.
    #[error("feature already present: {name}")]
    PatchAlreadyPresent { name: String },

    /// An encoding does not match the catalog length.
    #[error("encoding length {got} does not match catalog size {expected}")]
    EncodingLength { expected: usize, got: usize },

    /// An encoding holds a value other than 0 or 1.
    #[error("encoding bit at index {index} is not binary: {value}")]
    NonBinaryBit { index: usize, value: u8 },

    /// Catalog spec serialization/deserialization error.
    #[error("catalog spec serialization error: {0}")]
    SpecSerialization(#[from] serde_json::Error),
}
