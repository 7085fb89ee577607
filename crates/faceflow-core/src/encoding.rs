//! Canonical binary encoding of faces, one bit per catalog feature.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::face::Face;
use crate::feature::Catalog;

/// Fixed-length binary vector keyed by catalog index.
///
/// Bit i is 1 iff the feature at catalog position i is present in the
/// face. Restricted to subsets of one catalog this is a total bijection
/// with the feature-set form, which makes it both the hashable canonical
/// key for deduplication and position lookup, and the numeric input
/// representation fed to models.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Encoding(Vec<u8>);

impl Encoding {
    /// Build an encoding from raw bits, rejecting non-binary values.
    pub fn from_bits(bits: Vec<u8>) -> CoreResult<Self> {
        for (index, &value) in bits.iter().enumerate() {
            if value > 1 {
                return Err(CoreError::NonBinaryBit { index, value });
            }
        }
        Ok(Self(bits))
    }

    /// The raw bit vector.
    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    /// Vector length (the catalog size it was encoded against).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the bit at catalog index `i` is set.
    pub fn is_set(&self, i: usize) -> bool {
        self.0.get(i).copied() == Some(1)
    }

    /// Number of features present.
    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }

    /// Float form used as model input.
    pub fn to_f32(&self) -> Vec<f32> {
        self.0.iter().map(|&b| b as f32).collect()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl Face {
    /// Encode this face against the catalog.
    ///
    /// A patch outside the catalog signals a caller bug and fails with
    /// [`CoreError::UnknownFeature`].
    pub fn encode(&self, catalog: &Catalog) -> CoreResult<Encoding> {
        let mut bits = vec![0u8; catalog.len()];
        for patch in self.patches() {
            let i = catalog
                .index_of(patch)
                .ok_or_else(|| CoreError::UnknownFeature {
                    name: patch.name().to_string(),
                })?;
            bits[i] = 1;
        }
        Ok(Encoding(bits))
    }

    /// Decode an encoding back into a face.
    ///
    /// The decoded insertion order is catalog order.
    pub fn decode(encoding: &Encoding, catalog: &Catalog) -> CoreResult<Face> {
        if encoding.len() != catalog.len() {
            return Err(CoreError::EncodingLength {
                expected: catalog.len(),
                got: encoding.len(),
            });
        }
        let mut face = Face::empty();
        for (i, &bit) in encoding.bits().iter().enumerate() {
            if bit != 1 {
                continue;
            }
            if let Some(feature) = catalog.feature_at(i) {
                face = face.with_patch(feature.clone())?;
            }
        }
        Ok(face)
    }
}
