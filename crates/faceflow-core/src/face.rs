//! The composite face state: a set of patches with insertion order retained.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::feature::{Catalog, Feature};

/// A set of features representing one point in the task's configuration
/// space.
///
/// The insertion-order sequence is retained for traversal and undo;
/// identity, hashing, and ordering are all over the order-independent
/// feature set, so two faces built in different orders are the same
/// entity. A face is never mutated after construction: extending it
/// produces a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    patches: Vec<Feature>,
}

impl Face {
    /// The empty face: the unique root of the state graph, always valid.
    pub fn empty() -> Self {
        Self {
            patches: Vec::new(),
        }
    }

    /// Build a face from patches in insertion order.
    pub fn from_patches(patches: Vec<Feature>) -> CoreResult<Self> {
        let mut face = Face::empty();
        for patch in patches {
            face = face.with_patch(patch)?;
        }
        Ok(face)
    }

    /// Extend this face with one additional feature, producing a new
    /// face.
    ///
    /// Adding a feature that is already present is a precondition
    /// violation, never a recoverable condition.
    pub fn with_patch(&self, feature: Feature) -> CoreResult<Self> {
        if self.contains(&feature) {
            return Err(CoreError::PatchAlreadyPresent {
                name: feature.name().to_string(),
            });
        }
        let mut patches = self.patches.clone();
        patches.push(feature);
        Ok(Self { patches })
    }

    /// The insertion history minus the last added feature; `None` for
    /// the root.
    pub fn parent(&self) -> Option<Self> {
        if self.patches.is_empty() {
            return None;
        }
        Some(Self {
            patches: self.patches[..self.patches.len() - 1].to_vec(),
        })
    }

    /// The most recently added feature.
    pub fn last_patch(&self) -> Option<&Feature> {
        self.patches.last()
    }

    /// Check if a feature is present.
    pub fn contains(&self, feature: &Feature) -> bool {
        self.patches.iter().any(|p| p == feature)
    }

    /// Number of patches present.
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Check if this is the empty root face.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Patches in insertion order.
    pub fn patches(&self) -> &[Feature] {
        &self.patches
    }

    /// Iterate patches in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.patches.iter()
    }

    /// Features sorted by name: the canonical order-independent form.
    pub fn sorted_features(&self) -> Vec<&Feature> {
        let mut sorted: Vec<&Feature> = self.patches.iter().collect();
        sorted.sort();
        sorted
    }

    /// True iff any declared exclusion pair is fully present.
    pub fn contains_conflict(&self, catalog: &Catalog) -> bool {
        catalog
            .exclusions()
            .iter()
            .any(|(a, b)| self.contains(a) && self.contains(b))
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_features() == other.sorted_features()
    }
}

impl Eq for Face {}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.patches.len());
        for feature in self.sorted_features() {
            feature.hash(state);
        }
    }
}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Face {
    // Lexicographic over the sorted feature-name tuple. Used for
    // deterministic enumeration and layout, not semantically meaningful.
    fn cmp(&self, other: &Self) -> Ordering {
        self.sorted_features().cmp(&other.sorted_features())
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patches.is_empty() {
            return write!(f, "empty");
        }
        let names: Vec<&str> = self.patches.iter().map(Feature::name).collect();
        write!(f, "{}", names.join("+"))
    }
}
