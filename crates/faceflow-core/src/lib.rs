//! State-space core for a combinatorial face-building task.
//!
//! A face is a set of patches (features) drawn from a fixed catalog.
//! The catalog declares which pairs of patches may never coexist; every
//! other combination is a valid state. Generative-flow-style models
//! build faces one patch at a time, so the core pins down exactly what
//! such a model is allowed to see and do:
//!
//! ```text
//! Catalog  = [feature_0, ..., feature_{F-1}] + exclusion pairs
//! Face     = subset of the catalog (insertion order retained)
//! Encoding = binary vector of length F, bit i = presence of feature_i
//! Reward   = declarative table over a face's feature set
//! ```
//!
//! ## Core Concepts
//!
//! - **Feature**: a named atomic patch, identified by its catalog index
//! - **Catalog**: the ordered feature universe plus exclusion pairs
//! - **Face**: one point in the configuration space, compared and
//!   hashed by its order-independent feature set
//! - **Encoding**: the canonical fixed-length binary form, usable both
//!   as a dictionary key and as model input
//! - **RewardSpec**: data-oriented completion rules and payouts
//!
//! Enumeration of the reachable state graph lives in `faceflow-lattice`;
//! the action-mask contract models must honor lives in
//! `faceflow-policy`.

mod encoding;
mod error;
mod face;
pub mod faces;
mod feature;
mod reward;

pub use encoding::Encoding;
pub use error::{CoreError, CoreResult};
pub use face::Face;
pub use feature::{Catalog, CatalogSpec, Feature};
pub use reward::RewardSpec;
