//! Exhaustive state-space enumeration for the faceflow task.
//!
//! Starting from the empty face, the enumerator discovers every valid
//! state reachable by adding one catalog feature at a time and records
//! the parent/child transition edges, producing a DAG with a single
//! root and terminal states at maximum valid size:
//!
//! ```text
//! enumerate(catalog) -> StateSpace {
//!     states:      Vec<Face>,        // distinct, post-order
//!     transitions: Vec<Transition>,  // (parent, child, added), ordered
//! }
//! ```
//!
//! Invalid branches are pruned before recursion, so the search walks
//! the valid sublattice rather than the full feature powerset. Both
//! output collections are deterministic for a fixed catalog, which lets
//! downstream consumers (training loops, visualization) correlate
//! externally computed per-edge values with transitions positionally.

mod enumerate;
mod error;
mod layout;

pub use enumerate::{enumerate, StateSpace, Transition};
pub use error::{LatticeError, LatticeResult};
pub use layout::LevelLayout;
