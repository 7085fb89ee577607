//! Model collaborator traits and a tabular reference implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use faceflow_core::{Catalog, CoreError, Encoding};
use faceflow_lattice::StateSpace;

use crate::error::{PolicyError, PolicyResult};
use crate::mask::{forward_flow_mask, verify_forward_flows};

/// Edge-flow model over the state graph.
///
/// Implementations score all catalog features at once for a given state
/// encoding. The output must honor the forward mask: zero flow at every
/// present feature, strictly positive flow at the rest.
pub trait FlowFunction: Send + Sync {
    /// Per-feature edge flows out of the encoded state.
    fn flows(&self, x: &Encoding) -> PolicyResult<Vec<f32>>;
}

/// Policy model producing forward and backward action logits.
///
/// Forward logits must sit at [`crate::MASKED_LOGIT`] for present
/// features, backward logits likewise for absent ones.
pub trait TrajectoryPolicy: Send + Sync {
    /// (forward, backward) per-feature logits for the encoded state.
    fn logits(&self, x: &Encoding) -> PolicyResult<(Vec<f32>, Vec<f32>)>;
}

/// Table-backed flow function: the simplest conforming model.
///
/// Stored rows are raw (pre-mask) scores, as a network's dense output
/// would be; the forward mask is applied on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularFlow {
    table: HashMap<Encoding, Vec<f32>>,
    fallback: f32,
    width: usize,
}

impl TabularFlow {
    /// Create an empty table for a catalog of `width` features. States
    /// missing from the table report `1.0` at every action.
    pub fn new(width: usize) -> Self {
        Self {
            table: HashMap::new(),
            fallback: 1.0,
            width,
        }
    }

    /// Set the raw score reported for states missing from the table.
    pub fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Record the raw score row for one state.
    pub fn insert(&mut self, key: Encoding, scores: Vec<f32>) -> PolicyResult<()> {
        if scores.len() != self.width {
            return Err(PolicyError::LengthMismatch {
                expected: self.width,
                got: scores.len(),
            });
        }
        self.table.insert(key, scores);
        Ok(())
    }

    /// Number of explicitly recorded states.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no states were recorded.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl FlowFunction for TabularFlow {
    fn flows(&self, x: &Encoding) -> PolicyResult<Vec<f32>> {
        let raw = self
            .table
            .get(x)
            .cloned()
            .unwrap_or_else(|| vec![self.fallback; self.width]);
        forward_flow_mask(&raw, x)
    }
}

/// Per-transition flow values, aligned positionally with
/// [`StateSpace::transitions`]; the quantity a renderer draws as edge
/// weights.
///
/// Every model output is verified against the forward mask before the
/// added feature's flow is read out, so a nonconforming model fails
/// here rather than feeding silent garbage downstream.
pub fn transition_flows(
    space: &StateSpace,
    catalog: &Catalog,
    model: &dyn FlowFunction,
) -> PolicyResult<Vec<f32>> {
    let mut values = Vec::with_capacity(space.transition_count());
    for transition in space.transitions() {
        let x = transition.parent.encode(catalog)?;
        let flows = model.flows(&x)?;
        verify_forward_flows(&flows, &x)?;
        let index = catalog
            .index_of(&transition.added)
            .ok_or_else(|| CoreError::UnknownFeature {
                name: transition.added.name().to_string(),
            })?;
        values.push(flows[index]);
    }
    debug!(edges = values.len(), "transition flows extracted");
    Ok(values)
}
