//! Exhaustive enumeration of the valid state sublattice.
//!
//! Depth-first backtracking from the empty face. Every absent catalog
//! feature is tried in catalog order; children containing a conflict
//! are pruned before recursion, which bounds the search to the valid
//! sublattice of the feature powerset. A visited set keyed by canonical
//! encoding keeps each state from being expanded more than once, so a
//! state reached via different insertion orders is discovered exactly
//! once. States are recorded post-order (children before their
//! parents); each distinct parent/child edge is recorded exactly once,
//! at the parent.

use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};
use tracing::info;

use faceflow_core::{Catalog, Encoding, Face, Feature, RewardSpec};

use crate::error::LatticeResult;

/// Directed edge of the state graph: `child` extends `parent` by
/// exactly one feature, and `child` is conflict-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// State before the feature was added.
    pub parent: Face,
    /// State after the feature was added.
    pub child: Face,
    /// The feature whose addition produced `child`.
    pub added: Feature,
}

/// The full universe of valid states and transitions for one catalog.
///
/// Both collections are in discovery order and stable across runs for a
/// fixed catalog, so downstream consumers may index transitions
/// positionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSpace {
    states: Vec<Face>,
    transitions: Vec<Transition>,
}

struct Accumulator {
    visited: HashSet<Encoding>,
    states: Vec<Face>,
    transitions: Vec<Transition>,
}

/// Enumerate every valid state reachable from the empty face by adding
/// one feature at a time.
///
/// The catalog's own construction already rejects duplicate
/// identifiers, so enumeration starts from a well-formed universe.
pub fn enumerate(catalog: &Catalog) -> LatticeResult<StateSpace> {
    let mut acc = Accumulator {
        visited: HashSet::new(),
        states: Vec::new(),
        transitions: Vec::new(),
    };
    let root = Face::empty();
    acc.visited.insert(root.encode(catalog)?);
    visit(root, catalog, &mut acc)?;

    let space = StateSpace {
        states: acc.states,
        transitions: acc.transitions,
    };
    info!(
        states = space.state_count(),
        transitions = space.transition_count(),
        "state space enumerated"
    );
    Ok(space)
}

fn visit(face: Face, catalog: &Catalog, acc: &mut Accumulator) -> LatticeResult<()> {
    for feature in catalog.features() {
        if face.contains(feature) {
            continue;
        }
        let child = face.with_patch(feature.clone())?;
        if child.contains_conflict(catalog) {
            continue;
        }
        acc.transitions.push(Transition {
            parent: face.clone(),
            child: child.clone(),
            added: feature.clone(),
        });
        let key = child.encode(catalog)?;
        if acc.visited.insert(key) {
            visit(child, catalog, acc)?;
        }
    }
    acc.states.push(face);
    Ok(())
}

impl StateSpace {
    /// Distinct valid states in post-order discovery order.
    pub fn states(&self) -> &[Face] {
        &self.states
    }

    /// Transitions in discovery order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of distinct valid states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of distinct transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// The empty root state. Post-order recording places it last.
    pub fn root(&self) -> Option<&Face> {
        self.states.last()
    }

    /// Check if a state was enumerated.
    pub fn contains(&self, face: &Face) -> bool {
        self.states.iter().any(|s| s == face)
    }

    /// Largest patch count among enumerated states.
    pub fn max_len(&self) -> usize {
        self.states.iter().map(Face::len).max().unwrap_or(0)
    }

    /// States carrying exactly `len` patches.
    pub fn states_with_len(&self, len: usize) -> Vec<&Face> {
        self.states.iter().filter(|s| s.len() == len).collect()
    }

    /// Reward-eligible states under the given rules.
    pub fn terminal_states<'a>(
        &'a self,
        spec: &RewardSpec,
        catalog: &Catalog,
    ) -> Vec<&'a Face> {
        self.states
            .iter()
            .filter(|s| spec.evaluate(s, catalog) > 0.0)
            .collect()
    }

    /// Convert to a petgraph DAG for analysis or visualization.
    ///
    /// Returns the graph and a mapping from canonical encoding to node
    /// index.
    pub fn to_petgraph(
        &self,
        catalog: &Catalog,
    ) -> LatticeResult<(StableDiGraph<Face, Feature>, HashMap<Encoding, NodeIndex>)> {
        let mut graph = StableDiGraph::new();
        let mut index = HashMap::new();

        for state in &self.states {
            let idx = graph.add_node(state.clone());
            index.insert(state.encode(catalog)?, idx);
        }

        for transition in &self.transitions {
            let from = index.get(&transition.parent.encode(catalog)?).copied();
            let to = index.get(&transition.child.encode(catalog)?).copied();
            if let (Some(from), Some(to)) = (from, to) {
                graph.add_edge(from, to, transition.added.clone());
            }
        }

        Ok((graph, index))
    }
}
