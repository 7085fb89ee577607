//! Integration tests for faceflow-lattice over the reference smiley
//! catalog.

use std::collections::HashSet;

use anyhow::Result;
use faceflow_core::{faces, Face};
use faceflow_lattice::{enumerate, LevelLayout};

// ============================================================================
// Reference catalog: 2 mouths, 2 left eyebrows, 2 right eyebrows, with
// same-side eyebrow pairs and the mouth pair mutually exclusive. Valid
// states are all choices of at most one feature per group: 3 * 3 * 3.
// ============================================================================

#[test]
fn reference_catalog_enumerates_27_states() -> Result<()> {
    let space = enumerate(&faces::catalog())?;
    assert_eq!(space.state_count(), 27);

    let distinct: HashSet<&Face> = space.states().iter().collect();
    assert_eq!(distinct.len(), 27);
    Ok(())
}

#[test]
fn reference_catalog_enumerates_54_transitions() -> Result<()> {
    let space = enumerate(&faces::catalog())?;
    assert_eq!(space.transition_count(), 54);
    Ok(())
}

#[test]
fn every_transition_adds_exactly_one_feature() -> Result<()> {
    let catalog = faces::catalog();
    let space = enumerate(&catalog)?;
    for t in space.transitions() {
        assert_eq!(t.child.len(), t.parent.len() + 1);
        assert!(t.parent.iter().all(|p| t.child.contains(p)));
        assert!(!t.child.contains_conflict(&catalog));
    }
    Ok(())
}

#[test]
fn root_is_a_state_but_never_a_child() -> Result<()> {
    let space = enumerate(&faces::catalog())?;
    assert!(space.contains(&Face::empty()));
    assert_eq!(space.root(), Some(&Face::empty()));
    assert!(space.transitions().iter().all(|t| !t.child.is_empty()));
    Ok(())
}

#[test]
fn terminal_states_are_the_eight_finished_faces() -> Result<()> {
    let catalog = faces::catalog();
    let spec = faces::reward_spec();
    let space = enumerate(&catalog)?;

    // one of two left eyebrows * one of two right eyebrows * one of two
    // mouths
    let terminals = space.terminal_states(&spec, &catalog);
    assert_eq!(terminals.len(), 8);
    for face in &terminals {
        assert_eq!(face.len(), 3);
        let reward = face.reward(&spec, &catalog);
        assert!(reward == 1.0 || reward == 2.0);
    }
    Ok(())
}

#[test]
fn level_populations_match_the_sublattice() -> Result<()> {
    let space = enumerate(&faces::catalog())?;
    assert_eq!(space.max_len(), 3);
    assert_eq!(space.states_with_len(0).len(), 1);
    assert_eq!(space.states_with_len(1).len(), 6);
    assert_eq!(space.states_with_len(2).len(), 12);
    assert_eq!(space.states_with_len(3).len(), 8);
    Ok(())
}

#[test]
fn enumeration_is_deterministic_across_runs() -> Result<()> {
    let catalog = faces::catalog();
    let first = enumerate(&catalog)?;
    let second = enumerate(&catalog)?;
    assert_eq!(first.states(), second.states());
    assert_eq!(first.transitions(), second.transitions());
    Ok(())
}

#[test]
fn petgraph_export_preserves_the_dag() -> Result<()> {
    let catalog = faces::catalog();
    let space = enumerate(&catalog)?;
    let (graph, index) = space.to_petgraph(&catalog)?;
    assert_eq!(graph.node_count(), 27);
    assert_eq!(graph.edge_count(), 54);

    let root_key = Face::empty().encode(&catalog)?;
    let root_idx = index[&root_key];
    // the root has no incoming edges
    assert_eq!(
        graph
            .neighbors_directed(root_idx, petgraph::Direction::Incoming)
            .count(),
        0
    );
    // and one outgoing edge per feature
    assert_eq!(
        graph
            .neighbors_directed(root_idx, petgraph::Direction::Outgoing)
            .count(),
        6
    );
    Ok(())
}

#[test]
fn layout_rows_mirror_level_populations() -> Result<()> {
    let catalog = faces::catalog();
    let space = enumerate(&catalog)?;
    let layout = LevelLayout::new(&space, &catalog)?;
    assert_eq!(layout.level_count(), 4);
    assert_eq!(layout.width(0), 1);
    assert_eq!(layout.width(1), 6);
    assert_eq!(layout.width(2), 12);
    assert_eq!(layout.width(3), 8);

    for state in space.states() {
        assert!(layout.position(&state.encode(&catalog)?).is_some());
    }
    Ok(())
}
