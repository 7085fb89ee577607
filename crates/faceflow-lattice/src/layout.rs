//! Fractional level layout for rendering collaborators.
//!
//! States are grouped by patch count into levels and each level is
//! sorted by the face total order. Positions are fractions of a unit
//! square keyed by canonical encoding, so an external renderer can
//! place faces and correlate transition arrows positionally without
//! this crate knowing anything about drawing.

use std::collections::HashMap;

use faceflow_core::{Catalog, Encoding, Face};

use crate::enumerate::StateSpace;
use crate::error::LatticeResult;

/// Level-grouped states with unit-square positions per state.
#[derive(Debug, Clone)]
pub struct LevelLayout {
    levels: Vec<Vec<Face>>,
    positions: HashMap<Encoding, (f32, f32)>,
}

impl LevelLayout {
    /// Build the layout for an enumerated state space.
    pub fn new(space: &StateSpace, catalog: &Catalog) -> LatticeResult<Self> {
        let level_count = space.max_len() + 1;
        let mut levels: Vec<Vec<Face>> = Vec::with_capacity(level_count);
        for len in 0..level_count {
            let mut level: Vec<Face> = space
                .states_with_len(len)
                .into_iter()
                .cloned()
                .collect();
            level.sort();
            levels.push(level);
        }

        let mut positions = HashMap::new();
        for (row, level) in levels.iter().enumerate() {
            let width = level.len().max(1) as f32;
            for (slot, face) in level.iter().enumerate() {
                let x = slot as f32 / width + 0.5 / width;
                let y = row as f32 / level_count as f32;
                positions.insert(face.encode(catalog)?, (x, y));
            }
        }

        Ok(Self { levels, positions })
    }

    /// Number of levels (maximum patch count plus one).
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// States on one level, sorted by the face total order.
    pub fn level(&self, row: usize) -> Option<&[Face]> {
        self.levels.get(row).map(Vec::as_slice)
    }

    /// Number of states on a level.
    pub fn width(&self, row: usize) -> usize {
        self.levels.get(row).map_or(0, Vec::len)
    }

    /// Unit-square position for a state, keyed by canonical encoding.
    pub fn position(&self, key: &Encoding) -> Option<(f32, f32)> {
        self.positions.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate;
    use faceflow_core::Feature;

    fn layout_for(names: &[&str]) -> (LevelLayout, Catalog, StateSpace) {
        let catalog =
            Catalog::new(names.iter().map(|n| Feature::new(*n)).collect(), vec![]).unwrap();
        let space = enumerate(&catalog).unwrap();
        let layout = LevelLayout::new(&space, &catalog).unwrap();
        (layout, catalog, space)
    }

    #[test]
    fn test_levels_group_by_patch_count() {
        let (layout, _, _) = layout_for(&["a", "b"]);
        assert_eq!(layout.level_count(), 3);
        assert_eq!(layout.width(0), 1);
        assert_eq!(layout.width(1), 2);
        assert_eq!(layout.width(2), 1);
    }

    #[test]
    fn test_levels_sorted_by_face_order() {
        let (layout, _, _) = layout_for(&["b", "a"]);
        let singles = layout.level(1).unwrap();
        assert!(singles[0] < singles[1]);
    }

    #[test]
    fn test_every_state_has_a_position() {
        let (layout, catalog, space) = layout_for(&["a", "b", "c"]);
        for state in space.states() {
            let key = state.encode(&catalog).unwrap();
            let (x, y) = layout.position(&key).unwrap();
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..1.0).contains(&y));
        }
    }

    #[test]
    fn test_positions_stable_across_builds() {
        let (first, catalog, space) = layout_for(&["a", "b", "c"]);
        let second = LevelLayout::new(&space, &catalog).unwrap();
        for state in space.states() {
            let key = state.encode(&catalog).unwrap();
            assert_eq!(first.position(&key), second.position(&key));
        }
    }
}
