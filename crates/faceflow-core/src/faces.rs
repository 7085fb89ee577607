//! The reference six-patch smiley task.
//!
//! Patch identifiers are listed in lexicographic order, so catalog
//! index, name sort order, and encoding position all agree.

use crate::feature::{Catalog, Feature};
use crate::reward::RewardSpec;

/// Mouth drawn as a frown.
pub const FROWN: &str = "frown";
/// Left eyebrow angled down.
pub const LEFT_EB_DOWN: &str = "left_eb_down";
/// Left eyebrow angled up.
pub const LEFT_EB_UP: &str = "left_eb_up";
/// Right eyebrow angled down.
pub const RIGHT_EB_DOWN: &str = "right_eb_down";
/// Right eyebrow angled up.
pub const RIGHT_EB_UP: &str = "right_eb_up";
/// Mouth drawn as a smile.
pub const SMILE: &str = "smile";

/// Canonical catalog for the smiley task: six patches, with same-side
/// eyebrow pairs and the two mouths mutually exclusive.
pub fn catalog() -> Catalog {
    Catalog::new(
        vec![
            FROWN.into(),
            LEFT_EB_DOWN.into(),
            LEFT_EB_UP.into(),
            RIGHT_EB_DOWN.into(),
            RIGHT_EB_UP.into(),
            SMILE.into(),
        ],
        vec![
            (LEFT_EB_DOWN.into(), LEFT_EB_UP.into()),
            (RIGHT_EB_DOWN.into(), RIGHT_EB_UP.into()),
            (SMILE.into(), FROWN.into()),
        ],
    )
    .expect("reference catalog is well formed")
}

/// Eyebrow patches tallied by the reward rule.
pub fn eyebrows() -> Vec<Feature> {
    vec![
        LEFT_EB_DOWN.into(),
        LEFT_EB_UP.into(),
        RIGHT_EB_DOWN.into(),
        RIGHT_EB_UP.into(),
    ]
}

/// Reward table for the smiley task: a finished face needs two eyebrows
/// and a mouth, and smiles pay out twice what frowns do.
pub fn reward_spec() -> RewardSpec {
    RewardSpec {
        counted: eyebrows(),
        required_count: 2,
        keyed: vec![(SMILE.into(), 2.0), (FROWN.into(), 1.0)],
    }
}
