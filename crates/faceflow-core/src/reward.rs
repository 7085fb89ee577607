//! Declarative reward rules over face states.

use serde::{Deserialize, Serialize};

use crate::face::Face;
use crate::feature::{Catalog, Feature};

/// Data-oriented reward table.
///
/// A face scores zero when it contains a conflict, when the number of
/// `counted` features present differs from `required_count`, or when no
/// `keyed` feature is present. Otherwise it scores the value keyed by
/// the first present `keyed` feature in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardSpec {
    /// Features whose presence is tallied toward `required_count`.
    pub counted: Vec<Feature>,
    /// Exact tally of `counted` features a reward-eligible face carries.
    pub required_count: usize,
    /// Payout per keyed feature; declaration order breaks ties.
    pub keyed: Vec<(Feature, f64)>,
}

impl RewardSpec {
    /// Evaluate the reward for a face.
    ///
    /// The tally is over the total count of `counted` features, with no
    /// pairing constraint between them beyond what the catalog's
    /// exclusions already rule out.
    pub fn evaluate(&self, face: &Face, catalog: &Catalog) -> f64 {
        if face.contains_conflict(catalog) {
            return 0.0;
        }
        let tally = self.counted.iter().filter(|f| face.contains(f)).count();
        if tally != self.required_count {
            return 0.0;
        }
        for (feature, value) in &self.keyed {
            if face.contains(feature) {
                return *value;
            }
        }
        0.0
    }
}

impl Face {
    /// Reward under the given rules; zero unless the face is complete
    /// and conflict-free.
    pub fn reward(&self, spec: &RewardSpec, catalog: &Catalog) -> f64 {
        spec.evaluate(self, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces;

    fn face(names: &[&str]) -> Face {
        Face::from_patches(names.iter().map(|n| Feature::new(*n)).collect()).unwrap()
    }

    #[test]
    fn test_smile_face_scores_two() {
        let catalog = faces::catalog();
        let spec = faces::reward_spec();
        let f = face(&["left_eb_up", "right_eb_down", "smile"]);
        assert_eq!(f.reward(&spec, &catalog), 2.0);
    }

    #[test]
    fn test_frown_face_scores_one() {
        let catalog = faces::catalog();
        let spec = faces::reward_spec();
        let f = face(&["left_eb_down", "right_eb_up", "frown"]);
        assert_eq!(f.reward(&spec, &catalog), 1.0);
    }

    #[test]
    fn test_conflicting_face_scores_zero() {
        let catalog = faces::catalog();
        let spec = faces::reward_spec();
        let f = face(&["left_eb_down", "left_eb_up"]);
        assert_eq!(f.reward(&spec, &catalog), 0.0);
    }

    #[test]
    fn test_missing_mouth_scores_zero() {
        let catalog = faces::catalog();
        let spec = faces::reward_spec();
        let f = face(&["left_eb_up", "right_eb_up"]);
        assert_eq!(f.reward(&spec, &catalog), 0.0);
    }

    #[test]
    fn test_wrong_eyebrow_count_scores_zero() {
        let catalog = faces::catalog();
        let spec = faces::reward_spec();
        assert_eq!(face(&["left_eb_up", "smile"]).reward(&spec, &catalog), 0.0);
        assert_eq!(Face::empty().reward(&spec, &catalog), 0.0);
    }

    // The tally is a plain total over eyebrow features. With the
    // reference exclusions a same-side pair always conflicts first, but
    // under a catalog without those pairs, two left eyebrows satisfy the
    // count and the face is rewarded. Kept as-is for compatibility with
    // the established task behavior.
    #[test]
    fn reward_counts_eyebrows_without_side_pairing() {
        let catalog = crate::Catalog::new(
            vec![
                "frown".into(),
                "left_eb_down".into(),
                "left_eb_up".into(),
                "right_eb_down".into(),
                "right_eb_up".into(),
                "smile".into(),
            ],
            vec![("smile".into(), "frown".into())],
        )
        .unwrap();
        let spec = faces::reward_spec();
        let two_left = face(&["left_eb_down", "left_eb_up", "smile"]);
        assert_eq!(two_left.reward(&spec, &catalog), 2.0);
    }
}
