//! Feature identifiers and the fixed catalog they are drawn from.
//!
//! A catalog is a stable, ordered list of distinct features (position is
//! the canonical encoding index) plus a declarative list of exclusion
//! pairs. The catalog itself carries no notion of feature groups;
//! mutual exclusivity is entirely a function of the pair list, so new
//! groups can be added without touching any algorithm.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Named atomic feature (patch) that may or may not be present in a face.
///
/// Features are identified by name; name order is also the canonical
/// sort order used for face identity and layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Feature(String);

impl Feature {
    /// Create a new feature identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Feature {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Feature {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Fixed, ordered set of features with declarative exclusion pairs.
///
/// The position of a feature in the catalog is its canonical encoding
/// index. Construction validates that identifiers are distinct and that
/// every exclusion member is in the catalog, so a malformed catalog
/// fails before any enumeration starts.
#[derive(Debug, Clone)]
pub struct Catalog {
    features: Vec<Feature>,
    index: HashMap<Feature, usize>,
    exclusions: Vec<(Feature, Feature)>,
}

impl Catalog {
    /// Build a catalog from an ordered feature list and exclusion pairs.
    pub fn new(
        features: Vec<Feature>,
        exclusions: Vec<(Feature, Feature)>,
    ) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(features.len());
        for (i, feature) in features.iter().enumerate() {
            if index.insert(feature.clone(), i).is_some() {
                return Err(CoreError::DuplicateFeature {
                    name: feature.name().to_string(),
                });
            }
        }
        for (a, b) in &exclusions {
            if a == b {
                return Err(CoreError::SelfExclusion {
                    name: a.name().to_string(),
                });
            }
            for member in [a, b] {
                if !index.contains_key(member) {
                    return Err(CoreError::ExclusionOutsideCatalog {
                        name: member.name().to_string(),
                    });
                }
            }
        }
        Ok(Self {
            features,
            index,
            exclusions,
        })
    }

    /// Number of features in the catalog.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the catalog has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in canonical index order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Canonical index of a feature, if it is in the catalog.
    pub fn index_of(&self, feature: &Feature) -> Option<usize> {
        self.index.get(feature).copied()
    }

    /// Feature at a canonical index.
    pub fn feature_at(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Check if a feature is in the catalog.
    pub fn contains(&self, feature: &Feature) -> bool {
        self.index.contains_key(feature)
    }

    /// Declared exclusion pairs.
    pub fn exclusions(&self) -> &[(Feature, Feature)] {
        &self.exclusions
    }
}

/// Unvalidated serde schema for a catalog.
///
/// This is the configuration surface: a spec can be read from JSON,
/// edited, and then validated into a [`Catalog`] via `TryFrom`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSpec {
    /// Feature identifiers in canonical index order.
    pub features: Vec<String>,
    /// Pairs of identifiers that must never coexist in a valid face.
    #[serde(default)]
    pub exclusions: Vec<(String, String)>,
}

impl CatalogSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the spec to pretty JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<CatalogSpec> for Catalog {
    type Error = CoreError;

    fn try_from(spec: CatalogSpec) -> CoreResult<Self> {
        Catalog::new(
            spec.features.into_iter().map(Feature::from).collect(),
            spec.exclusions
                .into_iter()
                .map(|(a, b)| (Feature::from(a), Feature::from(b)))
                .collect(),
        )
    }
}

impl From<&Catalog> for CatalogSpec {
    fn from(catalog: &Catalog) -> Self {
        Self {
            features: catalog
                .features()
                .iter()
                .map(|f| f.name().to_string())
                .collect(),
            exclusions: catalog
                .exclusions()
                .iter()
                .map(|(a, b)| (a.name().to_string(), b.name().to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![("a".into(), "b".into())],
        )
        .unwrap()
    }

    #[test]
    fn test_catalog_indexing() {
        let catalog = small_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index_of(&"b".into()), Some(1));
        assert_eq!(catalog.feature_at(2), Some(&Feature::new("c")));
        assert_eq!(catalog.index_of(&"z".into()), None);
        assert!(catalog.contains(&"a".into()));
    }

    #[test]
    fn test_duplicate_feature_rejected() {
        let result = Catalog::new(vec!["a".into(), "a".into()], vec![]);
        assert!(matches!(
            result,
            Err(CoreError::DuplicateFeature { name }) if name == "a"
        ));
    }

    #[test]
    fn test_exclusion_must_reference_catalog() {
        let result = Catalog::new(vec!["a".into()], vec![("a".into(), "z".into())]);
        assert!(matches!(
            result,
            Err(CoreError::ExclusionOutsideCatalog { name }) if name == "z"
        ));
    }

    #[test]
    fn test_self_exclusion_rejected() {
        let result = Catalog::new(vec!["a".into()], vec![("a".into(), "a".into())]);
        assert!(matches!(result, Err(CoreError::SelfExclusion { .. })));
    }

    #[test]
    fn test_spec_round_trip() {
        let spec = CatalogSpec::from(&small_catalog());
        let json = spec.to_json().unwrap();
        let parsed = CatalogSpec::from_json(&json).unwrap();
        let rebuilt = Catalog::try_from(parsed).unwrap();
        assert_eq!(rebuilt.len(), 3);
        assert_eq!(rebuilt.exclusions().len(), 1);
    }

    #[test]
    fn test_spec_validation_failure_surfaces() {
        let spec = CatalogSpec {
            features: vec!["a".to_string(), "a".to_string()],
            exclusions: vec![],
        };
        assert!(Catalog::try_from(spec).is_err());
    }
}
