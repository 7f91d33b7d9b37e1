//! Aggregate view of the plot's sets and intersections.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::Subset;
use crate::errors::ModelError;
use crate::types::FxHashSet;

/// Sets, set sizes, and intersection rows of one UpSet plot.
///
/// Built once through [`DataModel::new`], which checks every structural
/// invariant, and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DataModel {
    sets: Vec<String>,
    sizes: BTreeMap<String, u64>,
    subsets: Vec<Subset>,
    all_subsets: Vec<Subset>,
    count: Vec<u64>,
    all_sets_length: usize,
}

impl DataModel {
    /// Build and validate a data model.
    ///
    /// `subsets` are the visible rows, `all_subsets` the unfiltered rows.
    /// Fails when a set is listed twice, `sizes` does not cover exactly
    /// `sets`, a degree exceeds the set count, a subset was classified
    /// against a different set count, a deviation is NaN or infinite, or a
    /// visible subset is missing from `all_subsets` (names compared
    /// case-insensitively).
    pub fn new(
        sets: Vec<String>,
        sizes: BTreeMap<String, u64>,
        subsets: Vec<Subset>,
        all_subsets: Vec<Subset>,
    ) -> Result<Self, ModelError> {
        let mut seen = FxHashSet::default();
        for set in &sets {
            if !seen.insert(set.as_str()) {
                return Err(ModelError::DuplicateSet { name: set.clone() });
            }
        }

        let listed: BTreeSet<&str> = sets.iter().map(String::as_str).collect();
        let sized: BTreeSet<&str> = sizes.keys().map(String::as_str).collect();
        if listed != sized {
            let missing: Vec<&str> = listed.difference(&sized).copied().collect();
            let extra: Vec<&str> = sized.difference(&listed).copied().collect();
            return Err(ModelError::SizeMismatch {
                message: format!("missing sizes for {missing:?}, sizes for unknown sets {extra:?}"),
            });
        }

        let set_count = sets.len();
        for subset in all_subsets.iter().chain(subsets.iter()) {
            if subset.degree() as usize > set_count {
                return Err(ModelError::DegreeOutOfRange {
                    name: subset.name().to_string(),
                    degree: subset.degree(),
                    set_count,
                });
            }
            if !subset.dev().is_finite() {
                return Err(ModelError::NonFiniteDeviation {
                    name: subset.name().to_string(),
                });
            }
            if subset.classified_with() != set_count {
                return Err(ModelError::ClassificationMismatch {
                    name: subset.name().to_string(),
                    classified_with: subset.classified_with(),
                    set_count,
                });
            }
        }

        let known: FxHashSet<String> = all_subsets
            .iter()
            .map(|s| s.name().to_lowercase())
            .collect();
        if let Some(unknown) = subsets
            .iter()
            .find(|s| !known.contains(&s.name().to_lowercase()))
        {
            return Err(ModelError::UnknownVisibleSubset {
                name: unknown.name().to_string(),
            });
        }

        let count = all_subsets.iter().map(Subset::size).collect();

        Ok(Self {
            sets,
            sizes,
            subsets,
            all_subsets,
            count,
            all_sets_length: set_count,
        })
    }

    /// Set names in plot order.
    pub fn sets(&self) -> &[String] {
        &self.sets
    }

    pub fn sizes(&self) -> &BTreeMap<String, u64> {
        &self.sizes
    }

    pub fn set_size(&self, name: &str) -> Option<u64> {
        self.sizes.get(name).copied()
    }

    /// Visible (filtered) intersection rows.
    pub fn subsets(&self) -> &[Subset] {
        &self.subsets
    }

    /// Unfiltered intersection rows.
    pub fn all_subsets(&self) -> &[Subset] {
        &self.all_subsets
    }

    /// Sizes of `all_subsets`, in the same order.
    pub fn count(&self) -> &[u64] {
        &self.count
    }

    /// Total number of distinct sets (N).
    pub fn all_sets_length(&self) -> usize {
        self.all_sets_length
    }
}
