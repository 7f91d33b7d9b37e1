//! Intersection classifier: (degree, set count) → IntersectionType.
//!
//! The rules are data: an ordered list of degree ranges per set count, first
//! match wins. A `ClassificationTable` flattens that list into a per-degree
//! lookup once per set count.
//!
//! The all-sets row (degree == N) is classified as a high order set, never
//! as `AllSet`; callers that need to know whether an all-set or empty row
//! exists use [`Presence`].

use std::ops::RangeInclusive;

use alttxt_core::models::{Subset, SubsetRecord};
use alttxt_core::types::IntersectionType;

/// Ordered degree-range rules for `set_count` sets. The first matching
/// range wins; the last rule catches everything.
fn degree_rules(set_count: usize) -> Vec<(RangeInclusive<u32>, IntersectionType)> {
    use IntersectionType::*;

    let n = u32::try_from(set_count).unwrap_or(u32::MAX);
    let mut rules = vec![(1..=1, Individual), (0..=0, Empty), (n..=n, HighOrderSet)];

    match set_count {
        3 => rules.push((2..=2, MediumSet)),
        4 => rules.extend([(2..=2, LowSet), (3..=3, MediumSet)]),
        5 => rules.extend([(2..=2, LowSet), (3..=3, MediumSet), (4..=4, HighOrderSet)]),
        6 => rules.extend([(2..=2, LowSet), (3..=4, MediumSet), (5..=5, HighOrderSet)]),
        _ => rules.extend([(2..=3, LowSet), (4..=n / 2, MediumSet)]),
    }

    rules.push((0..=u32::MAX, HighOrderSet));
    rules
}

/// Per-degree classification lookup for a fixed set count.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    set_count: usize,
    by_degree: Vec<IntersectionType>,
}

impl ClassificationTable {
    pub fn new(set_count: usize) -> Self {
        let rules = degree_rules(set_count);
        let by_degree = (0..=set_count as u32)
            .map(|degree| {
                rules
                    .iter()
                    .find(|(range, _)| range.contains(&degree))
                    .map(|(_, kind)| *kind)
                    .unwrap_or(IntersectionType::HighOrderSet)
            })
            .collect();

        Self {
            set_count,
            by_degree,
        }
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Classify a degree. Degrees above the set count saturate to
    /// `HighOrderSet`.
    pub fn classify(&self, degree: u32) -> IntersectionType {
        self.by_degree
            .get(degree as usize)
            .copied()
            .unwrap_or(IntersectionType::HighOrderSet)
    }

    /// Build a classified subset from a parsed record.
    pub fn subset(&self, record: SubsetRecord) -> Subset {
        let classification = self.classify(record.degree);
        Subset::from_record(record, classification, self.set_count)
    }

    /// Build classified subsets from parsed records, preserving order.
    pub fn subsets<I>(&self, records: I) -> Vec<Subset>
    where
        I: IntoIterator<Item = SubsetRecord>,
    {
        records.into_iter().map(|r| self.subset(r)).collect()
    }
}

/// Classify `degree` for a plot with `set_count` sets.
pub fn classify(degree: u32, set_count: usize) -> IntersectionType {
    ClassificationTable::new(set_count).classify(degree)
}

/// The special rows of a plot, detected by degree rather than by
/// classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presence<'a> {
    /// The degree-0 row (elements in no set).
    pub empty: Option<&'a Subset>,
    /// The degree-N row (elements in every set).
    pub all_set: Option<&'a Subset>,
}

impl<'a> Presence<'a> {
    pub fn scan(subsets: &'a [Subset], set_count: usize) -> Self {
        Self {
            empty: subsets.iter().find(|s| s.degree() == 0),
            all_set: subsets
                .iter()
                .find(|s| set_count > 0 && s.degree() as usize == set_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use IntersectionType::*;

    fn row(n: usize) -> Vec<IntersectionType> {
        (0..=n as u32).map(|d| classify(d, n)).collect()
    }

    #[test]
    fn test_three_sets() {
        assert_eq!(row(3), vec![Empty, Individual, MediumSet, HighOrderSet]);
    }

    #[test]
    fn test_four_sets() {
        assert_eq!(row(4), vec![Empty, Individual, LowSet, MediumSet, HighOrderSet]);
    }

    #[test]
    fn test_five_sets() {
        assert_eq!(
            row(5),
            vec![Empty, Individual, LowSet, MediumSet, HighOrderSet, HighOrderSet]
        );
    }

    #[test]
    fn test_six_sets() {
        assert_eq!(
            row(6),
            vec![Empty, Individual, LowSet, MediumSet, MediumSet, HighOrderSet, HighOrderSet]
        );
    }

    #[test]
    fn test_seven_sets_has_no_medium_band() {
        // floor(7 / 2) = 3, so the 4..=3 medium band is empty.
        assert_eq!(
            row(7),
            vec![
                Empty,
                Individual,
                LowSet,
                LowSet,
                HighOrderSet,
                HighOrderSet,
                HighOrderSet,
                HighOrderSet
            ]
        );
    }

    #[test]
    fn test_ten_sets() {
        assert_eq!(
            row(10),
            vec![
                Empty,
                Individual,
                LowSet,
                LowSet,
                MediumSet,
                MediumSet,
                HighOrderSet,
                HighOrderSet,
                HighOrderSet,
                HighOrderSet,
                HighOrderSet
            ]
        );
    }

    #[test]
    fn test_small_set_counts() {
        assert_eq!(row(1), vec![Empty, Individual]);
        assert_eq!(row(2), vec![Empty, Individual, HighOrderSet]);
        assert_eq!(classify(0, 0), Empty);
    }

    #[test]
    fn test_never_all_set() {
        for n in 0..20 {
            assert!(row(n).iter().all(|t| *t != AllSet));
        }
    }

    #[test]
    fn test_degree_above_set_count_saturates() {
        assert_eq!(classify(9, 4), HighOrderSet);
    }

    #[test]
    fn test_table_builds_classified_subsets() {
        let table = ClassificationTable::new(3);
        let subset = table.subset(SubsetRecord::new("A∩B", 5, 1.0, 2, ["A", "B"]));
        assert_eq!(subset.classification(), MediumSet);
        assert_eq!(subset.classified_with(), 3);
    }

    #[test]
    fn test_presence_detects_special_rows() {
        let table = ClassificationTable::new(2);
        let subsets = table.subsets([
            SubsetRecord::new("Unincluded", 3, 0.0, 0, Vec::<String>::new()),
            SubsetRecord::new("A", 4, 0.0, 1, ["A"]),
        ]);
        let presence = Presence::scan(&subsets, 2);
        assert_eq!(presence.empty.map(|s| s.size()), Some(3));
        assert!(presence.all_set.is_none());
    }
}
