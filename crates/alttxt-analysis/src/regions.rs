//! Size-region classification.
//!
//! A pure three-stage pipeline: [`bucket`] subsets into largest / large /
//! medium / small regions around the median size, [`aggregate`] each
//! region's size share per intersection type, then [`select`] the regions
//! that dominate each type.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use alttxt_core::constants::{REGION_ASSIGNMENT_PCT, REGION_CLOSENESS_FACTOR};
use alttxt_core::models::Subset;
use alttxt_core::types::IntersectionType;

pub use alttxt_core::types::Region;

use crate::statistics::median;

/// Subsets grouped by relative size.
#[derive(Debug, Clone, Default)]
pub struct RegionBuckets<'a> {
    pub largest: Option<&'a Subset>,
    pub large: Vec<&'a Subset>,
    pub medium: Vec<&'a Subset>,
    pub small: Vec<&'a Subset>,
    /// Median size of every subset except the largest.
    pub median: f64,
}

impl<'a> RegionBuckets<'a> {
    pub fn members(&self, region: Region) -> Vec<&'a Subset> {
        match region {
            Region::Largest => self.largest.into_iter().collect(),
            Region::Large => self.large.clone(),
            Region::Medium => self.medium.clone(),
            Region::Small => self.small.clone(),
        }
    }
}

/// Stage 1: split subsets into size regions.
///
/// The single largest subset forms its own region. The rest are compared
/// with their median: more than `0.2 × median` below it is small, within
/// that margin is medium, anything else is large.
pub fn bucket(subsets: &[Subset]) -> RegionBuckets<'_> {
    let mut sorted: Vec<&Subset> = subsets.iter().collect();
    sorted.sort_by(|a, b| b.size().cmp(&a.size()));

    let mut buckets = RegionBuckets::default();
    let Some((largest, rest)) = sorted.split_first() else {
        return buckets;
    };
    buckets.largest = Some(*largest);

    let sizes: Vec<f64> = rest.iter().map(|s| s.size() as f64).collect();
    let median = median(&sizes);
    let margin = (median - median * REGION_CLOSENESS_FACTOR).abs();
    buckets.median = median;

    for subset in rest {
        let deviation = subset.size() as f64 - median;
        if deviation < 0.0 && deviation.abs() > margin {
            buckets.small.push(*subset);
        } else if deviation.abs() <= margin {
            buckets.medium.push(*subset);
        } else {
            buckets.large.push(*subset);
        }
    }

    buckets
}

/// Size composition of one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionShare {
    /// Percentage of the region's non-empty size per intersection type.
    /// A type is present (possibly at 0%) iff the region holds one of its
    /// subsets.
    pub percentages: BTreeMap<IntersectionType, f64>,
    /// Size of the empty intersection, if the region holds it.
    pub empty_size: Option<u64>,
}

/// Stage 2: per region, the size-weighted percentage of each intersection
/// type. Empty-intersection rows are excluded from the pool and tracked by
/// size instead.
pub fn aggregate(buckets: &RegionBuckets<'_>) -> BTreeMap<Region, RegionShare> {
    Region::ALL
        .iter()
        .map(|&region| (region, share_of(&buckets.members(region))))
        .filter(|(_, share)| !share.percentages.is_empty() || share.empty_size.is_some())
        .collect()
}

fn share_of(members: &[&Subset]) -> RegionShare {
    let mut totals: BTreeMap<IntersectionType, u64> = BTreeMap::new();
    let mut empty_size = None;

    for subset in members {
        match subset.classification() {
            IntersectionType::Empty => {
                *empty_size.get_or_insert(0) += subset.size();
            }
            kind => *totals.entry(kind).or_insert(0) += subset.size(),
        }
    }

    let pool: u64 = totals.values().sum();
    let percentages = totals
        .into_iter()
        .map(|(kind, size)| {
            let pct = if pool == 0 {
                0.0
            } else {
                size as f64 / pool as f64 * 100.0
            };
            (kind, pct)
        })
        .collect();

    RegionShare {
        percentages,
        empty_size,
    }
}

/// Which regions each intersection type is structurally present in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionMap {
    assignments: BTreeMap<IntersectionType, BTreeSet<Region>>,
}

impl RegionMap {
    pub fn regions(&self, kind: IntersectionType) -> Option<&BTreeSet<Region>> {
        self.assignments.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IntersectionType, &BTreeSet<Region>)> {
        self.assignments.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Stage 3: assign each type to every region where it holds at least 35%
/// of the size. A type that clears the threshold nowhere goes to its
/// highest-share region (which is also its only region when it appears in
/// just one). The empty intersection goes wherever it was bucketed.
pub fn select(shares: &BTreeMap<Region, RegionShare>) -> RegionMap {
    let mut assignments: BTreeMap<IntersectionType, BTreeSet<Region>> = BTreeMap::new();

    for kind in IntersectionType::ALL {
        if *kind == IntersectionType::Empty {
            let holding: BTreeSet<Region> = shares
                .iter()
                .filter(|(_, share)| share.empty_size.is_some())
                .map(|(region, _)| *region)
                .collect();
            if !holding.is_empty() {
                assignments.insert(*kind, holding);
            }
            continue;
        }

        let present: Vec<(Region, f64)> = shares
            .iter()
            .filter_map(|(region, share)| share.percentages.get(kind).map(|pct| (*region, *pct)))
            .collect();
        if present.is_empty() {
            continue;
        }

        let mut chosen: BTreeSet<Region> = present
            .iter()
            .filter(|(_, pct)| *pct >= REGION_ASSIGNMENT_PCT)
            .map(|(region, _)| *region)
            .collect();

        if chosen.is_empty() {
            // Ties resolve to the earlier (larger) region.
            let best = present
                .iter()
                .fold(None::<(Region, f64)>, |best, &(region, pct)| match best {
                    Some((_, best_pct))
                        if pct.partial_cmp(&best_pct) != Some(Ordering::Greater) =>
                    {
                        best
                    }
                    _ => Some((region, pct)),
                });
            chosen.extend(best.map(|(region, _)| region));
        }

        assignments.insert(*kind, chosen);
    }

    RegionMap { assignments }
}

/// Classify subsets into size regions and report where each intersection
/// type lies.
pub fn categorize(subsets: &[Subset]) -> RegionMap {
    let buckets = bucket(subsets);
    let shares = aggregate(&buckets);
    let map = select(&shares);

    tracing::debug!(
        median = buckets.median,
        large = buckets.large.len(),
        medium = buckets.medium.len(),
        small = buckets.small.len(),
        assigned_types = map.assignments.len(),
        "categorized subsets into size regions"
    );

    map
}
