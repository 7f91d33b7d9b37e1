//! Subset statistics: percentiles, degree aggregates, deviation split,
//! divergence and trend heuristics.
//!
//! Every average guards its denominator and returns 0 for empty input.

use std::cmp::Ordering;

use statrs::statistics::Statistics;

use alttxt_core::constants::{
    DIVERGENCE_A_LOT_PCT, DIVERGENCE_MODERATE_PCT, DIVERGENCE_ROUGHLY_EQUAL_PCT,
    DRASTIC_TREND_RSD, LARGEST_FACTOR_ROUND_UP,
};
use alttxt_core::models::Subset;
use alttxt_core::types::{ChangeTrend, SetSizeDivergence, SortOrder, SubsetField};

/// Subsets sorted by `field` in the given order. Sorting is stable, so ties
/// keep their input order.
pub fn rank_by(subsets: &[Subset], field: SubsetField, order: SortOrder) -> Vec<&Subset> {
    let mut ranked: Vec<&Subset> = subsets.iter().collect();
    ranked.sort_by(|a, b| {
        let ord = compare_field(a, b, field);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    ranked
}

fn compare_field(a: &Subset, b: &Subset, field: SubsetField) -> Ordering {
    match field {
        SubsetField::Name => a.name().cmp(b.name()),
        _ => a
            .numeric(field)
            .partial_cmp(&b.numeric(field))
            .unwrap_or(Ordering::Equal),
    }
}

/// Value of `field` at percentile `perc` (0-100) of the subsets sorted
/// ascending. The index is `floor(len * perc / 100)`, clamped to the last
/// element, so `perc = 100` yields the maximum. Returns `None` for no subsets.
pub fn percentile(subsets: &[Subset], field: SubsetField, perc: f64) -> Option<f64> {
    if subsets.is_empty() {
        return None;
    }
    let ranked = rank_by(subsets, field, SortOrder::Ascending);
    let raw = (ranked.len() as f64 * perc / 100.0).floor();
    let index = if raw.is_finite() && raw > 0.0 {
        (raw as usize).min(ranked.len() - 1)
    } else {
        0
    };
    Some(ranked[index].numeric(field))
}

/// Per-degree aggregates as parallel vectors indexed by degree.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeAggregate {
    pub counts: Vec<u64>,
    pub avg_sizes: Vec<f64>,
    pub avg_devs: Vec<f64>,
    pub total_sizes: Vec<u64>,
}

impl DegreeAggregate {
    pub fn max_degree(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }

    /// Degrees ≥ 1 that have at least one subset, with their average size.
    pub fn populated_avg_sizes(&self) -> Vec<(usize, f64)> {
        self.counts
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, count)| **count > 0)
            .map(|(degree, _)| (degree, self.avg_sizes[degree]))
            .collect()
    }
}

/// Aggregate subsets by degree for degrees `0..=max_degree`.
///
/// Degree 0 is seeded with a count of 1 for the unincluded row; degree-0
/// subsets add their size and deviation to that slot without adding to the
/// count. Subsets above `max_degree` are ignored.
pub fn degree_aggregate(subsets: &[Subset], max_degree: u32) -> DegreeAggregate {
    let slots = max_degree as usize + 1;
    let mut counts = vec![0u64; slots];
    let mut total_sizes = vec![0u64; slots];
    let mut dev_sums = vec![0f64; slots];
    counts[0] = 1;

    for subset in subsets {
        let degree = subset.degree() as usize;
        if degree >= slots {
            continue;
        }
        if degree > 0 {
            counts[degree] += 1;
        }
        total_sizes[degree] += subset.size();
        dev_sums[degree] += subset.dev();
    }

    let avg_sizes = (0..slots)
        .map(|d| safe_div(total_sizes[d] as f64, counts[d] as f64))
        .collect();
    let avg_devs = (0..slots)
        .map(|d| safe_div(dev_sums[d], counts[d] as f64))
        .collect();

    DegreeAggregate {
        counts,
        avg_sizes,
        avg_devs,
        total_sizes,
    }
}

/// One side of the deviation split.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviationSide {
    pub count: usize,
    pub total_size: u64,
    pub avg_dev: f64,
}

/// Subsets with strictly positive vs. strictly negative deviation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviationSplit {
    pub positive: DeviationSide,
    pub negative: DeviationSide,
}

/// Partition subsets by the sign of their deviation; zero goes to neither side.
pub fn deviation_split(subsets: &[Subset]) -> DeviationSplit {
    let side = |keep: fn(f64) -> bool| {
        let members: Vec<&Subset> = subsets.iter().filter(|s| keep(s.dev())).collect();
        let dev_sum: f64 = members.iter().map(|s| s.dev()).sum();
        DeviationSide {
            count: members.len(),
            total_size: members.iter().map(|s| s.size()).sum(),
            avg_dev: safe_div(dev_sum, members.len() as f64),
        }
    };

    DeviationSplit {
        positive: side(|d| d > 0.0),
        negative: side(|d| d < 0.0),
    }
}

/// Bucket the ratio of the smallest to the largest set size.
pub fn divergence(min_set_size: u64, max_set_size: u64) -> SetSizeDivergence {
    if max_set_size == 0 {
        return SetSizeDivergence::Identical;
    }
    let ratio = min_set_size as f64 / max_set_size as f64 * 100.0;
    if ratio < DIVERGENCE_A_LOT_PCT {
        SetSizeDivergence::DivergingALot
    } else if ratio < DIVERGENCE_MODERATE_PCT {
        SetSizeDivergence::Diverging
    } else if ratio < DIVERGENCE_ROUGHLY_EQUAL_PCT {
        SetSizeDivergence::DivergingABit
    } else {
        SetSizeDivergence::Identical
    }
}

/// Classify how strongly a sequence of sizes changes, by its relative
/// standard deviation (sample std-dev / mean).
pub fn change_trend(sizes: &[f64]) -> ChangeTrend {
    if sizes.len() < 2 {
        return ChangeTrend::Constant;
    }
    let mean = sizes.iter().mean();
    let std_dev = sizes.iter().std_dev();
    if !std_dev.is_finite() || std_dev == 0.0 || mean == 0.0 {
        return ChangeTrend::Constant;
    }

    let rsd = std_dev / mean.abs();
    if rsd < DRASTIC_TREND_RSD {
        ChangeTrend::Gradual
    } else {
        ChangeTrend::Drastic
    }
}

/// How many times larger the largest size is than the second largest.
///
/// A fractional part above 0.78 rounds up, anything else rounds down.
/// `None` with fewer than two sizes or when the second largest is 0.
pub fn largest_factor(sizes: &[u64]) -> Option<u64> {
    if sizes.len() < 2 {
        return None;
    }
    let mut sorted = sizes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let (largest, second) = (sorted[0], sorted[1]);
    if second == 0 {
        return None;
    }

    let ratio = largest as f64 / second as f64;
    let factor = if ratio.fract() > LARGEST_FACTOR_ROUND_UP {
        ratio.ceil()
    } else {
        ratio.floor()
    };
    Some(factor as u64)
}

/// Mean size of the subsets, 0 for none.
pub fn average_size(subsets: &[Subset]) -> f64 {
    let total: u64 = subsets.iter().map(Subset::size).sum();
    safe_div(total as f64, subsets.len() as f64)
}

/// Median of the given sizes (mean of the two middle values for even
/// counts), 0 for none.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Median subset size, 0 for none.
pub fn median_size(subsets: &[Subset]) -> f64 {
    let sizes: Vec<f64> = subsets.iter().map(|s| s.size() as f64).collect();
    median(&sizes)
}

/// Direction of the average intersection size as degree grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeTrend {
    Increasing,
    Decreasing,
    Varying,
    Flat,
}

impl DegreeTrend {
    /// Verb phrase for "as degree increases, average size ...".
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Increasing => "increases",
            Self::Decreasing => "decreases",
            Self::Varying => "fluctuates",
            Self::Flat => "stays the same",
        }
    }
}

/// Direction of the average size over populated degrees ≥ 1.
pub fn degree_size_trend(aggregate: &DegreeAggregate) -> DegreeTrend {
    let averages: Vec<f64> = aggregate
        .populated_avg_sizes()
        .into_iter()
        .map(|(_, avg)| avg)
        .collect();
    if averages.len() < 2 {
        return DegreeTrend::Flat;
    }

    let mut rising = false;
    let mut falling = false;
    for pair in averages.windows(2) {
        match pair[1].partial_cmp(&pair[0]) {
            Some(Ordering::Greater) => rising = true,
            Some(Ordering::Less) => falling = true,
            _ => {}
        }
    }

    match (rising, falling) {
        (true, false) => DegreeTrend::Increasing,
        (false, true) => DegreeTrend::Decreasing,
        (true, true) => DegreeTrend::Varying,
        (false, false) => DegreeTrend::Flat,
    }
}

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
