use alttxt_analysis::classifier::{classify, ClassificationTable};
use alttxt_analysis::regions::{aggregate, bucket};
use alttxt_analysis::statistics::{largest_factor, percentile};
use alttxt_core::models::{Subset, SubsetRecord};
use alttxt_core::types::{IntersectionType, SubsetField};
use proptest::prelude::*;

fn subsets_strategy() -> impl Strategy<Value = (usize, Vec<Subset>)> {
    (1usize..12).prop_flat_map(|n| {
        let row = (0u64..500, -50.0f64..50.0, 0u32..=n as u32);
        prop::collection::vec(row, 0..40).prop_map(move |rows| {
            let table = ClassificationTable::new(n);
            let subsets = rows
                .into_iter()
                .enumerate()
                .map(|(i, (size, dev, degree))| {
                    table.subset(SubsetRecord::new(
                        format!("row{i}"),
                        size,
                        dev,
                        degree,
                        Vec::<String>::new(),
                    ))
                })
                .collect();
            (n, subsets)
        })
    })
}

proptest! {
    #[test]
    fn classify_is_total_and_never_all_set(
        (n, degree) in (0usize..64).prop_flat_map(|n| (Just(n), 0u32..=n as u32))
    ) {
        let kind = classify(degree, n);
        prop_assert_ne!(kind, IntersectionType::AllSet);
        if degree == 1 {
            prop_assert_eq!(kind, IntersectionType::Individual);
        } else if degree == 0 {
            prop_assert_eq!(kind, IntersectionType::Empty);
        } else if degree as usize == n {
            prop_assert_eq!(kind, IntersectionType::HighOrderSet);
        }
    }

    #[test]
    fn percentile_stays_within_range((_n, subsets) in subsets_strategy(), perc in 0.0f64..=100.0) {
        let value = percentile(&subsets, SubsetField::Size, perc);
        if subsets.is_empty() {
            prop_assert!(value.is_none());
        } else {
            let value = value.unwrap();
            let min = subsets.iter().map(|s| s.size()).min().unwrap() as f64;
            let max = subsets.iter().map(|s| s.size()).max().unwrap() as f64;
            prop_assert!(value >= min && value <= max);
            prop_assert_eq!(percentile(&subsets, SubsetField::Size, 0.0), Some(min));
            prop_assert_eq!(percentile(&subsets, SubsetField::Size, 100.0), Some(max));
        }
    }

    #[test]
    fn region_percentages_sum_to_hundred((_n, subsets) in subsets_strategy()) {
        let buckets = bucket(&subsets);
        for (region, share) in aggregate(&buckets) {
            let members = buckets.members(region);
            let pool: u64 = members
                .iter()
                .filter(|s| s.classification() != IntersectionType::Empty)
                .map(|s| s.size())
                .sum();
            if pool == 0 {
                continue;
            }
            let total: f64 = share.percentages.values().sum();
            prop_assert!((total - 100.0).abs() < 1e-6, "{region}: {total}");
        }
    }

    #[test]
    fn regions_partition_every_subset((_n, subsets) in subsets_strategy()) {
        let buckets = bucket(&subsets);
        let bucketed = buckets.largest.iter().count()
            + buckets.large.len()
            + buckets.medium.len()
            + buckets.small.len();
        prop_assert_eq!(bucketed, subsets.len());
    }

    #[test]
    fn largest_factor_is_at_least_one(sizes in prop::collection::vec(1u64..10_000, 2..20)) {
        let factor = largest_factor(&sizes).unwrap();
        prop_assert!(factor >= 1);
    }
}
