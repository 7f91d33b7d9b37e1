//! The analysed plot that token producers read from.

use alttxt_analysis::classifier::Presence;
use alttxt_analysis::regions::{categorize, RegionMap};
use alttxt_analysis::statistics::{
    degree_aggregate, deviation_split, DegreeAggregate, DeviationSplit,
};
use alttxt_core::constants::MAX_AGGREGATED_DEGREE;
use alttxt_core::models::{DataModel, GrammarModel, Subset};

/// Data and grammar models plus the analyses derived from them.
///
/// Built once per generation request; producers only read from it.
#[derive(Debug, Clone)]
pub struct TokenContext {
    data: DataModel,
    grammar: GrammarModel,
    regions: RegionMap,
    degrees: DegreeAggregate,
    deviations: DeviationSplit,
}

impl TokenContext {
    pub fn new(data: DataModel, grammar: GrammarModel) -> Self {
        let visible = data.subsets();
        let regions = categorize(visible);
        let degrees = degree_aggregate(visible, MAX_AGGREGATED_DEGREE);
        let deviations = deviation_split(visible);

        tracing::debug!(
            sets = data.all_sets_length(),
            visible = visible.len(),
            total = data.all_subsets().len(),
            "built token context"
        );

        Self {
            data,
            grammar,
            regions,
            degrees,
            deviations,
        }
    }

    pub fn data(&self) -> &DataModel {
        &self.data
    }

    pub fn grammar(&self) -> &GrammarModel {
        &self.grammar
    }

    /// The subsets the plot currently shows.
    pub fn visible(&self) -> &[Subset] {
        self.data.subsets()
    }

    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    pub fn degrees(&self) -> &DegreeAggregate {
        &self.degrees
    }

    pub fn deviations(&self) -> &DeviationSplit {
        &self.deviations
    }

    /// Empty and all-sets rows, looked up among every subset so that
    /// filtering them out of the plot does not hide them from the text.
    pub fn presence(&self) -> Presence<'_> {
        Presence::scan(self.data.all_subsets(), self.data.all_sets_length())
    }

    /// Sum of all set sizes (elements in several sets count once per set).
    pub fn universal_set_size(&self) -> u64 {
        self.data.sizes().values().sum()
    }

    /// Sum of the visible subset sizes.
    pub fn visible_size(&self) -> u64 {
        self.visible().iter().map(Subset::size).sum()
    }

    /// The set with the largest size, first in set order on ties.
    pub fn largest_set(&self) -> Option<(&str, u64)> {
        self.sized_sets()
            .fold(None, |best, (name, size)| match best {
                Some((_, best_size)) if size <= best_size => best,
                _ => Some((name, size)),
            })
    }

    /// The set with the smallest size, first in set order on ties.
    pub fn smallest_set(&self) -> Option<(&str, u64)> {
        self.sized_sets()
            .fold(None, |best, (name, size)| match best {
                Some((_, best_size)) if size >= best_size => best,
                _ => Some((name, size)),
            })
    }

    fn sized_sets(&self) -> impl Iterator<Item = (&str, u64)> {
        self.data
            .sets()
            .iter()
            .map(|name| (name.as_str(), self.data.set_size(name).unwrap_or(0)))
    }
}
