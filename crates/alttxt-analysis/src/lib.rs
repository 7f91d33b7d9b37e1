//! # alttxt-analysis
//!
//! Derived values behind every narrative token: intersection-type
//! classification, subset statistics and trend heuristics, and the
//! size-region classification.

pub mod classifier;
pub mod regions;
pub mod statistics;

pub use classifier::{classify, ClassificationTable, Presence};
pub use regions::{categorize, Region, RegionBuckets, RegionMap, RegionShare};
pub use statistics::{DegreeAggregate, DegreeTrend, DeviationSide, DeviationSplit};
