//! Closed enums and collection aliases used across the engine.

pub mod collections;
pub mod enums;

pub use collections::{BTreeMap, BTreeSet, FxHashMap, FxHashSet};
pub use enums::{
    ChangeTrend, Explanation, IntersectionType, Level, Region, SetSizeDivergence, SortBy,
    SortOrder, SubsetField, Verbosity,
};
