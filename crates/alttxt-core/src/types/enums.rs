//! String-valued enums for plot state, generation options, and analysis results.
//!
//! Each enum serializes to (and parses from) the lowercase string used in
//! UpSet exports and config files.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $value)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string value used in exports and config.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == wanted)
                    .ok_or_else(|| ConfigError::UnknownVariant {
                        field: $field.to_string(),
                        message: format!(
                            "expected one of [{}], got {:?}",
                            Self::ALL.iter().map(|v| v.name()).collect::<Vec<_>>().join(", "),
                            s
                        ),
                    })
            }
        }
    };
}

string_enum! {
    /// Semantic content level of the generated description.
    Level, "level" {
        One => "1",
        Two => "2",
        /// Level one, level two, and trend analysis together.
        Default => "default",
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::One
    }
}

string_enum! {
    /// How much detail each level includes.
    Verbosity, "verbosity" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::Medium
    }
}

string_enum! {
    /// How much of an "what is an UpSet plot" preamble to prepend.
    Explanation, "explain" {
        None => "none",
        Simple => "simple",
        Full => "full",
    }
}

impl Default for Explanation {
    fn default() -> Self {
        Self::None
    }
}

string_enum! {
    /// Sort key of the plot's intersection rows.
    SortBy, "sort_by" {
        Degree => "degree",
        Size => "size",
        Deviation => "deviation",
    }
}

impl Default for SortBy {
    fn default() -> Self {
        Self::Size
    }
}

string_enum! {
    SortOrder, "sort_order" {
        Ascending => "ascending",
        Descending => "descending",
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Descending
    }
}

string_enum! {
    /// Subset attributes usable as a sort or percentile key.
    SubsetField, "field" {
        Name => "name",
        Size => "size",
        Deviation => "dev",
        Degree => "degree",
    }
}

string_enum! {
    /// Semantic category of an intersection, derived from its degree and the
    /// total number of sets.
    IntersectionType, "intersection_type" {
        Empty => "empty",
        Individual => "individual",
        LowSet => "low_set",
        MediumSet => "medium_set",
        HighOrderSet => "highorder_set",
        AllSet => "all_set",
    }
}

impl IntersectionType {
    /// Prose label used in generated text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "the empty intersection",
            Self::Individual => "individual set",
            Self::LowSet => "low set",
            Self::MediumSet => "medium set",
            Self::HighOrderSet => "high order set",
            Self::AllSet => "all set",
        }
    }
}

string_enum! {
    /// How far apart the smallest and largest set sizes are.
    SetSizeDivergence, "divergence" {
        DivergingALot => "diverging a lot",
        Diverging => "moderately diverging",
        DivergingABit => "roughly equal",
        Identical => "nearly identical",
    }
}

string_enum! {
    /// How strongly a sequence of sizes changes.
    ChangeTrend, "trend" {
        Constant => "constant",
        Gradual => "gradual",
        Drastic => "drastic",
    }
}

string_enum! {
    /// Relative size bucket of a subset.
    Region, "region" {
        Largest => "largest",
        Large => "large",
        Medium => "medium",
        Small => "small",
    }
}
