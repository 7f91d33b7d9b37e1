//! Shared constants for the UpSet alt-text engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder rendered wherever an optional input field is missing.
pub const FIELD_NOT_AVAILABLE: &str = "(field not available)";

/// Display name used for the degree-0 row.
pub const EMPTY_INTERSECTION_NAME: &str = "the empty intersection";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "ALTTXT_LOG";

/// Prefix for configuration environment overrides.
pub const ENV_PREFIX: &str = "ALTTXT_";

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "alttxt.toml";

// ---- Analysis ----

/// Decimal places kept for deviations and float tokens.
pub const DECIMAL_PLACES: i32 = 2;

/// Region closeness threshold as a multiple of the median size.
pub const REGION_CLOSENESS_FACTOR: f64 = 1.2;

/// Minimum share (percent) of a region's size for a type to be assigned to it.
pub const REGION_ASSIGNMENT_PCT: f64 = 35.0;

/// Divergence band upper bounds (percent, exclusive): a lot, moderately, roughly equal.
pub const DIVERGENCE_A_LOT_PCT: f64 = 26.67;
pub const DIVERGENCE_MODERATE_PCT: f64 = 53.35;
pub const DIVERGENCE_ROUGHLY_EQUAL_PCT: f64 = 80.0;

/// Relative standard deviation at or above which a trend counts as drastic.
pub const DRASTIC_TREND_RSD: f64 = 0.5;

/// Fractional part above which the largest factor is rounded up.
pub const LARGEST_FACTOR_ROUND_UP: f64 = 0.78;

/// Highest degree considered when aggregating subsets by degree.
pub const MAX_AGGREGATED_DEGREE: u32 = 50;

/// Number of intersections listed by the "largest intersections" token.
pub const TOP_INTERSECTIONS: usize = 5;

/// Maximum subset names listed per intersection type.
pub const NAMES_PER_TYPE: usize = 3;

// ---- Expansion ----

/// Default floor for the expansion pass ceiling.
pub const DEFAULT_MIN_PASSES: usize = 16;

/// Non-terminal marker pair.
pub const NON_TERMINAL_OPEN: &str = "[[";
pub const NON_TERMINAL_CLOSE: &str = "]]";

/// Terminal marker pair.
pub const TERMINAL_OPEN: &str = "{{";
pub const TERMINAL_CLOSE: &str = "}}";
