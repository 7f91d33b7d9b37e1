//! Embedded phrase grammar.
//!
//! Templates are plain text with `[[symbol]]` non-terminals (resolved from
//! the symbol table below) and `{{token}}` terminals (resolved from the
//! token map). Selection functions pick the top-level template for a
//! request; everything else is reached through symbols.

use alttxt_core::types::{Explanation, FxHashMap, SortBy, Verbosity};

/// Non-terminal symbol → phrase.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    symbols: FxHashMap<String, String>,
}

impl PhraseTable {
    /// The built-in grammar.
    pub fn standard() -> Self {
        Self::from_pairs(SYMBOLS.iter().copied())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            symbols: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.symbols.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Sections of the long-form structured description, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Introduction,
    DatasetProperties,
    SetProperties,
    IntersectionProperties,
    StatisticalInformation,
    TrendAnalysis,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Introduction,
        Section::DatasetProperties,
        Section::SetProperties,
        Section::IntersectionProperties,
        Section::StatisticalInformation,
        Section::TrendAnalysis,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::DatasetProperties => "Dataset Properties",
            Self::SetProperties => "Set Properties",
            Self::IntersectionProperties => "Intersection Properties",
            Self::StatisticalInformation => "Statistical Information",
            Self::TrendAnalysis => "Trend Analysis",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Self::Introduction => "[[title_capt]]. [[upset_intro]]. [[description_line]].",
            Self::DatasetProperties => {
                "[[labels]]. [[set_list]]. [[pop_intersections]]. [[sort_phrase]]. [[filters]]. \
                 [[list_vars]]."
            }
            Self::SetProperties => "[[set_sizes]]. [[set_size_list]]. [[set_extremes]].",
            Self::IntersectionProperties => {
                "[[largest]]. [[factor]]. [[top]]. [[degrees]]. [[types]]. [[special]]. \
                 [[bookmarks]]. [[set_query]]."
            }
            Self::StatisticalInformation => "[[stats]]. [[dev_extremes]]. [[dev_split]].",
            Self::TrendAnalysis => "[[trend_sizes]]. [[trend_degree]]. [[regions]].",
        }
    }
}

/// Preamble explaining the UpSet technique.
pub fn explanation(explain: Explanation) -> &'static str {
    match explain {
        Explanation::None => "",
        Explanation::Simple => "[[upset_intro]]. ",
        Explanation::Full => "[[upset_intro]]. [[upset_matrix]]. [[upset_bars]]. ",
    }
}

/// Level-one description: what the plot shows.
pub fn level_one(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Low => "[[l1_low]]",
        Verbosity::Medium => "[[l1_medium]]",
        Verbosity::High => "[[l1_high]]",
    }
}

/// Level-two description: what the data says, led by the sort field.
pub fn level_two(verbosity: Verbosity, sort_by: SortBy) -> String {
    format!("[[l2_{}_{}]]", sort_by.name(), verbosity.name())
}

/// Trend analysis appended to the default level.
pub fn trend_analysis(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Low => "[[trend_sizes]].",
        Verbosity::Medium => "[[trend_sizes]]. [[trend_degree]].",
        Verbosity::High => "[[trend_sizes]]. [[trend_degree]]. [[regions]].",
    }
}

/// Short summary for structured output.
pub const SHORT_DESCRIPTION: &str = "[[short_desc]].";

/// Technique description for structured output.
pub const TECHNIQUE_DESCRIPTION: &str = "[[upset_intro]]. [[upset_matrix]]. [[upset_bars]].";

const SYMBOLS: &[(&str, &str)] = &[
    // technique
    (
        "upset_intro",
        "this is an UpSet plot, a visualization technique for set intersections that shows \
         how many elements each combination of sets has in common",
    ),
    (
        "upset_matrix",
        "each column of the plot is an intersection. A matrix of dots shows which sets take \
         part in it: a filled dot means the set is included, and the filled dots of an \
         intersection are connected by a line",
    ),
    (
        "upset_bars",
        "a bar above each column shows the size of the intersection, that is, the number of \
         elements that are in exactly these sets and in no other set. The deviation shows how \
         much larger or smaller an intersection is than expected if the sets were independent",
    ),
    // level one
    ("l1_low", "[[title_line]]. [[set_list]]."),
    (
        "l1_medium",
        "[[title_line]]. [[set_list]]. [[set_sizes]]. [[pop_intersections]].",
    ),
    (
        "l1_high",
        "[[title_capt]]. [[labels]]. [[set_list]]. [[set_sizes]]. [[set_size_list]]. \
         [[pop_intersections]]. [[sort_phrase]]. [[filters]]. [[list_vars]].",
    ),
    ("title_line", "this UpSet plot is titled {{title}}"),
    (
        "title_capt",
        "this UpSet plot is titled {{title}} and captioned {{caption}}",
    ),
    ("description_line", "the plot is described as follows: {{description}}"),
    (
        "set_list",
        "the plot shows the intersections of {{set_count}} sets: {{list_set_names}}",
    ),
    (
        "set_sizes",
        "the set sizes range from {{min_set_size}} ({{min_set_name}}) to {{max_set_size}} \
         ({{max_set_name}}), and together the sets hold {{universal_set_size}} elements, \
         counting an element once per set",
    ),
    (
        "labels",
        "the sets represent {{sets_label}} and the elements represent {{items_label}}",
    ),
    ("set_size_list", "the set sizes are {{list_set_sizes}}"),
    (
        "pop_intersections",
        "{{subset_count}} of the {{all_intersect_count}} intersections and \
         {{visible_set_count}} of the {{set_count}} sets are visible. {{pop_intersect_count}} \
         of the visible intersections are non-empty, ranging in size from {{min_size}} to \
         {{max_size}} elements",
    ),
    (
        "sort_phrase",
        "the intersections are sorted by {{sort_by}} in {{sort_order}} order",
    ),
    ("filters", "{{filter_phrase}}"),
    ("list_vars", "{{attribute_phrase}}"),
    ("bookmarks", "{{bookmark_phrase}}"),
    ("set_query", "{{set_query_phrase}}"),
    // level two building blocks
    (
        "largest",
        "the largest intersection is {{list_max_membership}} with {{max_size}} elements \
         ({{max_perc}} of the elements shown), and the smallest is {{list_min_membership}} \
         with {{min_size}} elements ({{min_perc}})",
    ),
    ("factor", "{{largest_factor_phrase}}"),
    (
        "top",
        "the {{top_count}} largest intersections are {{list_max_5int}}",
    ),
    ("degrees", "the plot contains {{list_degree_info}}"),
    ("types", "by degree, there are {{list_type_summary}}"),
    (
        "set_extremes",
        "the largest set is {{max_set_name}} with {{max_set_perc}} of all set memberships, \
         and the smallest set is {{min_set_name}} with {{min_set_perc}}. The set sizes are \
         {{set_divergence}}",
    ),
    (
        "dev_extremes",
        "{{list_max_dev_membership}} rises the furthest above its expected size with a \
         deviation of {{max_dev}}, while {{list_min_dev_membership}} falls the furthest below \
         it with a deviation of {{min_dev}}",
    ),
    (
        "dev_split",
        "{{pos_dev_count}} intersections are larger than expected, holding {{pos_dev_size}} \
         elements with an average deviation of {{pos_dev_avg}}, and {{neg_dev_count}} are \
         smaller than expected, holding {{neg_dev_size}} elements with an average deviation \
         of {{neg_dev_avg}}",
    ),
    (
        "stats",
        "the average intersection size is {{avg_size}} and the median is {{median_size}}. \
         Half of the intersections hold between {{25perc_size}} and {{75perc_size}} elements",
    ),
    ("regions", "{{region_summary}}"),
    ("special", "{{empty_phrase}}. {{all_set_phrase}}"),
    // level two by sort field
    ("l2_size_low", "[[largest]]. [[types]]."),
    (
        "l2_size_medium",
        "[[largest]]. [[factor]]. [[top]]. [[types]]. [[set_extremes]].",
    ),
    (
        "l2_size_high",
        "[[l2_size_medium]] [[stats]]. [[regions]]. [[special]]. [[bookmarks]].",
    ),
    ("l2_degree_low", "[[degrees]]. [[types]]."),
    (
        "l2_degree_medium",
        "[[degrees]]. [[types]]. [[largest]]. [[set_extremes]].",
    ),
    (
        "l2_degree_high",
        "[[l2_degree_medium]] [[stats]]. [[regions]]. [[special]]. [[bookmarks]].",
    ),
    ("l2_deviation_low", "[[dev_extremes]]. [[types]]."),
    (
        "l2_deviation_medium",
        "[[dev_extremes]]. [[dev_split]]. [[types]]. [[set_extremes]].",
    ),
    (
        "l2_deviation_high",
        "[[l2_deviation_medium]] [[largest]]. [[stats]]. [[regions]]. [[special]]. \
         [[bookmarks]].",
    ),
    // trends
    (
        "trend_sizes",
        "across the visible intersections, the change in size is {{size_change_trend}}",
    ),
    (
        "trend_degree",
        "as the degree grows, the average intersection size {{degree_trend}}, and the change \
         between degrees is {{degree_change_trend}}",
    ),
    // structured summary
    (
        "short_desc",
        "an UpSet plot titled {{title}} showing the intersections of {{set_count}} sets: \
         {{list_set_names}}. The largest intersection is {{list_max_membership}} with \
         {{max_size}} elements",
    ),
];
