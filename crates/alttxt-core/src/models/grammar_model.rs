//! Presentation state of the plot: sorting, filters, metadata, bookmarks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{SortBy, SortOrder};

/// Row filters applied by the plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterModel {
    pub max_visible: Option<u32>,
    pub min_visible: Option<u32>,
    pub hide_empty: bool,
}

/// User-supplied plot metadata. Every field is optional in exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaData {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub description: Option<String>,
    /// What the sets represent (e.g. "genres").
    #[serde(rename = "sets")]
    pub sets_label: Option<String>,
    /// What the elements represent (e.g. "movies").
    #[serde(rename = "items")]
    pub items_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkedIntersection {
    pub id: String,
    pub label: String,
    pub size: u64,
}

/// Membership requirement of one set in a set query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryMembership {
    #[serde(alias = "yes")]
    Yes,
    #[serde(alias = "no")]
    No,
    #[serde(alias = "may")]
    May,
}

/// A named query restricting the plot to intersections matching
/// per-set membership requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetQuery {
    pub name: String,
    pub query: BTreeMap<String, QueryMembership>,
}

/// Presentation and configuration state of the plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrammarModel {
    pub sort_by: SortBy,
    #[serde(alias = "sortByOrder")]
    pub sort_order: SortOrder,
    pub visible_sets: Vec<String>,
    pub visible_set_sizes: BTreeMap<String, u64>,
    #[serde(alias = "visibleAttributes")]
    pub visible_atts: Vec<String>,
    pub filters: FilterModel,
    pub meta_data: MetaData,
    pub bookmarked_intersections: Vec<BookmarkedIntersection>,
    pub set_query: Option<SetQuery>,
}

impl GrammarModel {
    pub fn title(&self) -> Option<&str> {
        self.meta_data.title.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.meta_data.caption.as_deref()
    }
}
