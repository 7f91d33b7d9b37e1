//! The standard token vocabulary used by the phrase grammar.
//!
//! Numeric facts that never change for a plot are registered as literals;
//! everything that needs list formatting or a sentence fragment is a
//! producer.

use alttxt_analysis::regions::Region;
use alttxt_analysis::statistics::{
    average_size, change_trend, degree_size_trend, divergence, largest_factor, median_size,
    percentile, rank_by,
};
use alttxt_core::constants::{FIELD_NOT_AVAILABLE, NAMES_PER_TYPE, TOP_INTERSECTIONS};
use alttxt_core::errors::TokenError;
use alttxt_core::models::{QueryMembership, Subset};
use alttxt_core::types::{BTreeSet, IntersectionType, SortOrder, SubsetField};

use super::format::{count_noun, format_float, join_list, percent, sanitize};
use super::{Producer, TokenContext, TokenMap, TokenValue};

const PRODUCERS: &[(&str, Producer)] = &[
    // metadata
    ("title", title),
    ("caption", caption),
    ("description", description),
    ("sets_label", sets_label),
    ("items_label", items_label),
    // sets
    ("list_set_names", list_set_names),
    ("list_set_sizes", list_set_sizes),
    ("max_set_name", max_set_name),
    ("min_set_name", min_set_name),
    ("max_set_size", max_set_size),
    ("min_set_size", min_set_size),
    ("max_set_perc", max_set_perc),
    ("min_set_perc", min_set_perc),
    ("set_divergence", set_divergence),
    // intersections
    ("list_max_membership", list_max_membership),
    ("list_min_membership", list_min_membership),
    ("max_perc", max_perc),
    ("min_perc", min_perc),
    ("top_count", top_count),
    ("list_max_5int", list_max_5int),
    ("largest_factor_phrase", largest_factor_phrase),
    ("list_degree_info", list_degree_info),
    ("list_type_summary", list_type_summary),
    // statistics
    ("median_size", median_size_token),
    ("25perc_size", perc_25_size),
    ("75perc_size", perc_75_size),
    ("list_max_dev_membership", list_max_dev_membership),
    ("list_min_dev_membership", list_min_dev_membership),
    // trends and regions
    ("size_change_trend", size_change_trend),
    ("degree_trend", degree_trend),
    ("degree_change_trend", degree_change_trend),
    ("region_summary", region_summary),
    // special rows and plot state
    ("empty_phrase", empty_phrase),
    ("all_set_phrase", all_set_phrase),
    ("bookmark_phrase", bookmark_phrase),
    ("filter_phrase", filter_phrase),
    ("set_query_phrase", set_query_phrase),
    ("attribute_phrase", attribute_phrase),
];

/// Register every standard token into `map`.
pub fn register_standard(map: &mut TokenMap) -> Result<(), TokenError> {
    for (name, value) in literals(map.context()) {
        map.register(name, value)?;
    }
    for (name, producer) in PRODUCERS {
        map.register(*name, TokenValue::Computed(*producer))?;
    }
    Ok(())
}

fn literals(ctx: &TokenContext) -> Vec<(&'static str, TokenValue)> {
    let data = ctx.data();
    let grammar = ctx.grammar();
    let visible = ctx.visible();
    let sizes = visible.iter().map(Subset::size);
    let devs = visible.iter().map(Subset::dev);
    let split = ctx.deviations();

    vec![
        ("set_count", data.all_sets_length().into()),
        ("visible_set_count", visible_set_count(ctx).into()),
        ("universal_set_size", ctx.universal_set_size().into()),
        ("subset_count", visible.len().into()),
        ("all_intersect_count", data.all_subsets().len().into()),
        (
            "pop_intersect_count",
            visible.iter().filter(|s| s.size() > 0).count().into(),
        ),
        ("max_size", sizes.clone().max().unwrap_or(0).into()),
        ("min_size", sizes.min().unwrap_or(0).into()),
        ("avg_size", average_size(visible).into()),
        ("max_dev", devs.clone().fold(None, max_f64).unwrap_or(0.0).into()),
        ("min_dev", devs.fold(None, min_f64).unwrap_or(0.0).into()),
        ("pos_dev_count", split.positive.count.into()),
        ("pos_dev_size", split.positive.total_size.into()),
        ("pos_dev_avg", split.positive.avg_dev.into()),
        ("neg_dev_count", split.negative.count.into()),
        ("neg_dev_size", split.negative.total_size.into()),
        ("neg_dev_avg", split.negative.avg_dev.into()),
        ("sort_by", grammar.sort_by.name().into()),
        ("sort_order", grammar.sort_order.name().into()),
    ]
}

fn max_f64(best: Option<f64>, value: f64) -> Option<f64> {
    Some(best.map_or(value, |b| b.max(value)))
}

fn min_f64(best: Option<f64>, value: f64) -> Option<f64> {
    Some(best.map_or(value, |b| b.min(value)))
}

fn visible_set_count(ctx: &TokenContext) -> usize {
    match ctx.grammar().visible_sets.len() {
        0 => ctx.data().all_sets_length(),
        n => n,
    }
}

fn or_missing(value: Option<&str>) -> String {
    value.map_or_else(|| FIELD_NOT_AVAILABLE.to_string(), sanitize)
}

// ---- metadata ----

fn title(ctx: &TokenContext) -> String {
    or_missing(ctx.grammar().title())
}

fn caption(ctx: &TokenContext) -> String {
    or_missing(ctx.grammar().caption())
}

fn description(ctx: &TokenContext) -> String {
    or_missing(ctx.grammar().meta_data.description.as_deref())
}

fn sets_label(ctx: &TokenContext) -> String {
    or_missing(ctx.grammar().meta_data.sets_label.as_deref())
}

fn items_label(ctx: &TokenContext) -> String {
    or_missing(ctx.grammar().meta_data.items_label.as_deref())
}

// ---- sets ----

fn list_set_names(ctx: &TokenContext) -> String {
    let names: Vec<String> = ctx.data().sets().iter().map(|s| sanitize(s)).collect();
    join_list(&names)
}

fn list_set_sizes(ctx: &TokenContext) -> String {
    let data = ctx.data();
    let entries: Vec<String> = data
        .sets()
        .iter()
        .map(|name| format!("{} ({})", sanitize(name), data.set_size(name).unwrap_or(0)))
        .collect();
    join_list(&entries)
}

fn max_set_name(ctx: &TokenContext) -> String {
    or_missing(ctx.largest_set().map(|(name, _)| name))
}

fn min_set_name(ctx: &TokenContext) -> String {
    or_missing(ctx.smallest_set().map(|(name, _)| name))
}

fn max_set_size(ctx: &TokenContext) -> String {
    ctx.largest_set()
        .map_or_else(|| FIELD_NOT_AVAILABLE.to_string(), |(_, size)| size.to_string())
}

fn min_set_size(ctx: &TokenContext) -> String {
    ctx.smallest_set()
        .map_or_else(|| FIELD_NOT_AVAILABLE.to_string(), |(_, size)| size.to_string())
}

fn max_set_perc(ctx: &TokenContext) -> String {
    let size = ctx.largest_set().map_or(0, |(_, size)| size);
    percent(size as f64, ctx.universal_set_size() as f64)
}

fn min_set_perc(ctx: &TokenContext) -> String {
    let size = ctx.smallest_set().map_or(0, |(_, size)| size);
    percent(size as f64, ctx.universal_set_size() as f64)
}

fn set_divergence(ctx: &TokenContext) -> String {
    let max = ctx.largest_set().map_or(0, |(_, size)| size);
    let min = ctx.smallest_set().map_or(0, |(_, size)| size);
    divergence(min, max).name().to_string()
}

// ---- intersections ----

/// Set membership of a subset as prose, or its name when it has none.
fn membership(subset: &Subset) -> String {
    let members: Vec<String> = subset.set_membership().iter().map(|m| sanitize(m)).collect();
    if members.is_empty() {
        sanitize(subset.name())
    } else {
        join_list(&members)
    }
}

fn by_size(ctx: &TokenContext) -> Vec<&Subset> {
    rank_by(ctx.visible(), SubsetField::Size, SortOrder::Descending)
}

fn list_max_membership(ctx: &TokenContext) -> String {
    or_missing(by_size(ctx).first().map(|s| membership(s)).as_deref())
}

fn list_min_membership(ctx: &TokenContext) -> String {
    let ranked = rank_by(ctx.visible(), SubsetField::Size, SortOrder::Ascending);
    or_missing(ranked.first().map(|s| membership(s)).as_deref())
}

fn max_perc(ctx: &TokenContext) -> String {
    let size = by_size(ctx).first().map_or(0, |s| s.size());
    percent(size as f64, ctx.visible_size() as f64)
}

fn min_perc(ctx: &TokenContext) -> String {
    let size = ctx.visible().iter().map(Subset::size).min().unwrap_or(0);
    percent(size as f64, ctx.visible_size() as f64)
}

fn top_count(ctx: &TokenContext) -> String {
    ctx.visible().len().min(TOP_INTERSECTIONS).to_string()
}

fn list_max_5int(ctx: &TokenContext) -> String {
    let names: Vec<String> = by_size(ctx)
        .iter()
        .take(TOP_INTERSECTIONS)
        .map(|s| format!("{} ({})", sanitize(s.name()), s.size()))
        .collect();
    join_list(&names)
}

fn largest_factor_phrase(ctx: &TokenContext) -> String {
    let sizes: Vec<u64> = ctx.visible().iter().map(Subset::size).collect();
    match largest_factor(&sizes) {
        Some(1) => "the largest intersection is about as large as the second largest".to_string(),
        Some(factor) => format!(
            "the largest intersection is about {factor} times as large as the second largest"
        ),
        None => "there is no non-empty second intersection to compare the largest with".to_string(),
    }
}

fn list_degree_info(ctx: &TokenContext) -> String {
    let entries: Vec<String> = ctx
        .degrees()
        .counts
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, count)| **count > 0)
        .map(|(degree, count)| {
            let noun = count_noun(*count as usize, "intersection", "intersections");
            format!("{noun} of degree {degree}")
        })
        .collect();
    if entries.is_empty() {
        "no intersections of degree one or more".to_string()
    } else {
        join_list(&entries)
    }
}

fn list_type_summary(ctx: &TokenContext) -> String {
    let mut entries = Vec::new();
    for kind in IntersectionType::ALL {
        if matches!(kind, IntersectionType::Empty | IntersectionType::AllSet) {
            continue;
        }
        let members: Vec<&Subset> = ctx
            .visible()
            .iter()
            .filter(|s| s.classification() == *kind)
            .collect();
        if members.is_empty() {
            continue;
        }

        let mut names: Vec<String> = members
            .iter()
            .take(NAMES_PER_TYPE)
            .map(|s| sanitize(s.name()))
            .collect();
        let rest = members.len().saturating_sub(NAMES_PER_TYPE);
        if rest > 0 {
            names.push(count_noun(rest, "other", "others"));
        }

        let noun = count_noun(
            members.len(),
            &format!("{} intersection", kind.label()),
            &format!("{} intersections", kind.label()),
        );
        entries.push(format!("{noun} ({})", join_list(&names)));
    }

    if entries.is_empty() {
        "no non-empty intersection types".to_string()
    } else {
        join_list(&entries)
    }
}

// ---- statistics ----

fn median_size_token(ctx: &TokenContext) -> String {
    format_float(median_size(ctx.visible()))
}

fn size_percentile(ctx: &TokenContext, perc: f64) -> String {
    percentile(ctx.visible(), SubsetField::Size, perc)
        .map_or_else(|| FIELD_NOT_AVAILABLE.to_string(), |v| (v as u64).to_string())
}

fn perc_25_size(ctx: &TokenContext) -> String {
    size_percentile(ctx, 25.0)
}

fn perc_75_size(ctx: &TokenContext) -> String {
    size_percentile(ctx, 75.0)
}

fn list_max_dev_membership(ctx: &TokenContext) -> String {
    let ranked = rank_by(ctx.visible(), SubsetField::Deviation, SortOrder::Descending);
    or_missing(ranked.first().map(|s| membership(s)).as_deref())
}

fn list_min_dev_membership(ctx: &TokenContext) -> String {
    let ranked = rank_by(ctx.visible(), SubsetField::Deviation, SortOrder::Ascending);
    or_missing(ranked.first().map(|s| membership(s)).as_deref())
}

// ---- trends and regions ----

fn size_change_trend(ctx: &TokenContext) -> String {
    let sizes: Vec<f64> = ctx.visible().iter().map(|s| s.size() as f64).collect();
    change_trend(&sizes).name().to_string()
}

fn degree_trend(ctx: &TokenContext) -> String {
    degree_size_trend(ctx.degrees()).verb().to_string()
}

fn degree_change_trend(ctx: &TokenContext) -> String {
    let averages: Vec<f64> = ctx
        .degrees()
        .populated_avg_sizes()
        .into_iter()
        .map(|(_, avg)| avg)
        .collect();
    change_trend(&averages).name().to_string()
}

/// "the largest intersection and large and small-sized intersections"
fn region_phrase(regions: &BTreeSet<Region>) -> String {
    let mut parts = Vec::new();
    if regions.contains(&Region::Largest) {
        parts.push("the largest intersection".to_string());
    }
    let sized: Vec<&str> = regions
        .iter()
        .filter(|r| **r != Region::Largest)
        .map(Region::name)
        .collect();
    if !sized.is_empty() {
        parts.push(format!("{}-sized intersections", join_list(&sized)));
    }
    join_list(&parts)
}

fn region_summary(ctx: &TokenContext) -> String {
    let sentences: Vec<String> = ctx
        .regions()
        .iter()
        .filter(|(kind, _)| **kind != IntersectionType::Empty)
        .map(|(kind, regions)| {
            format!(
                "the {} intersections lie in {}",
                kind.label(),
                region_phrase(regions)
            )
        })
        .collect();
    if sentences.is_empty() {
        "no size regions could be determined".to_string()
    } else {
        sentences.join(". ")
    }
}

// ---- special rows and plot state ----

fn elements(count: u64) -> String {
    count_noun(count as usize, "element", "elements")
}

/// "1 element belongs", "3 elements belong".
fn elements_belong(count: u64) -> String {
    if count == 1 {
        "1 element belongs".to_string()
    } else {
        format!("{count} elements belong")
    }
}

fn empty_phrase(ctx: &TokenContext) -> String {
    match ctx.presence().empty {
        Some(row) if row.size() > 0 => {
            format!("{} to none of the sets", elements_belong(row.size()))
        }
        _ => "every element belongs to at least one set".to_string(),
    }
}

fn all_set_phrase(ctx: &TokenContext) -> String {
    let sets = match ctx.data().all_sets_length() {
        0 => return "the plot has no sets".to_string(),
        1 => "the only set".to_string(),
        n => format!("all {n} sets"),
    };
    match ctx.presence().all_set {
        Some(row) if row.size() > 0 => format!("{} to {sets}", elements_belong(row.size())),
        _ => format!("no element belongs to {sets}"),
    }
}

fn bookmark_phrase(ctx: &TokenContext) -> String {
    let marks = &ctx.grammar().bookmarked_intersections;
    let entries: Vec<String> = marks
        .iter()
        .map(|b| format!("{} ({})", sanitize(&b.label), elements(b.size)))
        .collect();
    match entries.len() {
        0 => "no intersections are bookmarked".to_string(),
        1 => format!("the bookmarked intersection is {}", entries[0]),
        _ => format!("the bookmarked intersections are {}", join_list(&entries)),
    }
}

fn filter_phrase(ctx: &TokenContext) -> String {
    let filters = &ctx.grammar().filters;
    let mut parts = vec![if filters.hide_empty {
        "empty intersections are hidden".to_string()
    } else {
        "empty intersections are shown".to_string()
    }];
    match (filters.min_visible, filters.max_visible) {
        (Some(min), Some(max)) => {
            parts.push(format!("only intersections of degree {min} to {max} are shown"))
        }
        (Some(min), None) => parts.push(format!("intersections below degree {min} are hidden")),
        (None, Some(max)) => parts.push(format!("intersections above degree {max} are hidden")),
        (None, None) => {}
    }
    join_list(&parts)
}

fn set_query_phrase(ctx: &TokenContext) -> String {
    let Some(query) = &ctx.grammar().set_query else {
        return "no set query is applied".to_string();
    };
    let with = |wanted: QueryMembership| -> Vec<String> {
        query
            .query
            .iter()
            .filter(|(_, m)| **m == wanted)
            .map(|(set, _)| sanitize(set))
            .collect()
    };
    let required = with(QueryMembership::Yes);
    let excluded = with(QueryMembership::No);

    let mut conditions = Vec::new();
    if !required.is_empty() {
        conditions.push(format!("include {}", join_list(&required)));
    }
    if !excluded.is_empty() {
        conditions.push(format!("exclude {}", join_list(&excluded)));
    }
    let name = sanitize(&query.name);
    if conditions.is_empty() {
        format!("the set query {name} is applied without membership constraints")
    } else {
        format!(
            "the set query {name} is applied, keeping intersections that {}",
            join_list(&conditions)
        )
    }
}

fn list_var_names(ctx: &TokenContext) -> String {
    let names: Vec<String> = ctx.grammar().visible_atts.iter().map(|a| sanitize(a)).collect();
    join_list(&names)
}

fn attribute_phrase(ctx: &TokenContext) -> String {
    match ctx.grammar().visible_atts.len() {
        0 => "no attributes are visualized".to_string(),
        1 => format!("1 attribute is visualized: {}", list_var_names(ctx)),
        n => format!("{n} attributes are visualized: {}", list_var_names(ctx)),
    }
}
