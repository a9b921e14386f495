//! Facet computation over gathered collection items.
//!
//! Facets are the filterable dimensions of a listing: the item category,
//! the publication year, and one facet per tag category. Each facet
//! carries option counts for the current item set. A facet with fewer
//! than two options provides no filtering value and is dropped from the
//! result entirely.

use chrono::Datelike;
use serde::Serialize;

use siteplan_sitemap::TagCategory;

use crate::item::CollectionItem;
use crate::util::{capitalize_first, compare_natural, slugify};

/// Facet id of the category dimension.
pub const CATEGORY_FACET_ID: &str = "category";

/// Facet id of the publication-year dimension.
pub const YEAR_FACET_ID: &str = "year";

/// Option id of the undated bucket within the year facet.
pub const NOT_SPECIFIED_OPTION_ID: &str = "not_specified";

/// One selectable option within a facet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterItem {
    /// Stable option id used in applied-filter selections.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Number of items in the current set matching this option.
    pub count: usize,
}

/// One filterable dimension with its options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Filter {
    /// Stable facet id used in applied-filter selections.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Options in display order.
    pub items: Vec<FilterItem>,
}

/// Facet id for a tag category label.
pub(crate) fn tag_facet_id(label: &str) -> String {
    slugify(label)
}

/// Option id for a tag value.
pub(crate) fn tag_option_id(value: &str) -> String {
    slugify(value)
}

/// Compute facets for an item set.
///
/// `tag_categories` is the collection's site-configured category
/// ordering; when absent, tag facets and their options keep first-seen
/// order.
#[must_use]
pub fn compute_facets(
    items: &[CollectionItem],
    tag_categories: Option<&[TagCategory]>,
) -> Vec<Filter> {
    let mut filters = Vec::new();
    if let Some(facet) = category_facet(items) {
        filters.push(facet);
    }
    if let Some(facet) = year_facet(items) {
        filters.push(facet);
    }
    filters.extend(tag_facets(items, tag_categories));
    filters
}

/// Category facet: one bucket per lowercased category.
///
/// Every item has exactly one category, so option counts always sum to
/// the item count. Labels keep the first-seen spelling with the first
/// letter capitalized, ordered with numeric-aware comparison.
fn category_facet(items: &[CollectionItem]) -> Option<Filter> {
    let mut buckets: Vec<(String, String, usize)> = Vec::new(); // (id, label, count)
    for item in items {
        let id = item.category.to_lowercase();
        match buckets.iter_mut().find(|(bucket_id, ..)| *bucket_id == id) {
            Some((.., count)) => *count += 1,
            None => buckets.push((id, capitalize_first(&item.category), 1)),
        }
    }

    if buckets.len() < 2 {
        return None;
    }

    buckets.sort_by(|(_, a, _), (_, b, _)| compare_natural(a, b));
    Some(Filter {
        id: CATEGORY_FACET_ID.to_owned(),
        label: "Category".to_owned(),
        items: buckets
            .into_iter()
            .map(|(id, label, count)| FilterItem { id, label, count })
            .collect(),
    })
}

/// Year facet: four-digit years, most recent first.
///
/// Undated items are appended as a "Not specified" bucket, but only when
/// at least one item is dated; an all-undated set gets no year facet at
/// all.
fn year_facet(items: &[CollectionItem]) -> Option<Filter> {
    let mut years: std::collections::BTreeMap<i32, usize> = std::collections::BTreeMap::new();
    let mut undated = 0usize;
    for item in items {
        match item.raw_date {
            Some(date) => *years.entry(date.year()).or_default() += 1,
            None => undated += 1,
        }
    }

    if years.is_empty() {
        return None;
    }

    let mut options: Vec<FilterItem> = years
        .into_iter()
        .rev()
        .map(|(year, count)| FilterItem {
            id: year.to_string(),
            label: year.to_string(),
            count,
        })
        .collect();
    if undated > 0 {
        options.push(FilterItem {
            id: NOT_SPECIFIED_OPTION_ID.to_owned(),
            label: "Not specified".to_owned(),
            count: undated,
        });
    }

    if options.len() < 2 {
        return None;
    }

    Some(Filter {
        id: YEAR_FACET_ID.to_owned(),
        label: "Year".to_owned(),
        items: options,
    })
}

/// Tag facets: one per distinct tag category label.
///
/// An item contributes a count to every tag value it has selected, not
/// just one. Configured categories apply their definition order to both
/// facets and options; unconfigured ones keep first-seen order.
fn tag_facets(items: &[CollectionItem], config: Option<&[TagCategory]>) -> Vec<Filter> {
    // (category label, [(value, count)]) in first-seen order.
    let mut gathered: Vec<(String, Vec<(String, usize)>)> = Vec::new();
    for item in items {
        for tag in &item.tags {
            let idx = match gathered.iter().position(|(label, _)| *label == tag.category) {
                Some(idx) => idx,
                None => {
                    gathered.push((tag.category.clone(), Vec::new()));
                    gathered.len() - 1
                }
            };
            let values = &mut gathered[idx].1;
            for value in &tag.selected {
                match values.iter_mut().find(|(existing, _)| existing == value) {
                    Some((_, count)) => *count += 1,
                    None => values.push((value.clone(), 1)),
                }
            }
        }
    }

    if let Some(categories) = config {
        gathered = apply_configured_order(gathered, categories);
    }

    gathered
        .into_iter()
        .filter(|(_, values)| values.len() >= 2)
        .map(|(label, values)| Filter {
            id: tag_facet_id(&label),
            label,
            items: values
                .into_iter()
                .map(|(value, count)| FilterItem {
                    id: tag_option_id(&value),
                    label: value,
                    count,
                })
                .collect(),
        })
        .collect()
}

/// Reorder gathered tag facets per the site configuration.
///
/// Configured categories come first in definition order, with their
/// options ordered per definition and unconfigured values appended
/// first-seen; categories absent from the configuration follow in
/// first-seen order.
fn apply_configured_order(
    mut gathered: Vec<(String, Vec<(String, usize)>)>,
    categories: &[TagCategory],
) -> Vec<(String, Vec<(String, usize)>)> {
    let mut ordered = Vec::new();
    for category in categories {
        let Some(pos) = gathered.iter().position(|(label, _)| *label == category.label) else {
            continue;
        };
        let (label, mut rest) = gathered.remove(pos);
        let mut values = Vec::new();
        for option in &category.options {
            if let Some(p) = rest.iter().position(|(value, _)| *value == option.label) {
                values.push(rest.remove(p));
            }
        }
        values.extend(rest);
        ordered.push((label, values));
    }
    ordered.extend(gathered);
    ordered
}
