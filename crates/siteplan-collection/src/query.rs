//! Listing queries: search/filter, sort, paginate.
//!
//! Pure functions over an item slice; the interactive UI layer owns the
//! current search text, applied filters, sort key, and page number and
//! re-invokes these on every change. Malformed applied-filter ids simply
//! match nothing; no query can fail.

use std::cmp::Ordering;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use siteplan_sitemap::{SortDirection, SortKey};

use crate::facets::{CATEGORY_FACET_ID, NOT_SPECIFIED_OPTION_ID, YEAR_FACET_ID};
use crate::facets::{tag_facet_id, tag_option_id};
use crate::item::CollectionItem;

/// One selected option within an applied filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilterItem {
    /// Selected option id.
    pub id: String,
}

/// Sparse selection for one facet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    /// Facet id the selection applies to.
    pub id: String,
    /// Selected options; empty imposes no constraint.
    pub items: Vec<AppliedFilterItem>,
}

fn matches_search(item: &CollectionItem, lowered: &str) -> bool {
    lowered.is_empty()
        || item.title.to_lowercase().contains(lowered)
        || item.description.to_lowercase().contains(lowered)
}

fn matches_category(item: &CollectionItem, applied: &AppliedFilter) -> bool {
    let bucket = item.category.to_lowercase();
    applied.items.iter().any(|option| option.id == bucket)
}

fn matches_year(item: &CollectionItem, applied: &AppliedFilter) -> bool {
    let bucket = item.raw_date.map_or_else(
        || NOT_SPECIFIED_OPTION_ID.to_owned(),
        |date| date.year().to_string(),
    );
    applied.items.iter().any(|option| option.id == bucket)
}

fn matches_tag_facet(item: &CollectionItem, applied: &AppliedFilter) -> bool {
    item.tags.iter().any(|tag| {
        tag_facet_id(&tag.category) == applied.id
            && tag.selected.iter().any(|value| {
                let value_id = tag_option_id(value);
                applied.items.iter().any(|option| option.id == value_id)
            })
    })
}

/// Narrow an item set by search text and applied facet selections.
///
/// Search is a case-insensitive substring match over title or
/// description. Within the category and year facets an item needs at
/// least one selected option to match; tag facets combine as AND across
/// facets and OR within each facet's selection. All constraints are
/// ANDed together.
#[must_use]
pub fn filter_items(
    items: &[CollectionItem],
    applied: &[AppliedFilter],
    search_text: &str,
) -> Vec<CollectionItem> {
    let lowered = search_text.trim().to_lowercase();
    let category = applied
        .iter()
        .find(|f| f.id == CATEGORY_FACET_ID && !f.items.is_empty());
    let year = applied
        .iter()
        .find(|f| f.id == YEAR_FACET_ID && !f.items.is_empty());
    let tag_selections: Vec<&AppliedFilter> = applied
        .iter()
        .filter(|f| f.id != CATEGORY_FACET_ID && f.id != YEAR_FACET_ID && !f.items.is_empty())
        .collect();

    items
        .iter()
        .filter(|item| {
            matches_search(item, &lowered)
                && category.is_none_or(|f| matches_category(item, f))
                && year.is_none_or(|f| matches_year(item, f))
                && tag_selections.iter().all(|f| matches_tag_facet(item, f))
        })
        .cloned()
        .collect()
}

/// Sort an item set by key and direction.
///
/// Date is the meaningful key: direction flips the date comparison,
/// equal dates tie-break by title ascending, and undated items rank
/// last in both directions. Title and category sort lexicographically.
#[must_use]
pub fn sort_items(
    items: &[CollectionItem],
    key: SortKey,
    direction: SortDirection,
) -> Vec<CollectionItem> {
    let directed = |ord: Ordering| match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    };

    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| match key {
        SortKey::Date => match (a.raw_date, b.raw_date) {
            (Some(da), Some(db)) => directed(da.cmp(&db)).then_with(|| a.title.cmp(&b.title)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.title.cmp(&b.title),
        },
        SortKey::Title => directed(a.title.cmp(&b.title)),
        SortKey::Category => {
            directed(a.category.cmp(&b.category)).then_with(|| a.title.cmp(&b.title))
        }
    });
    sorted
}

/// Slice one page out of an item set.
///
/// `page` is 1-based and clamped to a minimum of 1; there is no upper
/// clamp, so an out-of-range page legitimately yields an empty slice.
#[must_use]
pub fn paginate(items: &[CollectionItem], page_size: usize, page: usize) -> Vec<CollectionItem> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}
