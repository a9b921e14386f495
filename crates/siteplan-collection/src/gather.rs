//! Collection gathering.
//!
//! One shared, tolerant core walks to the collection node and flattens
//! its subtree into items. Two thin policies sit on top:
//!
//! - [`gather_for_page`]: the full listing page tolerates an empty or
//!   unresolvable collection and renders an empty state.
//! - [`gather_for_widget`]: an in-page preview widget with zero items is
//!   always an authoring bug, so it fails fast with [`GatherError`].

use std::cmp::Ordering;

use siteplan_sitemap::{CollectionPageProps, SitemapNode, TagSelection, walk_segments};

use crate::item::CollectionItem;

/// Number of items a collection preview widget shows.
pub const NUMBER_OF_PAGES_TO_DISPLAY: usize = 3;

/// Error raised by the fail-fast widget gather.
#[derive(Debug, thiserror::Error)]
pub enum GatherError {
    /// The referenced collection has no eligible items.
    #[error("CollectionWidget: no items found under collection {permalink}")]
    EmptyCollection {
        /// Permalink of the offending collection node.
        permalink: String,
    },
}

/// Resolve an item node's tags.
///
/// Explicit `tags` win; otherwise `tagged` option ids are resolved
/// against the collection's tag category definitions. Options keep the
/// definition order within each category.
fn resolve_tags(node: &SitemapNode, props: Option<&CollectionPageProps>) -> Vec<TagSelection> {
    if let Some(tags) = &node.tags {
        return tags.clone();
    }

    let (Some(tagged), Some(categories)) = (
        &node.tagged,
        props.and_then(|p| p.tag_categories.as_deref()),
    ) else {
        return Vec::new();
    };

    categories
        .iter()
        .filter_map(|category| {
            let selected: Vec<String> = category
                .options
                .iter()
                .filter(|option| tagged.contains(&option.id))
                .map(|option| option.label.clone())
                .collect();
            (!selected.is_empty()).then(|| TagSelection {
                category: category.label.clone(),
                selected,
            })
        })
        .collect()
}

/// Flatten all descendants of `node` in pre-order, node itself excluded.
fn flatten_descendants<'a>(node: &'a SitemapNode, out: &mut Vec<&'a SitemapNode>) {
    for child in node.child_nodes() {
        out.push(child);
        flatten_descendants(child, out);
    }
}

/// Shared gather core: items of a collection subtree in document order.
///
/// Walks from the root to `collection_permalink` with the tolerant
/// segment traversal; an unresolvable permalink or a childless node
/// yields an empty list. Descendants with ineligible layouts (nested
/// content pages, nested collection nodes themselves) are dropped.
fn collect_items(root: &SitemapNode, collection_permalink: &str) -> Vec<CollectionItem> {
    let Some(collection) = walk_segments(root, collection_permalink) else {
        tracing::debug!(collection_permalink, "collection not found in sitemap");
        return Vec::new();
    };
    if collection.child_nodes().is_empty() {
        return Vec::new();
    }

    let props = collection.collection_page_props.as_ref();
    let mut descendants = Vec::new();
    flatten_descendants(collection, &mut descendants);

    descendants
        .into_iter()
        .filter_map(|node| CollectionItem::from_node(node, resolve_tags(node, props)))
        .collect()
}

/// Fixed default ordering for collection pages.
///
/// Newest first; equal dates tie-break by title ascending; undated items
/// always rank last. This ranking of undated items is policy, not a
/// configurable sort.
fn default_order(a: &CollectionItem, b: &CollectionItem) -> Ordering {
    match (a.raw_date, b.raw_date) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

/// Gather items for a full collection listing page.
///
/// Returns items in the default order. An unresolvable or empty
/// collection yields an empty list; the page renders an empty state.
#[must_use]
pub fn gather_for_page(root: &SitemapNode, collection_permalink: &str) -> Vec<CollectionItem> {
    let mut items = collect_items(root, collection_permalink);
    items.sort_by(default_order);
    items
}

/// Gather preview items for an in-page collection widget.
///
/// Returns the first [`NUMBER_OF_PAGES_TO_DISPLAY`] items in document
/// order.
///
/// # Errors
///
/// Returns [`GatherError::EmptyCollection`] when the collection resolves
/// to no eligible items: an empty preview widget indicates author
/// misconfiguration, never a valid empty state.
pub fn gather_for_widget(
    root: &SitemapNode,
    collection_permalink: &str,
) -> Result<Vec<CollectionItem>, GatherError> {
    let mut items = collect_items(root, collection_permalink);
    if items.is_empty() {
        return Err(GatherError::EmptyCollection {
            permalink: collection_permalink.to_owned(),
        });
    }
    items.truncate(NUMBER_OF_PAGES_TO_DISPLAY);
    Ok(items)
}
