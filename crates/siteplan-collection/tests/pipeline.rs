//! End-to-end pass over a JSON sitemap: gather, facets, filter, paginate.

use pretty_assertions::assert_eq;

use siteplan_collection::{
    AppliedFilter, AppliedFilterItem, NOT_SPECIFIED_OPTION_ID, YEAR_FACET_ID, compute_facets,
    filter_items, gather_for_page, gather_for_widget, paginate,
};
use siteplan_sitemap::{SitemapIndex, SitemapNode, resolve_ref};

fn load_site() -> SitemapNode {
    serde_json::from_str(include_str!("fixtures/sitemap.json")).unwrap()
}

#[test]
fn widget_previews_first_three_items_in_document_order() {
    let site = load_site();

    let items = gather_for_widget(&site, "/pub").unwrap();

    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Budget 2024", "Rail masterplan", "Minister's speech"]
    );
}

#[test]
fn widget_fails_on_collection_without_items() {
    let site = load_site();

    // /about is a content page: the tolerant walk resolves it but it has
    // no eligible descendants.
    assert!(gather_for_widget(&site, "/about").is_err());
    assert!(gather_for_page(&site, "/about").is_empty());
}

#[test]
fn page_gather_ranks_undated_last() {
    let site = load_site();

    let items = gather_for_page(&site, "/pub");

    assert_eq!(items.len(), 4);
    assert_eq!(items.last().unwrap().title, "Archive note");
    // Equal dates tie-break by title ascending.
    let dated: Vec<_> = items[..3].iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        dated,
        vec!["Budget 2024", "Minister's speech", "Rail masterplan"]
    );
}

#[test]
fn year_facet_counts_dated_and_undated_buckets() {
    let site = load_site();
    let items = gather_for_page(&site, "/pub");

    let props = site.child_nodes()[1]
        .collection_page_props
        .as_ref()
        .unwrap();
    let facets = compute_facets(&items, props.tag_categories.as_deref());

    let year = facets.iter().find(|f| f.id == YEAR_FACET_ID).unwrap();
    let entries: Vec<_> = year
        .items
        .iter()
        .map(|o| (o.id.as_str(), o.count))
        .collect();
    assert_eq!(entries, vec![("2024", 3), (NOT_SPECIFIED_OPTION_ID, 1)]);

    // Category counts always sum to the gathered item count.
    let category = facets.iter().find(|f| f.id == "category").unwrap();
    let total: usize = category.items.iter().map(|o| o.count).sum();
    assert_eq!(total, items.len());

    // The tagged id on the speech resolved against the collection's
    // definitions, so Health counts two items.
    let topic = facets.iter().find(|f| f.id == "topic").unwrap();
    let health = topic.items.iter().find(|o| o.id == "health").unwrap();
    assert_eq!(health.count, 2);
}

#[test]
fn filter_then_paginate_narrows_and_slices() {
    let site = load_site();
    let items = gather_for_page(&site, "/pub");

    let applied = vec![AppliedFilter {
        id: "topic".to_owned(),
        items: vec![AppliedFilterItem {
            id: "health".to_owned(),
        }],
    }];
    let filtered = filter_items(&items, &applied, "");
    assert_eq!(filtered.len(), 2);

    let first_page = paginate(&filtered, 1, 1);
    let second_page = paginate(&filtered, 1, 2);
    assert_eq!(first_page.len(), 1);
    assert_eq!(second_page.len(), 1);
    assert_ne!(first_page[0].title, second_page[0].title);
    assert!(paginate(&filtered, 1, 3).is_empty());
}

#[test]
fn reference_tokens_resolve_against_the_same_tree() {
    let site = load_site();
    let index = SitemapIndex::build(&site);

    assert_eq!(resolve_ref("[resource:1:6]", &index), "/pub/speech");
    assert_eq!(resolve_ref("[resource:1:99]", &index), "[resource:1:99]");
}
