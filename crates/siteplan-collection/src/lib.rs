//! Collection gathering, faceting, and listing queries.
//!
//! A `collection` node in the sitemap groups listable items (articles,
//! files, links) anywhere in its subtree. This crate provides:
//! - [`gather_for_page`] / [`gather_for_widget`]: flatten a collection
//!   subtree into [`CollectionItem`] view-models
//! - [`compute_facets`]: category, year, and tag facets with counts
//! - [`filter_items`] / [`sort_items`] / [`paginate`]: pure listing
//!   queries owned by the interactive UI layer
//!
//! All operations are pure functions over immutable input; the caller
//! owns search text, applied filters, sort key, and page number and
//! re-invokes these on every change.
//!
//! # Quick Start
//!
//! ```
//! use siteplan_collection::{compute_facets, gather_for_page, paginate};
//! use siteplan_sitemap::{Layout, SitemapNode};
//!
//! let root = SitemapNode::new("1", "Home", "/", Layout::Homepage).with_children(vec![
//!     SitemapNode::new("2", "News", "/news", Layout::Collection).with_children(vec![
//!         SitemapNode::new("3", "Budget 2024", "/news/budget", Layout::Article)
//!             .with_date("2024-02-16"),
//!     ]),
//! ]);
//!
//! let items = gather_for_page(&root, "/news");
//! let facets = compute_facets(&items, None);
//! let page = paginate(&items, 10, 1);
//! assert_eq!(page.len(), 1);
//! assert!(facets.is_empty()); // single-option facets carry no filtering value
//! ```

pub(crate) mod facets;
pub(crate) mod gather;
pub(crate) mod item;
pub(crate) mod query;
pub(crate) mod util;

pub use facets::{
    CATEGORY_FACET_ID, Filter, FilterItem, NOT_SPECIFIED_OPTION_ID, YEAR_FACET_ID, compute_facets,
};
pub use gather::{GatherError, NUMBER_OF_PAGES_TO_DISPLAY, gather_for_page, gather_for_widget};
pub use item::{CollectionItem, ItemVariant};
pub use query::{AppliedFilter, AppliedFilterItem, filter_items, paginate, sort_items};

// Sort parameters live with the sitemap types so collection pages can
// declare their defaults; re-exported here for query callers.
pub use siteplan_sitemap::{SortDirection, SortKey};
