//! Sitemap tree model with flattened lookup index and reference resolution.
//!
//! This crate provides:
//! - [`SitemapNode`]: the typed page-description tree a site build produces
//! - [`SitemapIndex`]: a per-render flat index over the tree with O(1)
//!   lookups by node id and permalink
//! - [`resolve_reference`]: resolution of `[resource:<siteId>:<pageId>]`
//!   tokens to real permalinks
//!
//! The tree arrives already validated by the schema layer; everything here
//! is tolerant of partially-published sitemaps and never panics on a
//! broken tree.
//!
//! # Quick Start
//!
//! ```
//! use siteplan_sitemap::{SitemapIndex, SitemapNode, resolve_ref};
//!
//! let root: SitemapNode = serde_json::from_str(
//!     r#"{"id": "1", "title": "Home", "permalink": "/", "layout": "homepage",
//!         "summary": "", "lastModified": ""}"#,
//! ).unwrap();
//! let index = SitemapIndex::build(&root);
//!
//! assert_eq!(resolve_ref("[resource:1:1]", &index), "/");
//! ```

pub(crate) mod index;
pub(crate) mod resolve;
pub(crate) mod types;

pub use index::{SitemapIndex, walk_segments};
pub use resolve::{resolve_ref, resolve_reference};
pub use types::{
    CollectionPageProps, FileDetails, ImageRef, Layout, SitemapNode, SortDirection, SortKey,
    TagCategory, TagOption, TagSelection,
};
