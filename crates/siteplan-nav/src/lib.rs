//! Navigation derivation over a sitemap tree.
//!
//! This crate produces the three navigational aids a page render needs:
//! - [`breadcrumbs`]: the ancestor trail from Home down to the page's parent
//! - [`siderail`]: the sibling/child navigation panel next to content pages
//! - [`table_of_contents`]: level-2 heading anchors from a page's prose blocks
//!
//! All derivations are pure functions over an immutable [`SitemapIndex`]
//! and content-block slice. Breadcrumbs are fail-open (a broken tree
//! yields a partial trail, never an error); the side-rail requires a fully
//! resolvable parent and returns `None` otherwise.
//!
//! # Quick Start
//!
//! ```
//! use siteplan_nav::breadcrumbs;
//! use siteplan_sitemap::{Layout, SitemapIndex, SitemapNode};
//!
//! let root = SitemapNode::new("1", "Home", "/", Layout::Homepage).with_children(vec![
//!     SitemapNode::new("2", "About", "/about", Layout::Content).with_children(vec![
//!         SitemapNode::new("3", "Team", "/about/team", Layout::Content),
//!     ]),
//! ]);
//! let index = SitemapIndex::build(&root);
//!
//! let trail = breadcrumbs("/about/team", &index);
//! assert_eq!(trail.links.len(), 2); // Home, About
//! ```

pub(crate) mod breadcrumb;
pub(crate) mod siderail;
pub(crate) mod toc;

pub use breadcrumb::{BreadcrumbLink, BreadcrumbLinks, breadcrumbs};
pub use siderail::{PageLink, Siderail, SiderailPage, siderail};
pub use toc::{
    ContentBlock, HeadingAttrs, InlineNode, ProseNode, TableOfContents, TocItem,
    assign_heading_ids, table_of_contents,
};
