//! Side-rail navigation derivation.
//!
//! The side-rail shows a page's parent, its siblings, and the current
//! page's direct children. Unlike breadcrumbs, it is strict: if any
//! ancestor cannot be resolved, or the parent has no children, there is
//! nothing coherent to show and the panel is omitted entirely.

use serde::Serialize;

use siteplan_sitemap::SitemapIndex;

/// Plain title/url pair for child page entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Display title.
    pub title: String,
    /// Link target permalink.
    pub url: String,
}

/// One sibling entry in the side-rail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiderailPage {
    /// Display title.
    pub title: String,
    /// Link target permalink.
    pub url: String,
    /// Set on the sibling matching the rendered page.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_current: bool,
    /// Direct children of the current page; empty for other siblings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_pages: Vec<PageLink>,
}

/// Side-rail navigation panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Siderail {
    /// Parent page title.
    pub parent_title: String,
    /// Parent page permalink.
    pub parent_url: String,
    /// Sibling entries in document order.
    pub pages: Vec<SiderailPage>,
}

/// Derive the side-rail for a permalink.
///
/// Returns `None` when the page has no parent (the root), when any
/// ancestor segment cannot be resolved, or when the resolved parent has
/// no children.
#[must_use]
pub fn siderail(permalink: &str, index: &SitemapIndex<'_>) -> Option<Siderail> {
    let trimmed = permalink.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
    if segments.is_empty() {
        return None;
    }

    let mut parent = index.root();
    let mut prefix = String::new();
    for segment in segments.iter().take(segments.len() - 1) {
        prefix.push('/');
        prefix.push_str(segment);
        parent = parent
            .child_nodes()
            .iter()
            .find(|child| child.permalink == prefix)?;
    }

    let siblings = parent.child_nodes();
    if siblings.is_empty() {
        return None;
    }

    let pages = siblings
        .iter()
        .map(|sibling| {
            let is_current = sibling.permalink == trimmed;
            let child_pages = if is_current {
                sibling
                    .child_nodes()
                    .iter()
                    .map(|child| PageLink {
                        title: child.title.clone(),
                        url: child.permalink.clone(),
                    })
                    .collect()
            } else {
                Vec::new()
            };
            SiderailPage {
                title: sibling.title.clone(),
                url: sibling.permalink.clone(),
                is_current,
                child_pages,
            }
        })
        .collect();

    Some(Siderail {
        parent_title: parent.title.clone(),
        parent_url: parent.permalink.clone(),
        pages,
    })
}
