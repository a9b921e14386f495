//! Breadcrumb trail derivation.
//!
//! Walks the permalink's path segments from the root, resolving each
//! ancestor in turn. The walk stops silently at the first segment the
//! tree cannot resolve and returns whatever prefix of the trail was
//! built; a content tree can be transiently inconsistent during
//! publishing and a short breadcrumb beats a failed page.

use serde::Serialize;

use siteplan_sitemap::SitemapIndex;

/// One breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbLink {
    /// Display title.
    pub title: String,
    /// Link target permalink.
    pub url: String,
}

/// Breadcrumb trail for a page, Home first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BreadcrumbLinks {
    /// Trail entries; the target page itself is not included.
    pub links: Vec<BreadcrumbLink>,
}

/// Derive the breadcrumb trail for a permalink.
///
/// The trail starts with a synthetic Home entry and covers every resolved
/// ancestor up to, but not including, the page itself.
#[must_use]
pub fn breadcrumbs(permalink: &str, index: &SitemapIndex<'_>) -> BreadcrumbLinks {
    let mut links = vec![BreadcrumbLink {
        title: "Home".to_owned(),
        url: "/".to_owned(),
    }];

    let trimmed = permalink.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

    let mut current = index.root();
    let mut prefix = String::new();
    for segment in segments.iter().take(segments.len().saturating_sub(1)) {
        prefix.push('/');
        prefix.push_str(segment);
        let Some(child) = current
            .child_nodes()
            .iter()
            .find(|child| child.permalink == prefix)
        else {
            tracing::debug!(permalink, %prefix, "breadcrumb ancestor not found, returning partial trail");
            break;
        };
        links.push(BreadcrumbLink {
            title: child.title.clone(),
            url: child.permalink.clone(),
        });
        current = child;
    }

    BreadcrumbLinks { links }
}
