//! Reference-link token resolution.
//!
//! Authored content points at other pages with `[resource:<siteId>:<pageId>]`
//! tokens instead of hardcoded URLs, so pages can move without breaking
//! links. Resolution is fail-open: anything that is not a well-formed,
//! resolvable token comes back unchanged, and a broken reference degrades
//! to a visibly-wrong link rather than a failed render.

use std::sync::LazyLock;

use regex::Regex;

use crate::index::SitemapIndex;

static RESOURCE_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[resource:(\d+):(\d+)\]$").unwrap());

/// Resolve a reference token against the sitemap index.
///
/// - Strings that do not match the token pattern exactly are returned
///   unchanged (they are literal URLs or asset paths).
/// - A matching token resolves to the permalink of the node whose id
///   equals the token's `pageId`.
/// - A matching token whose `pageId` is unknown is returned unchanged.
#[must_use]
pub fn resolve_ref(token: &str, index: &SitemapIndex<'_>) -> String {
    let Some(caps) = RESOURCE_REF_RE.captures(token) else {
        return token.to_owned();
    };

    let page_id = &caps[2];
    match index.by_id(page_id) {
        Some(node) => node.permalink.clone(),
        None => {
            tracing::warn!(token, page_id, "unresolvable resource reference, keeping token");
            token.to_owned()
        }
    }
}

/// Resolve an optional reference token; `None` stays `None`.
#[must_use]
pub fn resolve_reference(token: Option<&str>, index: &SitemapIndex<'_>) -> Option<String> {
    token.map(|t| resolve_ref(t, index))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{Layout, SitemapNode};

    fn sample_tree() -> SitemapNode {
        SitemapNode::new("1", "Home", "/", Layout::Homepage).with_children(vec![
            SitemapNode::new("10", "Guides", "/x", Layout::Content).with_children(vec![
                SitemapNode::new("42", "Permits", "/x/y", Layout::Content),
            ]),
        ])
    }

    #[test]
    fn test_resolves_token_to_permalink() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        assert_eq!(resolve_ref("[resource:1:42]", &index), "/x/y");
    }

    #[test]
    fn test_unknown_page_id_keeps_token() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        assert_eq!(resolve_ref("[resource:1:777]", &index), "[resource:1:777]");
    }

    #[test]
    fn test_non_token_strings_pass_through() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        for literal in [
            "https://example.gov/page",
            "/x/y",
            "#section",
            "[resource:1:42] trailing",
            "[resource:abc:42]",
            "[resource:1:42:extra]",
        ] {
            assert_eq!(resolve_ref(literal, &index), literal);
        }
    }

    #[test]
    fn test_optional_resolution() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        assert_eq!(resolve_reference(None, &index), None);
        assert_eq!(
            resolve_reference(Some("[resource:1:10]"), &index),
            Some("/x".to_owned())
        );
    }
}
