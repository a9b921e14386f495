//! Flattened sitemap index.
//!
//! Provides [`SitemapIndex`] for O(1) lookups over a sitemap tree.
//!
//! # Architecture
//!
//! Nodes are borrowed into a flat pre-order arena with two `HashMap`s keyed
//! by node id and permalink. The index is built once per render pass, is
//! read-only, and does not outlive the tree it borrows from.
//!
//! Duplicate ids or permalinks are an authoring bug; the index keeps the
//! first occurrence and logs a warning instead of failing the render.

use std::collections::HashMap;

use crate::types::SitemapNode;

/// Flat lookup index over a sitemap tree.
pub struct SitemapIndex<'a> {
    nodes: Vec<&'a SitemapNode>,
    by_id: HashMap<&'a str, usize>,
    by_permalink: HashMap<&'a str, usize>,
}

impl<'a> SitemapIndex<'a> {
    /// Build an index from the tree root by pre-order traversal.
    #[must_use]
    pub fn build(root: &'a SitemapNode) -> Self {
        let mut index = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            by_permalink: HashMap::new(),
        };
        index.push_subtree(root);
        index
    }

    fn push_subtree(&mut self, node: &'a SitemapNode) {
        let idx = self.nodes.len();
        self.nodes.push(node);

        if self.by_id.contains_key(node.id.as_str()) {
            tracing::warn!(id = %node.id, "duplicate node id in sitemap, keeping first occurrence");
        } else {
            self.by_id.insert(node.id.as_str(), idx);
        }

        if self.by_permalink.contains_key(node.permalink.as_str()) {
            tracing::warn!(
                permalink = %node.permalink,
                "duplicate permalink in sitemap, keeping first occurrence"
            );
        } else {
            self.by_permalink.insert(node.permalink.as_str(), idx);
        }

        for child in node.child_nodes() {
            self.push_subtree(child);
        }
    }

    /// The tree root.
    ///
    /// # Panics
    ///
    /// Never panics: the index always contains at least the root it was
    /// built from.
    #[must_use]
    pub fn root(&self) -> &'a SitemapNode {
        self.nodes[0]
    }

    /// Look up a node by its stable id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&'a SitemapNode> {
        self.by_id.get(id).map(|&i| self.nodes[i])
    }

    /// Look up a node by its exact permalink.
    #[must_use]
    pub fn by_permalink(&self, permalink: &str) -> Option<&'a SitemapNode> {
        self.by_permalink.get(permalink).map(|&i| self.nodes[i])
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = &'a SitemapNode> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index is empty (it never is for a built index).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve a permalink by walking path segments from the root.
    ///
    /// See [`walk_segments`].
    #[must_use]
    pub fn walk_segments(&self, permalink: &str) -> Option<&'a SitemapNode> {
        walk_segments(self.root(), permalink)
    }
}

/// Resolve a permalink by following its `/`-delimited segments from the root.
///
/// At each step the child whose permalink exactly equals the reconstructed
/// prefix is taken. Returns `None` as soon as a segment cannot be matched;
/// this tolerates stale or partially-published sitemaps. `/` resolves to
/// the root itself.
#[must_use]
pub fn walk_segments<'a>(root: &'a SitemapNode, permalink: &str) -> Option<&'a SitemapNode> {
    let trimmed = permalink.trim_end_matches('/');
    if trimmed.is_empty() {
        return Some(root);
    }

    let mut current = root;
    let mut prefix = String::new();
    for segment in trimmed.split('/').skip(1) {
        prefix.push('/');
        prefix.push_str(segment);
        current = current
            .child_nodes()
            .iter()
            .find(|child| child.permalink == prefix)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Layout;

    fn sample_tree() -> SitemapNode {
        SitemapNode::new("1", "Home", "/", Layout::Homepage).with_children(vec![
            SitemapNode::new("2", "About", "/about", Layout::Content).with_children(vec![
                SitemapNode::new("3", "Team", "/about/team", Layout::Content),
            ]),
            SitemapNode::new("4", "Publications", "/publications", Layout::Collection),
        ])
    }

    #[test]
    fn test_build_flattens_in_pre_order() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        let permalinks: Vec<_> = index.nodes().map(|n| n.permalink.as_str()).collect();
        assert_eq!(permalinks, vec!["/", "/about", "/about/team", "/publications"]);
        assert_eq!(index.len(), 4);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_by_id_finds_node() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        assert_eq!(index.by_id("3").unwrap().permalink, "/about/team");
        assert!(index.by_id("99").is_none());
    }

    #[test]
    fn test_by_permalink_finds_node() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        assert_eq!(index.by_permalink("/about").unwrap().id, "2");
        assert!(index.by_permalink("/missing").is_none());
    }

    #[test]
    fn test_duplicate_permalink_keeps_first() {
        let root = SitemapNode::new("1", "Home", "/", Layout::Homepage).with_children(vec![
            SitemapNode::new("2", "First", "/page", Layout::Content),
            SitemapNode::new("3", "Second", "/page", Layout::Content),
        ]);
        let index = SitemapIndex::build(&root);

        assert_eq!(index.by_permalink("/page").unwrap().title, "First");
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_walk_segments_resolves_root() {
        let root = sample_tree();

        assert_eq!(walk_segments(&root, "/").unwrap().id, "1");
        assert_eq!(walk_segments(&root, "").unwrap().id, "1");
    }

    #[test]
    fn test_walk_segments_resolves_nested_page() {
        let root = sample_tree();

        let node = walk_segments(&root, "/about/team").unwrap();
        assert_eq!(node.title, "Team");
    }

    #[test]
    fn test_walk_segments_tolerates_trailing_slash() {
        let root = sample_tree();

        assert_eq!(walk_segments(&root, "/about/").unwrap().id, "2");
    }

    #[test]
    fn test_walk_segments_missing_segment_returns_none() {
        let root = sample_tree();

        assert!(walk_segments(&root, "/about/missing").is_none());
        assert!(walk_segments(&root, "/missing/team").is_none());
    }

    #[test]
    fn test_index_walk_segments_delegates_to_root() {
        let root = sample_tree();
        let index = SitemapIndex::build(&root);

        assert_eq!(index.walk_segments("/publications").unwrap().id, "4");
        assert!(index.walk_segments("/nope").is_none());
    }
}
