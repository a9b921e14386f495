//! Typed sitemap tree.
//!
//! A [`SitemapNode`] is one page in the hierarchical site tree. Parent/child
//! relationships are expressed purely through the nested `children` arrays;
//! there are no back-references, so the tree is acyclic by construction.
//!
//! Node kinds are a closed [`Layout`] enum rather than free-form strings,
//! so dispatch over page kinds is checked exhaustively at compile time.

use serde::{Deserialize, Serialize};

/// Page layout kind.
///
/// Determines how the page renders and whether it is eligible as a
/// collection item (`Article`, `File`, `Link`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Homepage,
    Content,
    Article,
    Index,
    Collection,
    Database,
    File,
    Link,
    Search,
    #[serde(rename = "notfound")]
    NotFound,
}

/// Image reference with alt text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image source URL or asset path.
    pub src: String,
    /// Alternative text for accessibility.
    pub alt: String,
}

/// File metadata carried by `file` layout nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetails {
    /// File type (e.g., "pdf").
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable file size (e.g., "2.3 MB").
    pub size: String,
}

/// Tags a page carries, grouped by tag category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSelection {
    /// Tag category label (e.g., "Topic").
    pub category: String,
    /// Selected tag values within the category.
    pub selected: Vec<String>,
}

/// One selectable option within a tag category definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOption {
    /// Stable option id, referenced by page `tagged` lists.
    pub id: String,
    /// Display label.
    pub label: String,
}

/// Tag category definition on a collection page.
///
/// Pages under the collection reference options by id through their
/// `tagged` field; the definition resolves those ids to display labels
/// and fixes the facet ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCategory {
    /// Stable category id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Options in display order.
    pub options: Vec<TagOption>,
}

/// Sort key for collection listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Title,
    Category,
}

/// Sort direction for collection listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Listing configuration carried by `collection` layout nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPageProps {
    /// Tag category definitions for facet ordering and tag resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_categories: Option<Vec<TagCategory>>,
    /// Initial sort key for the listing UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort_by: Option<SortKey>,
    /// Initial sort direction for the listing UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort_direction: Option<SortDirection>,
}

/// One page node in the sitemap tree.
///
/// Permalinks are absolute paths; a child's permalink extends its parent's
/// by exactly one `/`-delimited segment (parent `/a` implies child `/a/b`).
/// Node ids are unique across the tree and are the target of reference
/// tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapNode {
    /// Stable identifier, unique across the tree.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Absolute path, unique across the tree.
    pub permalink: String,
    /// Page layout kind.
    pub layout: Layout,
    /// Short description shown on cards and listings.
    #[serde(default)]
    pub summary: String,
    /// Last-modified timestamp string from the publishing pipeline.
    #[serde(default)]
    pub last_modified: String,
    /// Publication date string (parsed downstream; absent means undated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Category label for collection grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Card image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    /// Explicit tags grouped by category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagSelection>>,
    /// Tag option ids, resolved against a collection ancestor's
    /// tag category definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagged: Option<Vec<String>>,
    /// Target URL or resource token for `file` and `link` nodes.
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_link: Option<String>,
    /// File metadata for `file` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_details: Option<FileDetails>,
    /// Listing configuration for `collection` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_page_props: Option<CollectionPageProps>,
    /// Child pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SitemapNode>>,
}

impl SitemapNode {
    /// Create a node with the required fields; everything else empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        permalink: impl Into<String>,
        layout: Layout,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            permalink: permalink.into(),
            layout,
            summary: String::new(),
            last_modified: String::new(),
            date: None,
            category: None,
            image: None,
            tags: None,
            tagged: None,
            ref_link: None,
            file_details: None,
            collection_page_props: None,
            children: None,
        }
    }

    /// Set child pages.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SitemapNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the card summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the publication date string.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the target URL for `file` and `link` nodes.
    #[must_use]
    pub fn with_ref(mut self, ref_link: impl Into<String>) -> Self {
        self.ref_link = Some(ref_link.into());
        self
    }

    /// Set explicit tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<TagSelection>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set tag option ids for resolution against a collection ancestor.
    #[must_use]
    pub fn with_tagged(mut self, tagged: Vec<String>) -> Self {
        self.tagged = Some(tagged);
        self
    }

    /// Set file metadata.
    #[must_use]
    pub fn with_file_details(mut self, details: FileDetails) -> Self {
        self.file_details = Some(details);
        self
    }

    /// Set listing configuration for `collection` nodes.
    #[must_use]
    pub fn with_collection_props(mut self, props: CollectionPageProps) -> Self {
        self.collection_page_props = Some(props);
        self
    }

    /// Child pages, empty for leaf nodes.
    #[must_use]
    pub fn child_nodes(&self) -> &[SitemapNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_minimal_node() {
        let node: SitemapNode = serde_json::from_str(
            r#"{"id": "4", "title": "About", "permalink": "/about",
                "layout": "content", "summary": "About us", "lastModified": "2024-01-01"}"#,
        )
        .unwrap();

        assert_eq!(node.id, "4");
        assert_eq!(node.layout, Layout::Content);
        assert_eq!(node.summary, "About us");
        assert!(node.children.is_none());
        assert!(node.child_nodes().is_empty());
    }

    #[test]
    fn test_deserialize_layout_notfound() {
        let layout: Layout = serde_json::from_str(r#""notfound""#).unwrap();
        assert_eq!(layout, Layout::NotFound);
    }

    #[test]
    fn test_deserialize_file_node() {
        let node: SitemapNode = serde_json::from_str(
            r#"{"id": "9", "title": "Annual report", "permalink": "/pub/report",
                "layout": "file", "summary": "", "lastModified": "",
                "ref": "/files/report.pdf",
                "fileDetails": {"type": "pdf", "size": "1.2 MB"}}"#,
        )
        .unwrap();

        assert_eq!(node.layout, Layout::File);
        assert_eq!(node.ref_link.as_deref(), Some("/files/report.pdf"));
        assert_eq!(node.file_details.unwrap().kind, "pdf");
    }

    #[test]
    fn test_deserialize_collection_props() {
        let node: SitemapNode = serde_json::from_str(
            r#"{"id": "2", "title": "Publications", "permalink": "/publications",
                "layout": "collection", "summary": "", "lastModified": "",
                "collectionPageProps": {
                    "tagCategories": [
                        {"id": "topic", "label": "Topic", "options": [
                            {"id": "health", "label": "Health"},
                            {"id": "transport", "label": "Transport"}
                        ]}
                    ],
                    "defaultSortBy": "date",
                    "defaultSortDirection": "desc"
                }}"#,
        )
        .unwrap();

        let props = node.collection_page_props.unwrap();
        assert_eq!(props.default_sort_by, Some(SortKey::Date));
        assert_eq!(props.default_sort_direction, Some(SortDirection::Desc));
        let categories = props.tag_categories.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].options[1].label, "Transport");
    }

    #[test]
    fn test_deserialize_nested_children() {
        let node: SitemapNode = serde_json::from_str(
            r#"{"id": "1", "title": "Home", "permalink": "/", "layout": "homepage",
                "summary": "", "lastModified": "",
                "children": [
                    {"id": "2", "title": "About", "permalink": "/about",
                     "layout": "content", "summary": "", "lastModified": ""}
                ]}"#,
        )
        .unwrap();

        assert_eq!(node.child_nodes().len(), 1);
        assert_eq!(node.child_nodes()[0].permalink, "/about");
    }
}
