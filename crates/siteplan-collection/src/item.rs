//! Collection item view-model.
//!
//! A [`CollectionItem`] is the render-ready card derived from an eligible
//! sitemap node. Items are constructed fresh on every gather call and
//! never mutated; filtering, sorting, and pagination all produce new
//! vectors.

use chrono::NaiveDate;
use serde::Serialize;

use siteplan_sitemap::{FileDetails, ImageRef, Layout, SitemapNode, TagSelection};

/// Category assigned to items whose node carries none.
pub(crate) const DEFAULT_CATEGORY: &str = "Others";

/// Kind of collection item, one per eligible layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemVariant {
    Article,
    File,
    Link,
}

/// Render-ready collection card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    /// Item kind.
    pub variant: ItemVariant,
    /// Category label, `"Others"` when the node has none.
    pub category: String,
    /// Display title.
    pub title: String,
    /// Card description, from the node summary.
    pub description: String,
    /// Card image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    /// Parsed publication date; `None` for undated items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_date: Option<NaiveDate>,
    /// Link target: the permalink for articles, the `ref` for files and links.
    pub url: String,
    /// File metadata, present for file items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_details: Option<FileDetails>,
    /// Resolved tags grouped by category.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagSelection>,
}

impl CollectionItem {
    /// Derive an item from a sitemap node, or `None` for ineligible layouts.
    ///
    /// `tags` must already be resolved (explicit node tags, or `tagged` ids
    /// resolved against the collection's tag category definitions).
    pub(crate) fn from_node(node: &SitemapNode, tags: Vec<TagSelection>) -> Option<Self> {
        let variant = match node.layout {
            Layout::Article => ItemVariant::Article,
            Layout::File => ItemVariant::File,
            Layout::Link => ItemVariant::Link,
            Layout::Homepage
            | Layout::Content
            | Layout::Index
            | Layout::Collection
            | Layout::Database
            | Layout::Search
            | Layout::NotFound => return None,
        };

        let url = match variant {
            ItemVariant::Article => node.permalink.clone(),
            ItemVariant::File | ItemVariant::Link => node
                .ref_link
                .clone()
                .unwrap_or_else(|| node.permalink.clone()),
        };

        Some(Self {
            variant,
            category: node
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
            title: node.title.clone(),
            description: node.summary.clone(),
            image: node.image.clone(),
            raw_date: node.date.as_deref().and_then(parse_item_date),
            url,
            file_details: node.file_details.clone(),
            tags,
        })
    }
}

/// Parse a publication date string.
///
/// Accepts `YYYY-MM-DD` and `DD/MM/YYYY`; anything else is treated as
/// undated rather than an error.
pub(crate) fn parse_item_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_article_uses_permalink() {
        let node = SitemapNode::new("1", "Budget 2024", "/news/budget", Layout::Article)
            .with_summary("Annual budget statement")
            .with_date("2024-02-16")
            .with_category("Press releases");

        let item = CollectionItem::from_node(&node, Vec::new()).unwrap();

        assert_eq!(item.variant, ItemVariant::Article);
        assert_eq!(item.url, "/news/budget");
        assert_eq!(item.description, "Annual budget statement");
        assert_eq!(item.category, "Press releases");
        assert_eq!(
            item.raw_date,
            Some(NaiveDate::from_ymd_opt(2024, 2, 16).unwrap())
        );
    }

    #[test]
    fn test_file_uses_ref() {
        let node = SitemapNode::new("2", "Report", "/news/report", Layout::File)
            .with_ref("/files/report.pdf")
            .with_file_details(FileDetails {
                kind: "pdf".to_owned(),
                size: "1.2 MB".to_owned(),
            });

        let item = CollectionItem::from_node(&node, Vec::new()).unwrap();

        assert_eq!(item.variant, ItemVariant::File);
        assert_eq!(item.url, "/files/report.pdf");
        assert_eq!(item.file_details.unwrap().kind, "pdf");
    }

    #[test]
    fn test_missing_category_defaults_to_others() {
        let node = SitemapNode::new("3", "Notice", "/news/notice", Layout::Article);

        let item = CollectionItem::from_node(&node, Vec::new()).unwrap();

        assert_eq!(item.category, "Others");
    }

    #[test]
    fn test_ineligible_layouts_yield_none() {
        for layout in [Layout::Content, Layout::Collection, Layout::Index] {
            let node = SitemapNode::new("4", "Page", "/news/page", layout);
            assert!(CollectionItem::from_node(&node, Vec::new()).is_none());
        }
    }

    #[test]
    fn test_parse_item_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 7).unwrap();
        assert_eq!(parse_item_date("2023-05-07"), Some(expected));
        assert_eq!(parse_item_date("07/05/2023"), Some(expected));
        assert_eq!(parse_item_date(" 2023-05-07 "), Some(expected));
        assert_eq!(parse_item_date("next tuesday"), None);
        assert_eq!(parse_item_date(""), None);
    }
}
