//! Table-of-contents extraction from page content blocks.
//!
//! Page content is a list of typed blocks; only `prose` blocks can carry
//! headings, and only level-2 headings that are direct children of a
//! prose block appear in the table of contents.
//!
//! Headings authored without an explicit id get one assigned before
//! extraction. Ids are derived from the heading text and its ordinal
//! position only, so repeated renders of identical input always produce
//! identical anchors.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Attributes of a heading node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    /// Heading level (2 for TOC-eligible headings).
    #[serde(default)]
    pub level: u8,
    /// Anchor id; assigned when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Inline node inside a heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    /// Plain text run.
    Text {
        /// Text content.
        text: String,
    },
    /// Forced line break, rendered as a space in extracted text.
    HardBreak,
    /// Any other inline kind; contributes nothing to extracted text.
    #[serde(other)]
    Other,
}

/// Direct child node of a prose block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProseNode {
    /// Heading with level and optional anchor id.
    Heading {
        /// Level and anchor id.
        #[serde(default)]
        attrs: HeadingAttrs,
        /// Inline content.
        #[serde(default)]
        content: Vec<InlineNode>,
    },
    /// Any other prose child (paragraphs, lists, tables).
    #[serde(other)]
    Other,
}

/// One block of page content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    /// Rich-text block; the only block kind that carries headings.
    Prose {
        /// Direct child nodes in document order.
        #[serde(default)]
        content: Vec<ProseNode>,
    },
    /// Any other block kind (cards, callouts, embeds).
    #[serde(other)]
    Other,
}

/// One table-of-contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocItem {
    /// Rendered inline text of the heading.
    pub content: String,
    /// Anchor link, `#` followed by the heading id.
    pub anchor_link: String,
}

/// Table of contents for a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    /// Entries in document order; empty when fewer than two headings exist.
    pub items: Vec<TocItem>,
}

/// Rendered inline text of a heading's content.
fn inline_text(content: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in content {
        match node {
            InlineNode::Text { text } => out.push_str(text),
            InlineNode::HardBreak => out.push(' '),
            InlineNode::Other => {}
        }
    }
    out
}

/// Anchor id for a heading, from its text and ordinal position.
fn heading_anchor(text: &str, position: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(position.to_le_bytes());
    let digest = hasher.finalize();
    format!("h-{}", hex::encode(&digest[..6]))
}

/// Assign anchor ids to headings that lack one.
///
/// Runs over every heading (all levels) so anchors exist for deep links
/// too, not just TOC entries. Must run before [`table_of_contents`].
pub fn assign_heading_ids(blocks: &mut [ContentBlock]) {
    let mut position = 0usize;
    for block in blocks {
        let ContentBlock::Prose { content } = block else {
            continue;
        };
        for node in content {
            let ProseNode::Heading { attrs, content } = node else {
                continue;
            };
            position += 1;
            if attrs.id.is_none() {
                attrs.id = Some(heading_anchor(&inline_text(content), position));
            }
        }
    }
}

/// Extract the table of contents from page content blocks.
///
/// Collects level-2 headings that are direct children of prose blocks, in
/// document order. A page with fewer than two such headings gets an empty
/// TOC; callers suppress the panel entirely in that case.
#[must_use]
pub fn table_of_contents(blocks: &[ContentBlock]) -> TableOfContents {
    let mut items = Vec::new();
    for block in blocks {
        let ContentBlock::Prose { content } = block else {
            continue;
        };
        for node in content {
            let ProseNode::Heading { attrs, content } = node else {
                continue;
            };
            if attrs.level != 2 {
                continue;
            }
            let anchor = attrs.id.clone().unwrap_or_default();
            items.push(TocItem {
                content: inline_text(content),
                anchor_link: format!("#{anchor}"),
            });
        }
    }

    if items.len() < 2 {
        return TableOfContents::default();
    }
    TableOfContents { items }
}
