use serde::Serialize;

use crate::parsing::inline::Inline;

/// One item of a bullet list, bullet removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListItem(pub Vec<Inline>);

/// A block of the formatted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockNode {
    /// A section heading. The text is the content of the strong span that
    /// made up the whole line.
    Heading { text: String },
    /// A run of consecutive list items.
    List { items: Vec<ListItem> },
    /// Horizontal rule placed before a disclaimer.
    Separator,
    /// The disclaimer line, marker included.
    Disclaimer { content: Vec<Inline> },
    /// Any other non-blank line.
    Paragraph { content: Vec<Inline> },
}
