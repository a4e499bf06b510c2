use std::fmt::Write;

use crate::parsing::{blocks::BlockNode, inline::Inline};

/// Renders blocks as one line per block (and per list item).
///
/// Strong spans are shown with their `**` delimiters restored; text is shown
/// escaped, exactly as it will be emitted.
pub fn outline(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for b in blocks {
        match b {
            BlockNode::Heading { text } => {
                let _ = writeln!(out, "heading {text:?}");
            }
            BlockNode::List { items } => {
                out.push_str("list\n");
                for item in items {
                    let _ = writeln!(out, "  item {:?}", inline_text(&item.0));
                }
            }
            BlockNode::Separator => out.push_str("separator\n"),
            BlockNode::Disclaimer { content } => {
                let _ = writeln!(out, "disclaimer {:?}", inline_text(content));
            }
            BlockNode::Paragraph { content } => {
                let _ = writeln!(out, "paragraph {:?}", inline_text(content));
            }
        }
    }
    out
}

fn inline_text(nodes: &[Inline]) -> String {
    nodes
        .iter()
        .map(|n| match n {
            Inline::Text(s) => s.clone(),
            Inline::Strong(s) => format!("**{s}**"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn outline_of_empty_document_is_empty() {
        assert_eq!(outline(&[]), "");
    }

    #[test]
    fn outline_lists_items_indented() {
        let doc = parse_document("* one\n* **two**");
        assert_eq!(
            outline(&doc.blocks),
            "list\n  item \"one\"\n  item \"**two**\"\n"
        );
    }
}
