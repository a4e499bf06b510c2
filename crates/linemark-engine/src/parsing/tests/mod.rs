//! Document-level tests for the parsing module.
//!
//! Uses inline `insta` snapshots of the block outline.

mod invariants;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{BlockNode, ListItem},
    inline::Inline,
    parse_document, snapshot,
};

fn outline_of(raw: &str) -> String {
    let doc = parse_document(raw);
    snapshot::invariants(&doc.blocks);
    snapshot::outline(&doc.blocks)
}

#[test]
fn empty_document() {
    assert!(parse_document("").blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n \n\t\n").blocks.is_empty());
}

#[test]
fn heading_strips_markers() {
    assert_eq!(
        parse_document("**Heading:**").blocks,
        vec![BlockNode::Heading {
            text: "Heading:".into()
        }]
    );
}

#[test]
fn two_items_one_list() {
    assert_eq!(
        parse_document("* item one\n* item two").blocks,
        vec![BlockNode::List {
            items: vec![
                ListItem(vec![Inline::Text("item one".into())]),
                ListItem(vec![Inline::Text("item two".into())]),
            ]
        }]
    );
}

#[test]
fn blank_line_between_items_makes_two_lists() {
    assert_snapshot!(outline_of("* a\n\n* b"), @r#"
    list
      item "a"
    list
      item "b"
    "#);
}

#[test]
fn mixed_sequence_keeps_order() {
    let raw = "**Section:**\n* a\n* b\n\nNormal text\nIMPORTANT DISCLAIMER: x";
    assert_snapshot!(outline_of(raw), @r#"
    heading "Section:"
    list
      item "a"
      item "b"
    paragraph "Normal text"
    separator
    disclaimer "IMPORTANT DISCLAIMER: x"
    "#);
}

#[test]
fn crlf_reply_from_service() {
    let raw = "**Possible Conditions:**\r\n* **Common cold:** a viral infection\r\n* Flu\r\n\r\n**IMPORTANT DISCLAIMER:** educational only\r\n";
    assert_snapshot!(outline_of(raw), @r#"
    heading "Possible Conditions:"
    list
      item "**Common cold:** a viral infection"
      item "Flu"
    separator
    disclaimer "**IMPORTANT DISCLAIMER:** educational only"
    "#);
}

#[test]
fn list_directly_followed_by_heading() {
    assert_snapshot!(outline_of("* a\n**Next:**\n* b"), @r#"
    list
      item "a"
    heading "Next:"
    list
      item "b"
    "#);
}

#[test]
fn script_injection_is_escaped_text() {
    assert_snapshot!(outline_of("<script>alert('x')</script>"), @r#"paragraph "&lt;script&gt;alert('x')&lt;/script&gt;""#);
}
