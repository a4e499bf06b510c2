use crate::parsing::{
    blocks::{BlockNode, ListItem},
    inline::Inline,
    snapshot,
};

#[test]
#[should_panic(expected = "adjacent lists")]
fn detects_adjacent_lists() {
    let item = ListItem(vec![Inline::Text("a".into())]);
    snapshot::invariants(&[
        BlockNode::List {
            items: vec![item.clone()],
        },
        BlockNode::List { items: vec![item] },
    ]);
}

#[test]
#[should_panic(expected = "not preceded by a separator")]
fn detects_bare_disclaimer() {
    snapshot::invariants(&[BlockNode::Disclaimer { content: vec![] }]);
}

#[test]
#[should_panic(expected = "not followed by a disclaimer")]
fn detects_stray_separator() {
    snapshot::invariants(&[BlockNode::Separator]);
}

#[test]
#[should_panic(expected = "empty list")]
fn detects_empty_list() {
    snapshot::invariants(&[BlockNode::List { items: vec![] }]);
}
