use crate::parsing::blocks::BlockNode;

/// Panics if the block sequence breaks a grouping invariant.
pub fn check(blocks: &[BlockNode]) {
    for (i, b) in blocks.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| blocks.get(p));
        let next = blocks.get(i + 1);

        match b {
            BlockNode::List { items } => {
                assert!(!items.is_empty(), "empty list at block {i}");
                assert!(
                    !matches!(next, Some(BlockNode::List { .. })),
                    "adjacent lists at blocks {i} and {}",
                    i + 1
                );
            }
            BlockNode::Separator => {
                assert!(
                    matches!(next, Some(BlockNode::Disclaimer { .. })),
                    "separator at block {i} is not followed by a disclaimer: {next:?}"
                );
            }
            BlockNode::Disclaimer { .. } => {
                assert!(
                    matches!(prev, Some(BlockNode::Separator)),
                    "disclaimer at block {i} is not preceded by a separator: {prev:?}"
                );
            }
            BlockNode::Heading { .. } | BlockNode::Paragraph { .. } => {}
        }
    }
}
