use super::{
    classify::LineClass,
    types::{BlockNode, ListItem},
};

/// Folds line classes into block nodes.
///
/// The open list is the only state carried between lines: list items
/// accumulate until any other line class arrives (blank lines included) or the
/// input ends, and are then emitted as one [`BlockNode::List`].
pub struct BlockBuilder {
    list: Option<Vec<ListItem>>,
    out: Vec<BlockNode>,
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: None,
            out: vec![],
        }
    }

    /// Whether a list is currently open.
    pub fn in_list(&self) -> bool {
        self.list.is_some()
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Blank => self.close_list(),
            LineClass::Heading(text) => {
                self.close_list();
                self.out.push(BlockNode::Heading { text });
            }
            LineClass::ListItem(item) => self.list.get_or_insert_with(Vec::new).push(item),
            LineClass::Disclaimer(content) => {
                self.close_list();
                self.out.push(BlockNode::Separator);
                self.out.push(BlockNode::Disclaimer { content });
            }
            LineClass::Paragraph(content) => {
                self.close_list();
                self.out.push(BlockNode::Paragraph { content });
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.close_list();
        self.out
    }

    fn close_list(&mut self) {
        if let Some(items) = self.list.take() {
            self.out.push(BlockNode::List { items });
        }
    }
}
