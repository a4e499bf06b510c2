pub mod blocks;
pub mod escape;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockNode, LineClassifier};
use lines::split_lines;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Parses raw reply text into block nodes.
///
/// Empty input short-circuits to an empty document without splitting.
pub fn parse_document(raw: &str) -> ParsedDoc {
    if raw.is_empty() {
        return ParsedDoc::default();
    }

    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in split_lines(raw) {
        let lc = classifier.classify(line);
        log::trace!("classified {line:?} as {lc:?}");
        builder.push(lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}
