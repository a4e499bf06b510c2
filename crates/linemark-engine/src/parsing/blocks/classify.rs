use crate::parsing::{
    escape::escape_angle_brackets,
    inline::{Inline, parse_inline},
    lines::trim_line,
};

use super::{
    kinds::{Bullet, Disclaimer, Heading, Paragraph},
    types::ListItem,
};

/// Classification of a single line.
///
/// This is phase 1 of block parsing: each line is classified on its own,
/// without reference to the lines around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Nothing but whitespace.
    Blank,
    /// Strong content of a `**...:**` line.
    Heading(String),
    /// A `*` bulleted line with the bullet removed.
    ListItem(ListItem),
    /// A line carrying the disclaimer marker.
    Disclaimer(Vec<Inline>),
    /// Everything else.
    Paragraph(Vec<Inline>),
}

/// A named classification rule. Rules are tried in [`RULES`] order and the
/// first one that returns `Some` decides the class.
pub struct LineRule {
    pub name: &'static str,
    pub apply: fn(&[Inline]) -> Option<LineClass>,
}

fn blank(line: &[Inline]) -> Option<LineClass> {
    line.is_empty().then_some(LineClass::Blank)
}

/// Classification rules in priority order. The last rule always matches.
pub const RULES: &[LineRule] = &[
    LineRule {
        name: "blank",
        apply: blank,
    },
    LineRule {
        name: "heading",
        apply: Heading::classify,
    },
    LineRule {
        name: "list_item",
        apply: Bullet::classify,
    },
    LineRule {
        name: "disclaimer",
        apply: Disclaimer::classify,
    },
    LineRule {
        name: "paragraph",
        apply: Paragraph::classify,
    },
];

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Escapes, scans emphasis, trims and classifies one raw line.
    ///
    /// Escaping happens first so that nothing in the line can turn into
    /// markup; emphasis is scanned on the escaped text.
    pub fn classify(&self, raw_line: &str) -> LineClass {
        let escaped = escape_angle_brackets(raw_line);
        let inlines = parse_inline(trim_line(&escaped));
        Self::apply_rules(&inlines)
    }

    /// Runs the rule table over an already parsed, trimmed line.
    pub fn apply_rules(inlines: &[Inline]) -> LineClass {
        RULES
            .iter()
            .find_map(|rule| (rule.apply)(inlines))
            .unwrap_or_else(|| LineClass::Paragraph(inlines.to_vec()))
    }
}
