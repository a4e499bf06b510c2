use crate::parsing::{blocks::classify::LineClass, inline::Inline};

/// Heading block type.
///
/// A heading is a line that consists of exactly one strong span whose content
/// contains a colon, e.g. `**Possible Conditions:**`. Anything before or after
/// the span (even `**Note:** extra`) makes it an ordinary line.
pub struct Heading;

impl Heading {
    /// Character the strong content must contain.
    pub const COLON: char = ':';

    pub fn classify(line: &[Inline]) -> Option<LineClass> {
        match line {
            [Inline::Strong(inner)] if inner.contains(Self::COLON) => {
                Some(LineClass::Heading(inner.clone()))
            }
            _ => None,
        }
    }
}
