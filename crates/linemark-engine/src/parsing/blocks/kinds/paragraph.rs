use crate::parsing::{blocks::classify::LineClass, inline::Inline};

/// Paragraph block type.
///
/// Paragraphs have no markers: they are the fallback when no other rule
/// matches, so `classify` always succeeds.
pub struct Paragraph;

impl Paragraph {
    pub fn classify(line: &[Inline]) -> Option<LineClass> {
        Some(LineClass::Paragraph(line.to_vec()))
    }
}
