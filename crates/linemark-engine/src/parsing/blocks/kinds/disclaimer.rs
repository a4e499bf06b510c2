use crate::parsing::{blocks::classify::LineClass, inline::Inline};

/// Disclaimer block type with owned marker text.
///
/// The marker may sit anywhere on the line, including inside a strong span,
/// but it must not be split across spans.
pub struct Disclaimer;

impl Disclaimer {
    pub const MARKER: &'static str = "IMPORTANT DISCLAIMER:";

    pub fn classify(line: &[Inline]) -> Option<LineClass> {
        line.iter()
            .any(|n| n.text().contains(Self::MARKER))
            .then(|| LineClass::Disclaimer(line.to_vec()))
    }
}
