use serde::Serialize;

/// A run of inline content inside one line.
///
/// Text is stored already escaped, so it can be written to markup verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text outside any emphasis span.
    Text(String),
    /// The content between a `**` pair, delimiters removed.
    Strong(String),
}

impl Inline {
    /// The escaped text carried by this node, without delimiters.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Strong(s) => s,
        }
    }
}
