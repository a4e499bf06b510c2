/// Strong emphasis (`**text**`) with owned delimiter constants.
pub struct Strong;

impl Strong {
    /// Opens and closes a strong span.
    pub const DELIM: &'static str = "**";

    /// Characters a strong span may not contain.
    pub const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

    /// Whether `inner` may sit between a pair of delimiters.
    pub fn accepts(inner: &str) -> bool {
        !inner.contains(Self::LINE_TERMINATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_text() {
        assert!(Strong::accepts("Possible Conditions:"));
        assert!(Strong::accepts(""));
    }

    #[test]
    fn rejects_carriage_return() {
        assert!(!Strong::accepts("split\rhere"));
        assert!(!Strong::accepts("para\u{2029}graph"));
    }
}
