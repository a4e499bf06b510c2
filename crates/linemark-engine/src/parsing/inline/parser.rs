use super::{cursor::Cursor, kinds::Strong, types::Inline};

/// Parses one escaped line into a sequence of [`Inline`] nodes.
///
/// Every `**X**` where `X` is the shortest run that contains no line
/// terminator becomes [`Inline::Strong`]; spans never overlap and the leftmost
/// opener wins. Unclosed delimiters stay in the surrounding text. Adjacent text
/// is always merged into a single [`Inline::Text`], and an empty input yields
/// no nodes.
pub fn parse_inline(s: &str) -> Vec<Inline> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<Inline>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Inline::Text(s[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let here = cur.pos();
        if let Some(inner) = try_parse_strong(&mut cur) {
            flush_text(&mut out, s, text_start, here);
            out.push(Inline::Strong(inner.to_string()));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts to parse a strong span starting at the current position.
///
/// Returns the inner text on success. On failure the cursor is left where it
/// was, so the caller can step one byte and try again.
fn try_parse_strong<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let inner_start = cur.pos() + Strong::DELIM.len();
    let close = cur.find_from(inner_start, Strong::DELIM)?;
    let inner = cur.slice(inner_start, close);
    if !Strong::accepts(inner) {
        return None;
    }

    cur.jump_to(close + Strong::DELIM.len());
    Some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn strong(s: &str) -> Inline {
        Inline::Strong(s.to_string())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_nodes() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn strong_in_middle_of_text() {
        assert_eq!(
            parse_inline("Some text **bold** more"),
            vec![text("Some text "), strong("bold"), text(" more")]
        );
    }

    #[test]
    fn two_strong_spans_do_not_merge() {
        assert_eq!(
            parse_inline("**a** and **b**"),
            vec![strong("a"), text(" and "), strong("b")]
        );
    }

    #[test]
    fn shortest_span_wins() {
        // The first closer ends the span even though a later one exists.
        assert_eq!(
            parse_inline("**a**b**"),
            vec![strong("a"), text("b**")]
        );
    }

    #[test]
    fn empty_strong_span() {
        assert_eq!(parse_inline("****"), vec![strong("")]);
    }

    #[test]
    fn triple_star_keeps_leading_star_inside() {
        assert_eq!(parse_inline("***a** b"), vec![strong("*a"), text(" b")]);
    }

    #[test]
    fn unclosed_strong_becomes_text() {
        assert_eq!(parse_inline("**unclosed"), vec![text("**unclosed")]);
    }

    #[test]
    fn carriage_return_blocks_span() {
        assert_eq!(parse_inline("**a\r**"), vec![text("**a\r**")]);
    }

    #[test]
    fn single_star_bullet_is_text() {
        assert_eq!(
            parse_inline("* **Rest:** drink water"),
            vec![text("* "), strong("Rest:"), text(" drink water")]
        );
    }

    #[test]
    fn multibyte_text_around_strong() {
        assert_eq!(
            parse_inline("café **thé** naïve"),
            vec![text("café "), strong("thé"), text(" naïve")]
        );
    }

    #[test]
    fn escaped_entities_inside_strong_are_kept() {
        assert_eq!(
            parse_inline("**&lt;b&gt;**"),
            vec![strong("&lt;b&gt;")]
        );
    }
}
