use std::borrow::Cow;

/// Replaces `<` and `>` with their entity forms in one pass over `line`.
///
/// Nothing else is touched: `&` and quotes pass through, and existing
/// entities such as `&lt;` are not escaped a second time.
pub fn escape_angle_brackets(line: &str) -> Cow<'_, str> {
    if !line.contains(['<', '>']) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + 8);
    for ch in line.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_angle_brackets("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn script_tag_is_escaped() {
        assert_eq!(
            escape_angle_brackets("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn existing_entities_are_left_alone() {
        assert_eq!(escape_angle_brackets("a &lt; b > c"), "a &lt; b &gt; c");
    }

    #[test]
    fn ampersand_passes_through() {
        assert_eq!(escape_angle_brackets("salt & pepper"), "salt & pepper");
    }
}
