use crate::parsing::{
    blocks::{classify::LineClass, types::ListItem},
    inline::Inline,
    lines::trim_line_start,
};

/// List item block type with owned bullet marker.
///
/// The bullet is matched against the line as rendered, so `**bold** text`
/// is not a bullet while `* **bold** text` is.
pub struct Bullet;

impl Bullet {
    pub const MARKER: char = '*';

    pub fn classify(line: &[Inline]) -> Option<LineClass> {
        let (Inline::Text(first), rest) = line.split_first()? else {
            return None;
        };
        let after = trim_line_start(first.strip_prefix(Self::MARKER)?);

        let mut content = Vec::with_capacity(line.len());
        if !after.is_empty() {
            content.push(Inline::Text(after.to_string()));
        }
        content.extend_from_slice(rest);
        Some(LineClass::ListItem(ListItem(content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::parse_inline;
    use pretty_assertions::assert_eq;

    fn item(line: &str) -> Option<Vec<Inline>> {
        match Bullet::classify(&parse_inline(line))? {
            LineClass::ListItem(ListItem(content)) => Some(content),
            other => panic!("expected list item, got {other:?}"),
        }
    }

    #[test]
    fn strips_marker_and_space() {
        assert_eq!(item("* item one"), Some(vec![Inline::Text("item one".into())]));
    }

    #[test]
    fn no_space_after_marker() {
        assert_eq!(item("*tight"), Some(vec![Inline::Text("tight".into())]));
    }

    #[test]
    fn bullet_followed_by_strong() {
        assert_eq!(
            item("* **Rest:** sleep"),
            Some(vec![
                Inline::Strong("Rest:".into()),
                Inline::Text(" sleep".into())
            ])
        );
    }

    #[test]
    fn lone_marker_is_empty_item() {
        assert_eq!(item("*"), Some(vec![]));
    }

    #[test]
    fn unclosed_double_star_is_bullet() {
        assert_eq!(
            item("** not closed"),
            Some(vec![Inline::Text("* not closed".into())])
        );
    }

    #[test]
    fn strong_opener_is_not_bullet() {
        assert_eq!(item("**bold** text"), None);
    }

    #[test]
    fn dash_is_not_bullet() {
        assert_eq!(item("- dash"), None);
    }
}
