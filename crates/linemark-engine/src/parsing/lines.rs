/// Splits raw text into lines on `\n` only.
///
/// Empty lines, including a trailing one after a final newline, are kept so
/// that blank-line handling sees every line break. A `\r` before the newline
/// stays on the line and is removed later by trimming.
pub fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n')
}

/// Whitespace for classification purposes: Unicode white space plus the
/// zero-width no-break space that often leads generated text.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trims leading and trailing whitespace from a line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_trimmable)
}

/// Trims leading whitespace only.
pub fn trim_line_start(line: &str) -> &str {
    line.trim_start_matches(is_trimmable)
}
