//! Pure text wrapping helpers and dimensional constants for the InputPanel.

/// Left + right borders consumed horizontally by a bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Content lines shown in the text area before it stops growing
pub(super) const MAX_VISIBLE_LINES: u16 = 6;
/// Content lines the text area always reserves
pub(super) const MIN_VISIBLE_LINES: u16 = 2;

/// Build textwrap options that match ratatui's `Paragraph` wrapping.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after borders. Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into display lines, keeping a trailing empty line after a
/// trailing newline so the cursor has somewhere to sit.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|l| l.into_owned())
        .collect();

    if lines.is_empty() {
        lines.push(String::new());
    }
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    lines
}

/// Strip the quotes terminals add around dragged-in paths.
pub(super) fn unquote_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_lines_empty_text() {
        assert_eq!(wrapped_lines("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrapped_lines_breaks_long_words() {
        let lines = wrapped_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrapped_lines_trailing_newline_adds_line() {
        let lines = wrapped_lines("hello\n", 20);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_unquote_path() {
        assert_eq!(unquote_path("  '/tmp/a b.pdf' "), "/tmp/a b.pdf");
        assert_eq!(unquote_path("\"/tmp/x.pdf\""), "/tmp/x.pdf");
        assert_eq!(unquote_path("/tmp/plain.pdf"), "/tmp/plain.pdf");
    }
}
