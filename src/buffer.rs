//! Line-indexed text buffer primitives.
//!
//! A document is treated as an ordered sequence of lines split on `\n`.
//! Indices are 0-based internally; every line number exposed to callers
//! (spans, error messages, previews) is 1-based. Splitting and rejoining
//! is lossless: `join_lines(&split_lines(doc)) == doc`.

/// Split a document into lines on `\n`.
///
/// Unlike `str::lines`, this preserves a trailing empty line when the
/// document ends with a newline, so the round-trip through [`join_lines`]
/// reproduces the input exactly.
pub fn split_lines(document: &str) -> Vec<String> {
    document.split('\n').map(|l| l.to_string()).collect()
}

/// Join lines back into a document with `\n` separators.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Lines surrounding a span, clipped at document boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Extract up to `radius` lines before `start` and after `end`.
///
/// `start` and `end` are 1-based inclusive. Never panics: a span at the
/// first line yields an empty `before`, a span at the last line yields an
/// empty `after`, and out-of-bounds spans are clamped.
pub fn context_window(lines: &[String], start: usize, end: usize, radius: usize) -> ContextWindow {
    let start_idx = start.saturating_sub(1).min(lines.len());
    let before_from = start_idx.saturating_sub(radius);
    let before = lines[before_from..start_idx].to_vec();

    let after_from = end.min(lines.len());
    let after_to = (after_from + radius).min(lines.len());
    let after = lines[after_from..after_to].to_vec();

    ContextWindow { before, after }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_join_round_trip() {
        for doc in [
            "one\ntwo\nthree",
            "trailing newline\n",
            "\nleading newline",
            "",
            "\n\n\n",
            "single",
        ] {
            assert_eq!(join_lines(&split_lines(doc)), doc);
        }
    }

    #[test]
    fn test_split_preserves_trailing_empty_line() {
        let lines = split_lines("a\nb\n");
        assert_eq!(lines, vec!["a", "b", ""]);
    }

    #[test]
    fn test_context_window_middle() {
        let lines = split_lines("1\n2\n3\n4\n5\n6\n7");
        let window = context_window(&lines, 4, 4, 2);
        assert_eq!(window.before, vec!["2", "3"]);
        assert_eq!(window.after, vec!["5", "6"]);
    }

    #[test]
    fn test_context_window_at_first_line() {
        let lines = split_lines("1\n2\n3");
        let window = context_window(&lines, 1, 1, 2);
        assert!(window.before.is_empty());
        assert_eq!(window.after, vec!["2", "3"]);
    }

    #[test]
    fn test_context_window_at_last_line() {
        let lines = split_lines("1\n2\n3");
        let window = context_window(&lines, 3, 3, 2);
        assert_eq!(window.before, vec!["1", "2"]);
        assert!(window.after.is_empty());
    }

    #[test]
    fn test_context_window_clips_radius() {
        let lines = split_lines("1\n2\n3");
        let window = context_window(&lines, 2, 2, 100);
        assert_eq!(window.before, vec!["1"]);
        assert_eq!(window.after, vec!["3"]);
    }

    #[test]
    fn test_context_window_empty_document() {
        let lines: Vec<String> = Vec::new();
        let window = context_window(&lines, 1, 1, 2);
        assert!(window.before.is_empty());
        assert!(window.after.is_empty());
    }

    #[test]
    fn test_context_window_out_of_bounds_span() {
        let lines = split_lines("1\n2");
        let window = context_window(&lines, 50, 60, 2);
        assert_eq!(window.before, vec!["1", "2"]);
        assert!(window.after.is_empty());
    }
}
