//! Anchor resolution: locating a target line span within a note.
//!
//! An [`Anchor`] names a position in a document by heading text, block ID,
//! frontmatter key, literal text span, or line number. Resolution is a pure
//! function over the document's lines producing a 1-based inclusive
//! [`MatchSpan`], or a descriptive error when no resolution is possible.

use crate::buffer::context_window;
use crate::error::{PatchError, Result};
use crate::frontmatter::{find_frontmatter_block, find_frontmatter_key};
use regex::Regex;
use std::fmt::Write as _;
use std::sync::LazyLock;

// Any ATX heading line, regardless of level. Used for section boundaries.
static GENERIC_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s").unwrap());

/// A position in a note, addressed by one of five strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// A heading line matched by text (case-insensitive, any `#` level).
    Heading(String),
    /// A line carrying an Obsidian `^block-id` suffix.
    Block(String),
    /// A `key:` entry in the YAML frontmatter block.
    Frontmatter(String),
    /// A literal, possibly multi-line, exact text span.
    TextMatch(String),
    /// A 1-based line number, kept as the raw string so that parse
    /// failures surface as anchor errors rather than CLI errors.
    Line(String),
}

/// The resolved target: 1-based inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }
}

impl Anchor {
    /// Resolve this anchor against a document's lines.
    ///
    /// Headings and blocks take the first match; only text-match anchors
    /// detect ambiguity. The frontmatter variant resolves to the existing
    /// key's line — patching treats frontmatter as an upsert and does not
    /// go through resolution (see [`crate::patch::apply_patch`]).
    pub fn resolve(&self, lines: &[String]) -> Result<MatchSpan> {
        match self {
            Anchor::Heading(text) => resolve_heading(lines, text),
            Anchor::Block(id) => resolve_block(lines, id),
            Anchor::Frontmatter(key) => resolve_frontmatter(lines, key),
            Anchor::TextMatch(pattern) => resolve_text_match(lines, pattern),
            Anchor::Line(value) => resolve_line(lines, value),
        }
    }
}

/// Build the pattern matching a heading line with the given text,
/// case-insensitively, at any `#` level.
pub fn heading_pattern(text: &str) -> Regex {
    let escaped = regex::escape(text.trim());
    // Escaped literal regexes cannot fail to compile.
    Regex::new(&format!(r"(?i)^#+\s+{}\s*$", escaped)).unwrap()
}

/// True if the line is an ATX heading of any level.
pub fn is_heading_line(line: &str) -> bool {
    GENERIC_HEADING.is_match(line)
}

fn resolve_heading(lines: &[String], text: &str) -> Result<MatchSpan> {
    let pattern = heading_pattern(text);
    lines
        .iter()
        .position(|line| pattern.is_match(line))
        .map(|idx| MatchSpan::single(idx + 1))
        .ok_or_else(|| PatchError::HeadingNotFound(text.to_string()))
}

fn resolve_block(lines: &[String], id: &str) -> Result<MatchSpan> {
    let id = id.strip_prefix('^').unwrap_or(id);
    let escaped = regex::escape(id);
    let pattern = Regex::new(&format!(r"\^{}\s*$", escaped)).unwrap();
    lines
        .iter()
        .position(|line| pattern.is_match(line))
        .map(|idx| MatchSpan::single(idx + 1))
        .ok_or_else(|| PatchError::BlockNotFound(id.to_string()))
}

fn resolve_frontmatter(lines: &[String], key: &str) -> Result<MatchSpan> {
    find_frontmatter_block(lines)
        .and_then(|block| find_frontmatter_key(lines, block, key))
        .map(MatchSpan::single)
        .ok_or_else(|| PatchError::FrontmatterKeyNotFound(key.to_string()))
}

fn resolve_text_match(lines: &[String], pattern: &str) -> Result<MatchSpan> {
    if pattern.trim().is_empty() {
        return Err(PatchError::EmptyTextPattern);
    }

    let occurrences = find_text_occurrences(lines, pattern);

    match occurrences.as_slice() {
        [] => Err(PatchError::TextNotFound(pattern.to_string())),
        [only] => Ok(*only),
        many => Err(PatchError::AmbiguousTextMatch {
            count: many.len(),
            listing: format_occurrence_listing(lines, many),
        }),
    }
}

/// Enumerate every start position where the pattern's lines match a window
/// of the document's lines exactly (line-by-line equality, not substring).
fn find_text_occurrences(lines: &[String], pattern: &str) -> Vec<MatchSpan> {
    let pattern_lines: Vec<&str> = pattern.split('\n').collect();
    let window = pattern_lines.len();

    if window == 0 || window > lines.len() {
        return Vec::new();
    }

    (0..=lines.len() - window)
        .filter(|&start| {
            pattern_lines
                .iter()
                .zip(&lines[start..start + window])
                .all(|(pat, line)| *pat == line.as_str())
        })
        .map(|start| MatchSpan {
            start: start + 1,
            end: start + window,
        })
        .collect()
}

/// Render each occurrence's line range with up to 2 lines of surrounding
/// context. Matched lines are marked with `>`.
fn format_occurrence_listing(lines: &[String], occurrences: &[MatchSpan]) -> String {
    let mut listing = String::new();

    for span in occurrences {
        let window = context_window(lines, span.start, span.end, 2);
        let _ = writeln!(listing, "Lines {}-{}:", span.start, span.end);
        for line in &window.before {
            let _ = writeln!(listing, "  {}", line);
        }
        for line in &lines[span.start - 1..span.end] {
            let _ = writeln!(listing, "> {}", line);
        }
        for line in &window.after {
            let _ = writeln!(listing, "  {}", line);
        }
        listing.push('\n');
    }

    listing.trim_end().to_string()
}

fn resolve_line(lines: &[String], value: &str) -> Result<MatchSpan> {
    let number: i64 = value
        .trim()
        .parse()
        .map_err(|_| PatchError::InvalidLineNumber(value.to_string()))?;

    if number < 1 || number as usize > lines.len() {
        return Err(PatchError::LineOutOfRange {
            line: number,
            max: lines.len(),
        });
    }

    Ok(MatchSpan::single(number as usize))
}
