//! Unified-diff parsing and application.
//!
//! Supports the hunk subset of unified-diff syntax: `@@ -a,b +c,d @@`
//! headers followed by `-`/`+`/` ` prefixed lines. File headers
//! (`--- a/...`, `+++ b/...`) and any other preamble before the first hunk
//! are ignored. Application is all-or-nothing: every hunk's context is
//! verified against the original document before any mutation happens.

use crate::buffer::{join_lines, split_lines};
use crate::error::{PatchError, Result};
use crate::preview::{LineRange, PatchResult};
use regex::Regex;
use std::sync::LazyLock;

// `@@ -oldStart[,oldCount] +newStart[,newCount] @@`; counts default to 1.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap()
});

/// One line within a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HunkLine {
    Context(String),
    Delete(String),
    Insert(String),
}

/// One contiguous change region, bounded by a `@@ … @@` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    pub lines: Vec<HunkLine>,
}

impl Hunk {
    /// The lines this hunk expects to find in the original document
    /// (context and deletions, in order, prefixes stripped).
    fn expected_old_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                HunkLine::Context(text) | HunkLine::Delete(text) => Some(text.as_str()),
                HunkLine::Insert(_) => None,
            })
            .collect()
    }

    /// Number of lines this hunk produces (context and insertions).
    fn produced_line_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, HunkLine::Context(_) | HunkLine::Insert(_)))
            .count()
    }
}

/// Parse a unified diff into hunks.
///
/// Fails when no hunk header is present at all, or when a line starting
/// with `@@` does not match the header grammar.
pub fn parse_unified_diff(diff_text: &str) -> Result<Vec<Hunk>> {
    let mut hunks: Vec<Hunk> = Vec::new();

    for line in diff_text.split('\n') {
        if line.starts_with("@@") {
            let caps = HUNK_HEADER.captures(line).ok_or_else(|| {
                PatchError::InvalidDiffFormat(format!("invalid hunk header: {:?}", line))
            })?;

            // A number that matched the grammar but fails to parse (e.g.
            // overflow) is still a malformed header, not a position hint.
            let number = |idx: usize, default: usize| -> Result<usize> {
                match caps.get(idx) {
                    Some(m) => m.as_str().parse().map_err(|_| {
                        PatchError::InvalidDiffFormat(format!("invalid hunk header: {:?}", line))
                    }),
                    None => Ok(default),
                }
            };

            hunks.push(Hunk {
                old_start: number(1, 0)?,
                old_count: number(2, 1)?,
                new_start: number(3, 0)?,
                new_count: number(4, 1)?,
                lines: Vec::new(),
            });
            continue;
        }

        let Some(hunk) = hunks.last_mut() else {
            // Preamble before the first hunk (file headers, prose).
            continue;
        };

        let hunk_line = if let Some(text) = line.strip_prefix('+') {
            HunkLine::Insert(text.to_string())
        } else if let Some(text) = line.strip_prefix('-') {
            HunkLine::Delete(text.to_string())
        } else {
            // A leading space marks context; tolerate any other line
            // (including empty ones) as context with no prefix to strip.
            let text = line.strip_prefix(' ').unwrap_or(line);
            HunkLine::Context(text.to_string())
        };
        hunk.lines.push(hunk_line);
    }

    if hunks.is_empty() {
        return Err(PatchError::InvalidDiffFormat(
            "missing hunk header (expected '@@ -a,b +c,d @@')".to_string(),
        ));
    }

    Ok(hunks)
}

/// Apply a unified diff to a document.
///
/// Every hunk is verified against the original document before anything is
/// mutated, so a context mismatch in any hunk leaves the document
/// untouched. The returned `line_range` covers the first hunk's changed
/// region; later hunks are applied but not reflected in the preview span.
pub fn apply_unified_diff(document: &str, diff_text: &str) -> Result<PatchResult> {
    let hunks = parse_unified_diff(diff_text)?;
    let original = split_lines(document);

    for hunk in &hunks {
        verify_hunk(&original, hunk)?;
    }

    let mut lines = original;
    let mut offset: i64 = 0;

    for hunk in &hunks {
        // Positions are relative to the original document; earlier hunks
        // shift later ones by their net line delta.
        let base = hunk.old_start as i64 - 1 + offset;
        let mut cursor = base.max(0) as usize;

        for hunk_line in &hunk.lines {
            match hunk_line {
                HunkLine::Context(_) => cursor += 1,
                HunkLine::Delete(text) => {
                    // Overlapping or out-of-order hunks can walk past the
                    // end even though each verified individually.
                    if cursor >= lines.len() {
                        return Err(PatchError::DiffContextMismatch {
                            old_start: hunk.old_start,
                            expected: text.clone(),
                            found: "<end of file>".to_string(),
                        });
                    }
                    lines.remove(cursor);
                }
                HunkLine::Insert(text) => {
                    cursor = cursor.min(lines.len());
                    lines.insert(cursor, text.clone());
                    cursor += 1;
                }
            }
        }

        offset += hunk.produced_line_count() as i64 - hunk.expected_old_lines().len() as i64;
    }

    let line_range = hunk_changed_range(&hunks[0]);

    let changed_lines = lines
        .get(line_range.start - 1..line_range.end.min(lines.len()))
        .map(|slice| slice.to_vec())
        .unwrap_or_default();

    Ok(PatchResult {
        content: join_lines(&lines),
        line_range,
        changed_lines,
    })
}

/// The net-changed span of a hunk in post-application coordinates: from
/// the first to the last non-context line, so surrounding context within
/// the hunk is not reported as changed. A deletion marks the line now
/// occupying its position. Context-only hunks fall back to the full
/// produced region.
fn hunk_changed_range(hunk: &Hunk) -> LineRange {
    let mut new_line = hunk.new_start.max(1);
    let mut changed: Option<(usize, usize)> = None;

    for hunk_line in &hunk.lines {
        match hunk_line {
            HunkLine::Context(_) => new_line += 1,
            HunkLine::Delete(_) => {
                changed = Some(match changed {
                    None => (new_line, new_line),
                    Some((start, end)) => (start, end.max(new_line)),
                });
            }
            HunkLine::Insert(_) => {
                changed = Some(match changed {
                    None => (new_line, new_line),
                    Some((start, end)) => (start, end.max(new_line)),
                });
                new_line += 1;
            }
        }
    }

    match changed {
        Some((start, end)) => LineRange { start, end },
        None => {
            let start = hunk.new_start.max(1);
            LineRange {
                start,
                end: start + hunk.produced_line_count().saturating_sub(1),
            }
        }
    }
}

/// Check that the hunk's context and deletion lines exactly match the
/// document at `old_start`.
fn verify_hunk(lines: &[String], hunk: &Hunk) -> Result<()> {
    let expected = hunk.expected_old_lines();

    // A pure-insertion hunk (e.g. `@@ -0,0 +1,2 @@` into an empty file)
    // has nothing to verify.
    if expected.is_empty() {
        return Ok(());
    }

    let start = hunk.old_start.saturating_sub(1);

    for (offset, expected_line) in expected.iter().enumerate() {
        let found = lines.get(start + offset).map(|l| l.as_str());
        if found != Some(*expected_line) {
            return Err(PatchError::DiffContextMismatch {
                old_start: hunk.old_start,
                expected: expected_line.to_string(),
                found: found.unwrap_or("<end of file>").to_string(),
            });
        }
    }

    Ok(())
}
