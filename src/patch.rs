//! Positional patch application against a resolved anchor.

use crate::anchor::{Anchor, heading_pattern, is_heading_line};
use crate::buffer::{join_lines, split_lines};
use crate::error::Result;
use crate::frontmatter::set_frontmatter_key;
use crate::preview::{LineRange, PatchResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where to place new content relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Before,
    After,
    Replace,
}

/// Apply a positional edit to a document.
///
/// Resolves the anchor, splices `new_content` in at the requested position,
/// and reports the post-mutation span of the inserted lines. The document is
/// never partially mutated: any resolution failure leaves the caller with
/// the original text.
///
/// Frontmatter anchors ignore `position` entirely — the value always becomes
/// `key: value` on its own line inside the frontmatter block, which is
/// created if absent.
pub fn apply_patch(
    document: &str,
    anchor: &Anchor,
    position: Position,
    new_content: &str,
) -> Result<PatchResult> {
    let mut lines = split_lines(document);

    if let Anchor::Frontmatter(key) = anchor {
        let line = set_frontmatter_key(&mut lines, key, new_content);
        let changed_lines = vec![lines[line - 1].clone()];
        return Ok(PatchResult {
            content: join_lines(&lines),
            line_range: LineRange {
                start: line,
                end: line,
            },
            changed_lines,
        });
    }

    let span = anchor.resolve(&lines)?;

    let mut content_lines: Vec<String> = new_content.split('\n').map(|l| l.to_string()).collect();

    // LLM callers asked to "add content after heading X" routinely repeat
    // the heading as the first line of the content. Drop it when it names
    // the same heading (case-insensitive, any level); a different heading
    // in the content is preserved verbatim.
    if let Anchor::Heading(text) = anchor {
        if matches!(position, Position::Before | Position::After) {
            let pattern = heading_pattern(text);
            if content_lines
                .first()
                .is_some_and(|first| pattern.is_match(first))
            {
                content_lines.remove(0);
            }
        }
    }

    if content_lines.is_empty() {
        // Everything was stripped; nothing to insert.
        return Ok(PatchResult {
            content: document.to_string(),
            line_range: LineRange {
                start: span.start,
                end: span.end,
            },
            changed_lines: Vec::new(),
        });
    }

    let inserted = content_lines.len();

    let line_range = match position {
        Position::Before => {
            lines.splice(span.start - 1..span.start - 1, content_lines.clone());
            LineRange {
                start: span.start,
                end: span.start + inserted - 1,
            }
        }
        Position::After => {
            lines.splice(span.end..span.end, content_lines.clone());
            LineRange {
                start: span.end + 1,
                end: span.end + inserted,
            }
        }
        Position::Replace => match anchor {
            Anchor::Heading(_) => {
                // Replace the section body: everything strictly between the
                // heading line and the next heading of any level.
                let body_start = span.start;
                let body_end = lines[body_start..]
                    .iter()
                    .position(|line| is_heading_line(line))
                    .map(|offset| body_start + offset)
                    .unwrap_or(lines.len());
                lines.splice(body_start..body_end, content_lines.clone());
                LineRange {
                    start: body_start + 1,
                    end: body_start + inserted,
                }
            }
            _ => {
                lines.splice(span.start - 1..span.end, content_lines.clone());
                LineRange {
                    start: span.start,
                    end: span.start + inserted - 1,
                }
            }
        },
    };

    Ok(PatchResult {
        content: join_lines(&lines),
        line_range,
        changed_lines: content_lines,
    })
}
