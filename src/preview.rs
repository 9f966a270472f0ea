//! Change previews returned alongside successful mutations.

use crate::buffer::{context_window, split_lines};
use serde::{Deserialize, Serialize};

/// Number of context lines shown on each side of a change.
pub const CONTEXT_RADIUS: usize = 2;

/// A 1-based inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

/// Structured summary of what changed and where, for the caller to surface
/// to the end user or LLM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePreview {
    pub line_range: LineRange,
    pub context_before: Vec<String>,
    pub changed_content: Vec<String>,
    pub context_after: Vec<String>,
}

/// The result of a successful patch or diff application.
///
/// `line_range` describes the span occupied by the newly inserted or
/// replacement content after mutation, not the anchor's original span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchResult {
    /// The full mutated document text.
    pub content: String,
    /// Post-mutation 1-based span of the changed content.
    pub line_range: LineRange,
    /// The lines that were inserted or substituted.
    pub changed_lines: Vec<String>,
}

impl PatchResult {
    /// Derive the change preview from the mutated document.
    pub fn preview(&self) -> ChangePreview {
        let lines = split_lines(&self.content);
        let window = context_window(&lines, self.line_range.start, self.line_range.end, CONTEXT_RADIUS);

        ChangePreview {
            line_range: self.line_range,
            context_before: window.before,
            changed_content: self.changed_lines.clone(),
            context_after: window.after,
        }
    }
}
