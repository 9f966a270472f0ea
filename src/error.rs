//! Error types and exit codes for vaultpatch.

use thiserror::Error;

/// Exit codes surfaced by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const ANCHOR_NOT_FOUND: i32 = 2;
    pub const AMBIGUOUS_MATCH: i32 = 3;
    pub const INVALID_ANCHOR: i32 = 4;
    pub const INVALID_DIFF: i32 = 5;
}

/// Main error type for patch and diff operations.
///
/// The display strings are part of the behavioral contract: callers (and the
/// LLM tool layer above them) match on substrings like "not found",
/// "found N times", "must be an integer", "out of range", "Invalid diff
/// format", and "does not match" to decide how to retry.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Heading not found: {0}")]
    HeadingNotFound(String),

    #[error("Block not found: ^{0}")]
    BlockNotFound(String),

    #[error("Text not found: {0:?}")]
    TextNotFound(String),

    #[error("Frontmatter key not found: {0}")]
    FrontmatterKeyNotFound(String),

    #[error(
        "Text pattern found {count} times in the document. \
         Provide a longer or more specific pattern to disambiguate.\n\n{listing}"
    )]
    AmbiguousTextMatch { count: usize, listing: String },

    #[error("Invalid text pattern: pattern is empty or whitespace-only")]
    EmptyTextPattern,

    #[error("Invalid line number {0:?}: must be an integer")]
    InvalidLineNumber(String),

    #[error("Line {line} out of range (1-{max})")]
    LineOutOfRange { line: i64, max: usize },

    #[error("Invalid diff format: {0}")]
    InvalidDiffFormat(String),

    #[error(
        "Failed to apply patch: hunk at line {old_start} does not match file content \
         (expected {expected:?}, found {found:?})"
    )]
    DiffContextMismatch {
        old_start: usize,
        expected: String,
        found: String,
    },

    #[error("No content provided")]
    NoContentProvided,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl PatchError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchError::HeadingNotFound(_)
            | PatchError::BlockNotFound(_)
            | PatchError::TextNotFound(_)
            | PatchError::FrontmatterKeyNotFound(_) => exit_code::ANCHOR_NOT_FOUND,
            PatchError::AmbiguousTextMatch { .. } => exit_code::AMBIGUOUS_MATCH,
            PatchError::EmptyTextPattern
            | PatchError::InvalidLineNumber(_)
            | PatchError::LineOutOfRange { .. } => exit_code::INVALID_ANCHOR,
            PatchError::InvalidDiffFormat(_) | PatchError::DiffContextMismatch { .. } => {
                exit_code::INVALID_DIFF
            }
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for vaultpatch operations.
pub type Result<T> = std::result::Result<T, PatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = PatchError::HeadingNotFound("Missing".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("Missing"));

        let err = PatchError::BlockNotFound("block1".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("^block1"));
    }

    #[test]
    fn test_line_number_messages() {
        let err = PatchError::InvalidLineNumber("abc".to_string());
        assert!(err.to_string().contains("must be an integer"));

        let err = PatchError::LineOutOfRange { line: 10, max: 3 };
        assert!(err.to_string().contains("out of range (1-3)"));
    }

    #[test]
    fn test_ambiguous_match_message() {
        let err = PatchError::AmbiguousTextMatch {
            count: 2,
            listing: "Lines 2-2:\n...".to_string(),
        };
        assert!(err.to_string().contains("found 2 times"));
        assert!(err.to_string().contains("Lines 2-2"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            PatchError::TextNotFound("x".into()).exit_code(),
            exit_code::ANCHOR_NOT_FOUND
        );
        assert_eq!(
            PatchError::InvalidDiffFormat("missing hunk header".into()).exit_code(),
            exit_code::INVALID_DIFF
        );
    }
}
