//! Vaultpatch - anchor-addressed patching for Obsidian-style Markdown notes.
//!
//! # Overview
//!
//! Vaultpatch provides a structured editing surface over plain-text notes
//! with YAML frontmatter and inline markup conventions:
//! - Anchor-addressed patch operations (heading, block ID, frontmatter key,
//!   exact text match, line number) with insert-before / insert-after /
//!   replace positions
//! - A unified-diff parser and all-or-nothing applier
//! - Change previews with surrounding context for every mutation
//!
//! All core operations are pure functions over in-memory strings: the caller
//! supplies the full document text and persists the returned mutated text.
//! Line numbers in results and error messages are 1-based.
//!
//! # Example
//!
//! ```
//! use vaultpatch::{Anchor, Position, apply_patch};
//!
//! let doc = "# Notes\n\n## Tasks\n- [ ] existing task\n";
//! let result = apply_patch(
//!     doc,
//!     &Anchor::Heading("Tasks".to_string()),
//!     Position::After,
//!     "- [ ] new task",
//! ).unwrap();
//!
//! assert!(result.content.contains("## Tasks\n- [ ] new task\n- [ ] existing task"));
//! println!("{:?}", result.preview());
//! ```

pub mod anchor;
pub mod buffer;
pub mod cli;
pub mod diff;
pub mod error;
pub mod frontmatter;
pub mod patch;
pub mod preview;

// Re-export main types at crate root
pub use anchor::{Anchor, MatchSpan};
pub use diff::{Hunk, HunkLine, apply_unified_diff, parse_unified_diff};
pub use error::{PatchError, Result};
pub use patch::{Position, apply_patch};
pub use preview::{ChangePreview, LineRange, PatchResult};
