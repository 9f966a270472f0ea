//! CLI argument definitions using clap.

use crate::anchor::Anchor;
use crate::patch::Position;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vaultpatch")]
#[command(author, version, about = "Anchor-addressed patching for Obsidian-style notes", long_about = None)]
pub struct Cli {
    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with = "json")]
    pub yaml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply an anchor-addressed patch to a note
    Patch(PatchArgs),

    /// Apply a unified diff to a note
    #[command(name = "apply-diff")]
    ApplyDiff(ApplyDiffArgs),
}

/// Anchor strategy selector for the `patch` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnchorType {
    Heading,
    Block,
    Frontmatter,
    TextMatch,
    Line,
}

impl AnchorType {
    /// Pair the strategy with its anchor value.
    pub fn to_anchor(self, value: &str) -> Anchor {
        match self {
            AnchorType::Heading => Anchor::Heading(value.to_string()),
            AnchorType::Block => Anchor::Block(value.to_string()),
            AnchorType::Frontmatter => Anchor::Frontmatter(value.to_string()),
            AnchorType::TextMatch => Anchor::TextMatch(value.to_string()),
            AnchorType::Line => Anchor::Line(value.to_string()),
        }
    }
}

#[derive(Parser, Debug)]
pub struct PatchArgs {
    /// Path to the note file
    pub path: PathBuf,

    /// Anchor strategy
    #[arg(long = "type", value_enum)]
    pub anchor_type: AnchorType,

    /// Anchor value (heading text, block ID, frontmatter key, text pattern,
    /// or line number)
    #[arg(long)]
    pub anchor: String,

    /// Where to place the content relative to the anchor
    #[arg(long, value_enum)]
    pub position: Position,

    /// New content (\\n is unescaped to a newline)
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read new content from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the would-be result without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct ApplyDiffArgs {
    /// Path to the note file
    pub path: PathBuf,

    /// Unified diff text (\\n is unescaped to a newline)
    #[arg(long, conflicts_with = "file")]
    pub diff: Option<String>,

    /// Read the diff from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the would-be result without writing
    #[arg(long)]
    pub dry_run: bool,
}
