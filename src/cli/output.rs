//! Output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::preview::ChangePreview;
use serde::Serialize;

/// Helper for formatting and printing output.
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a serializable value in the configured format.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        };
        println!("{}", output);
        Ok(())
    }

}

/// Successful patch/diff response surfaced to the caller.
#[derive(Debug, Serialize)]
pub struct PatchResponse {
    pub path: String,
    pub change_preview: ChangePreview,
}

/// Dry-run response showing what would change.
#[derive(Debug, Serialize)]
pub struct DryRunResponse {
    pub action: String,
    pub path: String,
    pub content: String,
    pub change_preview: ChangePreview,
}
