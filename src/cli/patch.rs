//! Patch and apply-diff command implementations.

use crate::cli::args::{ApplyDiffArgs, PatchArgs};
use crate::cli::output::{DryRunResponse, Output, PatchResponse};
use crate::diff::apply_unified_diff;
use crate::error::{PatchError, Result};
use crate::patch::apply_patch;
use crate::preview::PatchResult;
use std::io::{self, Read};

/// Read content from args (--content/--diff, --file, or stdin).
fn read_input_content(
    inline: &Option<String>,
    file: &Option<std::path::PathBuf>,
) -> Result<String> {
    if let Some(content) = inline {
        // Unescape newlines
        Ok(content.replace("\\n", "\n"))
    } else if let Some(path) = file {
        Ok(std::fs::read_to_string(path)?)
    } else if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Err(PatchError::NoContentProvided)
    }
}

/// Persist or preview the result, then print the response envelope.
fn finish(
    path: &std::path::Path,
    action: &str,
    result: PatchResult,
    dry_run: bool,
    output: &Output,
) -> Result<()> {
    let preview = result.preview();

    if dry_run {
        let response = DryRunResponse {
            action: action.to_string(),
            path: path.to_string_lossy().to_string(),
            content: result.content,
            change_preview: preview,
        };
        return output.print(&response);
    }

    std::fs::write(path, &result.content)?;

    let response = PatchResponse {
        path: path.to_string_lossy().to_string(),
        change_preview: preview,
    };
    output.print(&response)
}

// === patch ===

pub fn run_patch(args: &PatchArgs, output: &Output) -> Result<()> {
    let document = std::fs::read_to_string(&args.path)?;
    let new_content = read_input_content(&args.content, &args.file)?;

    let anchor = args.anchor_type.to_anchor(&args.anchor);
    let result = apply_patch(&document, &anchor, args.position, &new_content)?;

    finish(&args.path, "patch", result, args.dry_run, output)
}

// === apply-diff ===

pub fn run_apply_diff(args: &ApplyDiffArgs, output: &Output) -> Result<()> {
    let document = std::fs::read_to_string(&args.path)?;
    let diff_text = read_input_content(&args.diff, &args.file)?;

    let result = apply_unified_diff(&document, &diff_text)?;

    finish(&args.path, "apply-diff", result, args.dry_run, output)
}

// Check if stdin is a terminal (for reading from pipe)
mod atty {
    pub enum Stream {
        Stdin,
    }

    pub fn isnt(stream: Stream) -> bool {
        match stream {
            Stream::Stdin => {
                #[cfg(unix)]
                {
                    use std::os::unix::io::AsRawFd;
                    unsafe { libc::isatty(std::io::stdin().as_raw_fd()) == 0 }
                }
                #[cfg(windows)]
                {
                    // Simplified check for Windows
                    false
                }
                #[cfg(not(any(unix, windows)))]
                {
                    false
                }
            }
        }
    }
}
