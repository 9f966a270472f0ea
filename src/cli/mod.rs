//! CLI layer: argument parsing, output formatting, and command dispatch.

pub mod args;
pub mod output;
pub mod patch;
