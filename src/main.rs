//! Vaultpatch CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use vaultpatch::cli::args::{Cli, Commands};
use vaultpatch::cli::output::Output;
use vaultpatch::cli::patch;
use vaultpatch::error::{PatchError, exit_code};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), PatchError> {
    let output = Output::new(cli.output_format());

    match &cli.command {
        Commands::Patch(args) => patch::run_patch(args, &output),
        Commands::ApplyDiff(args) => patch::run_apply_diff(args, &output),
    }
}
