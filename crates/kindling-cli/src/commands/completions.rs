//! Shell completion generation via `clap_complete`.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

/// Write the completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut out = io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin_name, &mut out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin_name, &mut out),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin_name, &mut out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, bin_name, &mut out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, bin_name, &mut out),
    }

    Ok(())
}
