//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kindling",
    bin_name = "kindling",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f525} Bootstrap a web project with batteries included",
    long_about = "Kindling drives your project generator, installs the team \
                  package set, writes starter files, and wires a pre-commit \
                  hook that enforces file-naming conventions.",
    after_help = "EXAMPLES:\n\
        \x20 kindling new my-site\n\
        \x20 kindling new my-site --package-manager pnpm --yes\n\
        \x20 kindling check src\n\
        \x20 kindling check --staged\n\
        \x20 kindling completions bash > /usr/share/bash-completion/completions/kindling",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 kindling new my-site\n\
            \x20 kindling new               # prompts for the name\n\
            \x20 kindling new my-site --skip-install --no-hooks\n\
            \x20 kindling new my-site --dry-run"
    )]
    New(NewArgs),

    /// Check file names against the naming conventions.
    #[command(
        about = "Check file-naming conventions",
        after_help = "EXAMPLES:\n\
            \x20 kindling check                # current directory\n\
            \x20 kindling check src tests\n\
            \x20 kindling check --staged       # what the pre-commit hook runs\n\
            \x20 kindling check src --format json"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kindling completions bash > ~/.local/share/bash-completion/completions/kindling\n\
            \x20 kindling completions zsh  > ~/.zfunc/_kindling\n\
            \x20 kindling completions fish > ~/.config/fish/completions/kindling.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `kindling new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Prompted for interactively when omitted.
    #[arg(value_name = "NAME", help = "Project name (prompted when omitted)")]
    pub name: Option<String>,

    /// Package manager used for the install step.
    #[arg(
        short = 'p',
        long = "package-manager",
        value_name = "MANAGER",
        value_enum,
        help = "Package manager for installing the package set"
    )]
    pub package_manager: Option<PackageManagerArg>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Proceed even if the target directory already exists.
    #[arg(long = "force", help = "Proceed when the directory already exists")]
    pub force: bool,

    /// Preview the step plan without running anything.
    #[arg(long = "dry-run", help = "Show what would run without running it")]
    pub dry_run: bool,

    /// Skip the package-install step.
    #[arg(long = "skip-install", help = "Do not install the package set")]
    pub skip_install: bool,

    /// Skip git hook configuration.
    #[arg(long = "no-hooks", help = "Do not configure git hooks")]
    pub no_hooks: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `kindling check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files or directories to check.  Directories are walked
    /// (hidden entries and node_modules skipped).  Defaults to `.`.
    #[arg(value_name = "PATHS", help = "Files or directories to check")]
    pub paths: Vec<PathBuf>,

    /// Check the files staged in git instead of explicit paths.
    #[arg(
        long = "staged",
        conflicts_with = "paths",
        help = "Check files staged for commit (used by the pre-commit hook)"
    )]
    pub staged: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Report format"
    )]
    pub format: CheckFormat,
}

/// Report format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckFormat {
    /// One human-readable line per violation.
    Text,
    /// Full report as JSON.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kindling completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManagerArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl std::fmt::Display for PackageManagerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Npm => write!(f, "npm"),
            Self::Pnpm => write!(f, "pnpm"),
            Self::Yarn => write!(f, "yarn"),
            Self::Bun => write!(f, "bun"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["kindling", "new", "my-site", "--yes"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name.as_deref(), Some("my-site"));
        assert!(args.yes);
        assert!(!args.dry_run);
    }

    #[test]
    fn new_name_is_optional() {
        let cli = Cli::parse_from(["kindling", "new"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.name.is_none());
    }

    #[test]
    fn package_manager_parses_lowercase() {
        let cli = Cli::parse_from(["kindling", "new", "x", "-p", "pnpm"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.package_manager, Some(PackageManagerArg::Pnpm));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn check_defaults_to_text_format() {
        let cli = Cli::parse_from(["kindling", "check", "src"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.format, CheckFormat::Text);
        assert_eq!(args.paths.len(), 1);
        assert!(!args.staged);
    }

    #[test]
    fn staged_conflicts_with_paths() {
        let result = Cli::try_parse_from(["kindling", "check", "src", "--staged"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["kindling", "--quiet", "--verbose", "check"]);
        assert!(result.is_err());
    }
}
