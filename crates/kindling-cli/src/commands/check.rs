//! Implementation of the `kindling check` command.
//!
//! Resolves the path list (explicit paths, walked directories, or the git
//! staging area), applies the naming rules from `kindling-core`, and renders
//! the report. The installed pre-commit hook runs `kindling check --staged`.

use std::env;
use std::path::PathBuf;

use tracing::{debug, instrument};

use kindling_adapters::{SystemProcessRunner, collect_files};
use kindling_core::{application::NamingCheckService, error::KindlingError};

use crate::{
    cli::{CheckArgs, CheckFormat, global::GlobalArgs},
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `kindling check` command.
#[instrument(skip_all)]
pub fn execute(args: CheckArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let report = if args.staged {
        let repo_root = env::current_dir()?;
        let service = NamingCheckService::new(Box::new(SystemProcessRunner::new()));
        service.check_staged(&repo_root).map_err(CliError::Core)?
    } else {
        let paths = expand_paths(&args.paths)?;
        debug!(count = paths.len(), "Paths resolved");
        NamingCheckService::check(&paths)
    };

    match args.format {
        CheckFormat::Json => {
            // Machine-readable output always goes to stdout, quiet or not.
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                CliError::Core(KindlingError::Internal {
                    message: format!("failed to serialize report: {e}"),
                })
            })?;
            println!("{json}");
        }
        CheckFormat::Text => {
            for violation in &report.violations {
                output.error(&violation.to_string())?;
            }
            if report.is_clean() {
                output.success(&format!(
                    "{} path(s) checked, no naming issues",
                    report.checked
                ))?;
            }
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::NamingViolations {
            count: report.violations.len(),
        })
    }
}

/// Expand the user-supplied paths: files stay as-is, directories are walked.
/// No paths means the current directory.
fn expand_paths(paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let mut out = Vec::new();
    for root in roots {
        let metadata = std::fs::metadata(&root)
            .with_cli_context(|| format!("cannot access {}", root.display()))?;
        if metadata.is_dir() {
            let files = collect_files(&root)
                .with_cli_context(|| format!("cannot walk {}", root.display()))?;
            out.extend(files.into_iter().map(|rel| root.join(rel)));
        } else {
            out.push(root);
        }
    }
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
