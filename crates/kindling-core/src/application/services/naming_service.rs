//! Naming check service.
//!
//! Bridges the pure naming rules in `domain::naming` to the outside world:
//! resolving the staged file list through git is the only I/O the `check`
//! use case needs, and it goes through the [`ProcessRunner`] port.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::{NamingReport, naming},
    error::KindlingResult,
};

/// Arguments to `git` that list files about to be committed.
/// ACMR: added, copied, modified, renamed - deletions have no name to check.
const STAGED_ARGS: &[&str] = &["diff", "--cached", "--name-only", "--diff-filter=ACMR"];

pub struct NamingCheckService {
    processes: Box<dyn ProcessRunner>,
}

impl NamingCheckService {
    pub fn new(processes: Box<dyn ProcessRunner>) -> Self {
        Self { processes }
    }

    /// Check an explicit list of paths.
    pub fn check(paths: &[PathBuf]) -> NamingReport {
        naming::check_paths(paths)
    }

    /// Check everything currently staged in the repository at `repo_root`.
    #[instrument(skip(self))]
    pub fn check_staged(&self, repo_root: &Path) -> KindlingResult<NamingReport> {
        let files = self.staged_files(repo_root)?;
        debug!(count = files.len(), "Staged files resolved");
        Ok(naming::check_paths(&files))
    }

    /// Ask git for the staged file list.
    pub fn staged_files(&self, repo_root: &Path) -> KindlingResult<Vec<PathBuf>> {
        let args: Vec<String> = STAGED_ARGS.iter().map(|s| s.to_string()).collect();
        let capture = self
            .processes
            .run("git", &args, repo_root)
            .map_err(|e| ApplicationError::StagedListUnavailable {
                reason: e.to_string(),
            })?;

        if !capture.success() {
            let reason = capture
                .stderr
                .lines()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("git exited with an error")
                .trim()
                .to_string();
            return Err(ApplicationError::StagedListUnavailable { reason }.into());
        }

        Ok(capture
            .stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
