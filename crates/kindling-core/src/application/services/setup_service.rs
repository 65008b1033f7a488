//! Setup Service - main application orchestrator.
//!
//! Runs a [`SetupPlan`] step by step against the driven ports:
//! 1. External generator (fatal on failure)
//! 2. Package install (fatal)
//! 3. Blueprint file writes (fatal)
//! 4. Git hook install (best-effort, warns)
//!
//! The service owns no policy about *what* the steps are; that was decided
//! when the plan was built.

use std::path::Path;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProcessRunner},
    },
    domain::{CommandSpec, ProjectFiles, RenderedFile, SetupPlan, SetupStep},
    error::KindlingResult,
};

/// What happened to one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    /// Best-effort step failed; the run continued.
    Warned { reason: String },
}

/// Per-step record for the final summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: &'static str,
    pub status: StepStatus,
}

/// Result of a completed run. Fatal failures never produce a report; they
/// surface as errors instead.
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub run_id: Uuid,
    pub outcomes: Vec<StepOutcome>,
}

impl SetupReport {
    /// Best-effort steps that failed, with their reasons.
    pub fn warnings(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            StepStatus::Warned { reason } => Some((o.step, reason.as_str())),
            StepStatus::Completed => None,
        })
    }
}

/// Main setup service.
///
/// Orchestrates generator, installer, file writes, and hook configuration.
pub struct SetupService {
    filesystem: Box<dyn Filesystem>,
    processes: Box<dyn ProcessRunner>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, processes: Box<dyn ProcessRunner>) -> Self {
        Self {
            filesystem,
            processes,
        }
    }

    /// Execute a plan. `base_dir` is where the generator creates the
    /// project directory (`base_dir/<name>`).
    #[instrument(skip_all, fields(project = %plan.project_name))]
    pub fn execute(&self, plan: &SetupPlan, base_dir: &Path) -> KindlingResult<SetupReport> {
        let run_id = Uuid::new_v4();
        let project_dir = base_dir.join(plan.project_name.as_str());
        info!(%run_id, steps = plan.steps.len(), "Setup started");

        let mut outcomes = Vec::with_capacity(plan.steps.len());
        for step in &plan.steps {
            let status = match step {
                SetupStep::Generate(cmd) => {
                    self.run_checked(cmd, base_dir)?;
                    StepStatus::Completed
                }
                SetupStep::Install(cmd) => {
                    self.run_checked(cmd, &project_dir)?;
                    StepStatus::Completed
                }
                SetupStep::WriteFiles(files) => {
                    self.write_files(files, &project_dir)?;
                    StepStatus::Completed
                }
                SetupStep::InstallHook(hook) => match self.install_hook(hook, &project_dir) {
                    Ok(()) => StepStatus::Completed,
                    Err(e) => {
                        warn!(step = step.title(), error = %e, "Best-effort step failed");
                        StepStatus::Warned {
                            reason: e.to_string(),
                        }
                    }
                },
            };
            info!(step = step.title(), ok = matches!(status, StepStatus::Completed), "Step finished");
            outcomes.push(StepOutcome {
                step: step.title(),
                status,
            });
        }

        info!(%run_id, "Setup completed");
        Ok(SetupReport { run_id, outcomes })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run a command and fail on a non-zero exit.
    fn run_checked(&self, cmd: &CommandSpec, cwd: &Path) -> KindlingResult<()> {
        let capture = self.processes.run(&cmd.program, &cmd.args, cwd)?;
        if !capture.success() {
            return Err(ApplicationError::CommandFailed {
                command: cmd.to_string(),
                status: capture.status,
                stderr: capture.stderr,
            }
            .into());
        }
        Ok(())
    }

    /// Write every rendered file under the project directory.
    fn write_files(&self, files: &ProjectFiles, project_dir: &Path) -> KindlingResult<()> {
        for file in files.iter() {
            let path = project_dir.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            if file.mode.is_executable() {
                self.filesystem.make_executable(&path)?;
            }
        }
        Ok(())
    }

    /// Install the pre-commit hook. Requires the generator to have produced
    /// a git repository; reported as a warning otherwise.
    fn install_hook(&self, hook: &RenderedFile, project_dir: &Path) -> KindlingResult<()> {
        let git_dir = project_dir.join(".git");
        if !self.filesystem.exists(&git_dir) {
            return Err(ApplicationError::FilesystemError {
                path: git_dir,
                reason: "project is not a git repository".into(),
            }
            .into());
        }

        let hook_path = project_dir.join(&hook.path);
        if let Some(parent) = hook_path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&hook_path, &hook.content)?;
        self.filesystem.make_executable(&hook_path)?;
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
