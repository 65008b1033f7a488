//! Process runner adapters.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use tracing::debug;

use kindling_core::{
    application::{ApplicationError, ports::{CommandCapture, ProcessRunner}},
    error::KindlingResult,
};

/// Production runner: spawns the program and blocks until it exits,
/// capturing both output streams.
#[derive(Debug, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> KindlingResult<CommandCapture> {
        debug!(program, ?args, cwd = %cwd.display(), "Running external command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|err| ApplicationError::CommandLaunch {
                program: program.to_string(),
                reason: err.to_string(),
            })?;

        Ok(CommandCapture {
            program: program.to_string(),
            args: args.to_vec(),
            // A missing code means the process died to a signal; treat as failure.
            status: output.status.code().unwrap_or(1),
            stdout: normalize_line_endings(&String::from_utf8_lossy(&output.stdout)),
            stderr: normalize_line_endings(&String::from_utf8_lossy(&output.stderr)),
        })
    }
}

fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n")
}

// ── Test double ───────────────────────────────────────────────────────────────

/// A call observed by [`ScriptedProcessRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Test runner: replays queued outcomes and records every invocation.
///
/// When the outcome queue is exhausted, further calls succeed with empty
/// output - tests only queue the interesting results.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProcessRunner {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    outcomes: Vec<ScriptedOutcome>,
    calls: Vec<RecordedCall>,
}

#[derive(Debug)]
enum ScriptedOutcome {
    Exit { status: i32, stdout: String, stderr: String },
    LaunchError { reason: String },
}

impl ScriptedProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful exit with the given stdout.
    pub fn push_success(&self, stdout: impl Into<String>) {
        self.push(ScriptedOutcome::Exit {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        });
    }

    /// Queue a non-zero exit with the given stderr.
    pub fn push_failure(&self, status: i32, stderr: impl Into<String>) {
        self.push(ScriptedOutcome::Exit {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        });
    }

    /// Queue a spawn failure (program not found, etc.).
    pub fn push_launch_error(&self, reason: impl Into<String>) {
        self.push(ScriptedOutcome::LaunchError {
            reason: reason.into(),
        });
    }

    /// Every invocation seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn push(&self, outcome: ScriptedOutcome) {
        self.inner.lock().unwrap().outcomes.push(outcome);
    }
}

impl ProcessRunner for ScriptedProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> KindlingResult<CommandCapture> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });

        let outcome = if inner.outcomes.is_empty() {
            ScriptedOutcome::Exit {
                status: 0,
                stdout: String::new(),
                stderr: String::new(),
            }
        } else {
            inner.outcomes.remove(0)
        };

        match outcome {
            ScriptedOutcome::Exit { status, stdout, stderr } => Ok(CommandCapture {
                program: program.to_string(),
                args: args.to_vec(),
                status,
                stdout,
                stderr,
            }),
            ScriptedOutcome::LaunchError { reason } => Err(ApplicationError::CommandLaunch {
                program: program.to_string(),
                reason,
            }
            .into()),
        }
    }
}
