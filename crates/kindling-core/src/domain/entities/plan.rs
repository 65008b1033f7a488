//! The setup plan: the ordered, linear step sequence `kindling new` runs.
//!
//! Planning is pure. Building a [`SetupPlan`] from a [`ProjectSpec`] and a
//! [`Blueprint`](super::blueprint::Blueprint) decides exactly which external
//! commands will run and which files will be written; execution lives in the
//! application layer behind ports.

use std::fmt;
use std::str::FromStr;

use super::blueprint::{Blueprint, ProjectFiles, RenderContext, RenderedFile};
use crate::domain::error::DomainError;

// ── Project name ──────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Invariant: non-empty, no path separators, no leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: "name cannot be empty".into(),
            });
        }
        if name.starts_with('.') {
            return Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: "name cannot start with '.'".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: "name cannot contain path separators".into(),
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Package manager ───────────────────────────────────────────────────────────

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// The add-dependencies invocation for this manager.
    pub fn install_command(&self, packages: &[String]) -> CommandSpec {
        let verb = match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        };
        let mut args = vec![verb.to_string()];
        args.extend(packages.iter().cloned());
        CommandSpec {
            program: self.as_str().to_string(),
            args,
        }
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::UnknownPackageManager {
                value: other.into(),
            }),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Command spec ──────────────────────────────────────────────────────────────

/// An external command the plan will run, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Project spec ──────────────────────────────────────────────────────────────

/// The generator invocation template.
///
/// Arguments may contain `{{PROJECT_NAME}}` placeholders; if none do, the
/// project name is appended so the generator always learns where to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl GeneratorSpec {
    pub fn resolve(&self, ctx: &RenderContext, name: &ProjectName) -> Result<CommandSpec, DomainError> {
        if self.program.trim().is_empty() {
            return Err(DomainError::EmptyGenerator);
        }
        let had_placeholder = self.args.iter().any(|a| a.contains("{{PROJECT_NAME"));
        let mut args: Vec<String> = self.args.iter().map(|a| ctx.render(a)).collect();
        if !had_placeholder {
            args.push(name.as_str().to_string());
        }
        Ok(CommandSpec {
            program: self.program.clone(),
            args,
        })
    }
}

/// Everything `kindling new` needs to know, before planning.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    pub name: ProjectName,
    pub generator: GeneratorSpec,
    pub packages: Vec<String>,
    pub package_manager: PackageManager,
    /// `--skip-install` clears this.
    pub install_packages: bool,
    /// `--no-hooks` clears this.
    pub install_hook: bool,
    /// Extra render variables layered over the derived name casings
    /// (`CREATED_DATE`, author, ...).
    pub variables: Vec<(String, String)>,
}

impl ProjectSpec {
    pub fn new(name: ProjectName) -> Self {
        Self {
            name,
            generator: GeneratorSpec {
                program: "npx".into(),
                args: vec!["--yes".into(), "create-next-app@latest".into(), "{{PROJECT_NAME}}".into()],
            },
            packages: Vec::new(),
            package_manager: PackageManager::default(),
            install_packages: true,
            install_hook: true,
            variables: Vec::new(),
        }
    }
}

// ── Setup plan ────────────────────────────────────────────────────────────────

/// One step of the linear setup sequence.
#[derive(Debug, Clone)]
pub enum SetupStep {
    /// Run the external project generator in the base directory. Fatal.
    Generate(CommandSpec),
    /// Install the package set inside the project directory. Fatal.
    Install(CommandSpec),
    /// Write the rendered blueprint into the project directory. Fatal.
    WriteFiles(ProjectFiles),
    /// Install the pre-commit hook. Best-effort: warns on failure.
    InstallHook(RenderedFile),
}

impl SetupStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Generate(_) => "run project generator",
            Self::Install(_) => "install packages",
            Self::WriteFiles(_) => "write starter files",
            Self::InstallHook(_) => "configure git hooks",
        }
    }

    /// Best-effort steps warn on failure instead of aborting the run.
    pub fn is_best_effort(&self) -> bool {
        matches!(self, Self::InstallHook(_))
    }
}

/// The full ordered plan for one `kindling new` run.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    pub project_name: ProjectName,
    pub steps: Vec<SetupStep>,
}

impl SetupPlan {
    /// Build the plan: generator, then install, then blueprint files, then
    /// the hook. Skipped steps are simply absent.
    pub fn for_project(spec: &ProjectSpec, blueprint: &Blueprint) -> Result<Self, DomainError> {
        let mut ctx = RenderContext::new(spec.name.as_str());
        for (key, value) in &spec.variables {
            ctx = ctx.with_variable(key.as_str(), value.as_str());
        }
        let mut steps = Vec::new();

        steps.push(SetupStep::Generate(spec.generator.resolve(&ctx, &spec.name)?));

        if spec.install_packages && !spec.packages.is_empty() {
            steps.push(SetupStep::Install(
                spec.package_manager.install_command(&spec.packages),
            ));
        }

        steps.push(SetupStep::WriteFiles(blueprint.render(&ctx)?));

        if spec.install_hook {
            if let Some(hook) = blueprint.render_hook(&ctx) {
                steps.push(SetupStep::InstallHook(hook));
            }
        }

        Ok(Self {
            project_name: spec.name.clone(),
            steps,
        })
    }
}
