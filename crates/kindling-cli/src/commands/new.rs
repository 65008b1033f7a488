//! Implementation of the `kindling new` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectSpec`, build the
//! step plan, and drive the core setup service. No business logic lives here.

use std::env;
use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{debug, info, instrument};

use kindling_adapters::{LocalFilesystem, SystemProcessRunner, starter_blueprint};
use kindling_core::{
    application::SetupService,
    domain::{GeneratorSpec, PackageManager, ProjectName, ProjectSpec, SetupPlan, SetupStep},
};

use crate::{
    cli::{NewArgs, PackageManagerArg, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `kindling new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name (positional argument or interactive prompt)
/// 2. Build a `ProjectSpec` from config + flags, then the `SetupPlan`
/// 3. Refuse an existing directory unless `--force`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Early-exit if `--dry-run`
/// 6. Execute the plan via `SetupService`
/// 7. Print warnings from best-effort steps and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project name
    let raw_name = match &args.name {
        Some(name) => name.clone(),
        None if global.quiet => {
            return Err(CliError::InvalidInput {
                message: "a project name is required with --quiet".into(),
            });
        }
        None => prompt_project_name()?,
    };
    let name = ProjectName::parse(&raw_name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Build spec and plan
    let spec = build_spec(name, &args, &config)?;
    let plan = SetupPlan::for_project(&spec, &starter_blueprint())
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        project = %spec.name,
        package_manager = %spec.package_manager,
        packages = spec.packages.len(),
        steps = plan.steps.len(),
        "Plan resolved"
    );

    // 3. Check for existing directory
    let base_dir = env::current_dir()?;
    let project_path = base_dir.join(spec.name.as_str());
    if project_path.exists() && !args.force {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 4. Show the plan and confirm
    if !global.quiet && !args.yes {
        show_plan(&spec, &plan, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Dry run: describe but do not run.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            spec.name,
            project_path.display(),
        ))?;
        describe_steps(&plan, &output)?;
        return Ok(());
    }

    // 6. Create adapters and run the plan
    let service = SetupService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemProcessRunner::new()),
    );

    output.header(&format!("Creating '{}'...", spec.name))?;
    info!(project = %spec.name, path = %project_path.display(), "Setup started");

    let spinner = (!global.quiet).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Running {} steps...", plan.steps.len()));
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    });

    let result = service.execute(&plan, &base_dir);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result.map_err(CliError::Core)?;

    info!(project = %spec.name, "Setup completed");

    // 7. Warnings from best-effort steps, then success + next steps
    for (step, reason) in report.warnings() {
        output.warning(&format!("{step}: {reason}"))?;
    }

    output.success(&format!("Project '{}' created!", spec.name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", spec.name))?;
        output.print(&format!("  {} run dev", spec.package_manager))?;
    }

    Ok(())
}

// ── Spec construction ─────────────────────────────────────────────────────────

fn build_spec(name: ProjectName, args: &NewArgs, config: &AppConfig) -> CliResult<ProjectSpec> {
    let mut spec = ProjectSpec::new(name);

    spec.generator = GeneratorSpec {
        program: config.generator.program.clone(),
        args: config.generator.args.clone(),
    };
    spec.packages = config.packages.clone();
    spec.package_manager = match args.package_manager {
        Some(pm) => convert_package_manager(pm),
        // A bad value here comes from the config file, not the command line.
        None => config.defaults.package_manager.parse().map_err(
            |e: kindling_core::domain::DomainError| CliError::ConfigError {
                message: format!(
                    "invalid package manager '{}'",
                    config.defaults.package_manager
                ),
                source: Some(Box::new(e)),
            },
        )?,
    };
    spec.install_packages = !args.skip_install;
    spec.install_hook = config.defaults.install_hook && !args.no_hooks;
    spec.variables.push((
        "CREATED_DATE".into(),
        chrono::Local::now().format("%Y-%m-%d").to_string(),
    ));

    Ok(spec)
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_package_manager(pm: PackageManagerArg) -> PackageManager {
    match pm {
        PackageManagerArg::Npm => PackageManager::Npm,
        PackageManagerArg::Pnpm => PackageManager::Pnpm,
        PackageManagerArg::Yarn => PackageManager::Yarn,
        PackageManagerArg::Bun => PackageManager::Bun,
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(
    spec: &ProjectSpec,
    plan: &SetupPlan,
    project_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:         {}", spec.name))?;
    out.print(&format!("  Location:        {}", project_path.display()))?;
    out.print(&format!("  Package manager: {}", spec.package_manager))?;
    if spec.install_packages && !spec.packages.is_empty() {
        out.print(&format!("  Packages:        {}", spec.packages.join(", ")))?;
    }
    out.print("")?;
    out.header("Steps")?;
    describe_steps(plan, out)?;
    out.print("")?;
    Ok(())
}

fn describe_steps(plan: &SetupPlan, out: &OutputManager) -> CliResult<()> {
    for step in &plan.steps {
        match step {
            SetupStep::Generate(cmd) | SetupStep::Install(cmd) => {
                out.print(&format!("  {}: $ {}", step.title(), cmd))?;
            }
            SetupStep::WriteFiles(files) => {
                out.print(&format!("  {} ({} files)", step.title(), files.len()))?;
                for file in files.iter() {
                    out.print(&format!("    {}", file.path.display()))?;
                }
            }
            SetupStep::InstallHook(hook) => {
                out.print(&format!("  {}: {}", step.title(), hook.path.display()))?;
            }
        }
    }
    Ok(())
}

fn prompt_project_name() -> CliResult<String> {
    use std::io::{self, Write};

    print!("Project name: ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read project name".into(),
            source: e,
        })?;

    Ok(input.trim().to_string())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
