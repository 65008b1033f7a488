//! Core domain layer for Kindling.
//!
//! This module contains pure business logic with ZERO I/O.
//! All filesystem and process concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: the whole tool is a linear, synchronous sequence
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable entities**: domain objects are Clone
//! - **Rich domain model**: behavior lives in entities, not services

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;

// Re-exports for convenience
pub use entities::{
    blueprint::{
        Blueprint, FileStencil, ProjectFiles, RenderContext, RenderedFile, StencilContent,
    },
    common::{FileMode, RelativePath},
    plan::{
        CommandSpec, GeneratorSpec, PackageManager, ProjectName, ProjectSpec, SetupPlan, SetupStep,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use naming::{
    NamingReport, NamingStyle, NamingViolation, PathClass, SegmentKind, check_path, check_paths,
};

#[cfg(test)]
mod tests {
    use super::*;

    // Cross-entity behavior: how a plan's rendered output threads the
    // project name through every layer. Entity-local cases live next to
    // their entities.

    fn starter() -> Blueprint {
        Blueprint::new("starter")
            .with_stencil(FileStencil::parameterized(
                "kindling.config.json",
                "{\"name\": \"{{PROJECT_NAME_KEBAB}}\"}",
            ))
            .with_stencil(FileStencil::parameterized(
                "src/lib/auth.ts",
                "// {{PROJECT_NAME_PASCAL}} auth helpers\n",
            ))
            .with_hook_script(StencilContent::Literal(
                "#!/bin/sh\nkindling check --staged\n".into(),
            ))
    }

    #[test]
    fn plan_renders_name_variants_into_files() {
        let mut spec = ProjectSpec::new(ProjectName::parse("My Web App").unwrap());
        spec.packages = vec!["zod".into()];

        let plan = SetupPlan::for_project(&spec, &starter()).unwrap();

        let files = plan
            .steps
            .iter()
            .find_map(|s| match s {
                SetupStep::WriteFiles(files) => Some(files),
                _ => None,
            })
            .expect("plan must write files");

        let config = files
            .iter()
            .find(|f| f.path.ends_with("kindling.config.json"))
            .unwrap();
        assert!(config.content.contains("\"my-web-app\""));

        let auth = files.iter().find(|f| f.path.ends_with("auth.ts")).unwrap();
        assert!(auth.content.contains("MyWebApp"));
    }

    #[test]
    fn plan_generator_receives_raw_name() {
        let spec = ProjectSpec::new(ProjectName::parse("my-app").unwrap());
        let plan = SetupPlan::for_project(&spec, &starter()).unwrap();

        let SetupStep::Generate(cmd) = &plan.steps[0] else {
            panic!("first step must be the generator");
        };
        assert!(cmd.args.contains(&"my-app".to_string()));
    }

    #[test]
    fn rendered_hook_invokes_the_checker() {
        let spec = ProjectSpec::new(ProjectName::parse("my-app").unwrap());
        let plan = SetupPlan::for_project(&spec, &starter()).unwrap();

        let hook = plan
            .steps
            .iter()
            .find_map(|s| match s {
                SetupStep::InstallHook(hook) => Some(hook),
                _ => None,
            })
            .expect("plan must install the hook");
        assert!(hook.content.contains("kindling check --staged"));
        assert!(hook.mode.is_executable());
    }

    #[test]
    fn generated_blueprint_paths_satisfy_naming_rules() {
        // The tool must not scaffold files its own checker rejects.
        let files = starter().render(&RenderContext::new("my-app")).unwrap();
        let report = check_paths(files.iter().map(|f| f.path.as_path()));
        assert!(report.is_clean(), "violations: {:?}", report.violations);
    }
}
