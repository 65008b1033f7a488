//! The blueprint: the predetermined tree of files kindling writes into a
//! freshly generated project, plus the pre-commit hook script.
//!
//! A blueprint is pure data. Rendering substitutes `{{VARIABLE}}`
//! placeholders from a [`RenderContext`] and yields write-ready
//! [`ProjectFiles`]; no I/O happens here.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::PathBuf;

use super::common::{FileMode, RelativePath};
use crate::domain::error::DomainError;

// ── Render context ────────────────────────────────────────────────────────────

/// Variable substitution context for blueprint content.
///
/// `new` derives the standard casings of the project name; callers layer
/// extra variables on top (`YEAR`, author, etc.).
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl AsRef<str>) -> Self {
        let name = project_name.as_ref();
        let mut variables = BTreeMap::new();
        variables.insert("PROJECT_NAME".into(), name.to_string());
        variables.insert("PROJECT_NAME_SNAKE".into(), to_snake(name));
        variables.insert("PROJECT_NAME_KEBAB".into(), to_kebab(name));
        variables.insert("PROJECT_NAME_PASCAL".into(), to_pascal(name));
        Self { variables }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` occurrence. Unknown placeholders are left
    /// untouched so templates degrade visibly rather than silently.
    pub fn render(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (key, value) in &self.variables {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }
}

fn words(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}

fn to_snake(name: &str) -> String {
    words(name)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn to_kebab(name: &str) -> String {
    words(name)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn to_pascal(name: &str) -> String {
    words(name)
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect()
}

// ── Blueprint ─────────────────────────────────────────────────────────────────

/// Content of one blueprint file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StencilContent {
    /// Written verbatim.
    Literal(String),
    /// Passed through [`RenderContext::render`] first.
    Parameterized(String),
}

impl StencilContent {
    fn realize(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Parameterized(s) => ctx.render(s),
        }
    }
}

/// One file the blueprint writes into the project.
#[derive(Debug, Clone)]
pub struct FileStencil {
    pub path: RelativePath,
    pub content: StencilContent,
    pub mode: FileMode,
}

impl FileStencil {
    pub fn literal(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: StencilContent::Literal(content.into()),
            mode: FileMode::Regular,
        }
    }

    pub fn parameterized(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: StencilContent::Parameterized(content.into()),
            mode: FileMode::Regular,
        }
    }
}

/// The predetermined file tree plus the hook script body.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub name: String,
    pub stencils: Vec<FileStencil>,
    /// Pre-commit hook body; rendered and installed under `.git/hooks/`.
    pub hook_script: Option<StencilContent>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stencils: Vec::new(),
            hook_script: None,
        }
    }

    pub fn with_stencil(mut self, stencil: FileStencil) -> Self {
        self.stencils.push(stencil);
        self
    }

    pub fn with_hook_script(mut self, content: StencilContent) -> Self {
        self.hook_script = Some(content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.stencils.is_empty() {
            return Err(DomainError::EmptyBlueprint {
                blueprint: self.name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for stencil in &self.stencils {
            if !seen.insert(stencil.path.as_str().to_string()) {
                return Err(DomainError::DuplicatePath {
                    path: stencil.path.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Render every stencil into write-ready files.
    pub fn render(&self, ctx: &RenderContext) -> Result<ProjectFiles, DomainError> {
        self.validate()?;
        let files = self
            .stencils
            .iter()
            .map(|stencil| RenderedFile {
                path: stencil.path.as_path().to_path_buf(),
                content: stencil.content.realize(ctx),
                mode: stencil.mode,
            })
            .collect();
        Ok(ProjectFiles { files })
    }

    /// Render the hook script body, if the blueprint carries one.
    pub fn render_hook(&self, ctx: &RenderContext) -> Option<RenderedFile> {
        self.hook_script.as_ref().map(|content| RenderedFile {
            path: PathBuf::from(".git/hooks/pre-commit"),
            content: content.realize(ctx),
            mode: FileMode::Executable,
        })
    }
}

// ── Rendered output ───────────────────────────────────────────────────────────

/// A file ready to be written, path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
    pub mode: FileMode,
}

/// The rendered blueprint: what `kindling new` writes after the generator
/// and installer have run.
#[derive(Debug, Clone, Default)]
pub struct ProjectFiles {
    pub files: Vec<RenderedFile>,
}

impl ProjectFiles {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── render context ────────────────────────────────────────────────────

    #[test]
    fn context_derives_name_casings() {
        let ctx = RenderContext::new("my awesome project");
        assert_eq!(ctx.get("PROJECT_NAME"), Some("my awesome project"));
        assert_eq!(ctx.get("PROJECT_NAME_SNAKE"), Some("my_awesome_project"));
        assert_eq!(ctx.get("PROJECT_NAME_KEBAB"), Some("my-awesome-project"));
        assert_eq!(ctx.get("PROJECT_NAME_PASCAL"), Some("MyAwesomeProject"));
    }

    #[test]
    fn context_custom_variables() {
        let ctx = RenderContext::new("test").with_variable("AUTHOR", "Alice");
        assert_eq!(ctx.get("AUTHOR"), Some("Alice"));
    }

    #[test]
    fn render_substitutes_known_placeholders() {
        let ctx = RenderContext::new("my-site").with_variable("YEAR", "2026");
        let out = ctx.render("{{PROJECT_NAME}} (c) {{YEAR}} {{UNKNOWN}}");
        assert_eq!(out, "my-site (c) 2026 {{UNKNOWN}}");
    }

    // ── blueprint ─────────────────────────────────────────────────────────

    fn sample_blueprint() -> Blueprint {
        Blueprint::new("starter")
            .with_stencil(FileStencil::parameterized(
                "kindling.config.json",
                "{\"name\": \"{{PROJECT_NAME_KEBAB}}\"}",
            ))
            .with_stencil(FileStencil::literal(".editorconfig", "root = true\n"))
            .with_hook_script(StencilContent::Literal("#!/bin/sh\nkindling check --staged\n".into()))
    }

    #[test]
    fn render_produces_one_file_per_stencil() {
        let files = sample_blueprint().render(&RenderContext::new("My App")).unwrap();
        assert_eq!(files.len(), 2);
        let config = &files.files[0];
        assert_eq!(config.path, PathBuf::from("kindling.config.json"));
        assert_eq!(config.content, "{\"name\": \"my-app\"}");
    }

    #[test]
    fn render_hook_is_executable_under_git_hooks() {
        let hook = sample_blueprint()
            .render_hook(&RenderContext::new("my-app"))
            .unwrap();
        assert_eq!(hook.path, PathBuf::from(".git/hooks/pre-commit"));
        assert!(hook.mode.is_executable());
        assert!(hook.content.starts_with("#!/bin/sh"));
    }

    #[test]
    fn empty_blueprint_fails_validation() {
        let bp = Blueprint::new("empty");
        assert!(matches!(
            bp.validate(),
            Err(DomainError::EmptyBlueprint { .. })
        ));
    }

    #[test]
    fn duplicate_paths_fail_validation() {
        let bp = Blueprint::new("dup")
            .with_stencil(FileStencil::literal("a.txt", "x"))
            .with_stencil(FileStencil::literal("a.txt", "y"));
        assert!(matches!(
            bp.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn blueprint_without_hook_renders_no_hook() {
        let bp = Blueprint::new("plain").with_stencil(FileStencil::literal("a.txt", "x"));
        assert!(bp.render_hook(&RenderContext::new("p")).is_none());
    }
}
