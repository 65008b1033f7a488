//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `KINDLING_*` environment variables
//! 3. Config file (`--config`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// The external generator invocation.
    pub generator: GeneratorConfig,
    /// Packages installed into every new project.
    pub packages: Vec<String>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub package_manager: String,
    pub install_hook: bool,
}

/// The generator program and its arguments.  `{{PROJECT_NAME}}` placeholders
/// are substituted; when none are present the project name is appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                package_manager: "npm".into(),
                install_hook: true,
            },
            generator: GeneratorConfig {
                program: "npx".into(),
                args: vec![
                    "--yes".into(),
                    "create-next-app@latest".into(),
                    "{{PROJECT_NAME}}".into(),
                    "--typescript".into(),
                    "--eslint".into(),
                    "--app".into(),
                    "--src-dir".into(),
                    "--no-tailwind".into(),
                    "--use-npm".into(),
                ],
            },
            packages: vec!["zod".into(), "zustand".into(), "clsx".into()],
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (required to
    /// exist); with `None` the default location is consulted but optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone()).required(true)),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix("KINDLING")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("packages"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kindling.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kindling", "kindling")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kindling.toml"))
    }
}
