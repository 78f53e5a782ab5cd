//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the distilled
//! [`Settings`] record.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`EXFORGE_GIT__ORG=acme`, double underscore
//!    separates sections)
//! 3. Config file (`--config FILE`, or the default location)
//! 4. Built-in defaults

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use exforge_core::Settings;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Repository URL convention for the multi-repository variant.
    pub git: GitConfig,
    /// Toolchain settings baked into generated files.
    pub elixir: ElixirConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Host part of conventional URLs, e.g. `git@github.com`.
    pub host: String,
    /// Organisation/owner part.  Required whenever a multi-repository
    /// URL is left to the convention; there is no sensible default.
    pub org: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElixirConfig {
    /// Full version written (shortened) into generated `mix.exs` files.
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            host: "git@github.com".into(),
            org: None,
        }
    }
}

impl Default for ElixirConfig {
    fn default() -> Self {
        Self {
            version: "1.4.0".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then
    /// `EXFORGE_*` environment variables.
    ///
    /// An explicitly passed `--config` file must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let config = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix("EXFORGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.exforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "exforge", "exforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".exforge.toml"))
    }

    /// Distill the core-facing settings.  `org` falls back to the empty
    /// string; callers that need a conventional URL check it first.
    pub fn settings(&self) -> Settings {
        Settings {
            git_host: self.git.host.clone(),
            git_org: self.git.org.clone().unwrap_or_default(),
            elixir_version: self.elixir.version.clone(),
        }
    }
}
