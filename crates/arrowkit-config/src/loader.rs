//! Layered configuration loading.
//!
//! Layers in ascending precedence: built-in defaults, the user
//! `config.toml`, `arrowkit.toml`, `arrowkit.local.toml`, then `ARROWKIT_*`
//! environment variables. Missing files are skipped.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::ArrowkitConfig;

/// Git-tracked project file.
pub const PROJECT_FILE: &str = "arrowkit.toml";
/// Untracked per-checkout overrides.
pub const LOCAL_FILE: &str = "arrowkit.local.toml";
/// File name inside the user config directory.
pub const USER_FILE: &str = "config.toml";

const ENV_PREFIX: &str = "ARROWKIT";

/// `$XDG_CONFIG_HOME/arrowkit` on Linux; `None` when no home directory is known.
fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "Arrowkit", "arrowkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Builder over the directories and env prefix the layers are read from.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    project_dir: PathBuf,
    user_dir: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader for the current directory and the platform user directory.
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            user_dir: user_config_dir(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Directory searched for the project and local files.
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Directory holding the user file. `None` drops the user layer.
    pub fn with_user_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_dir = dir;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Candidate config files, lowest precedence first.
    pub fn files(&self) -> Vec<PathBuf> {
        self.user_dir
            .iter()
            .map(|dir| dir.join(USER_FILE))
            .chain([PROJECT_FILE, LOCAL_FILE].map(|name| self.project_dir.join(name)))
            .collect()
    }

    /// Merges every layer and validates the result.
    ///
    /// # Errors
    ///
    /// Fails when a file does not parse, a value has the wrong type, or the
    /// merged settings do not pass [`ArrowkitConfig::validate`].
    pub fn load(self) -> Result<ArrowkitConfig> {
        let defaults = config::Config::try_from(&ArrowkitConfig::default())
            .context("Failed to encode default configuration")?;

        let builder = self
            .files()
            .into_iter()
            .filter(|path| path.is_file())
            .fold(config::Config::builder().add_source(defaults), |builder, path| {
                tracing::debug!(path = %path.display(), "merging config file");
                builder.add_source(config::File::from(path).format(config::FileFormat::Toml))
            })
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let merged: ArrowkitConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        merged.validate()?;
        Ok(merged)
    }

    /// Like [`ConfigLoader::load`], falling back to the defaults on any error.
    pub fn load_or_default(self) -> ArrowkitConfig {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(error = %format!("{err:#}"), "using default configuration");
            ArrowkitConfig::default()
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
