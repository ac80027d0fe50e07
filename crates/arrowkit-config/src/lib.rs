//! Configuration management for arrowkit
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the binary)
//! 2. Environment variables (ARROWKIT_* prefix, `__` between nested keys)
//! 3. arrowkit.local.toml (gitignored, local overrides)
//! 4. arrowkit.toml (git-tracked, project config)
//! 5. ~/.config/arrowkit/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{ConfigLoader, LOCAL_FILE, PROJECT_FILE, USER_FILE};

/// Main arrowkit configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowkitConfig {
    pub output: OutputConfig,
    pub demo: DemoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    /// Column width reserved for example labels.
    pub label_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            label_width: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sections: Vec<Section>,
    pub timer_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            timer_delay_ms: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// A group of demo examples
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Basics,
    Intermediate,
    Data,
    Advanced,
    Practice,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Basics,
        Section::Intermediate,
        Section::Data,
        Section::Advanced,
        Section::Practice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Basics => "basics",
            Section::Intermediate => "intermediate",
            Section::Data => "data",
            Section::Advanced => "advanced",
            Section::Practice => "practice",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownSection(s.to_string()))
    }
}

impl ArrowkitConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Reject settings the demo cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo.sections.is_empty() {
            return Err(ConfigError::ValidationError(
                "demo.sections must name at least one section".to_string(),
            ));
        }
        if self.output.label_width == 0 {
            return Err(ConfigError::ValidationError(
                "output.label_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArrowkitConfig::default();
        assert!(config.output.color);
        assert_eq!(config.output.label_width, 18);
        assert_eq!(config.demo.sections, Section::ALL.to_vec());
        assert_eq!(config.demo.timer_delay_ms, 10);
        assert_eq!(config.logging.filter, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_sections() {
        let mut config = ArrowkitConfig::default();
        config.demo.sections.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_label_width() {
        let mut config = ArrowkitConfig::default();
        config.output.label_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!("data".parse::<Section>().unwrap(), Section::Data);
        assert_eq!("Advanced".parse::<Section>().unwrap(), Section::Advanced);
        assert!(matches!(
            "this".parse::<Section>(),
            Err(ConfigError::UnknownSection(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ArrowkitConfig::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("label_width = 18"));
        assert!(rendered.contains("\"intermediate\""));

        let parsed: ArrowkitConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
