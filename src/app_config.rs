use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::ass_writer::Style;
use crate::errors::ConfigError;
use crate::subtitle_processor::DEFAULT_TITLE;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Title used when the script has no `# heading` line
    #[serde(default = "default_title")]
    pub default_title: String,

    /// What happens to `//` comment lines
    #[serde(default)]
    pub comment_policy: CommentPolicy,

    /// Style every cue is rendered with
    #[serde(default)]
    pub style: Style,

    /// Fixed `[Script Info]` flags
    #[serde(default)]
    pub script_info: ScriptInfoConfig,

    /// Extension of generated files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Handling of author-facing `//` comment lines in cue bodies
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommentPolicy {
    // @policy: Comment lines never reach the output
    #[default]
    Strip,
    // @policy: Marker stripped, text emitted literally without markup
    Passthrough,
}

impl std::fmt::Display for CommentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strip => write!(f, "strip"),
            Self::Passthrough => write!(f, "passthrough"),
        }
    }
}

impl std::str::FromStr for CommentPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strip" => Ok(Self::Strip),
            "passthrough" => Ok(Self::Passthrough),
            _ => Err(anyhow::anyhow!("Invalid comment policy: {}", s)),
        }
    }
}

/// Flags written to the `[Script Info]` section
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScriptInfoConfig {
    #[serde(default = "default_script_type")]
    pub script_type: String,

    #[serde(default = "default_collisions")]
    pub collisions: String,

    #[serde(default)]
    pub wrap_style: u8,

    #[serde(default = "default_true")]
    pub scaled_border_and_shadow: bool,

    #[serde(default = "default_ycbcr_matrix")]
    pub ycbcr_matrix: String,
}

impl Default for ScriptInfoConfig {
    fn default() -> Self {
        Self {
            script_type: default_script_type(),
            collisions: default_collisions(),
            wrap_style: 0,
            scaled_border_and_shadow: true,
            ycbcr_matrix: default_ycbcr_matrix(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_output_extension() -> String {
    "ass".to_string()
}

fn default_script_type() -> String {
    "v4.00+".to_string()
}

fn default_collisions() -> String {
    "Reverse".to_string()
}

fn default_ycbcr_matrix() -> String {
    "None".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.style.validate()?;

        let extension = self.output_extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidExtension(self.output_extension.clone()));
        }

        Ok(())
    }

    /// Load configuration from a JSON file, writing a default one when missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_title: default_title(),
            comment_policy: CommentPolicy::default(),
            style: Style::default(),
            script_info: ScriptInfoConfig::default(),
            output_extension: default_output_extension(),
            log_level: LogLevel::default(),
        }
    }
}
