use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub glossary: GlossaryConfig,
    #[serde(default)]
    pub http_server: HttpServerConfig,
}

/// Glossary data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryConfig {
    /// Path to the curated glossary JSON file.
    pub data_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Preferred anchor term id. When absent (or not present in the data),
    /// the first term in the file anchors the exposed component.
    #[serde(default)]
    pub anchor_id: Option<String>,
    /// Relation labels whose repeated parallel edges are shown with a single
    /// visible label.
    #[serde(default = "default_collapsed_labels")]
    pub collapsed_labels: Vec<String>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_port")]
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            port: default_http_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_http_port() -> u16 {
    8080
}

fn default_allowed_origins() -> Vec<String> {
    // Empty means any origin is accepted (the viewer runs on its own dev server)
    vec![]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_collapsed_labels() -> Vec<String> {
    vec!["consists of".to_string()]
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in GLOSSMAP_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let config_path = std::env::var("GLOSSMAP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .context("Failed to parse config.toml")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.glossary.data_path.exists() {
            anyhow::bail!(
                "glossary data_path does not exist: {}. Set data_path in config.toml to your glossary JSON file.",
                self.glossary.data_path.display()
            );
        }

        if !self.glossary.data_path.is_file() {
            anyhow::bail!(
                "glossary data_path must be a file, not a directory: {}",
                self.glossary.data_path.display()
            );
        }

        if self
            .glossary
            .collapsed_labels
            .iter()
            .any(|label| label.trim().is_empty())
        {
            anyhow::bail!("glossary.collapsed_labels must not contain blank labels");
        }

        Ok(())
    }

    /// Get the glossary data file path
    pub fn data_path(&self) -> &Path {
        &self.glossary.data_path
    }
}
