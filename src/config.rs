// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration handling for composerbot

use crate::catalog::Theme;
use crate::error::{ComposerError, Result};
use crate::types::RenderContext;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Intent composition settings
    #[serde(default)]
    pub compose: ComposeConfig,

    /// Component search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Single-component code generation settings
    #[serde(default)]
    pub codegen: CodegenConfig,

    /// Design token settings
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Reject values no operation can work with
    pub fn validate(&self) -> Result<()> {
        if self.search.default_limit == 0 {
            return Err(ComposerError::Config("search.default_limit must be at least 1".to_string()));
        }
        if self.codegen.import_source.trim().is_empty() {
            return Err(ComposerError::Config("codegen.import_source must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Composition configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Context used when a caller does not give one
    #[serde(default)]
    pub default_context: RenderContext,

    /// Intents offered when nothing matched
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            default_context: RenderContext::default(),
            suggestions: default_suggestions(),
        }
    }
}

fn default_suggestions() -> Vec<String> {
    vec![
        "login form".to_string(),
        "signup form".to_string(),
        "contact form".to_string(),
        "navigation header".to_string(),
        "settings panel".to_string(),
        "confirmation modal".to_string(),
        "search bar".to_string(),
        "product card".to_string(),
    ]
}

/// Search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result limit when a caller does not give one
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    10
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Module prefix for generated imports
    #[serde(default = "default_import_source")]
    pub import_source: String,

    /// Framework when a caller does not give one
    #[serde(default = "default_framework")]
    pub default_framework: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            import_source: default_import_source(),
            default_framework: default_framework(),
        }
    }
}

fn default_import_source() -> String {
    "@/components/ui".to_string()
}

fn default_framework() -> String {
    "react".to_string()
}

/// Token configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokensConfig {
    /// Theme when a caller does not give one
    #[serde(default)]
    pub default_theme: Theme,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|e| e == "toml").unwrap_or(false)
}

/// Load configuration from a path
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = if is_toml(path) {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    config.validate()?;
    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Default config path, relative to the working directory
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".composerbot/config.yml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if is_toml(path) {
        toml::to_string_pretty(&config).map_err(|e| ComposerError::Config(e.to_string()))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}
