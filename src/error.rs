// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for composerbot

use thiserror::Error;

/// Main error type for composerbot
///
/// Only calls that cannot be serviced at all end up here. Valid calls that
/// simply have no answer (an unmatched intent, an unknown component spec)
/// are reported in the success channel instead.
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("Intent must not be empty")]
    EmptyIntent,

    #[error("Either code or components must be provided")]
    MissingValidationInput,

    #[error("Unknown layout pattern: {0}")]
    UnknownPattern(String),

    #[error("Unsupported framework: {0}")]
    UnsupportedFramework(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ComposerError>;
