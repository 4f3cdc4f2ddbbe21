// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Accessibility issue types.

use serde::{Deserialize, Serialize};

/// Severity of an accessibility issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks validity
    Error,
    /// Should be addressed
    Warning,
    /// Informational
    Info,
}

impl Severity {
    /// Points subtracted from the score per issue
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Error => 25,
            Severity::Warning => 10,
            Severity::Info => 2,
        }
    }

    /// Whether this severity makes a result invalid
    pub fn blocks_validity(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityIssue {
    pub severity: Severity,
    /// Stable rule identifier (e.g. "input-needs-label")
    pub rule: String,
    /// WCAG success criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wcag: Option<String>,
    /// Name of the offending component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub message: String,
    pub suggestion: String,
}

impl AccessibilityIssue {
    /// Create an issue; message and suggestion always travel together
    pub fn new(rule: &str, severity: Severity, message: &str, suggestion: &str) -> Self {
        Self {
            severity,
            rule: rule.to_string(),
            wcag: None,
            component: None,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    /// Set the WCAG criteria
    pub fn with_wcag(mut self, criteria: &str) -> Self {
        self.wcag = Some(criteria.to_string());
        self
    }

    /// Set the offending component
    pub fn with_component(mut self, component: &str) -> Self {
        self.component = Some(component.to_string());
        self
    }
}
