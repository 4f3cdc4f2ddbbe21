// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Layout pattern catalog.
//!
//! Seven named structural templates, independent of intent matching. Pattern
//! names form a closed set, so an unknown name is a hard error rather than
//! a soft "no match".

mod catalog;
mod templates;

use crate::compose::collect_tokens;
use crate::error::{ComposerError, Result};
use crate::types::{ComponentDescriptor, Direction, LayoutType};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use catalog::pattern_config;

/// Largest grid the dashboard template renders
pub const MAX_COLUMNS: u32 = 12;

/// The named layout patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPattern {
    FormLayout,
    SplitView,
    DashboardGrid,
    ModalConfirm,
    ListWithActions,
    HeroSection,
    EmptyState,
}

impl LayoutPattern {
    pub const ALL: [LayoutPattern; 7] = [
        LayoutPattern::FormLayout,
        LayoutPattern::SplitView,
        LayoutPattern::DashboardGrid,
        LayoutPattern::ModalConfirm,
        LayoutPattern::ListWithActions,
        LayoutPattern::HeroSection,
        LayoutPattern::EmptyState,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutPattern::FormLayout => "form-layout",
            LayoutPattern::SplitView => "split-view",
            LayoutPattern::DashboardGrid => "dashboard-grid",
            LayoutPattern::ModalConfirm => "modal-confirm",
            LayoutPattern::ListWithActions => "list-with-actions",
            LayoutPattern::HeroSection => "hero-section",
            LayoutPattern::EmptyState => "empty-state",
        }
    }
}

impl std::fmt::Display for LayoutPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayoutPattern {
    type Err = ComposerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LayoutPattern::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ComposerError::UnknownPattern(s.to_string()))
    }
}

/// Shape of a layout pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternStructure {
    #[serde(rename = "type")]
    pub kind: LayoutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
}

/// Documentation of one region of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDefinition {
    pub name: String,
    pub description: String,
    pub accepts: Vec<String>,
}

/// When to use a pattern, with examples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternUsage {
    pub when_to_use: Vec<String>,
    pub examples: Vec<String>,
}

/// Static description of a pattern
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPatternConfig {
    pub pattern: LayoutPattern,
    pub description: &'static str,
    pub structure: PatternStructure,
    pub components: Vec<ComponentDescriptor>,
    pub slots: Vec<SlotDefinition>,
    pub usage: PatternUsage,
}

/// Caller customizations substituted into a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Only `dashboard-grid` honours this
    pub columns: Option<u32>,
    pub primary_action: Option<String>,
    pub secondary_action: Option<String>,
}

/// Everything `get_layout_pattern` returns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPatternResult {
    pub pattern: LayoutPattern,
    pub description: String,
    pub structure: PatternStructure,
    pub components: Vec<ComponentDescriptor>,
    pub code: String,
    pub tokens: Vec<String>,
    pub slots: Vec<SlotDefinition>,
    pub usage: PatternUsage,
}

/// Look up a pattern by name and render it with the given options
pub fn get_layout_pattern(name: &str, options: &PatternOptions) -> Result<LayoutPatternResult> {
    let pattern: LayoutPattern = name.trim().parse()?;

    let config = pattern_config(pattern);
    let mut structure = config.structure;
    if pattern == LayoutPattern::DashboardGrid {
        if let Some(columns) = options.columns {
            if columns == 0 || columns > MAX_COLUMNS {
                return Err(ComposerError::InvalidInput(format!(
                    "columns must be between 1 and {}, got {}",
                    MAX_COLUMNS, columns
                )));
            }
            structure.columns = Some(columns);
        }
    }

    let code = templates::render(pattern, options, structure.columns);
    let tokens = collect_tokens(&config.components);
    debug!(pattern = %pattern, tokens = tokens.len(), "Rendered layout pattern");

    Ok(LayoutPatternResult {
        pattern,
        description: config.description.to_string(),
        structure,
        components: config.components,
        code,
        tokens,
        slots: config.slots,
        usage: config.usage,
    })
}
