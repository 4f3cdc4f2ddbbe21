// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Accessibility rule families.
//!
//! Each audited component kind has one analyzer implementing every rule for
//! that kind. Dispatch goes through [`AuditedComponent`], so adding a kind
//! forces a matching analyzer at compile time. Components of any other name
//! are skipped: they produce no issues and no passed rules.

pub mod alt_text;
pub mod buttons;
pub mod dialogs;
pub mod forms;
pub mod markup;

use crate::error::{ComposerError, Result};
use crate::issue::AccessibilityIssue;
use crate::report::ValidationResult;
use crate::types::ComponentDescriptor;
use tracing::debug;

/// Trait implemented by every rule family
pub trait Analyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Short description of what this analyzer checks
    fn description(&self) -> &str;

    /// Error-level rule reported in `passedRules` when it does not fire
    fn primary_rule(&self) -> &'static str;

    /// Every rule id this analyzer can raise
    fn rules(&self) -> &[&'static str];

    /// Evaluate all rules against one component
    fn analyze(&self, component: &ComponentDescriptor) -> Vec<AccessibilityIssue>;
}

/// Component kinds with a rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditedComponent {
    Input,
    Button,
    ModalContent,
    Select,
    Img,
}

impl AuditedComponent {
    pub const ALL: [AuditedComponent; 5] = [
        AuditedComponent::Input,
        AuditedComponent::Button,
        AuditedComponent::ModalContent,
        AuditedComponent::Select,
        AuditedComponent::Img,
    ];

    /// Component name as it appears in descriptors and markup
    pub fn component_name(&self) -> &'static str {
        match self {
            AuditedComponent::Input => "Input",
            AuditedComponent::Button => "Button",
            AuditedComponent::ModalContent => "Modal.Content",
            AuditedComponent::Select => "Select",
            AuditedComponent::Img => "img",
        }
    }

    /// Kind for an exact component name, if audited
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.component_name() == name)
    }

    pub fn analyzer(&self) -> &'static dyn Analyzer {
        match self {
            AuditedComponent::Input => &forms::InputAnalyzer,
            AuditedComponent::Button => &buttons::ButtonAnalyzer,
            AuditedComponent::ModalContent => &dialogs::ModalContentAnalyzer,
            AuditedComponent::Select => &forms::SelectAnalyzer,
            AuditedComponent::Img => &alt_text::AltTextAnalyzer,
        }
    }
}

/// Issues and passed rules from one evaluation pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Issues in component order
    pub issues: Vec<AccessibilityIssue>,
    /// Primary rules that fired for no component, first-seen order
    pub passed_rules: Vec<String>,
}

/// Run every applicable rule over the components, in input order
pub fn run_rules(components: &[ComponentDescriptor]) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    for component in components {
        let Some(kind) = AuditedComponent::from_name(&component.name) else {
            debug!(component = %component.name, "No rules for component, skipping");
            continue;
        };

        let analyzer = kind.analyzer();
        let issues = analyzer.analyze(component);
        debug!(analyzer = analyzer.name(), issues = issues.len(), "Ran analyzer");
        let primary = analyzer.primary_rule();

        if !issues.iter().any(|i| i.rule == primary)
            && !outcome.passed_rules.iter().any(|r| r == primary)
        {
            outcome.passed_rules.push(primary.to_string());
        }
        outcome.issues.extend(issues);
    }

    // A rule that fired for any component has not passed
    let RuleOutcome { issues, passed_rules } = &mut outcome;
    passed_rules.retain(|rule| !issues.iter().any(|i| &i.rule == rule));

    outcome
}

/// Audit explicit components or, failing that, components parsed from markup.
///
/// When both are given the components win and the code is ignored. Giving
/// neither is a caller error.
pub fn validate_accessibility(
    code: Option<&str>,
    components: Option<&[ComponentDescriptor]>,
    context: Option<&str>,
) -> Result<ValidationResult> {
    let parsed;
    let components = match (components, code) {
        (Some(components), _) => components,
        (None, Some(code)) => {
            parsed = markup::parse_components(code);
            debug!(count = parsed.len(), "Extracted components from markup");
            &parsed[..]
        }
        (None, None) => return Err(ComposerError::MissingValidationInput),
    };

    let outcome = run_rules(components);
    Ok(ValidationResult::from_outcome(outcome, context))
}
