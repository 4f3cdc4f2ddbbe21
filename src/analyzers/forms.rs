// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Form control labelling - WCAG 1.3.1 Info and Relationships, 3.3.2 Labels, 4.1.2 Name, Role, Value
//!
//! - Every `Input` needs `aria-label`, `aria-labelledby` or an `id` a label can point at
//! - An `Input` labelled only through its `id` that also shows a placeholder
//!   may be relying on the placeholder as its label
//! - Every `Select` needs `aria-label`, `aria-labelledby` or an `id`

use crate::analyzers::Analyzer;
use crate::issue::{AccessibilityIssue, Severity};
use crate::types::ComponentDescriptor;

/// Attributes that give a control an accessible name directly
const ARIA_NAME_ATTRS: &[&str] = &["aria-label", "aria-labelledby"];

/// Input labelling analyzer
pub struct InputAnalyzer;

impl Analyzer for InputAnalyzer {
    fn name(&self) -> &str {
        "Input Label Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that inputs have a programmatic label (WCAG 1.3.1, 3.3.2, 4.1.2)"
    }

    fn primary_rule(&self) -> &'static str {
        "input-needs-label"
    }

    fn rules(&self) -> &[&'static str] {
        &["input-needs-label", "placeholder-not-label"]
    }

    fn analyze(&self, component: &ComponentDescriptor) -> Vec<AccessibilityIssue> {
        let mut issues = Vec::new();
        let has_aria_name = component.has_any_prop(ARIA_NAME_ATTRS);
        let has_id = component.has_prop("id");

        if !has_aria_name && !has_id {
            issues.push(
                AccessibilityIssue::new(
                    "input-needs-label",
                    Severity::Error,
                    "Input has no accessible label. Screen readers cannot announce what this field is for.",
                    "Add aria-label, aria-labelledby, or an id referenced by <Label htmlFor=\"...\">",
                )
                .with_wcag("1.3.1, 3.3.2, 4.1.2")
                .with_component(&component.name),
            );
        }

        if component.has_prop("placeholder") && !has_aria_name && has_id {
            issues.push(
                AccessibilityIssue::new(
                    "placeholder-not-label",
                    Severity::Warning,
                    "Input relies on an external label association and shows a placeholder. Placeholders disappear on typing and are not labels.",
                    "Make sure a <Label htmlFor> points at this id, or add aria-label",
                )
                .with_wcag("3.3.2")
                .with_component(&component.name),
            );
        }

        issues
    }
}

/// Select labelling analyzer
pub struct SelectAnalyzer;

impl Analyzer for SelectAnalyzer {
    fn name(&self) -> &str {
        "Select Label Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that selects have a programmatic label (WCAG 1.3.1, 4.1.2)"
    }

    fn primary_rule(&self) -> &'static str {
        "select-needs-label"
    }

    fn rules(&self) -> &[&'static str] {
        &["select-needs-label"]
    }

    fn analyze(&self, component: &ComponentDescriptor) -> Vec<AccessibilityIssue> {
        if component.has_any_prop(ARIA_NAME_ATTRS) || component.has_prop("id") {
            return Vec::new();
        }

        vec![AccessibilityIssue::new(
            "select-needs-label",
            Severity::Error,
            "Select has no accessible label.",
            "Add aria-label, aria-labelledby, or an id referenced by <Label htmlFor=\"...\">",
        )
        .with_wcag("1.3.1, 4.1.2")
        .with_component(&component.name)]
    }
}
