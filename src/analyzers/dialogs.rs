// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dialog labelling - WCAG 4.1.2 Name, Role, Value, 1.3.1 Info and Relationships
//!
//! `Modal.Content` needs a name (`title`, `aria-label` or `aria-labelledby`).
//! A named dialog should also carry a `description` or `aria-describedby`.

use crate::analyzers::Analyzer;
use crate::issue::{AccessibilityIssue, Severity};
use crate::types::ComponentDescriptor;

const NAME_ATTRS: &[&str] = &["title", "aria-label", "aria-labelledby"];
const DESCRIPTION_ATTRS: &[&str] = &["description", "aria-describedby"];

/// Modal content analyzer
pub struct ModalContentAnalyzer;

impl Analyzer for ModalContentAnalyzer {
    fn name(&self) -> &str {
        "Dialog Label Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that dialogs have a name and a description (WCAG 4.1.2, 1.3.1)"
    }

    fn primary_rule(&self) -> &'static str {
        "modal-needs-label"
    }

    fn rules(&self) -> &[&'static str] {
        &["modal-needs-label", "modal-needs-description"]
    }

    fn analyze(&self, component: &ComponentDescriptor) -> Vec<AccessibilityIssue> {
        if !component.has_any_prop(NAME_ATTRS) {
            return vec![AccessibilityIssue::new(
                "modal-needs-label",
                Severity::Error,
                "Modal content has no accessible name. Screen readers announce an unnamed dialog.",
                "Add a title, aria-label, or aria-labelledby to Modal.Content",
            )
            .with_wcag("4.1.2")
            .with_component(&component.name)];
        }

        if !component.has_any_prop(DESCRIPTION_ATTRS) {
            return vec![AccessibilityIssue::new(
                "modal-needs-description",
                Severity::Warning,
                "Modal content has a name but no description.",
                "Add a description or aria-describedby so users know what the dialog is about",
            )
            .with_wcag("1.3.1")
            .with_component(&component.name)];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_modal_is_error_only() {
        let issues = ModalContentAnalyzer.analyze(&ComponentDescriptor::new("Modal.Content"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, "modal-needs-label");
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_named_modal_without_description_warns() {
        let modal = ComponentDescriptor::new("Modal.Content").with_prop("aria-label", "Settings");
        let issues = ModalContentAnalyzer.analyze(&modal);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, "modal-needs-description");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_fully_labelled_modal() {
        let modal = ComponentDescriptor::new("Modal.Content")
            .with_prop("title", "Delete file")
            .with_prop("aria-describedby", "delete-help");
        assert!(ModalContentAnalyzer.analyze(&modal).is_empty());
    }
}
