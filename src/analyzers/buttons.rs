// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Button naming - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! A `Button` needs either visible text or an `aria-label`. Whitespace-only
//! text does not count.

use crate::analyzers::Analyzer;
use crate::issue::{AccessibilityIssue, Severity};
use crate::types::ComponentDescriptor;

/// Button accessible-name analyzer
pub struct ButtonAnalyzer;

impl Analyzer for ButtonAnalyzer {
    fn name(&self) -> &str {
        "Button Name Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that buttons have an accessible name (WCAG 4.1.2)"
    }

    fn primary_rule(&self) -> &'static str {
        "button-needs-name"
    }

    fn rules(&self) -> &[&'static str] {
        &["button-needs-name"]
    }

    fn analyze(&self, component: &ComponentDescriptor) -> Vec<AccessibilityIssue> {
        if component.has_prop("aria-label") || component.has_text() {
            return Vec::new();
        }

        vec![AccessibilityIssue::new(
            "button-needs-name",
            Severity::Error,
            "Button has no accessible name. Icon-only or empty buttons are announced as just \"button\".",
            "Add visible text content or an aria-label describing the action",
        )
        .with_wcag("4.1.2")
        .with_component(&component.name)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_with_text() {
        let button = ComponentDescriptor::new("Button").with_children("Submit");
        assert!(ButtonAnalyzer.analyze(&button).is_empty());
    }

    #[test]
    fn test_icon_button_with_aria_label() {
        let button = ComponentDescriptor::new("Button")
            .with_prop("size", "icon")
            .with_prop("aria-label", "Close");
        assert!(ButtonAnalyzer.analyze(&button).is_empty());
    }

    #[test]
    fn test_empty_and_blank_buttons() {
        for button in [
            ComponentDescriptor::new("Button"),
            ComponentDescriptor::new("Button").with_children(""),
            ComponentDescriptor::new("Button").with_children(" \n "),
        ] {
            let issues = ButtonAnalyzer.analyze(&button);
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].rule, "button-needs-name");
            assert_eq!(issues[0].severity, Severity::Error);
        }
    }
}
