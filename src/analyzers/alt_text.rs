// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Image alt text analyzer - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Checks that all `img` components have appropriate alt attributes:
//! - Every `img` must have an `alt` attribute (not missing)
//! - Decorative images use `alt=""` (empty, not missing)
//! - Alt text should not announce itself as "image of" / "picture of"

use crate::analyzers::Analyzer;
use crate::issue::{AccessibilityIssue, Severity};
use crate::types::ComponentDescriptor;

/// Phrases screen readers make redundant by announcing "image" already
const REDUNDANT_ALT_PHRASES: &[&str] = &["image of", "picture of"];

/// Analyzer for image alt text compliance
pub struct AltTextAnalyzer;

impl Analyzer for AltTextAnalyzer {
    fn name(&self) -> &str {
        "Alt Text Analyzer"
    }

    fn description(&self) -> &str {
        "Checks img components for proper alt text (WCAG 1.1.1)"
    }

    fn primary_rule(&self) -> &'static str {
        "img-needs-alt"
    }

    fn rules(&self) -> &[&'static str] {
        &["img-needs-alt", "redundant-alt"]
    }

    fn analyze(&self, component: &ComponentDescriptor) -> Vec<AccessibilityIssue> {
        if !component.has_prop("alt") {
            return vec![AccessibilityIssue::new(
                "img-needs-alt",
                Severity::Error,
                "Image is missing alt attribute. Every img must have an alt attribute.",
                "Add alt=\"description\" for informative images or alt=\"\" for decorative images",
            )
            .with_wcag("1.1.1")
            .with_component(&component.name)];
        }

        match component.prop_str("alt") {
            Some(alt) if !alt.is_empty() => {
                let alt_lower = alt.to_lowercase();
                if REDUNDANT_ALT_PHRASES.iter().any(|p| alt_lower.contains(p)) {
                    return vec![AccessibilityIssue::new(
                        "redundant-alt",
                        Severity::Warning,
                        &format!(
                            "Image alt text \"{}\" repeats that it is an image. Screen readers already announce images.",
                            alt
                        ),
                        "Remove \"image of\" / \"picture of\" and describe the content directly",
                    )
                    .with_wcag("1.1.1")
                    .with_component(&component.name)];
                }
                Vec::new()
            }
            // alt="" is valid for decorative images
            _ => Vec::new(),
        }
    }
}
