// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Intent-driven composition.
//!
//! `compose_interface` ties the pieces together: match the intent to a
//! pattern, inject form fields for form-like patterns, assemble markup by
//! slot and collect the tokens the result consumes.

pub mod fields;
pub mod intent;
pub mod slots;
pub mod tokens;

pub use fields::{extract_form_fields, FieldKind};
pub use intent::{builtin_patterns, match_intent, IntentPattern};
pub use slots::{generate_code, group_by_slot, render_component};
pub use tokens::collect_tokens;

use crate::error::{ComposerError, Result};
use crate::types::{ComponentDescriptor, LayoutConfig, RenderContext};
use serde::Serialize;
use tracing::{debug, info};

/// A successful composition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    pub pattern: String,
    pub layout: LayoutConfig,
    pub components: Vec<ComponentDescriptor>,
    pub code: String,
    pub tokens: Vec<String>,
    /// Field kinds injected from the intent text
    pub fields: Vec<FieldKind>,
}

/// Payload returned when no pattern matched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoMatch {
    pub intent: String,
    pub layout: LayoutConfig,
    pub components: Vec<ComponentDescriptor>,
    pub code: String,
    pub tokens: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Result of `compose_interface`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComposeOutcome {
    Matched(Composition),
    NoMatch(NoMatch),
}

impl ComposeOutcome {
    pub fn code(&self) -> &str {
        match self {
            ComposeOutcome::Matched(c) => &c.code,
            ComposeOutcome::NoMatch(n) => &n.code,
        }
    }

    pub fn matched(&self) -> Option<&Composition> {
        match self {
            ComposeOutcome::Matched(c) => Some(c),
            ComposeOutcome::NoMatch(_) => None,
        }
    }
}

/// Compose an interface from a free-text intent.
///
/// Fails only for a blank intent. An intent no pattern recognizes yields
/// [`ComposeOutcome::NoMatch`] with suggestions.
pub fn compose_interface(
    patterns: &[IntentPattern],
    intent: &str,
    context: RenderContext,
    suggestions: &[String],
) -> Result<ComposeOutcome> {
    if intent.trim().is_empty() {
        return Err(ComposerError::EmptyIntent);
    }

    let Some(pattern) = match_intent(patterns, intent) else {
        info!(intent, "No pattern matched intent");
        return Ok(ComposeOutcome::NoMatch(no_match(intent, suggestions)));
    };
    debug!(pattern = %pattern.name, "Matched intent pattern");

    let mut components = pattern.components.clone();
    let mut field_kinds = Vec::new();

    if pattern.is_form() {
        field_kinds = extract_form_fields(intent);
        if field_kinds.is_empty() {
            field_kinds.push(FieldKind::Text);
        }
        let descriptors = field_kinds.iter().flat_map(FieldKind::descriptors).collect();
        fields::insert_fields(&mut components, descriptors);
        debug!(fields = ?field_kinds, "Injected form fields");
    }

    let code = generate_code(&pattern.layout, &components, context);
    let tokens = collect_tokens(&components);

    info!(
        pattern = %pattern.name,
        components = components.len(),
        tokens = tokens.len(),
        "Composed interface"
    );

    Ok(ComposeOutcome::Matched(Composition {
        pattern: pattern.name.clone(),
        layout: pattern.layout.clone(),
        components,
        code,
        tokens,
        fields: field_kinds,
    }))
}

fn no_match(intent: &str, suggestions: &[String]) -> NoMatch {
    let mut code = format!("// No matching pattern found for: \"{}\"\n// Try one of:", intent.trim());
    for suggestion in suggestions {
        code.push_str(&format!("\n//   - {}", suggestion));
    }

    NoMatch {
        intent: intent.to_string(),
        layout: LayoutConfig::default(),
        components: Vec::new(),
        code,
        tokens: Vec::new(),
        suggestions: suggestions.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, LayoutType};

    fn compose(intent: &str, context: RenderContext) -> Result<ComposeOutcome> {
        compose_interface(&builtin_patterns(), intent, context, &["login form".to_string()])
    }

    #[test]
    fn test_blank_intent_is_an_error() {
        assert!(matches!(compose("", RenderContext::Section), Err(ComposerError::EmptyIntent)));
        assert!(matches!(compose("  \t", RenderContext::Section), Err(ComposerError::EmptyIntent)));
    }

    #[test]
    fn test_unmatched_intent_is_soft() {
        let outcome = compose("quantum teleporter", RenderContext::Section).unwrap();
        let ComposeOutcome::NoMatch(payload) = outcome else {
            panic!("expected no match");
        };
        assert!(payload.components.is_empty());
        assert!(payload.tokens.is_empty());
        assert_eq!(payload.suggestions, vec!["login form"]);
        assert!(payload.code.starts_with("// No matching pattern"));
    }

    #[test]
    fn test_login_form_round_trip() {
        let outcome = compose("login form", RenderContext::Section).unwrap();
        let c = outcome.matched().expect("login form should match");
        assert_eq!(c.layout.kind, LayoutType::Stack);
        assert_eq!(c.layout.direction, Some(Direction::Column));
        assert!(c.components.iter().any(|d| d.name == "Card"));
        assert!(c.components.iter().any(|d| d.name == "Input" && d.prop_str("type") == Some("email")));
        assert!(c.components.iter().any(|d| d.name == "Input" && d.prop_str("type") == Some("password")));
        for needle in ["<Card>", "type=\"email\"", "type=\"password\"", "</Card>"] {
            assert!(c.code.contains(needle), "missing {needle} in\n{}", c.code);
        }
        assert!(c.fields.is_empty());
    }

    #[test]
    fn test_form_fields_injected_after_card_content() {
        let outcome = compose("contact form with name, email and message", RenderContext::Section).unwrap();
        let c = outcome.matched().unwrap();
        assert_eq!(c.fields, vec![FieldKind::Email, FieldKind::Text, FieldKind::Textarea]);

        let anchor = c.components.iter().position(|d| d.name == "CardContent").unwrap();
        assert_eq!(c.components[anchor + 1].name, "Label");
        assert_eq!(c.components[anchor + 2].prop_str("type"), Some("email"));
        assert!(c.code.contains("<Textarea id=\"message\""));
    }

    #[test]
    fn test_form_without_hints_gets_text_field() {
        let c = compose("feedback form", RenderContext::Section).unwrap();
        assert_eq!(c.matched().unwrap().fields, vec![FieldKind::Text]);
    }

    #[test]
    fn test_non_form_pattern_ignores_field_words() {
        let c = compose("navigation header with email", RenderContext::Section).unwrap();
        let c = c.matched().unwrap();
        assert!(c.fields.is_empty());
        assert!(!c.components.iter().any(|d| d.name == "Input"));
    }

    #[test]
    fn test_page_context_wraps_output() {
        let c = compose("navigation header", RenderContext::Page).unwrap();
        let code = c.code();
        assert!(code.starts_with("<div className=\"container mx-auto py-8\">\n  <div className=\"flex flex-row gap-4\">"));
        assert!(code.ends_with("\n  </div>\n</div>"));
    }
}
