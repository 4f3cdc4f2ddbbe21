// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Token collector: which semantic tokens a set of components consumes.

use crate::types::ComponentDescriptor;
use std::collections::BTreeSet;

/// Semantic tokens each component is documented to use
const COMPONENT_TOKENS: &[(&str, &[&str])] = &[
    ("Button", &["primary", "primary-foreground", "secondary", "destructive"]),
    ("Input", &["input", "border", "ring", "background"]),
    ("Textarea", &["input", "border", "ring", "background"]),
    ("Select", &["input", "border", "ring", "popover", "popover-foreground"]),
    ("Label", &["foreground"]),
    ("Card", &["card", "card-foreground", "border"]),
    ("CardTitle", &["card-foreground"]),
    ("CardDescription", &["muted-foreground"]),
    ("Modal", &["background", "foreground"]),
    ("Modal.Content", &["popover", "popover-foreground", "border"]),
    ("Badge", &["secondary", "secondary-foreground"]),
    ("Switch", &["primary", "input", "ring"]),
];

/// Tokens used by one component; unknown names use none
pub fn tokens_for(name: &str) -> &'static [&'static str] {
    COMPONENT_TOKENS
        .iter()
        .find(|(component, _)| *component == name)
        .map(|(_, tokens)| *tokens)
        .unwrap_or(&[])
}

/// Sorted, de-duplicated token names used by the given components
pub fn collect_tokens(components: &[ComponentDescriptor]) -> Vec<String> {
    components
        .iter()
        .flat_map(|c| tokens_for(&c.name).iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_tokens() {
        assert!(collect_tokens(&[]).is_empty());
    }

    #[test]
    fn test_tokens_sorted_and_unique() {
        let components = vec![
            ComponentDescriptor::new("Input"),
            ComponentDescriptor::new("Button"),
            ComponentDescriptor::new("Input"),
            ComponentDescriptor::new("Card"),
        ];
        let tokens = collect_tokens(&components);
        let mut expected = tokens.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(tokens, expected);
        assert!(tokens.contains(&"primary".to_string()));
        assert!(tokens.contains(&"card".to_string()));
    }

    #[test]
    fn test_unknown_component_contributes_nothing() {
        let tokens = collect_tokens(&[ComponentDescriptor::new("Marquee")]);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_button_tokens() {
        assert_eq!(
            collect_tokens(&[ComponentDescriptor::new("Button")]),
            vec!["destructive", "primary", "primary-foreground", "secondary"]
        );
    }
}
