// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Component contract registry.
//!
//! Static metadata for the five library components: what they are, which
//! props they accept, accessibility notes, usage guidance and examples.

use serde::{Deserialize, Serialize};

/// One accepted prop of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub required: bool,
    pub description: String,
}

/// When to reach for a component and when not to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageGuidance {
    pub when_to_use: Vec<String>,
    pub avoid: Vec<String>,
}

/// Full contract of a library component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentContract {
    pub name: String,
    pub description: String,
    pub props: Vec<PropSpec>,
    pub accessibility: Vec<String>,
    pub usage: UsageGuidance,
    pub examples: Vec<String>,
}

impl ComponentContract {
    /// Lower-cased text searched by `search_components`
    pub fn searchable_text(&self) -> String {
        let mut text = format!("{} {}", self.name, self.description);
        for line in self.usage.when_to_use.iter().chain(&self.usage.avoid) {
            text.push(' ');
            text.push_str(line);
        }
        text.to_lowercase()
    }
}

/// A scored search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub description: String,
    pub score: f64,
}

/// Read-only component lookup
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    contracts: Vec<ComponentContract>,
}

impl ComponentRegistry {
    pub fn new(contracts: Vec<ComponentContract>) -> Self {
        Self { contracts }
    }

    /// Contracts for Button, Input, Card, Modal and Select
    pub fn builtin() -> Self {
        Self::new(vec![button(), input(), card(), modal(), select()])
    }

    /// Case-insensitive lookup by name
    pub fn get(&self, name: &str) -> Option<&ComponentContract> {
        self.contracts
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Registered component names in registry order
    pub fn names(&self) -> Vec<String> {
        self.contracts.iter().map(|c| c.name.clone()).collect()
    }

    /// Score every contract by the fraction of query terms it contains.
    ///
    /// Terms are whitespace-split and lower-cased; a term counts when it is a
    /// substring of [`ComponentContract::searchable_text`]. Zero scores are
    /// dropped. The sort is stable, so ties keep registry order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .contracts
            .iter()
            .filter_map(|contract| {
                let haystack = contract.searchable_text();
                let matched = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
                if matched == 0 {
                    return None;
                }
                Some(SearchHit {
                    name: contract.name.clone(),
                    description: contract.description.clone(),
                    score: matched as f64 / terms.len() as f64,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits
    }
}

fn prop(name: &str, kind: &str, default: Option<&str>, required: bool, description: &str) -> PropSpec {
    PropSpec {
        name: name.to_string(),
        kind: kind.to_string(),
        default: default.map(String::from),
        required,
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn button() -> ComponentContract {
    ComponentContract {
        name: "Button".to_string(),
        description: "Clickable control that triggers an action or submits a form".to_string(),
        props: vec![
            prop(
                "variant",
                "\"default\" | \"secondary\" | \"destructive\" | \"outline\" | \"ghost\" | \"link\"",
                Some("default"),
                false,
                "Visual style of the button",
            ),
            prop("size", "\"sm\" | \"default\" | \"lg\" | \"icon\"", Some("default"), false, "Button size"),
            prop("disabled", "boolean", Some("false"), false, "Disables interaction"),
            prop("asChild", "boolean", Some("false"), false, "Render the child element instead of a button"),
            prop("type", "\"button\" | \"submit\" | \"reset\"", Some("button"), false, "Native button type"),
        ],
        accessibility: strings(&[
            "Must have an accessible name: visible text or aria-label",
            "Icon-only buttons require aria-label",
            "Focus ring uses the ring token and must stay visible",
        ]),
        usage: UsageGuidance {
            when_to_use: strings(&[
                "Primary and secondary actions such as submit, save or cancel",
                "Triggering modals, menus and other overlays",
            ]),
            avoid: strings(&["Navigation between pages; use a link instead"]),
        },
        examples: strings(&[
            "<Button>Save changes</Button>",
            "<Button variant=\"destructive\">Delete</Button>",
            "<Button variant=\"ghost\" size=\"icon\" aria-label=\"Close\" />",
        ]),
    }
}

fn input() -> ComponentContract {
    ComponentContract {
        name: "Input".to_string(),
        description: "Single-line text field for user data entry".to_string(),
        props: vec![
            prop(
                "type",
                "\"text\" | \"email\" | \"password\" | \"tel\" | \"date\" | \"search\" | \"number\"",
                Some("text"),
                false,
                "Native input type",
            ),
            prop("id", "string", None, false, "Associates the input with a Label via htmlFor"),
            prop("placeholder", "string", None, false, "Hint text; never a replacement for a label"),
            prop("disabled", "boolean", Some("false"), false, "Disables the field"),
            prop("aria-label", "string", None, false, "Accessible name when no visible label exists"),
        ],
        accessibility: strings(&[
            "Every input needs a label: Label htmlFor, aria-label or aria-labelledby",
            "Placeholder text disappears on typing and is not a label",
            "Use the matching type so assistive tech and keyboards adapt",
        ]),
        usage: UsageGuidance {
            when_to_use: strings(&[
                "Collecting short text such as names, email addresses or passwords",
                "Search fields and filters",
            ]),
            avoid: strings(&["Long free text; use a textarea"]),
        },
        examples: strings(&[
            "<Input id=\"email\" type=\"email\" placeholder=\"you@example.com\" />",
            "<Input type=\"search\" aria-label=\"Search\" />",
        ]),
    }
}

fn card() -> ComponentContract {
    ComponentContract {
        name: "Card".to_string(),
        description: "Container that groups related content with header, content and footer sections".to_string(),
        props: vec![prop("className", "string", None, false, "Additional classes for sizing")],
        accessibility: strings(&[
            "Use a heading inside CardTitle to keep the document outline intact",
            "Cards are not interactive by themselves; put actions in buttons",
        ]),
        usage: UsageGuidance {
            when_to_use: strings(&[
                "Grouping a form, a summary or a product into one visual unit",
                "Dashboard tiles and stats",
            ]),
            avoid: strings(&["Wrapping an entire page layout"]),
        },
        examples: strings(&[
            "<Card>\n  <CardHeader>\n    <CardTitle>Title</CardTitle>\n  </CardHeader>\n  <CardContent>Body</CardContent>\n</Card>",
        ]),
    }
}

fn modal() -> ComponentContract {
    ComponentContract {
        name: "Modal".to_string(),
        description: "Dialog overlay that interrupts the user for a focused task or confirmation".to_string(),
        props: vec![
            prop("open", "boolean", None, false, "Controlled open state"),
            prop("onOpenChange", "(open: boolean) => void", None, false, "Called when the open state changes"),
            prop("title", "string", None, false, "Dialog title, used as the accessible name of Modal.Content"),
            prop("description", "string", None, false, "Dialog description, announced after the title"),
        ],
        accessibility: strings(&[
            "Modal.Content needs a title, aria-label or aria-labelledby",
            "Provide a description or aria-describedby for context",
            "Focus is trapped inside the dialog and restored on close",
            "Escape closes the dialog",
        ]),
        usage: UsageGuidance {
            when_to_use: strings(&[
                "Confirming destructive actions",
                "Short focused tasks that must complete before continuing",
            ]),
            avoid: strings(&["Long forms or content that needs to stay visible"]),
        },
        examples: strings(&[
            "<Modal>\n  <Modal.Trigger asChild>\n    <Button>Open</Button>\n  </Modal.Trigger>\n  <Modal.Content title=\"Confirm\" description=\"This cannot be undone.\" />\n</Modal>",
        ]),
    }
}

fn select() -> ComponentContract {
    ComponentContract {
        name: "Select".to_string(),
        description: "Dropdown for choosing one option from a list".to_string(),
        props: vec![
            prop("value", "string", None, false, "Controlled value"),
            prop("onValueChange", "(value: string) => void", None, false, "Called when the selection changes"),
            prop("placeholder", "string", None, false, "Text shown when nothing is selected"),
            prop("id", "string", None, false, "Associates the select with a Label"),
            prop("aria-label", "string", None, false, "Accessible name when no visible label exists"),
        ],
        accessibility: strings(&[
            "Needs a label: Label htmlFor, aria-label or aria-labelledby",
            "Arrow keys move between options; typing jumps to matches",
        ]),
        usage: UsageGuidance {
            when_to_use: strings(&[
                "Choosing one option from five or more choices",
                "Settings such as theme or language",
            ]),
            avoid: strings(&["Two or three options; use radio buttons"]),
        },
        examples: strings(&["<Select id=\"theme\" placeholder=\"Select a theme\" />"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_five_components() {
        let registry = ComponentRegistry::builtin();
        assert_eq!(registry.names(), vec!["Button", "Input", "Card", "Modal", "Select"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = ComponentRegistry::builtin();
        assert_eq!(registry.get("button").unwrap().name, "Button");
        assert!(registry.get("Tooltip").is_none());
    }

    #[test]
    fn test_search_scores_by_term_fraction() {
        let registry = ComponentRegistry::builtin();
        let hits = registry.search("dropdown zebra");
        assert_eq!(hits[0].name, "Select");
        assert!((hits[0].score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_search_sorted_descending() {
        let registry = ComponentRegistry::builtin();
        let hits = registry.search("form text label");
        assert!(!hits.is_empty());
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_search_drops_non_matches() {
        let registry = ComponentRegistry::builtin();
        assert!(registry.search("xylophone").is_empty());
        assert!(registry.search("   ").is_empty());
    }
}
