// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Static configuration for each layout pattern.
//!
//! The component lists are representative (for introspection and token
//! collection) and do not map one-to-one onto the rendered templates. Slot
//! definitions are documentation only.

use super::{LayoutPattern, LayoutPatternConfig, PatternStructure, PatternUsage, SlotDefinition};
use crate::types::{ComponentDescriptor, Direction, LayoutType, Slot};

fn structure(kind: LayoutType, direction: Option<Direction>, gap: &str, columns: Option<u32>) -> PatternStructure {
    PatternStructure {
        kind,
        direction,
        gap: Some(gap.to_string()),
        columns,
    }
}

fn slot(name: &str, description: &str, accepts: &[&str]) -> SlotDefinition {
    SlotDefinition {
        name: name.to_string(),
        description: description.to_string(),
        accepts: accepts.iter().map(|s| s.to_string()).collect(),
    }
}

fn usage(when_to_use: &[&str], examples: &[&str]) -> PatternUsage {
    PatternUsage {
        when_to_use: when_to_use.iter().map(|s| s.to_string()).collect(),
        examples: examples.iter().map(|s| s.to_string()).collect(),
    }
}

fn component(name: &str, slot: Slot) -> ComponentDescriptor {
    ComponentDescriptor::new(name).in_slot(slot)
}

/// Configuration for a pattern
pub fn pattern_config(pattern: LayoutPattern) -> LayoutPatternConfig {
    match pattern {
        LayoutPattern::FormLayout => LayoutPatternConfig {
            pattern,
            description: "Vertical form with a heading, labelled fields and right-aligned actions",
            structure: structure(LayoutType::Stack, Some(Direction::Column), "6", None),
            components: vec![
                component("Label", Slot::Content),
                component("Input", Slot::Content),
                component("Select", Slot::Content),
                component("Button", Slot::Actions),
            ],
            slots: vec![
                slot("header", "Form title and short description", &["h2", "p"]),
                slot("content", "Label and control pairs", &["Label", "Input", "Select", "Textarea"]),
                slot("actions", "Submit and cancel buttons", &["Button"]),
            ],
            usage: usage(
                &["Collecting structured data", "Editing a single record"],
                &["Profile editor", "Checkout address form", "Support ticket"],
            ),
        },
        LayoutPattern::SplitView => LayoutPatternConfig {
            pattern,
            description: "Fixed sidebar navigation next to a flexible main area",
            structure: structure(LayoutType::Flex, Some(Direction::Row), "0", None),
            components: vec![
                component("Button", Slot::Sidebar),
                component("Card", Slot::Main),
            ],
            slots: vec![
                slot("sidebar", "Navigation or list of items", &["Button", "nav"]),
                slot("main", "Detail view of the selected item", &["Card", "h1", "p"]),
            ],
            usage: usage(
                &["Master-detail navigation", "Settings with many sections"],
                &["Email client", "Documentation browser", "Admin settings"],
            ),
        },
        LayoutPattern::DashboardGrid => LayoutPatternConfig {
            pattern,
            description: "Responsive grid of metric cards under a page heading",
            structure: structure(LayoutType::Grid, None, "6", Some(3)),
            components: vec![
                component("Card", Slot::Stats),
                component("CardHeader", Slot::Stats),
                component("CardTitle", Slot::Stats),
                component("CardContent", Slot::Stats),
            ],
            slots: vec![
                slot("header", "Page heading", &["h1"]),
                slot("stats", "One card per metric", &["Card"]),
            ],
            usage: usage(
                &["Overview of several metrics at once", "Landing screen after login"],
                &["Analytics overview", "Sales dashboard", "Server health"],
            ),
        },
        LayoutPattern::ModalConfirm => LayoutPatternConfig {
            pattern,
            description: "Confirmation dialog with cancel and confirm actions",
            structure: structure(LayoutType::Stack, Some(Direction::Column), "4", None),
            components: vec![
                component("Modal", Slot::Wrapper),
                component("Button", Slot::Trigger),
                component("Modal.Content", Slot::Content),
                component("Button", Slot::Actions),
            ],
            slots: vec![
                slot("trigger", "Control that opens the dialog", &["Button"]),
                slot("content", "Title and description of the decision", &["Modal.Content"]),
                slot("actions", "Cancel and confirm buttons", &["Button"]),
            ],
            usage: usage(
                &["Destructive or irreversible actions", "Leaving with unsaved changes"],
                &["Delete account", "Discard draft", "Revoke API key"],
            ),
        },
        LayoutPattern::ListWithActions => LayoutPatternConfig {
            pattern,
            description: "Bordered list where each row has inline actions",
            structure: structure(LayoutType::Stack, Some(Direction::Column), "4", None),
            components: vec![
                component("Button", Slot::Header),
                component("Badge", Slot::Items),
                component("Button", Slot::Actions),
            ],
            slots: vec![
                slot("header", "List title and primary action", &["h2", "Button"]),
                slot("items", "Rows of the list", &["li", "Badge"]),
                slot("actions", "Per-row actions", &["Button"]),
            ],
            usage: usage(
                &["Managing a collection of records", "Short lists with per-item operations"],
                &["Team members", "API keys", "Saved addresses"],
            ),
        },
        LayoutPattern::HeroSection => LayoutPatternConfig {
            pattern,
            description: "Centered headline, supporting copy and call-to-action buttons",
            structure: structure(LayoutType::Flex, Some(Direction::Column), "6", None),
            components: vec![component("Button", Slot::Actions)],
            slots: vec![
                slot("content", "Headline and supporting copy", &["h1", "p"]),
                slot("actions", "Primary and secondary calls to action", &["Button"]),
            ],
            usage: usage(
                &["Top of a landing page", "Announcing a product or feature"],
                &["Product landing page", "Launch announcement"],
            ),
        },
        LayoutPattern::EmptyState => LayoutPatternConfig {
            pattern,
            description: "Placeholder shown when a view has no data yet",
            structure: structure(LayoutType::Flex, Some(Direction::Column), "4", None),
            components: vec![component("Button", Slot::Actions)],
            slots: vec![
                slot("icon", "Decorative illustration", &["svg"]),
                slot("message", "Explanation of why the view is empty", &["h3", "p"]),
                slot("actions", "Action that fills the view", &["Button"]),
            ],
            usage: usage(
                &["First run of a feature", "Search or filter with no results"],
                &["No projects yet", "Empty inbox", "No search results"],
            ),
        },
    }
}
