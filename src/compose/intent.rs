// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Intent matching.
//!
//! Each pattern carries substring keywords. An intent scores one point per
//! keyword found anywhere in its lower-cased text; the best score wins and
//! earlier patterns win ties. A best score of zero means no match.

use crate::types::{ComponentDescriptor, Direction, LayoutConfig, LayoutType, Slot};
use serde::Serialize;

/// Keywords that mark a pattern as a form eligible for field extraction
const FORM_KEYWORDS: &[&str] = &["form", "data entry"];

/// A keyword-tagged composition template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentPattern {
    pub name: String,
    pub keywords: Vec<String>,
    pub components: Vec<ComponentDescriptor>,
    pub layout: LayoutConfig,
}

impl IntentPattern {
    pub fn new(
        name: &str,
        keywords: &[&str],
        layout: LayoutConfig,
        components: Vec<ComponentDescriptor>,
    ) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            components,
            layout,
        }
    }

    /// Number of keywords occurring in an already lower-cased intent
    pub fn score(&self, intent_lower: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| intent_lower.contains(k.as_str()))
            .count()
    }

    /// Whether dynamic form fields apply to this pattern
    pub fn is_form(&self) -> bool {
        self.keywords
            .iter()
            .any(|k| FORM_KEYWORDS.contains(&k.as_str()))
    }
}

/// Best pattern for an intent, or `None` when no keyword matches
pub fn match_intent<'a>(patterns: &'a [IntentPattern], intent: &str) -> Option<&'a IntentPattern> {
    let lower = intent.to_lowercase();
    let mut best: Option<(&IntentPattern, usize)> = None;

    for pattern in patterns {
        let score = pattern.score(&lower);
        // Strictly greater keeps the earliest pattern on ties
        if score > best.map(|(_, s)| s).unwrap_or(0) {
            best = Some((pattern, score));
        }
    }

    best.map(|(pattern, _)| pattern)
}

fn stack(gap: &str) -> LayoutConfig {
    LayoutConfig::new(LayoutType::Stack, Some(Direction::Column), Some(gap))
}

fn row(gap: &str) -> LayoutConfig {
    LayoutConfig::new(LayoutType::Flex, Some(Direction::Row), Some(gap))
}

fn labelled_input(id: &str, label: &str, kind: &str, placeholder: Option<&str>) -> Vec<ComponentDescriptor> {
    let mut input = ComponentDescriptor::new("Input")
        .with_prop("id", id)
        .with_prop("type", kind);
    if let Some(placeholder) = placeholder {
        input = input.with_prop("placeholder", placeholder);
    }
    vec![
        ComponentDescriptor::new("Label")
            .with_prop("htmlFor", id)
            .in_slot(Slot::Content)
            .with_children(label),
        input.in_slot(Slot::Content),
    ]
}

fn card_shell(title: &str, description: Option<&str>) -> Vec<ComponentDescriptor> {
    let mut shell = vec![
        ComponentDescriptor::new("Card").in_slot(Slot::Wrapper),
        ComponentDescriptor::new("CardHeader").in_slot(Slot::Header),
        ComponentDescriptor::new("CardTitle")
            .in_slot(Slot::Header)
            .with_children(title),
    ];
    if let Some(description) = description {
        shell.push(
            ComponentDescriptor::new("CardDescription")
                .in_slot(Slot::Header)
                .with_children(description),
        );
    }
    shell.push(ComponentDescriptor::new("CardContent").in_slot(Slot::Content));
    shell
}

fn card_footer(actions: Vec<ComponentDescriptor>) -> Vec<ComponentDescriptor> {
    let mut footer = vec![ComponentDescriptor::new("CardFooter").in_slot(Slot::Footer)];
    footer.extend(actions.into_iter().map(|a| a.in_slot(Slot::Footer)));
    footer
}

fn login_form() -> IntentPattern {
    let mut components = card_shell("Sign in", Some("Enter your email and password to continue"));
    components.extend(labelled_input("email", "Email", "email", Some("you@example.com")));
    components.extend(labelled_input("password", "Password", "password", None));
    components.extend(card_footer(vec![ComponentDescriptor::new("Button")
        .with_prop("type", "submit")
        .with_prop("className", "w-full")
        .with_children("Sign in")]));

    IntentPattern::new(
        "login-form",
        &["login", "log in", "sign in", "signin", "authentication"],
        stack("4"),
        components,
    )
}

fn signup_form() -> IntentPattern {
    let mut components = card_shell("Create an account", Some("Fill in your details to get started"));
    components.extend(labelled_input("name", "Name", "text", Some("Jane Doe")));
    components.extend(labelled_input("email", "Email", "email", Some("you@example.com")));
    components.extend(labelled_input("password", "Password", "password", None));
    components.extend(card_footer(vec![ComponentDescriptor::new("Button")
        .with_prop("type", "submit")
        .with_prop("className", "w-full")
        .with_children("Create account")]));

    IntentPattern::new(
        "signup-form",
        &["signup", "sign up", "register", "registration", "create account"],
        stack("4"),
        components,
    )
}

fn contact_form() -> IntentPattern {
    let mut components = card_shell("Contact us", Some("We usually reply within one business day"));
    components.extend(card_footer(vec![ComponentDescriptor::new("Button")
        .with_prop("type", "submit")
        .with_children("Send")]));

    IntentPattern::new(
        "contact-form",
        &["form", "contact", "feedback", "data entry", "survey", "inquiry"],
        stack("4"),
        components,
    )
}

fn navigation_header() -> IntentPattern {
    let link = |label: &str| {
        ComponentDescriptor::new("Button")
            .with_prop("variant", "ghost")
            .with_children(label)
    };

    IntentPattern::new(
        "navigation-header",
        &["navigation", "nav", "header", "navbar", "menu", "topbar"],
        row("4"),
        vec![
            link("Home"),
            link("Products"),
            link("Pricing"),
            link("About"),
            ComponentDescriptor::new("Button").with_children("Get started"),
        ],
    )
}

fn settings_panel() -> IntentPattern {
    let mut components = card_shell("Settings", Some("Manage your account preferences"));
    components.extend(labelled_input("display-name", "Display name", "text", None));
    components.push(
        ComponentDescriptor::new("Label")
            .with_prop("htmlFor", "theme")
            .in_slot(Slot::Content)
            .with_children("Theme"),
    );
    components.push(
        ComponentDescriptor::new("Select")
            .with_prop("id", "theme")
            .with_prop("placeholder", "Select a theme")
            .in_slot(Slot::Content),
    );
    components.push(
        ComponentDescriptor::new("Switch")
            .with_prop("id", "notifications")
            .with_prop("aria-label", "Email notifications")
            .in_slot(Slot::Content),
    );
    components.extend(card_footer(vec![
        ComponentDescriptor::new("Button")
            .with_prop("variant", "outline")
            .with_children("Cancel"),
        ComponentDescriptor::new("Button").with_children("Save changes"),
    ]));

    IntentPattern::new(
        "settings-panel",
        &["settings", "preferences", "configuration", "account", "profile"],
        stack("6"),
        components,
    )
}

fn confirmation_modal() -> IntentPattern {
    IntentPattern::new(
        "confirmation-modal",
        &["modal", "dialog", "popup", "confirm", "delete"],
        stack("4"),
        vec![
            ComponentDescriptor::new("Modal").in_slot(Slot::Wrapper),
            ComponentDescriptor::new("Button")
                .with_prop("variant", "outline")
                .in_slot(Slot::Trigger)
                .with_children("Open dialog"),
            ComponentDescriptor::new("Modal.Content")
                .with_prop("title", "Are you sure?")
                .with_prop("description", "This action cannot be undone.")
                .in_slot(Slot::Content),
            ComponentDescriptor::new("Button")
                .with_prop("variant", "outline")
                .in_slot(Slot::Actions)
                .with_children("Cancel"),
            ComponentDescriptor::new("Button")
                .with_prop("variant", "destructive")
                .in_slot(Slot::Actions)
                .with_children("Continue"),
        ],
    )
}

fn search_bar() -> IntentPattern {
    IntentPattern::new(
        "search-bar",
        &["search", "filter", "find", "lookup"],
        row("2"),
        vec![
            ComponentDescriptor::new("Input")
                .with_prop("type", "search")
                .with_prop("aria-label", "Search")
                .with_prop("placeholder", "Search..."),
            ComponentDescriptor::new("Button")
                .with_prop("type", "submit")
                .with_children("Search"),
        ],
    )
}

fn product_card() -> IntentPattern {
    let mut components = card_shell("Product name", Some("A short description of the product"));
    components.push(
        ComponentDescriptor::new("Badge")
            .in_slot(Slot::Content)
            .with_children("New"),
    );
    components.extend(card_footer(vec![ComponentDescriptor::new("Button")
        .with_prop("className", "w-full")
        .with_children("Add to cart")]));

    IntentPattern::new(
        "product-card",
        &["product", "card", "pricing", "item", "tile"],
        stack("4"),
        components,
    )
}

/// Built-in patterns in declaration (tie-break) order
pub fn builtin_patterns() -> Vec<IntentPattern> {
    vec![
        login_form(),
        signup_form(),
        contact_form(),
        navigation_header(),
        settings_panel(),
        confirmation_modal(),
        search_bar(),
        product_card(),
    ]
}
