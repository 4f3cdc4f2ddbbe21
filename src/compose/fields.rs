// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dynamic form field extraction.
//!
//! Six independent checks look for field hints in the intent text. Every
//! check runs, so "name and email" yields both fields, and results follow
//! check order rather than word order.

use crate::types::{ComponentDescriptor, Slot};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Kind of form field detected in an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Password,
    Text,
    Tel,
    Textarea,
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Text => "text",
            FieldKind::Tel => "tel",
            FieldKind::Textarea => "textarea",
            FieldKind::Date => "date",
        }
    }

    /// Element id and visible label for the generated field
    fn id_and_label(&self) -> (&'static str, &'static str) {
        match self {
            FieldKind::Email => ("email", "Email"),
            FieldKind::Password => ("password", "Password"),
            FieldKind::Text => ("name", "Name"),
            FieldKind::Tel => ("phone", "Phone"),
            FieldKind::Textarea => ("message", "Message"),
            FieldKind::Date => ("date", "Date"),
        }
    }

    fn placeholder(&self) -> Option<&'static str> {
        match self {
            FieldKind::Email => Some("you@example.com"),
            FieldKind::Text => Some("Jane Doe"),
            FieldKind::Tel => Some("+1 555 000 0000"),
            FieldKind::Textarea => Some("Type your message here"),
            FieldKind::Password | FieldKind::Date => None,
        }
    }

    /// Label + control pair placed in the content slot
    pub fn descriptors(&self) -> Vec<ComponentDescriptor> {
        let (id, label) = self.id_and_label();
        let label = ComponentDescriptor::new("Label")
            .with_prop("htmlFor", id)
            .in_slot(Slot::Content)
            .with_children(label);

        let mut control = match self {
            FieldKind::Textarea => ComponentDescriptor::new("Textarea").with_prop("id", id),
            other => ComponentDescriptor::new("Input")
                .with_prop("id", id)
                .with_prop("type", other.as_str()),
        };
        if let Some(placeholder) = self.placeholder() {
            control = control.with_prop("placeholder", placeholder);
        }

        vec![label, control.in_slot(Slot::Content)]
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field checks in declaration order
static FIELD_CHECKS: LazyLock<Vec<(Regex, FieldKind)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(?i)\be-?mail").unwrap(), FieldKind::Email),
        (Regex::new(r"(?i)\bpassword").unwrap(), FieldKind::Password),
        (Regex::new(r"(?i)name").unwrap(), FieldKind::Text),
        (Regex::new(r"(?i)\bphone").unwrap(), FieldKind::Tel),
        (Regex::new(r"(?i)\b(message|comment)").unwrap(), FieldKind::Textarea),
        (Regex::new(r"(?i)\bdate\b").unwrap(), FieldKind::Date),
    ]
});

/// Field kinds hinted at by the intent, in check order
pub fn extract_form_fields(intent: &str) -> Vec<FieldKind> {
    FIELD_CHECKS
        .iter()
        .filter(|(regex, _)| regex.is_match(intent))
        .map(|(_, kind)| *kind)
        .collect()
}

/// Insert field descriptors into a component list.
///
/// Fields go right after the first `CardContent` in the content slot. Without
/// that anchor they go two positions before the end, ahead of a trailing
/// footer and button.
pub fn insert_fields(components: &mut Vec<ComponentDescriptor>, fields: Vec<ComponentDescriptor>) {
    let index = components
        .iter()
        .position(|c| c.name == "CardContent" && c.slot == Some(Slot::Content))
        .map(|i| i + 1)
        .unwrap_or_else(|| components.len().saturating_sub(2));

    components.splice(index..index, fields);
}
