// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Core data model shared by the composition and accessibility engines.
//!
//! A [`ComponentDescriptor`] is the unit that flows through every subsystem:
//! intent templates are lists of descriptors, the slot assembler renders
//! them, the token collector reads their names, and the accessibility rules
//! audit them. Markup parsed from source text is normalized into the same
//! shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open attribute bag for a component.
///
/// Keys are not validated against any schema. Iteration order is insertion
/// order, which is also the order attributes are serialized into markup.
pub type Props = IndexMap<String, Value>;

/// Structural region a descriptor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Header,
    Content,
    Footer,
    Trigger,
    Wrapper,
    Items,
    Actions,
    Icon,
    Message,
    Sidebar,
    Main,
    Stats,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Header => "header",
            Slot::Content => "content",
            Slot::Footer => "footer",
            Slot::Trigger => "trigger",
            Slot::Wrapper => "wrapper",
            Slot::Items => "items",
            Slot::Actions => "actions",
            Slot::Icon => "icon",
            Slot::Message => "message",
            Slot::Sidebar => "sidebar",
            Slot::Main => "main",
            Slot::Stats => "stats",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single component instance: name, attributes, region and text content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Component identifier (e.g. "Button", "Modal.Content", "img")
    pub name: String,
    /// Attributes in insertion order
    #[serde(default)]
    pub props: Props,
    /// Structural region, `None` when unslotted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
    /// Plain text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
}

impl ComponentDescriptor {
    /// Create a descriptor with no props, slot or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: Props::new(),
            slot: None,
            children: None,
        }
    }

    /// Append a prop, keeping insertion order
    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    /// Place the descriptor in a slot
    pub fn in_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Set text content
    pub fn with_children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Whether the attribute key is present at all (regardless of value)
    pub fn has_prop(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Whether any of the given attribute keys is present
    pub fn has_any_prop(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.props.contains_key(*k))
    }

    /// String value of an attribute, if present and a string
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    /// Whether the descriptor has non-whitespace text content
    pub fn has_text(&self) -> bool {
        self.children
            .as_deref()
            .map(|c| !c.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Layout family of a composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    Flex,
    Grid,
    #[default]
    Stack,
}

impl std::fmt::Display for LayoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutType::Flex => write!(f, "flex"),
            LayoutType::Grid => write!(f, "grid"),
            LayoutType::Stack => write!(f, "stack"),
        }
    }
}

/// Main axis of a flex or stack layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

/// Layout shape attached to an intent pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub kind: LayoutType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

impl LayoutConfig {
    pub fn new(kind: LayoutType, direction: Option<Direction>, gap: Option<&str>) -> Self {
        Self {
            kind,
            direction,
            gap: gap.map(String::from),
        }
    }
}

/// Where generated code is going to live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
    /// Full page: output is wrapped in a page container
    Page,
    /// A section of an existing page
    #[default]
    Section,
    /// A standalone component
    Component,
}

impl std::fmt::Display for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderContext::Page => write!(f, "page"),
            RenderContext::Section => write!(f, "section"),
            RenderContext::Component => write!(f, "component"),
        }
    }
}

impl std::str::FromStr for RenderContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page" => Ok(RenderContext::Page),
            "section" => Ok(RenderContext::Section),
            "component" => Ok(RenderContext::Component),
            other => Err(format!("Unknown context: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_keep_insertion_order() {
        let d = ComponentDescriptor::new("Input")
            .with_prop("type", "email")
            .with_prop("id", "email")
            .with_prop("aria-label", "Email");
        let keys: Vec<_> = d.props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "id", "aria-label"]);
    }

    #[test]
    fn test_missing_and_falsy_props_differ() {
        let d = ComponentDescriptor::new("img").with_prop("alt", "");
        assert!(d.has_prop("alt"));
        assert!(!d.has_prop("src"));
        assert_eq!(d.prop_str("alt"), Some(""));
    }

    #[test]
    fn test_descriptor_deserializes_from_json() {
        let d: ComponentDescriptor = serde_json::from_str(
            r#"{"name":"Button","props":{"variant":"ghost","disabled":true},"slot":"footer","children":"Go"}"#,
        )
        .unwrap();
        assert_eq!(d.slot, Some(Slot::Footer));
        assert_eq!(d.props.get_index(0).unwrap().0, "variant");
        assert!(d.has_text());
    }

    #[test]
    fn test_whitespace_children_is_not_text() {
        let d = ComponentDescriptor::new("Button").with_children("   ");
        assert!(!d.has_text());
    }

    #[test]
    fn test_layout_serializes_type_key() {
        let layout = LayoutConfig::new(LayoutType::Flex, Some(Direction::Row), Some("4"));
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["type"], "flex");
        assert_eq!(json["direction"], "row");
        assert_eq!(json["gap"], "4");
    }

    #[test]
    fn test_context_parse() {
        assert_eq!("PAGE".parse::<RenderContext>().unwrap(), RenderContext::Page);
        assert!("screen".parse::<RenderContext>().is_err());
    }
}
