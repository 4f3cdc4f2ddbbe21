// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Best-effort extraction of component descriptors from JSX/HTML markup.
//!
//! Two independent regex passes: self-closing tags first, then paired tags
//! whose body is plain text. Results are concatenated in that order. Nested
//! paired tags are only matched at the innermost level, and nothing is
//! de-duplicated across passes.

use crate::types::{ComponentDescriptor, Props};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static SELF_CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<([A-Za-z][\w.]*)((?:\s+[\w:-]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|\{[^}]*\}))?)*)\s*/>"#,
    )
    .unwrap()
});

static PAIRED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<([A-Za-z][\w.]*)((?:\s+[\w:-]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|\{[^}]*\}))?)*)\s*>([^<]*)</([A-Za-z][\w.]*)\s*>"#,
    )
    .unwrap()
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w:-]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|\{([^}]*)\}))?"#).unwrap()
});

/// Parse an attribute list such as ` id="email" disabled rows={3}`.
///
/// Quoted values become strings, bare attributes become `true`, and `{...}`
/// expressions become JSON when they parse as JSON and raw strings otherwise.
pub fn parse_attributes(source: &str) -> Props {
    let mut props = Props::new();
    for caps in ATTRIBUTE.captures_iter(source) {
        let key = caps[1].to_string();
        let value = if let Some(quoted) = caps.get(2).or_else(|| caps.get(3)) {
            Value::String(quoted.as_str().to_string())
        } else if let Some(expr) = caps.get(4) {
            let expr = expr.as_str().trim();
            serde_json::from_str(expr).unwrap_or_else(|_| Value::String(expr.to_string()))
        } else {
            Value::Bool(true)
        };
        props.insert(key, value);
    }
    props
}

/// Extract component descriptors from markup text
pub fn parse_components(code: &str) -> Vec<ComponentDescriptor> {
    let mut components = Vec::new();

    for caps in SELF_CLOSING_TAG.captures_iter(code) {
        let mut component = ComponentDescriptor::new(&caps[1]);
        component.props = parse_attributes(caps.get(2).map(|m| m.as_str()).unwrap_or(""));
        components.push(component);
    }

    for caps in PAIRED_TAG.captures_iter(code) {
        if caps[1] != caps[4] {
            continue;
        }
        let mut component = ComponentDescriptor::new(&caps[1]);
        component.props = parse_attributes(caps.get(2).map(|m| m.as_str()).unwrap_or(""));
        let text = caps[3].trim();
        if !text.is_empty() {
            component.children = Some(text.to_string());
        }
        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_self_closing_tags() {
        let components = parse_components(r#"<Input id="email" type="email" /><img src="a.png"/>"#);
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].name, "Input");
        assert_eq!(components[0].prop_str("type"), Some("email"));
        assert_eq!(components[1].name, "img");
        assert!(!components[1].has_prop("alt"));
    }

    #[test]
    fn test_paired_tags_capture_text() {
        let components = parse_components("<Button variant=\"ghost\">\n  Save\n</Button>");
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].children.as_deref(), Some("Save"));
        assert_eq!(components[0].prop_str("variant"), Some("ghost"));
    }

    #[test]
    fn test_dotted_names() {
        let components = parse_components(r#"<Modal.Content title="Confirm"></Modal.Content>"#);
        assert_eq!(components[0].name, "Modal.Content");
        assert_eq!(components[0].children, None);
    }

    #[test]
    fn test_mismatched_closing_tag_is_skipped() {
        assert!(parse_components("<Button>Save</Label>").is_empty());
    }

    #[test]
    fn test_self_closing_come_before_paired() {
        let components = parse_components("<Button>Go</Button><Input aria-label=\"q\" />");
        let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Input", "Button"]);
    }

    #[test]
    fn test_attribute_value_kinds() {
        let props = parse_attributes(r#" disabled rows={3} open={false} label={"Hi"} onClick={handle} alt="""#);
        assert_eq!(props["disabled"], json!(true));
        assert_eq!(props["rows"], json!(3));
        assert_eq!(props["open"], json!(false));
        assert_eq!(props["label"], json!("Hi"));
        assert_eq!(props["onClick"], json!("handle"));
        assert_eq!(props["alt"], json!(""));
        let keys: Vec<_> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["disabled", "rows", "open", "label", "onClick", "alt"]);
    }

    #[test]
    fn test_hyphenated_attributes() {
        let components = parse_components(r#"<Select aria-labelledby="theme-label" />"#);
        assert!(components[0].has_prop("aria-labelledby"));
    }
}
