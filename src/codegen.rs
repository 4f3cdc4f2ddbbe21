// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Single-component code generation.
//!
//! Renders one component with the same serializer the composition engine
//! uses and works out the import line and third-party packages it needs.

use crate::compose::render_component;
use crate::error::{ComposerError, Result};
use crate::types::{ComponentDescriptor, Props};
use serde::{Deserialize, Serialize};

/// Frameworks `get_code` can target
pub const SUPPORTED_FRAMEWORKS: &[&str] = &["react"];

/// Generated markup plus what it needs to compile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub code: String,
    pub imports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// Names exported by a component family module
fn family_exports(family: &str) -> &'static [&'static str] {
    match family {
        "Card" => &["Card", "CardHeader", "CardTitle", "CardDescription", "CardContent", "CardFooter"],
        "Modal" => &["Modal"],
        "Select" => &["Select", "SelectTrigger", "SelectValue", "SelectContent", "SelectItem"],
        _ => &[],
    }
}

/// Third-party packages a component family relies on
fn family_dependencies(family: &str) -> &'static [&'static str] {
    match family {
        "Button" => &["@radix-ui/react-slot"],
        "Modal" => &["@radix-ui/react-dialog"],
        "Select" => &["@radix-ui/react-select"],
        _ => &[],
    }
}

/// Family a component belongs to: `Modal.Content` is `Modal`, `CardTitle` is `Card`
fn family_of(component: &str) -> &str {
    let base = component.split('.').next().unwrap_or(component);
    if base != "Card" && base.starts_with("Card") {
        return "Card";
    }
    base
}

/// The import line for a component
pub fn import_line(component: &str, import_source: &str) -> String {
    let family = family_of(component);
    let exports = family_exports(family);
    let names = if exports.is_empty() {
        family.to_string()
    } else {
        exports.join(", ")
    };

    format!(
        "import {{ {} }} from \"{}/{}\";",
        names,
        import_source.trim_end_matches('/'),
        family.to_lowercase()
    )
}

/// Generate code for one component.
///
/// `variant` is appended as the last prop unless `props` already carries one.
/// Only `react` is supported.
pub fn get_code(
    component: &str,
    props: Props,
    children: Option<&str>,
    framework: &str,
    variant: Option<&str>,
    import_source: &str,
) -> Result<GeneratedCode> {
    if component.trim().is_empty() {
        return Err(ComposerError::InvalidInput("component name must not be empty".to_string()));
    }
    if !SUPPORTED_FRAMEWORKS.contains(&framework.to_lowercase().as_str()) {
        return Err(ComposerError::UnsupportedFramework(framework.to_string()));
    }

    let mut descriptor = ComponentDescriptor::new(component.trim());
    descriptor.props = props;
    if let Some(variant) = variant {
        if !descriptor.has_prop("variant") {
            descriptor.props.insert("variant".to_string(), variant.into());
        }
    }
    descriptor.children = children.map(String::from);

    let family = family_of(&descriptor.name);

    Ok(GeneratedCode {
        code: render_component(&descriptor),
        imports: vec![import_line(&descriptor.name, import_source)],
        dependencies: family_dependencies(family).iter().map(|d| d.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SOURCE: &str = "@/components/ui";

    #[test]
    fn test_button_with_variant() {
        let generated = get_code("Button", Props::new(), Some("Save"), "react", Some("outline"), SOURCE).unwrap();
        assert_eq!(generated.code, "<Button variant=\"outline\">Save</Button>");
        assert_eq!(generated.imports, vec!["import { Button } from \"@/components/ui/button\";"]);
        assert_eq!(generated.dependencies, vec!["@radix-ui/react-slot"]);
    }

    #[test]
    fn test_variant_does_not_override_prop() {
        let mut props = Props::new();
        props.insert("variant".to_string(), json!("ghost"));
        props.insert("size".to_string(), json!("sm"));
        let generated = get_code("Button", props, None, "react", Some("outline"), SOURCE).unwrap();
        assert_eq!(generated.code, "<Button variant=\"ghost\" size=\"sm\" />");
    }

    #[test]
    fn test_variant_appended_last() {
        let mut props = Props::new();
        props.insert("size".to_string(), json!("lg"));
        let generated = get_code("Button", props, None, "react", Some("destructive"), SOURCE).unwrap();
        assert_eq!(generated.code, "<Button size=\"lg\" variant=\"destructive\" />");
    }

    #[test]
    fn test_card_family_imports() {
        let generated = get_code("CardTitle", Props::new(), Some("Hi"), "react", None, SOURCE).unwrap();
        assert!(generated.imports[0].starts_with("import { Card, CardHeader, CardTitle"));
        assert!(generated.imports[0].ends_with("from \"@/components/ui/card\";"));
        assert!(generated.dependencies.is_empty());
    }

    #[test]
    fn test_modal_subcomponent() {
        let generated = get_code("Modal.Content", Props::new(), None, "react", None, SOURCE).unwrap();
        assert_eq!(generated.code, "<Modal.Content />");
        assert_eq!(generated.imports, vec!["import { Modal } from \"@/components/ui/modal\";"]);
        assert_eq!(generated.dependencies, vec!["@radix-ui/react-dialog"]);
    }

    #[test]
    fn test_unknown_component_still_renders() {
        let generated = get_code("Tooltip", Props::new(), None, "react", None, "~/ui/").unwrap();
        assert_eq!(generated.code, "<Tooltip />");
        assert_eq!(generated.imports, vec!["import { Tooltip } from \"~/ui/tooltip\";"]);
    }

    #[test]
    fn test_unsupported_framework() {
        let err = get_code("Button", Props::new(), None, "vue", None, SOURCE).unwrap_err();
        assert!(matches!(err, ComposerError::UnsupportedFramework(ref f) if f == "vue"));
    }

    #[test]
    fn test_empty_dependencies_not_serialized() {
        let generated = get_code("Input", Props::new(), None, "React", None, SOURCE).unwrap();
        let json = serde_json::to_value(&generated).unwrap();
        assert!(json.get("dependencies").is_none());
    }
}
