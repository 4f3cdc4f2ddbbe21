// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Slot assembler: buckets descriptors by region and renders markup.
//!
//! Rendering picks one of three layout families, checked in order:
//!
//! 1. a `Card` in the wrapper slot renders a Card/CardHeader/CardContent/CardFooter skeleton
//! 2. a `Modal` in the wrapper slot renders a Modal/Modal.Trigger/Modal.Content skeleton
//! 3. anything else renders the unslotted members inside one flat container

use crate::types::{ComponentDescriptor, Direction, LayoutConfig, LayoutType, Props, RenderContext, Slot};
use serde_json::Value;

const INDENT: &str = "  ";

/// Descriptors partitioned by structural region
#[derive(Debug, Default)]
pub struct SlotBuckets<'a> {
    pub wrapper: Vec<&'a ComponentDescriptor>,
    pub header: Vec<&'a ComponentDescriptor>,
    pub content: Vec<&'a ComponentDescriptor>,
    pub footer: Vec<&'a ComponentDescriptor>,
    pub trigger: Vec<&'a ComponentDescriptor>,
    /// No slot, or a slot outside the five buckets above
    pub unslotted: Vec<&'a ComponentDescriptor>,
}

/// Partition components into the six known buckets, preserving order
pub fn group_by_slot(components: &[ComponentDescriptor]) -> SlotBuckets<'_> {
    let mut buckets = SlotBuckets::default();
    for component in components {
        let bucket = match component.slot {
            Some(Slot::Wrapper) => &mut buckets.wrapper,
            Some(Slot::Header) => &mut buckets.header,
            Some(Slot::Content) => &mut buckets.content,
            Some(Slot::Footer) => &mut buckets.footer,
            Some(Slot::Trigger) => &mut buckets.trigger,
            _ => &mut buckets.unslotted,
        };
        bucket.push(component);
    }
    buckets
}

/// Serialize one prop.
///
/// Strings are quoted, `true` is a bare attribute, `false` is an explicit
/// expression, everything else is a JSON expression.
pub fn format_prop(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) => format!("{}=\"{}\"", key, s),
        Value::Bool(true) => key.to_string(),
        Value::Bool(false) => format!("{}={{false}}", key),
        other => format!("{}={{{}}}", key, other),
    }
}

/// Props rendered in insertion order, each preceded by a space
fn attributes(props: &Props) -> String {
    props
        .iter()
        .map(|(k, v)| format!(" {}", format_prop(k, v)))
        .collect()
}

fn open_tag(component: &ComponentDescriptor) -> String {
    format!("<{}{}>", component.name, attributes(&component.props))
}

/// Render a single component on one line
pub fn render_component(component: &ComponentDescriptor) -> String {
    let attrs = attributes(&component.props);
    match &component.children {
        Some(children) => format!("<{}{}>{}</{}>", component.name, attrs, children, component.name),
        None => format!("<{}{} />", component.name, attrs),
    }
}

fn push_line(out: &mut Vec<String>, depth: usize, line: &str) {
    out.push(format!("{}{}", INDENT.repeat(depth), line));
}

/// Render a Card sub-section; the structural placeholder itself is skipped
fn push_card_section(
    out: &mut Vec<String>,
    section: &str,
    members: &[&ComponentDescriptor],
) {
    if members.is_empty() {
        return;
    }
    let placeholder = members.iter().find(|m| m.name == section);
    let children: Vec<_> = members.iter().filter(|m| m.name != section).collect();

    if children.is_empty() {
        let empty = placeholder
            .map(|p| render_component(p))
            .unwrap_or_else(|| format!("<{} />", section));
        push_line(out, 1, &empty);
        return;
    }

    let open = placeholder
        .map(|p| open_tag(p))
        .unwrap_or_else(|| format!("<{}>", section));
    push_line(out, 1, &open);
    for child in children {
        push_line(out, 2, &render_component(child));
    }
    push_line(out, 1, &format!("</{}>", section));
}

fn render_card(card: &ComponentDescriptor, buckets: &SlotBuckets<'_>) -> String {
    let mut out = Vec::new();
    out.push(open_tag(card));

    push_card_section(&mut out, "CardHeader", &buckets.header);

    let mut content = buckets.content.clone();
    content.extend(buckets.unslotted.iter().copied());
    push_card_section(&mut out, "CardContent", &content);

    push_card_section(&mut out, "CardFooter", &buckets.footer);

    out.push(format!("</{}>", card.name));
    out.join("\n")
}

fn render_modal(modal: &ComponentDescriptor, buckets: &SlotBuckets<'_>) -> String {
    let mut out = Vec::new();
    out.push(open_tag(modal));

    push_line(&mut out, 1, "<Modal.Trigger asChild>");
    for trigger in &buckets.trigger {
        push_line(&mut out, 2, &render_component(trigger));
    }
    push_line(&mut out, 1, "</Modal.Trigger>");

    let content_open = buckets
        .content
        .iter()
        .find(|c| c.name == "Modal.Content")
        .map(|c| open_tag(c))
        .unwrap_or_else(|| "<Modal.Content>".to_string());
    push_line(&mut out, 1, &content_open);
    push_line(&mut out, 2, "{/* Modal content */}");
    push_line(&mut out, 1, "</Modal.Content>");

    out.push(format!("</{}>", modal.name));
    out.join("\n")
}

/// Container class for the flat layout.
///
/// Only `flex` layouts produce classes here; grid and stack get an empty
/// class string.
pub fn flat_layout_class(layout: &LayoutConfig) -> String {
    if layout.kind != LayoutType::Flex {
        return String::new();
    }
    let mut class = String::from("flex");
    match layout.direction {
        Some(Direction::Row) => class.push_str(" flex-row"),
        Some(Direction::Column) => class.push_str(" flex-col"),
        None => {}
    }
    if let Some(gap) = &layout.gap {
        class.push_str(&format!(" gap-{}", gap));
    }
    class
}

fn render_flat(layout: &LayoutConfig, buckets: &SlotBuckets<'_>) -> String {
    let mut out = Vec::new();
    out.push(format!("<div className=\"{}\">", flat_layout_class(layout)));
    for member in &buckets.unslotted {
        push_line(&mut out, 1, &render_component(member));
    }
    out.push("</div>".to_string());
    out.join("\n")
}

/// Wrap a block in a page container, indenting every inner line once
pub fn wrap_page(code: &str) -> String {
    format!(
        "<div className=\"container mx-auto py-8\">\n{}{}\n</div>",
        INDENT,
        code.replace('\n', &format!("\n{}", INDENT))
    )
}

/// Assemble markup for a composition
pub fn generate_code(
    layout: &LayoutConfig,
    components: &[ComponentDescriptor],
    context: RenderContext,
) -> String {
    let buckets = group_by_slot(components);

    let code = if let Some(card) = buckets.wrapper.iter().find(|w| w.name == "Card") {
        render_card(card, &buckets)
    } else if let Some(modal) = buckets.wrapper.iter().find(|w| w.name == "Modal") {
        render_modal(modal, &buckets)
    } else {
        render_flat(layout, &buckets)
    };

    match context {
        RenderContext::Page => wrap_page(&code),
        RenderContext::Section | RenderContext::Component => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_prop_rules() {
        assert_eq!(format_prop("type", &json!("email")), "type=\"email\"");
        assert_eq!(format_prop("disabled", &json!(true)), "disabled");
        assert_eq!(format_prop("open", &json!(false)), "open={false}");
        assert_eq!(format_prop("rows", &json!(4)), "rows={4}");
        assert_eq!(format_prop("items", &json!(["a", "b"])), "items={[\"a\",\"b\"]}");
    }

    #[test]
    fn test_nested_object_keeps_insertion_order() {
        assert_eq!(
            format_prop("style", &json!({"zIndex": 10, "color": "red"})),
            "style={{\"zIndex\":10,\"color\":\"red\"}}"
        );
    }

    #[test]
    fn test_render_self_closing_and_paired() {
        let input = ComponentDescriptor::new("Input").with_prop("type", "email");
        assert_eq!(render_component(&input), "<Input type=\"email\" />");

        let button = ComponentDescriptor::new("Button")
            .with_prop("variant", "ghost")
            .with_children("Home");
        assert_eq!(render_component(&button), "<Button variant=\"ghost\">Home</Button>");

        assert_eq!(render_component(&ComponentDescriptor::new("Separator")), "<Separator />");
    }

    #[test]
    fn test_render_keeps_prop_order() {
        let input = ComponentDescriptor::new("Input")
            .with_prop("placeholder", "Email")
            .with_prop("id", "email")
            .with_prop("type", "email");
        assert_eq!(
            render_component(&input),
            "<Input placeholder=\"Email\" id=\"email\" type=\"email\" />"
        );
    }

    #[test]
    fn test_group_by_slot_sends_other_slots_to_unslotted() {
        let components = vec![
            ComponentDescriptor::new("Card").in_slot(Slot::Wrapper),
            ComponentDescriptor::new("Badge").in_slot(Slot::Icon),
            ComponentDescriptor::new("Button"),
            ComponentDescriptor::new("Button").in_slot(Slot::Footer),
        ];
        let buckets = group_by_slot(&components);
        assert_eq!(buckets.wrapper.len(), 1);
        assert_eq!(buckets.footer.len(), 1);
        assert_eq!(buckets.unslotted.len(), 2);
        assert_eq!(buckets.unslotted[0].name, "Badge");
    }

    #[test]
    fn test_card_skeleton_skips_placeholders() {
        let components = vec![
            ComponentDescriptor::new("Card").in_slot(Slot::Wrapper),
            ComponentDescriptor::new("CardHeader").in_slot(Slot::Header),
            ComponentDescriptor::new("CardTitle").in_slot(Slot::Header).with_children("Hi"),
            ComponentDescriptor::new("CardContent").in_slot(Slot::Content),
            ComponentDescriptor::new("Input").in_slot(Slot::Content).with_prop("id", "x"),
            ComponentDescriptor::new("CardFooter").in_slot(Slot::Footer),
            ComponentDescriptor::new("Button").in_slot(Slot::Footer).with_children("Go"),
        ];
        let code = generate_code(&LayoutConfig::default(), &components, RenderContext::Section);
        let expected = "<Card>\n  <CardHeader>\n    <CardTitle>Hi</CardTitle>\n  </CardHeader>\n  <CardContent>\n    <Input id=\"x\" />\n  </CardContent>\n  <CardFooter>\n    <Button>Go</Button>\n  </CardFooter>\n</Card>";
        assert_eq!(code, expected);
        assert_eq!(code.matches("<CardHeader>").count(), 1);
    }

    #[test]
    fn test_card_empty_section_self_closes() {
        let components = vec![
            ComponentDescriptor::new("Card").in_slot(Slot::Wrapper),
            ComponentDescriptor::new("CardContent").in_slot(Slot::Content),
        ];
        let code = generate_code(&LayoutConfig::default(), &components, RenderContext::Section);
        assert_eq!(code, "<Card>\n  <CardContent />\n</Card>");
    }

    #[test]
    fn test_modal_skeleton_uses_trigger_members() {
        let components = vec![
            ComponentDescriptor::new("Modal").in_slot(Slot::Wrapper),
            ComponentDescriptor::new("Button").in_slot(Slot::Trigger).with_children("Open"),
            ComponentDescriptor::new("Modal.Content")
                .in_slot(Slot::Content)
                .with_prop("title", "Confirm"),
            ComponentDescriptor::new("Input").in_slot(Slot::Content),
        ];
        let code = generate_code(&LayoutConfig::default(), &components, RenderContext::Section);
        assert!(code.starts_with("<Modal>\n  <Modal.Trigger asChild>\n    <Button>Open</Button>"));
        assert!(code.contains("<Modal.Content title=\"Confirm\">"));
        assert!(code.contains("{/* Modal content */}"));
        assert!(!code.contains("<Input"));
        assert!(code.ends_with("</Modal>"));
    }

    #[test]
    fn test_flat_flex_class() {
        let layout = LayoutConfig::new(LayoutType::Flex, Some(Direction::Row), Some("4"));
        let components = vec![ComponentDescriptor::new("Button").with_children("Home")];
        let code = generate_code(&layout, &components, RenderContext::Section);
        assert_eq!(
            code,
            "<div className=\"flex flex-row gap-4\">\n  <Button>Home</Button>\n</div>"
        );
    }

    #[test]
    fn test_flat_grid_has_empty_class() {
        let layout = LayoutConfig::new(LayoutType::Grid, None, Some("4"));
        assert_eq!(flat_layout_class(&layout), "");
    }

    #[test]
    fn test_page_context_indents_every_line() {
        let layout = LayoutConfig::new(LayoutType::Flex, Some(Direction::Column), None);
        let components = vec![ComponentDescriptor::new("Button").with_children("A")];
        let code = generate_code(&layout, &components, RenderContext::Page);
        assert_eq!(
            code,
            "<div className=\"container mx-auto py-8\">\n  <div className=\"flex flex-col\">\n    <Button>A</Button>\n  </div>\n</div>"
        );
    }
}
