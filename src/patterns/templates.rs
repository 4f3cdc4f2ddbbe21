// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Markup templates for the layout patterns.
//!
//! Templates are fixed text with `{{name}}` placeholders filled from
//! [`PatternOptions`] or per-pattern defaults.

use super::{LayoutPattern, PatternOptions};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

const FORM_LAYOUT: &str = r#"<form className="space-y-6">
  <div className="space-y-2">
    <h2 className="text-2xl font-semibold">{{title}}</h2>
    <p className="text-sm text-muted-foreground">{{description}}</p>
  </div>
  <div className="space-y-4">
    <div className="space-y-2">
      <Label htmlFor="field-1">Field label</Label>
      <Input id="field-1" placeholder="Enter a value" />
    </div>
  </div>
  <div className="flex justify-end gap-2">
    <Button variant="outline">{{secondary}}</Button>
    <Button type="submit">{{primary}}</Button>
  </div>
</form>"#;

const SPLIT_VIEW: &str = r#"<div className="flex h-full">
  <aside className="w-64 border-r p-4">
    <nav className="space-y-1" aria-label="Sections">
      <Button variant="ghost" className="w-full justify-start">Overview</Button>
      <Button variant="ghost" className="w-full justify-start">Details</Button>
    </nav>
  </aside>
  <main className="flex-1 p-6">
    <h1 className="text-2xl font-semibold">{{title}}</h1>
    <p className="text-muted-foreground">{{description}}</p>
  </main>
</div>"#;

const DASHBOARD_GRID: &str = r#"<div className="space-y-6">
  <h1 className="text-2xl font-semibold">{{title}}</h1>
  <div className="grid gap-6 grid-cols-{{columns}}">
{{cards}}
  </div>
</div>"#;

const DASHBOARD_CARD: &str = r#"    <Card>
      <CardHeader>
        <CardTitle>Metric {{index}}</CardTitle>
      </CardHeader>
      <CardContent>
        <p className="text-2xl font-bold">0</p>
      </CardContent>
    </Card>"#;

const MODAL_CONFIRM: &str = r#"<Modal>
  <Modal.Trigger asChild>
    <Button variant="destructive">{{primary}}</Button>
  </Modal.Trigger>
  <Modal.Content title="{{title}}" description="{{description}}">
    <div className="flex justify-end gap-2">
      <Button variant="outline">{{secondary}}</Button>
      <Button variant="destructive">{{primary}}</Button>
    </div>
  </Modal.Content>
</Modal>"#;

const LIST_WITH_ACTIONS: &str = r#"<div className="space-y-4">
  <div className="flex items-center justify-between">
    <h2 className="text-xl font-semibold">{{title}}</h2>
    <Button>{{primary}}</Button>
  </div>
  <p className="text-sm text-muted-foreground">{{description}}</p>
  <ul className="divide-y rounded-md border">
    <li className="flex items-center justify-between p-4">
      <span>Item 1</span>
      <div className="flex gap-2">
        <Button variant="ghost" size="sm">Edit</Button>
        <Button variant="ghost" size="sm">{{secondary}}</Button>
      </div>
    </li>
  </ul>
</div>"#;

const HERO_SECTION: &str = r#"<section className="flex flex-col items-center gap-6 py-24 text-center">
  <h1 className="text-4xl font-bold tracking-tight">{{title}}</h1>
  <p className="max-w-2xl text-lg text-muted-foreground">{{description}}</p>
  <div className="flex gap-4">
    <Button size="lg">{{primary}}</Button>
    <Button size="lg" variant="outline">{{secondary}}</Button>
  </div>
</section>"#;

const EMPTY_STATE: &str = r#"<div className="flex flex-col items-center justify-center gap-4 rounded-md border border-dashed p-12 text-center">
  <h3 className="text-lg font-semibold">{{title}}</h3>
  <p className="text-sm text-muted-foreground">{{description}}</p>
  <Button>{{primary}}</Button>
</div>"#;

/// Default text for (title, description, primary, secondary)
fn defaults(pattern: LayoutPattern) -> (&'static str, &'static str, &'static str, &'static str) {
    match pattern {
        LayoutPattern::FormLayout => ("Form title", "Fill in the fields below.", "Submit", "Cancel"),
        LayoutPattern::SplitView => ("Overview", "Select an item from the sidebar.", "Open", "Close"),
        LayoutPattern::DashboardGrid => ("Dashboard", "", "Refresh", "Export"),
        LayoutPattern::ModalConfirm => ("Are you sure?", "This action cannot be undone.", "Delete", "Cancel"),
        LayoutPattern::ListWithActions => ("Items", "Manage your items.", "Add item", "Delete"),
        LayoutPattern::HeroSection => ("Build faster", "Everything you need to ship your next idea.", "Get started", "Learn more"),
        LayoutPattern::EmptyState => ("Nothing here yet", "Create your first item to get started.", "Create item", "Import"),
    }
}

fn template(pattern: LayoutPattern) -> &'static str {
    match pattern {
        LayoutPattern::FormLayout => FORM_LAYOUT,
        LayoutPattern::SplitView => SPLIT_VIEW,
        LayoutPattern::DashboardGrid => DASHBOARD_GRID,
        LayoutPattern::ModalConfirm => MODAL_CONFIRM,
        LayoutPattern::ListWithActions => LIST_WITH_ACTIONS,
        LayoutPattern::HeroSection => HERO_SECTION,
        LayoutPattern::EmptyState => EMPTY_STATE,
    }
}

fn dashboard_cards(columns: u32) -> String {
    (1..=columns)
        .map(|i| DASHBOARD_CARD.replace("{{index}}", &i.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill a pattern template.
///
/// `columns` is the effective column count from the pattern structure; only
/// the dashboard template has a place for it. Placeholders are filled in a
/// single pass, so option text is inserted verbatim and never re-expanded.
pub fn render(pattern: LayoutPattern, options: &PatternOptions, columns: Option<u32>) -> String {
    let (title, description, primary, secondary) = defaults(pattern);
    let columns = columns.unwrap_or(3);
    let cards = if pattern == LayoutPattern::DashboardGrid {
        dashboard_cards(columns)
    } else {
        String::new()
    };

    PLACEHOLDER
        .replace_all(template(pattern), |caps: &Captures<'_>| match &caps[1] {
            "title" => options.title.as_deref().unwrap_or(title).to_string(),
            "description" => options.description.as_deref().unwrap_or(description).to_string(),
            "primary" => options.primary_action.as_deref().unwrap_or(primary).to_string(),
            "secondary" => options.secondary_action.as_deref().unwrap_or(secondary).to_string(),
            "columns" => columns.to_string(),
            "cards" => cards.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_placeholders_left() {
        for pattern in LayoutPattern::ALL {
            let code = render(pattern, &PatternOptions::default(), Some(2));
            assert!(!code.contains("{{"), "{pattern} left a placeholder:\n{code}");
        }
    }

    #[test]
    fn test_modal_confirm_uses_both_actions() {
        let options = PatternOptions {
            primary_action: Some("Revoke".to_string()),
            secondary_action: Some("Keep".to_string()),
            ..Default::default()
        };
        let code = render(LayoutPattern::ModalConfirm, &options, None);
        assert_eq!(code.matches("Revoke").count(), 2);
        assert!(code.contains(">Keep<"));
    }

    #[test]
    fn test_option_text_is_not_re_expanded() {
        let options = PatternOptions {
            title: Some("Use {{primary}} now".to_string()),
            description: Some("{{columns}} columns".to_string()),
            ..Default::default()
        };
        let code = render(LayoutPattern::HeroSection, &options, None);
        assert!(code.contains(">Use {{primary}} now</h1>"));
        assert!(code.contains(">{{columns}} columns</p>"));
        assert!(code.contains(">Get started</Button>"));
    }

    #[test]
    fn test_dashboard_card_count_follows_columns() {
        let code = render(LayoutPattern::DashboardGrid, &PatternOptions::default(), Some(2));
        assert_eq!(code.matches("<Card>").count(), 2);
        assert!(code.contains("Metric 2"));
        assert!(!code.contains("Metric 3"));
    }
}
