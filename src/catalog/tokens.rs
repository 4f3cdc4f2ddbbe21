// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Design token catalog.
//!
//! Primitive tokens (palette, spacing, type scale, radii, shadows) are the
//! same for every theme. Semantic tokens are colors and have one value per
//! theme.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Primitive token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    Radius,
    Shadow,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Typography,
        TokenCategory::Radius,
        TokenCategory::Shadow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "typography",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadow => "shadow",
        }
    }
}

impl std::str::FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "color" | "colors" => Ok(TokenCategory::Color),
            "spacing" => Ok(TokenCategory::Spacing),
            "typography" => Ok(TokenCategory::Typography),
            "radius" => Ok(TokenCategory::Radius),
            "shadow" | "shadows" => Ok(TokenCategory::Shadow),
            other => Err(format!("Unknown token category: {}", other)),
        }
    }
}

/// Theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Token name to value
pub type TokenMap = IndexMap<String, String>;

/// Tokens selected by a `get_tokens` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TokenCategory>,
    pub primitive: IndexMap<TokenCategory, TokenMap>,
    pub semantic: TokenMap,
}

/// Read-only token lookup
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    primitive: IndexMap<TokenCategory, TokenMap>,
    light: TokenMap,
    dark: TokenMap,
}

impl TokenCatalog {
    /// Build a catalog from explicit tables
    pub fn new(primitive: IndexMap<TokenCategory, TokenMap>, light: TokenMap, dark: TokenMap) -> Self {
        Self { primitive, light, dark }
    }

    /// The built-in design system tokens
    pub fn builtin() -> Self {
        let mut primitive = IndexMap::new();
        primitive.insert(TokenCategory::Color, table(PALETTE));
        primitive.insert(TokenCategory::Spacing, table(SPACING));
        primitive.insert(TokenCategory::Typography, table(TYPOGRAPHY));
        primitive.insert(TokenCategory::Radius, table(RADIUS));
        primitive.insert(TokenCategory::Shadow, table(SHADOW));

        Self::new(primitive, table(SEMANTIC_LIGHT), table(SEMANTIC_DARK))
    }

    /// Semantic color tokens for a theme
    pub fn semantic(&self, theme: Theme) -> &TokenMap {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Look up a single semantic token
    pub fn resolve(&self, name: &str, theme: Theme) -> Option<&str> {
        self.semantic(theme).get(name).map(String::as_str)
    }

    /// Select primitive and semantic subsets.
    ///
    /// With no category every primitive category is returned. Semantic tokens
    /// are colors, so they accompany `None` and `Color` only.
    pub fn select(&self, category: Option<TokenCategory>, theme: Theme) -> TokenSet {
        let primitive = self
            .primitive
            .iter()
            .filter(|(cat, _)| category.map(|c| c == **cat).unwrap_or(true))
            .map(|(cat, tokens)| (*cat, tokens.clone()))
            .collect();

        let semantic = match category {
            None | Some(TokenCategory::Color) => self.semantic(theme).clone(),
            Some(_) => TokenMap::new(),
        };

        TokenSet {
            theme,
            category,
            primitive,
            semantic,
        }
    }
}

fn table(entries: &[(&str, &str)]) -> TokenMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

const PALETTE: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("slate-50", "#f8fafc"),
    ("slate-100", "#f1f5f9"),
    ("slate-200", "#e2e8f0"),
    ("slate-400", "#94a3b8"),
    ("slate-500", "#64748b"),
    ("slate-800", "#1e293b"),
    ("slate-900", "#0f172a"),
    ("slate-950", "#020617"),
    ("blue-500", "#3b82f6"),
    ("blue-600", "#2563eb"),
    ("red-500", "#ef4444"),
    ("red-600", "#dc2626"),
    ("green-500", "#22c55e"),
    ("amber-500", "#f59e0b"),
];

const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("1", "0.25rem"),
    ("2", "0.5rem"),
    ("3", "0.75rem"),
    ("4", "1rem"),
    ("6", "1.5rem"),
    ("8", "2rem"),
    ("12", "3rem"),
    ("16", "4rem"),
];

const TYPOGRAPHY: &[(&str, &str)] = &[
    ("font-sans", "Inter, system-ui, sans-serif"),
    ("font-mono", "JetBrains Mono, ui-monospace, monospace"),
    ("text-xs", "0.75rem"),
    ("text-sm", "0.875rem"),
    ("text-base", "1rem"),
    ("text-lg", "1.125rem"),
    ("text-xl", "1.25rem"),
    ("text-2xl", "1.5rem"),
    ("text-4xl", "2.25rem"),
];

const RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("full", "9999px"),
];

const SHADOW: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1)"),
    ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1)"),
];

const SEMANTIC_LIGHT: &[(&str, &str)] = &[
    ("background", "#ffffff"),
    ("foreground", "#0f172a"),
    ("primary", "#2563eb"),
    ("primary-foreground", "#f8fafc"),
    ("secondary", "#f1f5f9"),
    ("secondary-foreground", "#0f172a"),
    ("destructive", "#dc2626"),
    ("destructive-foreground", "#f8fafc"),
    ("muted", "#f1f5f9"),
    ("muted-foreground", "#64748b"),
    ("accent", "#f1f5f9"),
    ("accent-foreground", "#0f172a"),
    ("card", "#ffffff"),
    ("card-foreground", "#0f172a"),
    ("popover", "#ffffff"),
    ("popover-foreground", "#0f172a"),
    ("border", "#e2e8f0"),
    ("input", "#e2e8f0"),
    ("ring", "#3b82f6"),
];

const SEMANTIC_DARK: &[(&str, &str)] = &[
    ("background", "#020617"),
    ("foreground", "#f8fafc"),
    ("primary", "#3b82f6"),
    ("primary-foreground", "#0f172a"),
    ("secondary", "#1e293b"),
    ("secondary-foreground", "#f8fafc"),
    ("destructive", "#ef4444"),
    ("destructive-foreground", "#f8fafc"),
    ("muted", "#1e293b"),
    ("muted-foreground", "#94a3b8"),
    ("accent", "#1e293b"),
    ("accent-foreground", "#f8fafc"),
    ("card", "#0f172a"),
    ("card-foreground", "#f8fafc"),
    ("popover", "#0f172a"),
    ("popover-foreground", "#f8fafc"),
    ("border", "#1e293b"),
    ("input", "#1e293b"),
    ("ring", "#2563eb"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_without_filter() {
        let set = TokenCatalog::builtin().select(None, Theme::Light);
        assert_eq!(set.primitive.len(), TokenCategory::ALL.len());
        assert!(set.semantic.contains_key("primary"));
    }

    #[test]
    fn test_spacing_has_no_semantic_tokens() {
        let set = TokenCatalog::builtin().select(Some(TokenCategory::Spacing), Theme::Dark);
        assert_eq!(set.primitive.len(), 1);
        assert!(set.primitive.contains_key(&TokenCategory::Spacing));
        assert!(set.semantic.is_empty());
    }

    #[test]
    fn test_themes_differ_on_semantic_values() {
        let catalog = TokenCatalog::builtin();
        assert_ne!(
            catalog.resolve("background", Theme::Light),
            catalog.resolve("background", Theme::Dark)
        );
    }

    #[test]
    fn test_themes_share_semantic_names() {
        let catalog = TokenCatalog::builtin();
        let light: Vec<_> = catalog.semantic(Theme::Light).keys().collect();
        let dark: Vec<_> = catalog.semantic(Theme::Dark).keys().collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Colors".parse::<TokenCategory>().unwrap(), TokenCategory::Color);
        assert!("motion".parse::<TokenCategory>().is_err());
    }
}
