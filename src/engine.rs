// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The composition engine.
//!
//! [`Engine`] owns the read-only tables (tokens, component contracts, intent
//! patterns) and the configuration, and exposes the seven operations callers
//! use. Every operation takes `&self` and touches nothing outside its own
//! call, so one engine can serve any number of threads.

use crate::analyzers;
use crate::catalog::{ComponentContract, ComponentRegistry, SearchHit, Theme, TokenCatalog, TokenCategory, TokenSet};
use crate::codegen::{self, GeneratedCode};
use crate::compose::{self, ComposeOutcome, IntentPattern};
use crate::config::Config;
use crate::error::{ComposerError, Result};
use crate::patterns::{self, LayoutPatternResult, PatternOptions};
use crate::report::ValidationResult;
use crate::types::{ComponentDescriptor, Props, RenderContext};
use serde::Serialize;
use tracing::debug;

/// Answer to a component contract lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentSpecResult {
    Found(ComponentContract),
    NotFound { error: String, available: Vec<String> },
}

/// Ranked, truncated search results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SearchHit>,
    /// Hits before truncation
    pub total: usize,
    pub has_more: bool,
}

/// Composition and audit engine over injected tables
#[derive(Debug, Clone)]
pub struct Engine {
    tokens: TokenCatalog,
    components: ComponentRegistry,
    intents: Vec<IntentPattern>,
    config: Config,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    /// Engine over the built-in tables
    pub fn new(config: Config) -> Self {
        Self::with_tables(
            TokenCatalog::builtin(),
            ComponentRegistry::builtin(),
            compose::builtin_patterns(),
            config,
        )
    }

    /// Engine over caller-supplied tables
    pub fn with_tables(
        tokens: TokenCatalog,
        components: ComponentRegistry,
        intents: Vec<IntentPattern>,
        config: Config,
    ) -> Self {
        Self {
            tokens,
            components,
            intents,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn intents(&self) -> &[IntentPattern] {
        &self.intents
    }

    /// Primitive and semantic tokens for a category and theme
    pub fn get_tokens(&self, category: Option<TokenCategory>, theme: Option<Theme>) -> TokenSet {
        let theme = theme.unwrap_or(self.config.tokens.default_theme);
        self.tokens.select(category, theme)
    }

    /// Contract of a library component, or the list of known names
    pub fn get_component_spec(&self, component: &str) -> ComponentSpecResult {
        match self.components.get(component) {
            Some(contract) => ComponentSpecResult::Found(contract.clone()),
            None => ComponentSpecResult::NotFound {
                error: format!("Component \"{}\" not found", component.trim()),
                available: self.components.names(),
            },
        }
    }

    /// Markup, imports and dependencies for one component
    pub fn get_code(
        &self,
        component: &str,
        props: Option<Props>,
        children: Option<&str>,
        framework: Option<&str>,
        variant: Option<&str>,
    ) -> Result<GeneratedCode> {
        codegen::get_code(
            component,
            props.unwrap_or_default(),
            children,
            framework.unwrap_or(self.config.codegen.default_framework.as_str()),
            variant,
            &self.config.codegen.import_source,
        )
    }

    /// Components ranked by how many query terms they mention
    pub fn search_components(&self, query: &str, limit: Option<usize>) -> Result<SearchResults> {
        if query.trim().is_empty() {
            return Err(ComposerError::InvalidInput("search query must not be empty".to_string()));
        }
        let limit = limit.unwrap_or(self.config.search.default_limit);
        if limit == 0 {
            return Err(ComposerError::InvalidInput("limit must be at least 1".to_string()));
        }

        let mut results = self.components.search(query);
        let total = results.len();
        results.truncate(limit);
        debug!(query, total, limit, "Searched components");

        Ok(SearchResults {
            query: query.to_string(),
            results,
            total,
            has_more: total > limit,
        })
    }

    /// Compose an interface from a free-text intent
    pub fn compose_interface(&self, intent: &str, context: Option<RenderContext>) -> Result<ComposeOutcome> {
        compose::compose_interface(
            &self.intents,
            intent,
            context.unwrap_or(self.config.compose.default_context),
            &self.config.compose.suggestions,
        )
    }

    /// One of the seven named layout patterns, rendered with options
    pub fn get_layout_pattern(&self, pattern: &str, options: Option<&PatternOptions>) -> Result<LayoutPatternResult> {
        let defaults = PatternOptions::default();
        patterns::get_layout_pattern(pattern, options.unwrap_or(&defaults))
    }

    /// Audit explicit components, or components parsed from markup
    pub fn validate_accessibility(
        &self,
        code: Option<&str>,
        components: Option<&[ComponentDescriptor]>,
        context: Option<&str>,
    ) -> Result<ValidationResult> {
        analyzers::validate_accessibility(code, components, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TokenMap;
    use crate::patterns::LayoutPattern;
    use crate::types::{Direction, LayoutConfig, LayoutType};
    use indexmap::IndexMap;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_send_sync() {
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_get_tokens_uses_configured_theme() {
        let mut config = Config::default();
        config.tokens.default_theme = Theme::Dark;
        let engine = Engine::new(config);
        assert_eq!(engine.get_tokens(None, None).theme, Theme::Dark);
        assert_eq!(engine.get_tokens(None, Some(Theme::Light)).theme, Theme::Light);
    }

    #[test]
    fn test_component_spec_not_found() {
        let engine = Engine::default();
        match engine.get_component_spec("Carousel") {
            ComponentSpecResult::NotFound { error, available } => {
                assert!(error.contains("Carousel"));
                assert_eq!(available, vec!["Button", "Input", "Card", "Modal", "Select"]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(engine.get_component_spec("button"), ComponentSpecResult::Found(_)));
    }

    #[test]
    fn test_search_truncates_and_flags_more() {
        let engine = Engine::default();
        let all = engine.search_components("a", Some(100)).unwrap();
        assert!(all.total >= 2);
        assert!(!all.has_more);

        let one = engine.search_components("a", Some(1)).unwrap();
        assert_eq!(one.results.len(), 1);
        assert_eq!(one.total, all.total);
        assert!(one.has_more);
    }

    #[test]
    fn test_search_rejects_blank_query() {
        let engine = Engine::default();
        assert!(matches!(
            engine.search_components("   ", None),
            Err(ComposerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_get_code_uses_configured_import_source() {
        let mut config = Config::default();
        config.codegen.import_source = "~/ui".to_string();
        let engine = Engine::new(config);
        let generated = engine.get_code("Input", None, None, None, None).unwrap();
        assert_eq!(generated.imports, vec!["import { Input } from \"~/ui/input\";"]);
    }

    #[test]
    fn test_fixture_tables() {
        let tokens = TokenCatalog::new(IndexMap::new(), TokenMap::new(), TokenMap::new());
        let intents = vec![IntentPattern::new(
            "banner",
            &["banner"],
            LayoutConfig::new(LayoutType::Flex, Some(Direction::Row), None),
            vec![ComponentDescriptor::new("Badge").with_children("New")],
        )];
        let engine = Engine::with_tables(tokens, ComponentRegistry::new(vec![]), intents, Config::default());

        let outcome = engine.compose_interface("big banner", None).unwrap();
        let composition = outcome.matched().unwrap();
        assert_eq!(composition.pattern, "banner");
        assert!(composition.code.contains("<Badge>New</Badge>"));
        assert!(engine.compose_interface("login form", None).unwrap().matched().is_none());
        assert!(engine.get_tokens(None, None).semantic.is_empty());
    }

    #[test]
    fn test_layout_pattern_defaults_options() {
        let engine = Engine::default();
        let result = engine.get_layout_pattern("empty-state", None).unwrap();
        assert_eq!(result.pattern, LayoutPattern::EmptyState);
    }
}
