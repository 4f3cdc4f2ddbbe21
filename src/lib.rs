// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Composerbot - Intent-Driven UI Composition and Accessibility Auditing
//!
//! Part of the gitbot-fleet ecosystem. Composerbot turns a short free-text
//! intent ("login form", "settings panel") into component markup, renders
//! named layout patterns, and statically audits component markup against a
//! fixed set of accessibility rules.
//!
//! ## Operations
//!
//! - **Tokens**: primitive and light/dark semantic design tokens
//! - **Component specs**: contracts for Button, Input, Card, Modal, Select
//! - **Code**: markup, imports and dependencies for a single component
//! - **Search**: component contracts ranked by query term coverage
//! - **Compose**: intent matching, form field injection, slot-based assembly
//! - **Layout patterns**: seven named page and section templates
//! - **Accessibility**: rule-based audit with WCAG references and a 0-100 score
//!
//! All operations are pure functions over read-only tables owned by an
//! [`Engine`].

pub mod analyzers;
pub mod catalog;
pub mod codegen;
pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod issue;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod types;

pub use engine::{ComponentSpecResult, Engine, SearchResults};
pub use error::{ComposerError, Result};
pub use types::{ComponentDescriptor, Props, RenderContext};
