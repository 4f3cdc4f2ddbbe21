// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Static lookup tables: design tokens and component contracts.
//!
//! Both tables are built once and only read afterwards, so an [`crate::Engine`]
//! can share them across threads without synchronization.

pub mod components;
pub mod tokens;

pub use components::{ComponentContract, ComponentRegistry, PropSpec, SearchHit, UsageGuidance};
pub use tokens::{Theme, TokenCatalog, TokenCategory, TokenMap, TokenSet};
