// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Composerbot CLI - Intent-Driven UI Composition and Accessibility Auditing
//!
//! Part of the gitbot-fleet ecosystem.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use composerbot::catalog::{Theme, TokenCategory, TokenSet};
use composerbot::compose::ComposeOutcome;
use composerbot::config::{self, Config};
use composerbot::patterns::PatternOptions;
use composerbot::report::{generate_report, AuditEntry, OutputFormat};
use composerbot::{scanner, ComponentDescriptor, ComponentSpecResult, Engine, Props, RenderContext};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Intent-driven UI composition and accessibility auditing for gitbot-fleet
#[derive(Parser)]
#[command(name = "composerbot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: FormatArg,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose markup from a free-text intent
    Compose {
        /// What to build, e.g. "login form with email and password"
        intent: String,

        /// Where the markup will live
        #[arg(long)]
        context: Option<ContextArg>,
    },

    /// Render a named layout pattern
    Pattern {
        /// Pattern name (form-layout, split-view, dashboard-grid, ...)
        name: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Grid columns (dashboard-grid only)
        #[arg(long)]
        columns: Option<u32>,

        #[arg(long)]
        primary_action: Option<String>,

        #[arg(long)]
        secondary_action: Option<String>,
    },

    /// Audit markup or component descriptors for accessibility
    Validate {
        /// Markup file to audit
        file: Option<PathBuf>,

        /// JSON file holding an array of component descriptors
        #[arg(long, value_name = "FILE")]
        components: Option<PathBuf>,

        /// Free-form label echoed back in the result
        #[arg(long)]
        context: Option<String>,
    },

    /// Audit every markup file under a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate code for a single component
    Code {
        /// Component name, e.g. Button
        component: String,

        /// Prop as key=value; JSON values are parsed, anything else is a string
        #[arg(long = "prop", value_parser = parse_prop)]
        props: Vec<(String, Value)>,

        #[arg(long)]
        children: Option<String>,

        #[arg(long)]
        framework: Option<String>,

        #[arg(long)]
        variant: Option<String>,
    },

    /// Show design tokens
    Tokens {
        #[arg(long)]
        category: Option<CategoryArg>,

        #[arg(long)]
        theme: Option<ThemeArg>,
    },

    /// Show the contract of a library component
    Component {
        /// Component name, case-insensitive
        name: String,
    },

    /// Search component contracts
    Search {
        query: String,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Initialize configuration file
    InitConfig {
        /// Write TOML instead of YAML
        #[arg(long)]
        toml: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI (audits only; other commands print JSON)
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

/// Render context CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ContextArg {
    Page,
    Section,
    Component,
}

impl From<ContextArg> for RenderContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Page => RenderContext::Page,
            ContextArg::Section => RenderContext::Section,
            ContextArg::Component => RenderContext::Component,
        }
    }
}

/// Token category CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Color,
    Spacing,
    Typography,
    Radius,
    Shadow,
}

impl From<CategoryArg> for TokenCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Color => TokenCategory::Color,
            CategoryArg::Spacing => TokenCategory::Spacing,
            CategoryArg::Typography => TokenCategory::Typography,
            CategoryArg::Radius => TokenCategory::Radius,
            CategoryArg::Shadow => TokenCategory::Shadow,
        }
    }
}

/// Theme CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn parse_prop(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    if key.trim().is_empty() {
        return Err(format!("empty prop name in `{}`", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.trim().to_string(), value))
}

fn init_logging(verbose: bool, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("composerbot=debug")
        } else {
            EnvFilter::try_new(format!("composerbot={}", config.log.level))
                .unwrap_or_else(|_| EnvFilter::new("composerbot=warn"))
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.log.format == "compact" {
        builder.compact().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    init_logging(cli.verbose, &config);

    let format = cli.format;
    let engine = Engine::new(config);

    match cli.command {
        Commands::Compose { intent, context } => {
            let outcome = engine.compose_interface(&intent, context.map(Into::into))?;
            match format {
                FormatArg::Text => println!("{}", outcome.code()),
                _ => print_json(&outcome)?,
            }
            if let ComposeOutcome::NoMatch(_) = outcome {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Pattern {
            name,
            title,
            description,
            columns,
            primary_action,
            secondary_action,
        } => {
            let options = PatternOptions {
                title,
                description,
                columns,
                primary_action,
                secondary_action,
            };
            let result = engine.get_layout_pattern(&name, Some(&options))?;
            match format {
                FormatArg::Text => println!("{}", result.code),
                _ => print_json(&result)?,
            }
        }

        Commands::Validate { file, components, context } => {
            let code = file
                .as_deref()
                .map(read_file)
                .transpose()?;
            let descriptors: Option<Vec<ComponentDescriptor>> = components
                .as_deref()
                .map(|path| -> anyhow::Result<_> {
                    let raw = read_file(path)?;
                    serde_json::from_str(&raw)
                        .with_context(|| format!("Invalid component descriptors in {}", path.display()))
                })
                .transpose()?;

            let result = engine.validate_accessibility(
                code.as_deref(),
                descriptors.as_deref(),
                context.as_deref(),
            )?;
            let source = file
                .or(components)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<input>".to_string());
            let entries = vec![AuditEntry { source, result }];
            println!("{}", generate_report(&entries, format.into()));
            return Ok(audit_exit_code(&entries));
        }

        Commands::Scan { dir, output } => {
            let entries = if dir.is_file() {
                vec![scanner::scan_file(&dir)?]
            } else {
                scanner::scan_directory(&dir)?
            };
            let report = generate_report(&entries, format.into());
            write_output(&report, output.as_deref())?;
            return Ok(audit_exit_code(&entries));
        }

        Commands::Code {
            component,
            props,
            children,
            framework,
            variant,
        } => {
            let props: Props = props.into_iter().collect();
            let generated = engine.get_code(
                &component,
                Some(props),
                children.as_deref(),
                framework.as_deref(),
                variant.as_deref(),
            )?;
            match format {
                FormatArg::Text => {
                    for import in &generated.imports {
                        println!("{}", import);
                    }
                    println!();
                    println!("{}", generated.code);
                    if !generated.dependencies.is_empty() {
                        println!();
                        println!("// Dependencies: {}", generated.dependencies.join(", "));
                    }
                }
                _ => print_json(&generated)?,
            }
        }

        Commands::Tokens { category, theme } => {
            let tokens = engine.get_tokens(category.map(Into::into), theme.map(Into::into));
            match format {
                FormatArg::Text => print_tokens(&tokens),
                _ => print_json(&tokens)?,
            }
        }

        Commands::Component { name } => {
            let spec = engine.get_component_spec(&name);
            match (&spec, format) {
                (ComponentSpecResult::Found(contract), FormatArg::Text) => {
                    println!("{} - {}", contract.name, contract.description);
                    println!("\nProps:");
                    for prop in &contract.props {
                        let required = if prop.required { " (required)" } else { "" };
                        println!("  {}: {}{} - {}", prop.name, prop.kind, required, prop.description);
                    }
                    println!("\nAccessibility:");
                    for note in &contract.accessibility {
                        println!("  - {}", note);
                    }
                    println!("\nUse when:");
                    for line in &contract.usage.when_to_use {
                        println!("  - {}", line);
                    }
                    println!("\nAvoid:");
                    for line in &contract.usage.avoid {
                        println!("  - {}", line);
                    }
                }
                (ComponentSpecResult::NotFound { error, available }, FormatArg::Text) => {
                    eprintln!("{}. Available: {}", error, available.join(", "));
                }
                _ => print_json(&spec)?,
            }
            if let ComponentSpecResult::NotFound { .. } = spec {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Search { query, limit } => {
            let results = engine.search_components(&query, limit)?;
            match format {
                FormatArg::Text => {
                    for hit in &results.results {
                        println!("{:.2}  {:<8} {}", hit.score, hit.name, hit.description);
                    }
                    if results.has_more {
                        println!("... {} more", results.total - results.results.len());
                    }
                }
                _ => print_json(&results)?,
            }
        }

        Commands::InitConfig { toml } => {
            let path = if toml {
                config_path.with_extension("toml")
            } else {
                config_path
            };
            config::write_default_config(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Created configuration file: {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_tokens(tokens: &TokenSet) {
    for (category, values) in &tokens.primitive {
        println!("[{}]", category.as_str());
        for (name, value) in values {
            println!("  {}: {}", name, value);
        }
    }
    if !tokens.semantic.is_empty() {
        println!("[semantic:{}]", tokens.theme);
        for (name, value) in &tokens.semantic {
            println!("  {}: {}", name, value);
        }
    }
}

fn audit_exit_code(entries: &[AuditEntry]) -> ExitCode {
    if entries.iter().all(|e| e.result.valid) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
