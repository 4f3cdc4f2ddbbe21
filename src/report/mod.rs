// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Validation results and report generation.
//!
//! Supports multiple output formats:
//! - Text: human-readable issues with WCAG criterion references
//! - JSON: structured results for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::analyzers::{AuditedComponent, RuleOutcome};
use crate::issue::{AccessibilityIssue, Severity};
use serde::{Deserialize, Serialize};

/// Outcome of one accessibility validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff no error-severity issue was raised
    pub valid: bool,
    /// 0-100, see [`calculate_score`]
    pub score: u32,
    pub issues: Vec<AccessibilityIssue>,
    pub passed_rules: Vec<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ValidationResult {
    pub fn from_outcome(outcome: RuleOutcome, context: Option<&str>) -> Self {
        let score = calculate_score(&outcome.issues);
        let valid = !outcome.issues.iter().any(|i| i.severity.blocks_validity());
        let summary = generate_summary(&outcome.issues, score);

        Self {
            valid,
            score,
            issues: outcome.issues,
            passed_rules: outcome.passed_rules,
            summary,
            context: context.map(String::from),
        }
    }

    /// Issues of one severity
    pub fn by_severity(&self, severity: Severity) -> Vec<&AccessibilityIssue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }

    pub fn errors(&self) -> Vec<&AccessibilityIssue> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&AccessibilityIssue> {
        self.by_severity(Severity::Warning)
    }
}

/// `100 - sum(severity weights)`, floored at 0
pub fn calculate_score(issues: &[AccessibilityIssue]) -> u32 {
    let penalty: u32 = issues.iter().map(|i| i.severity.weight()).sum();
    100u32.saturating_sub(penalty)
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// One-sentence summary of a validation
pub fn generate_summary(issues: &[AccessibilityIssue], score: u32) -> String {
    if issues.is_empty() {
        return "All accessibility checks passed. Score: 100/100".to_string();
    }

    let count = |s: Severity| issues.iter().filter(|i| i.severity == s).count();
    let mut parts = Vec::new();
    let errors = count(Severity::Error);
    let warnings = count(Severity::Warning);
    let infos = count(Severity::Info);

    if errors > 0 {
        parts.push(pluralize(errors, "error", "errors"));
    }
    if warnings > 0 {
        parts.push(pluralize(warnings, "warning", "warnings"));
    }
    if errors == 0 && warnings == 0 {
        parts.push(pluralize(infos, "notice", "notices"));
    }

    format!("Found {}. Score: {}/100", parts.join(" and "), score)
}

/// A validation result tagged with where its input came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// File path, or a label such as "<input>"
    pub source: String,
    pub result: ValidationResult,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report from audit entries
pub fn generate_report(entries: &[AuditEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(entries),
        OutputFormat::Json => generate_json_report(entries),
        OutputFormat::Sarif => generate_sarif_report(entries),
    }
}

/// Generate human-readable text report
fn generate_text_report(entries: &[AuditEntry]) -> String {
    let mut output = String::new();

    output.push_str("=== Composerbot Accessibility Report ===\n\n");

    if entries.is_empty() {
        output.push_str("Nothing to audit.\n");
        return output;
    }

    for entry in entries {
        let result = &entry.result;
        output.push_str(&format!("{}: {}\n", entry.source, result.summary));

        for severity in &[Severity::Error, Severity::Warning, Severity::Info] {
            for issue in result.by_severity(*severity) {
                output.push_str(&format!("  [{}] {} {}\n", severity, issue.rule, issue.message));
                if let Some(ref wcag) = issue.wcag {
                    output.push_str(&format!("    WCAG: {}\n", wcag));
                }
                output.push_str(&format!("    Fix: {}\n", issue.suggestion));
            }
        }

        if !result.passed_rules.is_empty() {
            output.push_str(&format!("  Passed: {}\n", result.passed_rules.join(", ")));
        }
        output.push('\n');
    }

    output.push_str("Checks:\n");
    for kind in AuditedComponent::ALL {
        let analyzer = kind.analyzer();
        output.push_str(&format!(
            "  {} ({}): {}\n",
            analyzer.name(),
            kind.component_name(),
            analyzer.description()
        ));
    }
    output.push('\n');

    if entries.iter().any(|e| !e.result.valid) {
        output.push_str("RESULT: FAIL (errors found)\n");
    } else if entries.iter().any(|e| !e.result.issues.is_empty()) {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

/// Generate JSON report
fn generate_json_report(entries: &[AuditEntry]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize results: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(rename = "informationUri")]
    information_uri: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

/// Generate SARIF report
fn generate_sarif_report(entries: &[AuditEntry]) -> String {
    let results: Vec<SarifResult> = entries
        .iter()
        .flat_map(|entry| {
            entry.result.issues.iter().map(move |issue| {
                let level = match issue.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                    Severity::Info => "note",
                };

                SarifResult {
                    rule_id: issue.rule.clone(),
                    level: level.to_string(),
                    message: SarifMessage {
                        text: format!("{} {}", issue.message, issue.suggestion),
                    },
                    locations: vec![SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation {
                                uri: entry.source.clone(),
                            },
                        },
                    }],
                }
            })
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "composerbot".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    information_uri: "https://github.com/hyperpolymath/gitbot-fleet".to_string(),
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> AccessibilityIssue {
        AccessibilityIssue::new("button-needs-name", severity, "Missing name", "Add text")
            .with_wcag("4.1.2")
    }

    fn entry(issues: Vec<AccessibilityIssue>) -> AuditEntry {
        AuditEntry {
            source: "form.tsx".to_string(),
            result: ValidationResult::from_outcome(
                RuleOutcome {
                    issues,
                    passed_rules: vec![],
                },
                None,
            ),
        }
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let issues: Vec<_> = (0..5).map(|_| issue(Severity::Error)).collect();
        assert_eq!(calculate_score(&issues), 0);
    }

    #[test]
    fn test_score_weights() {
        let issues = vec![issue(Severity::Error), issue(Severity::Warning), issue(Severity::Info)];
        assert_eq!(calculate_score(&issues), 63);
    }

    #[test]
    fn test_score_monotonic() {
        let mut issues = Vec::new();
        let mut last = calculate_score(&issues);
        for severity in [Severity::Info, Severity::Warning, Severity::Error, Severity::Error, Severity::Error, Severity::Error] {
            issues.push(issue(severity));
            let score = calculate_score(&issues);
            assert!(score <= last);
            last = score;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_summary_success() {
        let summary = generate_summary(&[], 100);
        assert!(summary.contains("100"));
        assert!(summary.contains("passed"));
    }

    #[test]
    fn test_summary_pluralization() {
        let one_each = vec![issue(Severity::Error), issue(Severity::Warning)];
        assert_eq!(generate_summary(&one_each, 65), "Found 1 error and 1 warning. Score: 65/100");

        let errors_only = vec![issue(Severity::Error), issue(Severity::Error)];
        assert_eq!(generate_summary(&errors_only, 50), "Found 2 errors. Score: 50/100");

        let warnings_only = vec![issue(Severity::Warning), issue(Severity::Warning), issue(Severity::Warning)];
        let summary = generate_summary(&warnings_only, 70);
        assert_eq!(summary, "Found 3 warnings. Score: 70/100");
        assert!(!summary.contains("0 errors"));
    }

    #[test]
    fn test_valid_ignores_warnings() {
        let result = entry(vec![issue(Severity::Warning)]).result;
        assert!(result.valid);
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_text_report() {
        let report = generate_report(&[entry(vec![issue(Severity::Error)])], OutputFormat::Text);
        assert!(report.contains("form.tsx"));
        assert!(report.contains("button-needs-name"));
        assert!(report.contains("WCAG: 4.1.2"));
        assert!(report.contains("RESULT: FAIL"));
    }

    #[test]
    fn test_text_report_lists_checks() {
        let report = generate_report(&[entry(vec![])], OutputFormat::Text);
        assert!(report.contains("Checks:\n"));
        assert!(report.contains("  Button Name Analyzer (Button): Checks that buttons have an accessible name"));
        assert!(report.contains("Dialog Label Analyzer (Modal.Content)"));
        assert!(report.contains("Alt Text Analyzer (img)"));
    }

    #[test]
    fn test_text_report_pass() {
        let report = generate_report(&[entry(vec![])], OutputFormat::Text);
        assert!(report.contains("RESULT: PASS\n"));
    }

    #[test]
    fn test_json_report() {
        let report = generate_report(&[entry(vec![issue(Severity::Error)])], OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed[0]["result"]["valid"], false);
        assert!(parsed[0]["result"]["passedRules"].is_array());
    }

    #[test]
    fn test_sarif_report() {
        let report = generate_report(&[entry(vec![issue(Severity::Warning)])], OutputFormat::Sarif);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["version"], "2.1.0");
        assert_eq!(parsed["runs"][0]["results"][0]["level"], "warning");
        assert_eq!(
            parsed["runs"][0]["results"][0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
            "form.tsx"
        );
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
