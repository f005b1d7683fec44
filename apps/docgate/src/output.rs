//! Output rendering for validation runs.
//!
//! Supports `human` (default) and `json` outputs. Colors are applied only
//! here; the core returns plain findings.

use crate::models::{DocumentReport, Report};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Print the run banner before validation starts (human mode only).
pub fn print_header(root: &Path, count: usize, fix: bool, output: &str) {
    if output == "json" {
        return;
    }
    let color = use_colors(output);
    if color {
        println!("{}", "Documentation Validator".bold());
    } else {
        println!("Documentation Validator");
    }
    println!("Project root: {}\n", root.to_string_lossy());
    println!("Found {count} documentation file(s) to validate");
    if fix {
        let msg = "Fix mode enabled - will attempt to auto-fix issues";
        if color {
            println!("{}", msg.yellow());
        } else {
            println!("{msg}");
        }
    }
}

/// Print a finished report in the requested format.
pub fn print_report(report: &Report, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_report_json(report)) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            for doc in &report.documents {
                print_document(doc, color);
            }
            print_summary(report, color);
        }
    }
}

fn print_document(doc: &DocumentReport, color: bool) {
    let title = format!("Validating: {}", doc.display);
    if color {
        println!("\n{}", title.blue());
    } else {
        println!("\n{title}");
    }

    let errors: Vec<_> = doc.result.errors().collect();
    let warnings: Vec<_> = doc.result.warnings().collect();
    if !errors.is_empty() {
        let head = format!("✗ {} error(s)", errors.len());
        if color {
            println!("  {}", head.red());
        } else {
            println!("  {head}");
        }
        for e in errors {
            if color {
                println!("    {}", format!("• {}", e.message).red());
            } else {
                println!("    • {}", e.message);
            }
        }
    }
    if !warnings.is_empty() {
        let head = format!("⚠ {} warning(s)", warnings.len());
        if color {
            println!("  {}", head.yellow());
        } else {
            println!("  {head}");
        }
        for w in warnings {
            if color {
                println!("    {}", format!("• {}", w.message).yellow());
            } else {
                println!("    • {}", w.message);
            }
        }
    }
    if doc.result.findings.is_empty() {
        if color {
            println!("  {}", "✓ All checks passed".green());
        } else {
            println!("  ✓ All checks passed");
        }
    }
}

fn print_summary(report: &Report, color: bool) {
    let s = &report.summary;
    let rule = "=".repeat(RULE_WIDTH);
    if color {
        println!("\n{}", rule.bold());
        println!("{}", "Summary:".bold());
    } else {
        println!("\n{rule}");
        println!("Summary:");
    }
    println!("  Files validated: {}", s.files);
    if s.failed_files > 0 {
        let failed = format!("Files with errors: {}", s.failed_files);
        let total = format!("Total errors: {}", s.errors);
        if color {
            println!("  {}", failed.red());
            println!("  {}", total.red());
        } else {
            println!("  {failed}");
            println!("  {total}");
        }
    } else if color {
        println!("  {}", "All files passed validation".green());
    } else {
        println!("  All files passed validation");
    }
    if s.warnings > 0 {
        let warns = format!("Total warnings: {}", s.warnings);
        if color {
            println!("  {}", warns.yellow());
        } else {
            println!("  {warns}");
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    let documents: Vec<_> = report
        .documents
        .iter()
        .map(|d| {
            json!({
                "path": d.display,
                "passed": d.result.passed(),
                "errors": d.result.errors().map(|f| f.message.as_str()).collect::<Vec<_>>(),
                "warnings": d.result.warnings().map(|f| f.message.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({
        "fix_mode": report.fix_mode,
        "documents": documents,
        "summary": report.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Finding, RunSummary, ValidationResult};

    #[test]
    fn test_compose_report_json_shape() {
        let report = Report {
            fix_mode: false,
            documents: vec![DocumentReport {
                display: "docs/api/users.md".into(),
                result: ValidationResult::from(vec![
                    Finding::error("Missing required section: Error Handling"),
                    Finding::warning("No 'Last Updated' timestamp found"),
                ]),
            }],
            summary: RunSummary {
                files: 1,
                failed_files: 1,
                errors: 1,
                warnings: 1,
            },
        };
        let out = compose_report_json(&report);
        assert_eq!(out["fix_mode"], false);
        assert_eq!(out["documents"][0]["path"], "docs/api/users.md");
        assert_eq!(out["documents"][0]["passed"], false);
        assert_eq!(
            out["documents"][0]["errors"][0],
            "Missing required section: Error Handling"
        );
        assert_eq!(out["summary"]["failed_files"], 1);
        assert_eq!(out["summary"]["warnings"], 1);
    }
}
