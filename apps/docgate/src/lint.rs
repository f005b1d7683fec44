//! Run aggregation across documents.
//!
//! Produces a `Report` with per-document results and a `RunSummary`.
//! Documents are independent, so they are validated on the rayon pool;
//! results keep the input order and are tallied sequentially.

use crate::checks::Context;
use crate::models::{DocumentReport, Report, RunSummary};
use crate::resolve::display_path;
use crate::validate::validate_document;
use rayon::prelude::*;
use std::path::PathBuf;

/// Validate every target and tally the run.
///
/// `fix_mode` is recorded on the report only; no check rewrites documents.
pub fn run_lint(targets: &[PathBuf], ctx: &Context, fix_mode: bool) -> Report {
    let documents: Vec<DocumentReport> = targets
        .par_iter()
        .map(|path| DocumentReport {
            display: display_path(ctx.root, path),
            result: validate_document(path, ctx),
        })
        .collect();

    let mut summary = RunSummary::default();
    for doc in &documents {
        summary.record(&doc.result);
    }
    Report {
        fix_mode,
        documents,
        summary,
    }
}

/// Process exit status for a finished run: 0 when no document failed.
pub fn exit_code(report: &Report) -> i32 {
    if report.summary.success() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, content).unwrap();
        p
    }

    #[test]
    fn test_one_broken_link_fails_the_run() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let clean = write(root, "docs/a.md", "# A\nLast Updated: 2025-04-01\n");
        let broken = write(
            root,
            "docs/b.md",
            "# B\nLast Updated: 2025-04-01\n[a](a.md) [c](c.md)\n",
        );
        let ctx = Context::new(root, today());

        let report = run_lint(&[clean.clone(), broken], &ctx, false);
        assert_eq!(report.documents[0].display, "docs/a.md");
        assert_eq!(report.documents[1].display, "docs/b.md");
        assert_eq!(
            report.summary,
            RunSummary {
                files: 2,
                failed_files: 1,
                errors: 1,
                warnings: 0,
            }
        );
        assert_eq!(exit_code(&report), 1);

        let report = run_lint(&[clean], &ctx, false);
        assert_eq!(exit_code(&report), 0);
    }

    #[test]
    fn test_warnings_alone_exit_zero() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let doc = write(root, "README.md", "# Readme\nTODO: fill in\n");
        let report = run_lint(&[doc], &Context::new(root, today()), true);
        assert!(report.fix_mode);
        assert_eq!(report.summary.warnings, 2);
        assert_eq!(exit_code(&report), 0);
    }

    #[test]
    fn test_missing_document_does_not_stop_the_run() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let ok = write(root, "docs/ok.md", "Last Updated: 2025-04-30\n");
        let report = run_lint(
            &[root.join("docs/missing.md"), ok],
            &Context::new(root, today()),
            false,
        );
        assert_eq!(report.summary.files, 2);
        assert_eq!(report.summary.failed_files, 1);
        assert!(report.documents[1].result.passed());
    }

    #[test]
    fn test_api_doc_scenario() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let doc = write(
            root,
            "docs/api/users.md",
            "# Overview\nUser API.\n## Endpoints\nGET /users\nSee [spec](./missing.md).\n",
        );
        let report = run_lint(&[doc], &Context::new(root, today()), false);
        let result = &report.documents[0].result;
        let errors: Vec<&str> = result.errors().map(|f| f.message.as_str()).collect();
        let warnings: Vec<&str> = result.warnings().map(|f| f.message.as_str()).collect();
        assert_eq!(
            errors,
            vec![
                "Broken link: [spec](./missing.md) -> docs/api/missing.md not found",
                "Missing required section: Error Handling",
            ]
        );
        assert_eq!(warnings, vec!["No 'Last Updated' timestamp found"]);
        assert!(!result.passed());
        assert_eq!(exit_code(&report), 1);
    }
}
