//! Shared data models for validation results and run summaries.

pub mod profile;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Finding severity. Only `Error` fails a document.
pub enum Severity {
    Error,
    Warning,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single reported issue.
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
/// Ordered findings produced for one document.
pub struct ValidationResult {
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// A document passes when it has no errors; warnings never fail it.
    pub fn passed(&self) -> bool {
        self.errors().next().is_none()
    }
}

impl From<Vec<Finding>> for ValidationResult {
    fn from(findings: Vec<Finding>) -> Self {
        Self { findings }
    }
}

#[derive(Debug, Clone)]
/// Validation outcome for one document, keyed by its root-relative path.
pub struct DocumentReport {
    pub display: String,
    pub result: ValidationResult,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Aggregated counters used by printers and the exit status.
pub struct RunSummary {
    pub files: usize,
    pub failed_files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &ValidationResult) {
        self.files += 1;
        let errors = result.errors().count();
        if errors > 0 {
            self.failed_files += 1;
        }
        self.errors += errors;
        self.warnings += result.warnings().count();
    }

    /// The run succeeds when no document had an error.
    pub fn success(&self) -> bool {
        self.failed_files == 0
    }
}

#[derive(Debug, Clone, Default)]
/// Full run output: per-document reports in discovery order plus totals.
pub struct Report {
    pub fix_mode: bool,
    pub documents: Vec<DocumentReport>,
    pub summary: RunSummary,
}
