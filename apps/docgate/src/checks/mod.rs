//! Rule evaluators run against a document's raw text.
//!
//! Each check is a plain function over `(Document, Context)` returning its
//! findings. Severity belongs to the check kind, never to an instance.

pub mod code_refs;
pub mod links;
pub mod sections;
pub mod timestamp;
pub mod todo;

use crate::models::{Finding, Severity};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Documents older than this many days are reported as stale.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Links,
    CodeRefs,
    Timestamp,
    Sections,
    Todo,
}

impl CheckKind {
    /// Execution order used by the document validator.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Links,
        CheckKind::CodeRefs,
        CheckKind::Timestamp,
        CheckKind::Sections,
        CheckKind::Todo,
    ];

    pub fn severity(self) -> Severity {
        match self {
            CheckKind::Links | CheckKind::Sections => Severity::Error,
            CheckKind::CodeRefs | CheckKind::Timestamp | CheckKind::Todo => Severity::Warning,
        }
    }

    pub fn finding(self, message: impl Into<String>) -> Finding {
        Finding {
            severity: self.severity(),
            message: message.into(),
        }
    }
}

/// A document loaded for one validation pass.
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Inputs shared by every check in a run.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub root: &'a Path,
    pub today: NaiveDate,
    pub max_age_days: i64,
}

impl<'a> Context<'a> {
    pub fn new(root: &'a Path, today: NaiveDate) -> Self {
        Self {
            root,
            today,
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

/// Run one check.
pub fn run_check(kind: CheckKind, doc: &Document, ctx: &Context) -> Vec<Finding> {
    match kind {
        CheckKind::Links => links::check_links(doc, ctx),
        CheckKind::CodeRefs => code_refs::check_code_refs(doc, ctx),
        CheckKind::Timestamp => timestamp::check_last_updated(doc, ctx),
        CheckKind::Sections => sections::check_required_sections(doc, ctx),
        CheckKind::Todo => todo::check_todo_markers(doc),
    }
}

/// Run every check in order: link, code reference, timestamp, section, todo.
pub fn run_checks(doc: &Document, ctx: &Context) -> Vec<Finding> {
    CheckKind::ALL
        .iter()
        .flat_map(|kind| run_check(*kind, doc, ctx))
        .collect()
}
