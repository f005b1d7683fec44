//! Single-document validation.
//!
//! `validate_document` is a pure function of the file on disk and the run
//! context, so documents can be validated in any order or in parallel.

use crate::checks::{run_checks, Context, Document};
use crate::error::DocgateError;
use crate::models::{Finding, ValidationResult};
use std::fs;
use std::path::Path;

/// Read a document, failing with a typed error when it is not valid text.
pub fn load_document(path: &Path) -> crate::error::Result<Document> {
    let content = fs::read_to_string(path).map_err(|source| DocgateError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document {
        path: path.to_path_buf(),
        content,
    })
}

/// Validate one document. A missing or unreadable document yields a single
/// error and no check runs.
pub fn validate_document(path: &Path, ctx: &Context) -> ValidationResult {
    if !path.exists() {
        return vec![Finding::error(format!(
            "File does not exist: {}",
            path.to_string_lossy()
        ))]
        .into();
    }
    match load_document(path) {
        Ok(doc) => run_checks(&doc, ctx).into(),
        Err(e) => vec![Finding::error(match &e {
            DocgateError::FileRead { source, .. } => format!("{e}: {source}"),
            _ => e.to_string(),
        })]
        .into(),
    }
}
