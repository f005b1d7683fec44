//! Candidate document discovery.
//!
//! Collects `**/*.md` under each configured documentation directory plus
//! root-level markdown files, drops paths containing an exclusion marker
//! (relative to the project root), then sorts and de-duplicates.

use crate::config::DiscoverSettings;
use crate::error::{DocgateError, Result};
use crate::resolve::display_path;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

fn glob_into(pattern: &str, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = glob(pattern).map_err(|source| DocgateError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    out.extend(entries.flatten().filter(|p| p.is_file()));
    Ok(())
}

pub fn find_all_docs(root: &Path, settings: &DiscoverSettings) -> Result<Vec<PathBuf>> {
    let base = Pattern::escape(&root.to_string_lossy());
    let mut docs: Vec<PathBuf> = Vec::new();
    for dir in &settings.dirs {
        if !root.join(dir).is_dir() {
            continue;
        }
        let dir = Pattern::escape(dir.trim_end_matches('/'));
        glob_into(&format!("{base}/{dir}/**/*.md"), &mut docs)?;
    }
    if settings.include_root {
        glob_into(&format!("{base}/*.md"), &mut docs)?;
    }
    docs.retain(|p| {
        let rel = display_path(root, p);
        !settings.exclude.iter().any(|marker| rel.contains(marker.as_str()))
    });
    docs.sort();
    docs.dedup();
    Ok(docs)
}
