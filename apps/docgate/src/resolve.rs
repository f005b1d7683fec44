//! Reference resolution for links and code-file references.
//!
//! External URLs, `mailto:` and in-page anchors are never filesystem paths.
//! A leading `/` anchors a reference at the project root; anything else is
//! relative to the directory of the referencing document. Resolution is
//! lexical (`..` collapsed without touching the filesystem) and existence is
//! a single probe.

use std::path::{Component, Path, PathBuf};

const SKIP_PREFIXES: [&str; 4] = ["http://", "https://", "mailto:", "#"];

/// True for references that must not be resolved on disk.
pub fn is_external(reference: &str) -> bool {
    SKIP_PREFIXES.iter().any(|p| reference.starts_with(p))
}

/// Resolve a reference found in `doc_path` to a candidate path.
///
/// Returns `None` for external or anchor-only references. A trailing
/// `#fragment` is dropped so `guide.md#setup` probes `guide.md`.
pub fn resolve_reference(reference: &str, doc_path: &Path, root: &Path) -> Option<PathBuf> {
    if is_external(reference) {
        return None;
    }
    let path_part = match reference.split_once('#') {
        Some((path, _anchor)) => path,
        None => reference,
    };
    if let Some(stripped) = path_part.strip_prefix('/') {
        return Some(normalize_path(&root.join(stripped.trim_start_matches('/'))));
    }
    let base = doc_path.parent().unwrap_or(root);
    Some(normalize_path(&base.join(path_part)))
}

/// Resolve and probe. `None` means the reference was skipped; otherwise the
/// resolved path and whether it exists.
pub fn probe_reference(reference: &str, doc_path: &Path, root: &Path) -> Option<(PathBuf, bool)> {
    let resolved = resolve_reference(reference, doc_path, root)?;
    let exists = resolved.exists();
    Some((resolved, exists))
}

/// Collapse `.` and `..` components lexically.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => {
                has_root = true;
                out.push(Component::RootDir.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_parent = matches!(out.components().next_back(), Some(Component::ParentDir));
                if last_is_parent || (!out.pop() && !has_root) {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }

    out
}

/// Root-relative path with `/` separators for messages; falls back to the
/// full path when no relative form exists.
pub fn display_path(root: &Path, path: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir => None,
            Component::RootDir | Component::Prefix(_) => Some(String::new()),
        })
        .collect();
    if parts.is_empty() {
        return ".".to_string();
    }
    parts.join("/")
}
