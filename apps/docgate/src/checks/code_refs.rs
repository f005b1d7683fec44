//! Inline code spans that look like source-file references.
//!
//! Matches are advisory: a missing file is a warning because references in
//! prose drift with refactors and the shapes below are heuristics.

use super::{CheckKind, Context, Document};
use crate::models::Finding;
use crate::resolve::normalize_path;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const PLACEHOLDERS: [&str; 5] = ["example", "your-", "xxx", "...", "\u{2026}"];

fn ref_patterns() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            // path with optional `:line`
            Regex::new(r"`([^`]+\.(?:ts|tsx|js|jsx|py|sql|md))(?::\d+)?`").expect("ref regex"),
            Regex::new(r"`(src/[^`]+\.(?:ts|tsx|js|jsx))`").expect("src regex"),
            Regex::new(r"`(app/[^`]+\.(?:ts|tsx|js|jsx))`").expect("app regex"),
        ]
    })
}

/// Illustrative references such as `src/your-module.ts` are never checked.
pub fn is_placeholder(reference: &str) -> bool {
    let lower = reference.to_lowercase();
    PLACEHOLDERS.iter().any(|p| lower.contains(p))
}

/// Extract candidate references in pattern order; a span matched by more
/// than one shape is reported once.
pub fn extract_code_refs(content: &str) -> Vec<String> {
    let mut seen_spans: HashSet<usize> = HashSet::new();
    let mut refs = Vec::new();
    for re in ref_patterns() {
        for cap in re.captures_iter(content) {
            let Some(whole) = cap.get(0) else { continue };
            if !seen_spans.insert(whole.start()) {
                continue;
            }
            refs.push(cap[1].trim().replace('\\', "/"));
        }
    }
    refs
}

/// Warn about referenced files that are absent under the project root.
pub fn check_code_refs(doc: &Document, ctx: &Context) -> Vec<Finding> {
    let mut found = Vec::new();
    for file_ref in extract_code_refs(&doc.content) {
        if is_placeholder(&file_ref) {
            continue;
        }
        let target = normalize_path(&ctx.root.join(file_ref.trim_start_matches('/')));
        if !target.exists() {
            found.push(CheckKind::CodeRefs.finding(format!(
                "Referenced file may not exist: {file_ref}"
            )));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn check(root: &std::path::Path, content: &str) -> Vec<Finding> {
        let doc = Document {
            path: root.join("docs/guide.md"),
            content: content.into(),
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        check_code_refs(&doc, &Context::new(root, today))
    }

    #[test]
    fn test_extract_shapes_and_line_numbers() {
        let refs = extract_code_refs(
            "See `lib/db.py:42`, `src/app.tsx`, `app/page.js` and `notes.txt`.",
        );
        assert_eq!(refs, vec!["lib/db.py", "src/app.tsx", "app/page.js"]);
    }

    #[test]
    fn test_windows_separators_are_normalised() {
        assert_eq!(
            extract_code_refs(r"`src\server\main.ts:7`"),
            vec!["src/server/main.ts"]
        );
    }

    #[test]
    fn test_missing_reference_is_a_warning() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/present.ts"), "export {}").unwrap();
        let found = check(root, "`src/present.ts` and `src/missing.ts:10`");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Warning);
        assert_eq!(found[0].message, "Referenced file may not exist: src/missing.ts");
    }

    #[test]
    fn test_reference_whitespace_is_stripped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::write(root.join("lib/db.py"), "").unwrap();
        assert_eq!(extract_code_refs("see ` lib/db.py:3`"), vec!["lib/db.py"]);
        assert!(check(root, "see ` lib/db.py:3`").is_empty());
    }

    #[test]
    fn test_placeholders_are_skipped() {
        let dir = tempdir().unwrap();
        let found = check(
            dir.path(),
            "`src/EXAMPLE/util.ts` `src/your-feature.ts` `app/xxx.js` `src/.../x.ts:3` `src/Example.tsx`",
        );
        assert!(found.is_empty());
    }
}
