//! Broken internal link detection for `[label](target)` syntax.

use super::{CheckKind, Context, Document};
use crate::models::Finding;
use crate::resolve::{display_path, probe_reference};
use regex::Regex;
use std::sync::OnceLock;

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex"))
}

/// Report every link whose resolved target is missing on disk.
pub fn check_links(doc: &Document, ctx: &Context) -> Vec<Finding> {
    let mut found = Vec::new();
    for cap in link_re().captures_iter(&doc.content) {
        let label = &cap[1];
        let target = &cap[2];
        let Some((resolved, exists)) = probe_reference(target, &doc.path, ctx.root) else {
            continue;
        };
        if !exists {
            found.push(CheckKind::Links.finding(format!(
                "Broken link: [{}]({}) -> {} not found",
                label,
                target,
                display_path(ctx.root, &resolved)
            )));
        }
    }
    found
}
