//! Leftover TODO-style markers.

use super::{CheckKind, Document};
use crate::models::Finding;
use regex::Regex;
use std::sync::OnceLock;

/// Characters of the description kept in each message.
pub const DESCRIPTION_PREFIX_CHARS: usize = 50;

fn todo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(TODO|FIXME|XXX|HACK):[ \t]*(\S[^\r\n]*)").expect("todo regex"))
}

/// One warning per marker occurrence.
pub fn check_todo_markers(doc: &Document) -> Vec<Finding> {
    todo_re()
        .captures_iter(&doc.content)
        .map(|cap| {
            let description: String = cap[2]
                .trim_end()
                .chars()
                .take(DESCRIPTION_PREFIX_CHARS)
                .collect();
            CheckKind::Todo.finding(format!("Found {}: {}...", &cap[1], description))
        })
        .collect()
}
