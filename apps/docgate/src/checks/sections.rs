//! Required headings per document profile.

use super::{CheckKind, Context, Document};
use crate::models::profile::DocProfile;
use crate::models::Finding;
use regex::RegexBuilder;

/// True when some heading line (any level) starts with `section`,
/// compared case-insensitively.
pub fn has_heading(content: &str, section: &str) -> bool {
    let pattern = format!(r"^#+[ \t]+{}", regex::escape(section));
    match RegexBuilder::new(&pattern)
        .multi_line(true)
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.is_match(content),
        Err(_) => false,
    }
}

pub fn check_required_sections(doc: &Document, ctx: &Context) -> Vec<Finding> {
    DocProfile::classify_path(&doc.path, ctx.root)
        .required_sections()
        .iter()
        .filter(|section| !has_heading(&doc.content, section))
        .map(|section| CheckKind::Sections.finding(format!("Missing required section: {section}")))
        .collect()
}
