//! Document profiles: the required-section set inferred from a file name.
//!
//! Classification precedence is `Runbook > Adr > Api > None`; a name such
//! as `runbook-api.md` is a runbook. When the file name says nothing, the
//! nearest enclosing directory named after a profile decides, so
//! `docs/api/users.md` is an API document.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocProfile {
    Runbook,
    Adr,
    Api,
    None,
}

impl DocProfile {
    /// Classify a document by its file name. Templates are never classified.
    pub fn classify(file_name: &str) -> Self {
        if is_template(file_name) {
            return DocProfile::None;
        }
        let lower = file_name.to_lowercase();
        if lower.contains("runbook") {
            DocProfile::Runbook
        } else if lower.contains("adr") || file_name.starts_with("ADR") {
            DocProfile::Adr
        } else if lower.contains("api") {
            DocProfile::Api
        } else {
            DocProfile::None
        }
    }

    /// Classify by file name, falling back to the directories between the
    /// document and `root`, nearest first.
    pub fn classify_path(path: &Path, root: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if is_template(&file_name) {
            return DocProfile::None;
        }
        let by_name = Self::classify(&file_name);
        if by_name != DocProfile::None {
            return by_name;
        }
        let rel_dir = path
            .parent()
            .map(|p| p.strip_prefix(root).unwrap_or(p))
            .unwrap_or_else(|| Path::new(""));
        rel_dir
            .components()
            .rev()
            .filter_map(|c| c.as_os_str().to_str())
            .map(Self::from_dir_name)
            .find(|p| *p != DocProfile::None)
            .unwrap_or(DocProfile::None)
    }

    /// Directory names match on whole tokens (`api`, `adrs`, `ops-runbooks`)
    /// so names like `adapters` or `rapids` stay unclassified.
    fn from_dir_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        let has = |word: &str| {
            tokens
                .iter()
                .any(|t| *t == word || t.strip_suffix('s') == Some(word))
        };
        if has("runbook") {
            DocProfile::Runbook
        } else if has("adr") {
            DocProfile::Adr
        } else if has("api") {
            DocProfile::Api
        } else {
            DocProfile::None
        }
    }

    pub fn required_sections(self) -> &'static [&'static str] {
        match self {
            DocProfile::Runbook => &["Overview", "Common Issues", "Monitoring"],
            DocProfile::Adr => &["Context", "Decision", "Consequences"],
            DocProfile::Api => &["Overview", "Endpoints", "Error Handling"],
            DocProfile::None => &[],
        }
    }
}

/// Templates are exempt from section and freshness requirements.
pub fn is_template(file_name: &str) -> bool {
    file_name.to_lowercase().contains("template")
}
