//! Freshness check for "Last Updated" declarations.

use super::{CheckKind, Context, Document};
use crate::models::profile::is_template;
use crate::models::Finding;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn declaration_patterns() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"\*\*Last Updated\*\*:\s*(\d{4}-\d{2}-\d{2})").expect("bold regex"),
            Regex::new(r"Last Updated:\s*(\d{4}-\d{2}-\d{2})").expect("plain regex"),
            Regex::new(r"Updated:\s*(\d{4}-\d{2}-\d{2})").expect("short regex"),
        ]
    })
}

/// Outcome of searching a document for its last-updated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declared {
    Date(NaiveDate),
    Invalid(String),
    Missing,
}

/// Find the declaration using the first form that matches.
pub fn find_last_updated(content: &str) -> Declared {
    for re in declaration_patterns() {
        if let Some(cap) = re.captures(content) {
            let raw = &cap[1];
            return match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Declared::Date(date),
                Err(_) => Declared::Invalid(raw.to_string()),
            };
        }
    }
    Declared::Missing
}

pub fn check_last_updated(doc: &Document, ctx: &Context) -> Vec<Finding> {
    match find_last_updated(&doc.content) {
        Declared::Date(date) => {
            let days_old = (ctx.today - date).num_days();
            if days_old > ctx.max_age_days {
                return vec![CheckKind::Timestamp.finding(format!(
                    "Document hasn't been updated in {} days (since {})",
                    days_old,
                    date.format("%Y-%m-%d")
                ))];
            }
            Vec::new()
        }
        Declared::Invalid(raw) => vec![CheckKind::Timestamp
            .finding(format!("Invalid 'Last Updated' date: {raw}"))],
        Declared::Missing if is_template(&doc.file_name()) => Vec::new(),
        Declared::Missing => {
            vec![CheckKind::Timestamp.finding("No 'Last Updated' timestamp found")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::path::{Path, PathBuf};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    fn doc(name: &str, content: String) -> Document {
        Document {
            path: PathBuf::from("/proj/docs").join(name),
            content,
        }
    }

    fn check(d: &Document) -> Vec<Finding> {
        check_last_updated(d, &Context::new(Path::new("/proj"), today()))
    }

    #[test]
    fn test_staleness_threshold_is_exclusive() {
        let at_limit = today() - Duration::days(180);
        let past_limit = today() - Duration::days(181);
        let fresh = doc("a.md", format!("Last Updated: {}", at_limit.format("%Y-%m-%d")));
        assert!(check(&fresh).is_empty());
        let stale = doc("a.md", format!("Last Updated: {}", past_limit.format("%Y-%m-%d")));
        let found = check(&stale);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].message,
            format!(
                "Document hasn't been updated in 181 days (since {})",
                past_limit.format("%Y-%m-%d")
            )
        );
    }

    #[test]
    fn test_declaration_priority_order() {
        let content = "Updated: 2020-01-01\n**Last Updated**: 2025-06-01\n";
        assert_eq!(
            find_last_updated(content),
            Declared::Date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        );
        assert_eq!(
            find_last_updated("Last Updated:2024-02-29"),
            Declared::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(find_last_updated("last updated: 2024-01-01"), Declared::Missing);
    }

    #[test]
    fn test_invalid_calendar_date_warns_without_panicking() {
        let found = check(&doc("a.md", "Last Updated: 2024-13-40".into()));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "Invalid 'Last Updated' date: 2024-13-40");
    }

    #[test]
    fn test_missing_declaration_exempts_templates() {
        let found = check(&doc("guide.md", "# Guide".into()));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "No 'Last Updated' timestamp found");
        assert!(check(&doc("ADR-Template.md", "# ADR".into())).is_empty());
    }

    #[test]
    fn test_future_date_is_not_stale() {
        assert!(check(&doc("a.md", "Last Updated: 2030-01-01".into())).is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let d = doc("a.md", "Last Updated: 2025-05-01".into());
        let mut ctx = Context::new(Path::new("/proj"), today());
        ctx.max_age_days = 30;
        let found = check_last_updated(&d, &ctx);
        assert_eq!(
            found[0].message,
            "Document hasn't been updated in 60 days (since 2025-05-01)"
        );
    }
}
