//! Configuration discovery and effective settings resolution.
//!
//! Docgate reads `docgate.toml|yaml|yml` from the project root and merges
//! it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `discover.dirs`: `["docs", "skills"]`
//! - `discover.include_root`: true
//! - `discover.exclude`: `["node_modules", ".next"]`
//! - `freshness.max_age_days`: 180
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::checks::DEFAULT_MAX_AGE_DAYS;
use crate::error::{DocgateError, Result};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["docgate.toml", "docgate.yaml", "docgate.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Discovery section under `[discover]`.
pub struct DiscoverCfg {
    pub dirs: Option<Vec<String>>,
    pub include_root: Option<bool>,
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Freshness section under `[freshness]`.
pub struct FreshnessCfg {
    pub max_age_days: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `docgate.toml|yaml`.
pub struct DocgateConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub discover: Option<DiscoverCfg>,
    #[serde(default)]
    pub freshness: Option<FreshnessCfg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved discovery settings.
pub struct DiscoverSettings {
    pub dirs: Vec<String>,
    pub include_root: bool,
    pub exclude: Vec<String>,
}

impl Default for DiscoverSettings {
    fn default() -> Self {
        Self {
            dirs: vec!["docs".into(), "skills".into()],
            include_root: true,
            exclude: vec!["node_modules".into(), ".next".into()],
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub output: String,
    pub fix: bool,
    pub today: NaiveDate,
    pub max_age_days: i64,
    pub discover: DiscoverSettings,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `docgate.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DocgateConfig` if present. A config file that exists but cannot be
/// read or parsed is an error.
pub fn load_config(root: &Path) -> Result<Option<DocgateConfig>> {
    for name in CONFIG_NAMES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| DocgateError::FileRead {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<DocgateConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<DocgateConfig>(&s).map_err(|e| e.to_string())
        };
        return parsed
            .map(Some)
            .map_err(|message| DocgateError::ConfigParse { path, message });
    }
    Ok(None)
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| DocgateError::InvalidDate(value.to_string()))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_today: Option<&str>,
    cli_fix: bool,
) -> Result<Effective> {
    let repo_root = match cli_repo_root {
        Some(r) => PathBuf::from(r),
        None => detect_repo_root(&std::env::current_dir()?),
    };
    let repo_root = if repo_root.is_absolute() {
        repo_root
    } else {
        std::env::current_dir()?.join(repo_root)
    };
    let repo_root = crate::resolve::normalize_path(&repo_root);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if output != "human" && output != "json" {
        return Err(DocgateError::Config(format!(
            "unsupported output mode `{output}` (expected human|json)"
        )));
    }

    let today = match cli_today {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };

    let max_age_days = cfg
        .freshness
        .as_ref()
        .and_then(|f| f.max_age_days)
        .unwrap_or(DEFAULT_MAX_AGE_DAYS);
    if max_age_days < 0 {
        return Err(DocgateError::Config(
            "freshness.max_age_days must not be negative".into(),
        ));
    }

    let defaults = DiscoverSettings::default();
    let discover = match cfg.discover {
        Some(d) => DiscoverSettings {
            dirs: d.dirs.unwrap_or(defaults.dirs),
            include_root: d.include_root.unwrap_or(defaults.include_root),
            exclude: d.exclude.unwrap_or(defaults.exclude),
        },
        None => defaults,
    };

    Ok(Effective {
        repo_root,
        config_found,
        output,
        fix: cli_fix,
        today,
        max_age_days,
        discover,
    })
}
