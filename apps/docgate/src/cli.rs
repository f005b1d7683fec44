//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "docgate",
    version,
    about = "Validate markdown documentation before it ships",
    long_about = "Docgate checks markdown documents for broken internal links, missing required sections, stale 'Last Updated' dates, dangling code-file references, and leftover TODO markers.\n\nWithout PATH it validates docs/**/*.md, skills/**/*.md and root-level *.md files.\n\nConfiguration precedence: CLI > docgate.toml > defaults.",
    after_help = "Examples:\n  docgate\n  docgate docs/runbooks/RUNBOOK-db.md\n  docgate --output json --today 2025-01-31"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Validate only this document (relative paths resolve against the project root)")]
    pub path: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Accept fix mode (reported; no check rewrites files)")]
    pub fix: bool,
    #[arg(long, help = "Project root (default: nearest ancestor with docgate.toml or .git)")]
    pub root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Reference date for freshness checks, YYYY-MM-DD (default: today)")]
    pub today: Option<String>,
}
