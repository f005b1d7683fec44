//! Docgate CLI binary entry point.
//! Resolves configuration, discovers documents, validates them and prints
//! the report. Exit status: 0 clean, 1 any document failed, 2 setup error.

use clap::Parser;
use docgate::checks::Context;
use docgate::cli::Cli;
use docgate::resolve::normalize_path;
use docgate::utils::{error_prefix, info_prefix, note_prefix};
use docgate::{config, discover, lint, output};
use std::path::PathBuf;

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", error_prefix(), message);
    std::process::exit(2);
}

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.root.as_deref(),
        cli.output.as_deref(),
        cli.today.as_deref(),
        cli.fix,
    )
    .unwrap_or_else(|e| fail(e));

    let human = eff.output != "json";
    if human && !eff.config_found {
        eprintln!("{} No docgate.toml found; using defaults.", note_prefix());
    }

    let targets: Vec<PathBuf> = match cli.path.as_deref() {
        Some(p) => {
            let p = PathBuf::from(p);
            let p = if p.is_absolute() {
                p
            } else {
                eff.repo_root.join(p)
            };
            vec![normalize_path(&p)]
        }
        None => discover::find_all_docs(&eff.repo_root, &eff.discover).unwrap_or_else(|e| fail(e)),
    };
    if human && targets.is_empty() {
        eprintln!(
            "{} No markdown documents found under {}",
            info_prefix(),
            eff.discover.dirs.join(", ")
        );
    }

    output::print_header(&eff.repo_root, targets.len(), eff.fix, &eff.output);
    let mut ctx = Context::new(&eff.repo_root, eff.today);
    ctx.max_age_days = eff.max_age_days;
    let report = lint::run_lint(&targets, &ctx, eff.fix);
    output::print_report(&report, &eff.output);
    std::process::exit(lint::exit_code(&report));
}
