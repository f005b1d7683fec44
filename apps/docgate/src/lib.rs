//! Docgate core library.
//!
//! This crate exposes programmatic APIs for validating a corpus of markdown
//! documents against structural and freshness rules.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Project root discovery and effective configuration.
//! - `discover`: Glob-based enumeration of candidate documents.
//! - `resolve`: Link and file-reference path resolution.
//! - `checks`: The rule evaluators (links, code references, timestamps,
//!   sections, TODO markers).
//! - `validate`: Single-document validation.
//! - `lint`: Run aggregation and exit status.
//! - `models`: Findings, results, summaries and document profiles.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
//! - `error`: Library error type.
pub mod checks;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod resolve;
pub mod utils;
pub mod validate;
