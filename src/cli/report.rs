//! Output and diagnostics for command results.
//!
//! Rendered catalogs and resolved text go to stdout; notes, warnings and
//! errors go to stderr. Kept separate from the engine so the library can be
//! used without any console output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, OutputTarget, ResolveSummary,
};
use crate::{
    core::{OutputFormat, render::MISSING_ID_KEY},
    utils::plural,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, out, err),
        CommandSummary::Resolve(ResolveSummary { text }) => {
            let _ = writeln!(out, "{}", text);
        }
        CommandSummary::Init(InitSummary { path }) => {
            let _ = writeln!(
                out,
                "{} {} {}",
                SUCCESS_MARK.green(),
                "Created".green(),
                path.display().to_string().magenta()
            );
        }
    }
}

fn print_extract<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        print_scan_notes(summary, err);
    }

    match &summary.output {
        OutputTarget::Stdout(content) => {
            let _ = writeln!(out, "{}", content);
        }
        OutputTarget::File { path, error: None } => {
            let _ = writeln!(
                out,
                "{} {} {}",
                SUCCESS_MARK.green(),
                "Messages written to".green(),
                display_path(path).magenta()
            );
        }
        OutputTarget::File {
            error: Some(error), ..
        } => {
            let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
        }
    }
}

fn print_scan_notes<E: Write>(summary: &ExtractSummary, err: &mut E) {
    match &summary.config_path {
        Some(path) => {
            let _ = writeln!(err, "{} Using config {}", "note:".bold(), path.display());
        }
        None => {
            let _ = writeln!(
                err,
                "{} No .localizerc.json found, using default configuration",
                "note:".bold()
            );
        }
    }

    let _ = writeln!(
        err,
        "{} Scanned {} ({} ignored), found {}, rendering as {}",
        "note:".bold(),
        plural(summary.files_scanned, "file", "files"),
        summary.files_ignored,
        plural(summary.message_count, "message", "messages"),
        summary.format.to_string().cyan()
    );

    if summary.format == OutputFormat::KeyValue && summary.missing_id_count > 0 {
        let _ = writeln!(
            err,
            "{} {} without an id stored under the \"{}\" key",
            "warning:".bold().yellow(),
            plural(summary.missing_id_count, "message", "messages"),
            MISSING_ID_KEY
        );
    }
}

fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
