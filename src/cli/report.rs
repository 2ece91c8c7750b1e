//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow xlocalize to be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanCommandSummary};
use crate::core::{DirectoryOutcome, DirectoryReport, Finding};
use crate::utils::truncate_for_display;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Longest raw argument shown in a warning.
const MAX_ARGUMENT_DISPLAY: usize = 60;

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    print_to(result, verbose, &mut stdout, &mut stderr);
}

pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, out, err),
        CommandSummary::Scan(summary) => print_scan(summary, result, verbose, out, err),
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}

/// Path shown to the user: relative to the scan root when possible.
fn display_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn print_scan<O: Write, E: Write>(
    summary: &ScanCommandSummary,
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let root = summary.root.as_path();

    if verbose && let Some(path) = &summary.config_path {
        let _ = writeln!(err, "{} {}", "Using config".cyan(), path.display());
    }

    for outcome in &summary.outcome.outcomes {
        match outcome {
            DirectoryOutcome::Processed(report) => {
                print_non_literals(report, root, &summary.marker, err);
                print_directory(report, root, summary.dry_run, verbose, out);
            }
            DirectoryOutcome::Failed { dir, error } => {
                let _ = writeln!(
                    err,
                    "{} {}: {}",
                    "error:".bold().red(),
                    display_path(root, dir),
                    error
                );
            }
        }
    }

    print_scan_summary(summary, result, out);
}

fn print_non_literals<E: Write>(
    report: &DirectoryReport,
    root: &Path,
    marker: &str,
    err: &mut E,
) {
    for located in &report.non_literals {
        let Finding::NonLiteral(raw) = &located.finding else {
            continue;
        };
        let _ = writeln!(
            err,
            "{} non-literal argument to {}(): {}",
            "warning:".bold().yellow(),
            marker,
            truncate_for_display(raw, MAX_ARGUMENT_DISPLAY).cyan()
        );
        let _ = writeln!(
            err,
            "  {} {}:{}",
            "-->".blue(),
            display_path(root, &located.path),
            located.line
        );
    }
}

fn print_directory<O: Write>(
    report: &DirectoryReport,
    root: &Path,
    dry_run: bool,
    verbose: bool,
    out: &mut O,
) {
    let changed = report.created || report.stats.added_values > 0 || report.stats.added_keys > 0;
    let path = display_path(root, &report.catalog_path);
    if !changed {
        if verbose {
            let _ = writeln!(
                out,
                "{} {} ({} - {} missing)",
                "Unchanged".dimmed(),
                path,
                plural(report.total_keys, "key", "keys"),
                report.missing
            );
        }
        return;
    }

    let details = format!(
        "{}, {} - {} missing",
        plural(report.stats.added_keys, "new key", "new keys"),
        plural(report.stats.added_values, "new value", "new values"),
        report.missing
    );

    if dry_run {
        let _ = writeln!(out, "{} {} ({})", "Would update".cyan(), path, details);
    } else if report.created {
        let _ = writeln!(
            out,
            "{} {} {} ({})",
            SUCCESS_MARK.green(),
            "Created".green(),
            path,
            details
        );
    } else {
        let _ = writeln!(
            out,
            "{} {} {} ({})",
            SUCCESS_MARK.green(),
            "Updated".green(),
            path,
            details
        );
    }
}

fn print_scan_summary<O: Write>(
    summary: &ScanCommandSummary,
    result: &CommandResult,
    out: &mut O,
) {
    let outcome = &summary.outcome;
    let directories = outcome.reports().count();
    let missing: usize = outcome.reports().map(|r| r.missing).sum();

    let line = format!(
        "Processed {}, {} - {} added, {} missing",
        plural(directories, "directory", "directories"),
        plural(outcome.files_scanned(), "file", "files"),
        plural(outcome.added_keys(), "key", "keys"),
        plural(missing, "translation", "translations"),
    );

    if result.error_count > 0 {
        let _ = writeln!(
            out,
            "{} {} ({} failed)",
            FAILURE_MARK.red(),
            line,
            plural(result.error_count, "directory", "directories")
        );
    } else {
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), line.green());
    }

    if result.warning_count > 0 {
        let _ = writeln!(
            out,
            "{} {} with a non-literal argument",
            "warning:".bold().yellow(),
            plural(result.warning_count, "call", "calls")
        );
    }
}
