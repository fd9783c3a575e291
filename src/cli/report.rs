//! Report formatting and printing utilities.
//!
//! Issues are displayed cargo-style. Kept apart from the checks so the
//! library can be used without any terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, CompileOutput, CompileSummary, FmtSummary, InitSummary,
    LookupSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::count_noun;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer. Issues are expected to be sorted.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);
    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(documents: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            count_noun(documents, "document", "documents")
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let position = match (line, col) {
        (0, _) => file_path.to_string(),
        (line, 0) => format!("{}:{}", file_path, line),
        (line, col) => format!("{}:{}:{}", file_path, line, col),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), position);

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based; wide characters take two cells.
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        count_noun(issues.len(), "problem", "problems"),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Message(site) => (
            site.file_path(),
            site.line(),
            site.col(),
            site.source_line.as_deref(),
        ),
        ReportLocation::Document(location) => {
            (location.file_path.as_str(), location.line, location.col, None)
        }
        ReportLocation::File { path, line } => (*path, line.unwrap_or(0), 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(site) => Some(site.line()),
            _ => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

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
        CommandSummary::Check => {
            report_to(&result.issues, out);
            if result.issues.is_empty() {
                print_success_to(result.files_checked, out);
            }
        }
        CommandSummary::Lookup(summary) => print_lookup(summary, verbose, out, err),
        CommandSummary::Compile(summary) => print_compile(summary, out),
        CommandSummary::Fmt(summary) => {
            report_to(&result.issues, out);
            print_fmt(summary, result.files_checked, result.issues.is_empty(), out);
        }
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_lookup<O: Write, E: Write>(
    summary: &LookupSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let _ = writeln!(out, "{}", summary.text);

    if let Some(missing) = &summary.missing {
        if summary.strict {
            let _ = writeln!(err, "{}: {}", "error".bold().red(), missing);
        } else if verbose {
            let _ = writeln!(
                err,
                "{}: {}, showing source text",
                "warning".bold().yellow(),
                missing
            );
        }
    }
}

fn print_compile<O: Write>(summary: &CompileSummary, out: &mut O) {
    match &summary.output {
        CompileOutput::Stdout(json) => {
            let _ = writeln!(out, "{}", json);
        }
        CompileOutput::File(path) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Compiled {} to {}",
                    count_noun(summary.message_count, "message", "messages"),
                    path.display()
                )
                .green()
            );
        }
    }
}

fn print_fmt<O: Write>(summary: &FmtSummary, files_checked: usize, clean: bool, out: &mut O) {
    if summary.changed.is_empty() {
        if !clean {
            return;
        }
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} - already formatted",
                count_noun(files_checked, "document", "documents")
            )
            .green()
        );
        return;
    }

    for path in &summary.changed {
        if summary.is_apply {
            let _ = writeln!(out, "{} {}", "Formatted".green().bold(), path);
        } else {
            let _ = writeln!(out, "{} {}", "Would format".yellow().bold(), path);
        }
    }

    let count = count_noun(summary.changed.len(), "document", "documents");
    if summary.is_apply {
        let _ = writeln!(
            out,
            "\n{} {}",
            SUCCESS_MARK.green(),
            format!("Formatted {}", count).green()
        );
    } else {
        let _ = writeln!(
            out,
            "\n{} {} not in canonical form (run with {} to rewrite)",
            FAILURE_MARK.red(),
            count,
            "--apply".cyan()
        );
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "Error: {}", error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}
