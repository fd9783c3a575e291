use std::{fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::super::args::FmtCommand;
use super::{CommandResult, CommandSummary, FmtSummary, helper::finish};
use crate::{
    core::{DocumentError, discover_files, parsers::ts::parse_ts_str, writer::write_document},
    issues::{Issue, ParseErrorIssue},
};

pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let discovered = discover_files(&cmd.common, &cmd.files)?;
    let files = discovered.files;

    let results: Vec<(String, Result<Option<String>, DocumentError>)> = files
        .par_iter()
        .map(|path| (path.to_string_lossy().to_string(), format_file(path)))
        .collect();

    let mut changed = Vec::new();
    let mut issues = Vec::new();
    for (file_path, result) in results {
        match result {
            Ok(Some(formatted)) => {
                if cmd.apply {
                    fs::write(&file_path, formatted)
                        .with_context(|| format!("Failed to write {}", file_path))?;
                    tracing::debug!("Rewrote {}", file_path);
                }
                changed.push(file_path);
            }
            Ok(None) => {}
            Err(error) => issues.push(Issue::ParseError(ParseErrorIssue {
                line: error.line(),
                error: error.to_string(),
                file_path,
            })),
        }
    }

    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed,
            is_apply: cmd.apply,
        }),
        issues,
        files.len(),
    ))
}

/// Canonical rendering of the document at `path`, or `None` when it is
/// already canonical.
pub fn format_file(path: &Path) -> Result<Option<String>, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    format_str(&content, &path.to_string_lossy())
}

pub fn format_str(content: &str, file_path: &str) -> Result<Option<String>, DocumentError> {
    let parsed = parse_ts_str(content, file_path)?;
    let formatted = write_document(&parsed.document)?;
    Ok((formatted != content).then_some(formatted))
}
