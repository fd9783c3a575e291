use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

/// Sort issues and count them, adding failures the summary itself carries.
pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    files_checked: usize,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    error_count += match &summary {
        CommandSummary::Lookup(lookup) => usize::from(lookup.strict && lookup.missing.is_some()),
        CommandSummary::Fmt(fmt) if !fmt.is_apply => fmt.changed.len(),
        CommandSummary::Init(init) => usize::from(init.error.is_some()),
        _ => 0,
    };

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        parse_error_count,
        files_checked,
    }
}
