use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_source_issues, empty::check_empty_translation_issues,
        identical::check_identical_issues, obsolete::check_obsolete_issues,
        unfinished::check_unfinished_issues, version::check_unsupported_version_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    DuplicateSource,
    EmptyTranslation,
    UnsupportedVersion,
    Unfinished,
    Obsolete,
    Identical,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::DuplicateSource,
            CheckRule::EmptyTranslation,
            CheckRule::UnsupportedVersion,
            CheckRule::Unfinished,
            CheckRule::Obsolete,
            CheckRule::Identical,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common, &cmd.files)?;
    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };

    Ok(finish(
        CommandSummary::Check,
        run_checks(&ctx, &checks),
        ctx.files_checked(),
    ))
}

/// Run `checks` over the context. Parse errors are always included.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::DuplicateSource => {
                let issues = check_duplicate_source_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateSource));
            }
            CheckRule::EmptyTranslation => {
                let issues = check_empty_translation_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::UnsupportedVersion => {
                let issues = check_unsupported_version_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnsupportedVersion));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Obsolete => {
                let issues = check_obsolete_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Obsolete));
            }
            CheckRule::Identical => {
                let issues = check_identical_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Identical));
            }
        }
    }

    all_issues.extend(ctx.parse_errors.iter().cloned().map(Issue::ParseError));
    all_issues
}
