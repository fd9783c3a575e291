use std::path::PathBuf;

use crate::{catalog::MissingTranslation, cli::exit_status::ExitStatus, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Compile(CompileSummary),
    Fmt(FmtSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Display string: the translation, or the source text.
    pub text: String,
    pub missing: Option<MissingTranslation>,
    pub strict: bool,
}

#[derive(Debug)]
pub enum CompileOutput {
    Stdout(String),
    File(PathBuf),
}

#[derive(Debug)]
pub struct CompileSummary {
    pub message_count: usize,
    pub output: CompileOutput,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Documents whose layout differs from the canonical one.
    pub changed: Vec<String>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub error: Option<String>,
}

/// Result of running a tscat command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found, sorted. Empty for commands that do not check.
    pub issues: Vec<Issue>,
    /// Number of documents that failed to parse.
    pub parse_error_count: usize,
    /// Number of documents looked at.
    pub files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
