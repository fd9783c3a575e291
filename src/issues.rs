//! Issue types for translation document checks.
//!
//! Each issue is self-contained with all information needed by the reporter
//! to point at the offending message and explain the problem.

use enum_dispatch::enum_dispatch;

use crate::core::{MessageLocation, MessageSite, SchemaVersion, SUPPORTED_VERSIONS};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateSource,
    EmptyTranslation,
    UnsupportedVersion,
    Unfinished,
    Obsolete,
    Identical,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateSource => write!(f, "duplicate-source"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::UnsupportedVersion => write!(f, "unsupported-version"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::Identical => write!(f, "identical"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Messages (MessageSite)
// ============================================================

/// The same `(context, source, disambiguation)` appears more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSourceIssue {
    pub site: MessageSite,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateSourceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateSource
    }
}

/// A finished translation with no visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub site: MessageSite,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Translation still marked unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub site: MessageSite,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Translation kept for a source string that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub site: MessageSite,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

/// Translation identical to its source text, which may mean it was never
/// translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalIssue {
    pub site: MessageSite,
}

impl IdenticalIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Identical
    }
}

// ============================================================
// Issue Types - Documents
// ============================================================

/// Document declares a schema version this crate does not understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedVersionIssue {
    /// Position of the `<TS>` root element.
    pub location: MessageLocation,
    pub version: SchemaVersion,
}

impl UnsupportedVersionIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnsupportedVersion
    }
}

/// Document that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateSource(DuplicateSourceIssue),
    EmptyTranslation(EmptyTranslationIssue),
    UnsupportedVersion(UnsupportedVersionIssue),
    Unfinished(UnfinishedIssue),
    Obsolete(ObsoleteIssue),
    Identical(IdenticalIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DuplicateSource(_) => DuplicateSourceIssue::severity(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::severity(),
            Issue::UnsupportedVersion(_) => UnsupportedVersionIssue::severity(),
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Obsolete(_) => ObsoleteIssue::severity(),
            Issue::Identical(_) => IdenticalIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::DuplicateSource(_) => DuplicateSourceIssue::rule(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::rule(),
            Issue::UnsupportedVersion(_) => UnsupportedVersionIssue::rule(),
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Obsolete(_) => ObsoleteIssue::rule(),
            Issue::Identical(_) => IdenticalIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Where an issue points.
pub enum ReportLocation<'a> {
    /// A `<message>`; carries the line excerpt for context.
    Message(&'a MessageSite),
    /// A position in a document without message context.
    Document(&'a MessageLocation),
    /// A whole file, optionally with a line.
    File { path: &'a str, line: Option<usize> },
}

#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Headline text, shown in quotes after the severity.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    fn hint(&self) -> Option<&str> {
        None
    }

    fn details(&self) -> Option<String> {
        None
    }
}

/// `in <context>` plus the disambiguation, if any.
fn context_note(site: &MessageSite) -> String {
    match &site.message.disambiguation {
        Some(comment) => format!("in {} ({})", site.message.context, comment),
        None => format!("in {}", site.message.context),
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for DuplicateSourceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}, first defined at line {}",
            context_note(&self.site),
            self.first_line
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("add a <comment> to tell the two apart, or remove one of them")
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(context_note(&self.site))
    }

    fn hint(&self) -> Option<&str> {
        Some("translate the text or mark it type=\"unfinished\"")
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(context_note(&self.site))
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}, marked {}",
            context_note(&self.site),
            self.site.message.state
        ))
    }
}

impl Report for IdenticalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.site)
    }

    fn message(&self) -> String {
        self.site.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}, translation is identical to the source",
            context_note(&self.site)
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("list intentional copies in \"ignoreTexts\"")
    }
}

impl Report for UnsupportedVersionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Document(&self.location)
    }

    fn message(&self) -> String {
        self.version.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let supported: Vec<String> = SUPPORTED_VERSIONS.iter().map(|v| v.to_string()).collect();
        Some(format!("supported versions: {}", supported.join(", ")))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(site) => site.file_path(),
            ReportLocation::Document(location) => &location.file_path,
            ReportLocation::File { path, .. } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(site) => site.line(),
            ReportLocation::Document(location) => location.line,
            ReportLocation::File { line, .. } => line.unwrap_or(0),
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(site) => site.col(),
            ReportLocation::Document(location) => location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
