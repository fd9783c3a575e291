use std::fmt;

use serde::{Deserialize, Serialize};

/// Position information inside a translation document.
///
/// Represents a specific location in a `.ts` file, used for error reporting
/// when a check finds a problem with a message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the document (e.g., "./translations/dialog_ja.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// Advisory origin of a message, as recorded by the extraction tool.
///
/// Only translator tooling reads these; lookups never depend on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHint {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl LocationHint {
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

impl fmt::Display for LocationHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => write!(f, "{}", self.filename),
        }
    }
}

/// State of a translation, taken from the `type` attribute of `<translation>`.
///
/// Only `Finished` translations are served by a catalog; everything else
/// falls back to the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranslationState {
    /// No `type` attribute.
    #[default]
    Finished,
    /// `type="unfinished"`: present but not yet approved.
    Unfinished,
    /// `type="obsolete"`: the source string no longer exists.
    Obsolete,
    /// `type="vanished"`: like obsolete, written by newer tools.
    Vanished,
}

impl TranslationState {
    /// Parse the value of the `type` attribute.
    ///
    /// Unknown values are kept as `Unfinished` so they are never served.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("") => TranslationState::Finished,
            Some("obsolete") => TranslationState::Obsolete,
            Some("vanished") => TranslationState::Vanished,
            Some(_) => TranslationState::Unfinished,
        }
    }

    /// Value for the `type` attribute, `None` when the attribute is omitted.
    pub fn as_attribute(self) -> Option<&'static str> {
        match self {
            TranslationState::Finished => None,
            TranslationState::Unfinished => Some("unfinished"),
            TranslationState::Obsolete => Some("obsolete"),
            TranslationState::Vanished => Some("vanished"),
        }
    }

    pub fn is_finished(self) -> bool {
        self == TranslationState::Finished
    }

    pub fn is_obsolete(self) -> bool {
        matches!(self, TranslationState::Obsolete | TranslationState::Vanished)
    }
}

impl fmt::Display for TranslationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_attribute().unwrap_or("finished"))
    }
}

/// One record of a translation table.
///
/// `(context, source, disambiguation)` identifies the record; a plain
/// `(context, source)` lookup is the one without disambiguation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedMessage {
    /// Owning UI scope (e.g., "WordRegisterDialog").
    pub context: String,
    /// Original-language text, the lookup key.
    pub source: String,
    /// Localized text. For numerus messages, the first form. For messages with
    /// length variants, the first (longest) variant.
    pub translation: String,
    /// The `<comment>` element, distinguishing equal source texts.
    pub disambiguation: Option<String>,
    pub state: TranslationState,
    /// All plural forms of a `numerus="yes"` message, empty otherwise.
    pub numerus_forms: Vec<String>,
    /// All `<lengthvariant>` texts of a `variants="yes"` translation, longest
    /// first. Empty otherwise.
    pub length_variants: Vec<String>,
    pub locations: Vec<LocationHint>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
}

impl LocalizedMessage {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            translation: translation.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: LocationHint) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_state(mut self, state: TranslationState) -> Self {
        self.state = state;
        self
    }

    pub fn with_disambiguation(mut self, disambiguation: impl Into<String>) -> Self {
        self.disambiguation = Some(disambiguation.into());
        self
    }

    pub fn is_numerus(&self) -> bool {
        !self.numerus_forms.is_empty()
    }

    /// True when the translation has no visible characters.
    pub fn is_blank(&self) -> bool {
        self.translation.trim().is_empty()
    }
}

/// A message together with where it was found.
///
/// Produced by the document parser so checks can point at the offending
/// `<message>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSite {
    pub location: MessageLocation,
    /// The full text of the line holding `<source>`, for report excerpts.
    pub source_line: Option<String>,
    pub message: LocalizedMessage,
}

impl MessageSite {
    pub fn new(location: MessageLocation, message: LocalizedMessage) -> Self {
        Self {
            location,
            source_line: None,
            message,
        }
    }

    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
