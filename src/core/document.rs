use std::{fmt, str::FromStr};

use super::message::{LocalizedMessage, MessageLocation, MessageSite};

/// Schema versions this crate reads and writes.
pub const SUPPORTED_VERSIONS: &[SchemaVersion] = &[
    SchemaVersion::new(1, 1),
    SchemaVersion::new(2, 0),
    SchemaVersion::new(2, 1),
];

/// The `version` attribute of the `<TS>` root, e.g. `2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u16,
    pub minor: u16,
}

impl SchemaVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub fn is_supported(self) -> bool {
        SUPPORTED_VERSIONS.contains(&self)
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::new(2, 1)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schema version \"{0}\" (expected MAJOR.MINOR)")]
pub struct InvalidSchemaVersion(pub String);

impl FromStr for SchemaVersion {
    type Err = InvalidSchemaVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSchemaVersion(s.to_string());
        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        Ok(SchemaVersion {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

/// All messages of one `<context>` element, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextBlock {
    pub name: String,
    pub messages: Vec<LocalizedMessage>,
}

impl ContextBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// An in-memory translation document.
///
/// Keeps contexts and messages in their original order so the writer can
/// produce a stable file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsDocument {
    pub version: SchemaVersion,
    /// Target language code (e.g., "ja").
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<ContextBlock>,
}

impl TsDocument {
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// Append a message to its context, creating the context block when it
    /// has not been seen yet.
    pub fn push(&mut self, message: LocalizedMessage) {
        match self
            .contexts
            .iter_mut()
            .find(|block| block.name == message.context)
        {
            Some(block) => block.messages.push(message),
            None => {
                let mut block = ContextBlock::new(message.context.clone());
                block.messages.push(message);
                self.contexts.push(block);
            }
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = &LocalizedMessage> {
        self.contexts.iter().flat_map(|block| block.messages.iter())
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|block| block.messages.len()).sum()
    }
}

/// A document read from disk, with positions for every message.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub file_path: String,
    /// Position of the `<TS>` root element.
    pub root: MessageLocation,
    pub document: TsDocument,
    /// One entry per message, in document order.
    pub sites: Vec<MessageSite>,
}
