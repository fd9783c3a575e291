use thiserror::Error;

use crate::core::{DocumentError, SchemaVersion};

/// The one lookup failure: nothing is stored for the requested key.
///
/// Never fatal. Callers display the source text instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no translation for \"{source_text}\" in context \"{context}\"")]
pub struct MissingTranslation {
    pub context: String,
    pub source_text: String,
}

/// Errors raised while building or installing a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate source \"{source_text}\" in context \"{context}\"")]
    DuplicateSource { context: String, source_text: String },
    #[error("empty translation for \"{source_text}\" in context \"{context}\"")]
    EmptyTranslation { context: String, source_text: String },
    #[error("unsupported schema version {0}")]
    UnsupportedVersion(SchemaVersion),
    #[error("unsupported compiled catalog format {0}")]
    UnsupportedFormat(u32),
    #[error("a catalog is already installed")]
    AlreadyInstalled,
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("invalid compiled catalog: {0}")]
    Compiled(#[from] serde_json::Error),
}
