use std::io;

use thiserror::Error;

use super::document::InvalidSchemaVersion;

/// Errors raised while reading or writing a translation document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Malformed XML.
    #[error("line {line}: {message}")]
    Xml { line: usize, message: String },
    /// The input ended before a `<TS>` root element was found.
    #[error("no <TS> root element found")]
    MissingRoot,
    /// The root element is not `<TS>`.
    #[error("line {line}: expected <TS> root element, found <{found}>")]
    UnexpectedRoot { line: usize, found: String },
    #[error("line {line}: <{element}> is missing the \"{attribute}\" attribute")]
    MissingAttribute {
        line: usize,
        element: &'static str,
        attribute: &'static str,
    },
    #[error("line {line}: <{parent}> has no <{element}>")]
    MissingElement {
        line: usize,
        element: &'static str,
        parent: &'static str,
    },
    #[error("line {line}: {source}")]
    InvalidVersion {
        line: usize,
        #[source]
        source: InvalidSchemaVersion,
    },
    /// Serializing a document failed.
    #[error("failed to write document: {0}")]
    Write(#[from] io::Error),
    #[error("failed to encode document: {0}")]
    Encode(#[from] quick_xml::Error),
}

impl DocumentError {
    /// Line the error refers to, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            DocumentError::Xml { line, .. }
            | DocumentError::UnexpectedRoot { line, .. }
            | DocumentError::MissingAttribute { line, .. }
            | DocumentError::MissingElement { line, .. }
            | DocumentError::InvalidVersion { line, .. } => Some(*line),
            _ => None,
        }
    }
}
