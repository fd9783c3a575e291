//! Core data model for translation documents.
//!
//! ## Module Structure
//!
//! - `context`: configuration and parsed documents for a check run
//! - `message`: one translation record and its positions
//! - `document`: a whole document (schema version, contexts)
//! - `parsers`: reading documents from text and disk
//! - `writer`: writing documents back in canonical form

mod context;
mod document;
mod error;
mod message;
pub mod parsers;
pub mod writer;

pub use context::{CheckContext, DiscoveredFiles, discover_files};
pub use document::*;
pub use error::DocumentError;
pub use message::*;
