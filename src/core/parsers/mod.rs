//! Readers for translation documents.
//!
//! - `ts`: Qt Linguist `.ts` document parser (tracks message positions)
//! - `scan`: config-driven document discovery and parallel parsing

pub mod scan;
pub mod ts;
