//! tscat - translation catalogs for Qt Linguist style documents
//!
//! tscat loads `.ts` translation documents into immutable lookup tables,
//! resolves `(context, source)` pairs to display strings with a fallback
//! to the source text, and checks documents for common translation
//! problems.
//!
//! ## Module Structure
//!
//! - `catalog`: Immutable lookup tables, compiled JSON form, active catalog
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Document model, parser and writer
//! - `dialogs`: Bundled tables of individual dialogs
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic logging setup
//! - `rules`: Document checks
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod dialogs;
pub mod issues;
pub mod logging;
pub mod rules;
pub mod utils;
