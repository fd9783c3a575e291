//! Rule implementations for tscat.
//!
//! Each rule has a pure function over one parsed document and a
//! `check_*_issues` wrapper that runs it over every document in a
//! [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `duplicate`: repeated `(context, source, disambiguation)` keys
//! - `empty`: finished translations without text
//! - `version`: unsupported schema versions
//! - `unfinished`: translations still marked unfinished
//! - `obsolete`: obsolete or vanished translations
//! - `identical`: translations equal to their source text

pub mod duplicate;
pub mod empty;
pub mod identical;
pub mod obsolete;
pub mod unfinished;
pub mod version;
