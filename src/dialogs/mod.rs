//! Translation tables bundled with the crate.

pub mod word_register;
