//! Process-wide active catalog.
//!
//! The catalog is installed once during startup and never replaced, so
//! lookups through [`tr`] need no locking.

use std::sync::OnceLock;

use super::{Catalog, CatalogError};

static ACTIVE: OnceLock<Catalog> = OnceLock::new();

/// Install the catalog used by [`tr`]. Only the first call succeeds.
pub fn install(catalog: Catalog) -> Result<&'static Catalog, CatalogError> {
    let mut catalog = Some(catalog);
    let installed = ACTIVE.get_or_init(|| catalog.take().unwrap_or_default());
    if catalog.is_some() {
        return Err(CatalogError::AlreadyInstalled);
    }
    tracing::debug!(
        language = installed.language().unwrap_or("-"),
        entries = installed.len(),
        "installed translation catalog"
    );
    Ok(installed)
}

pub fn installed() -> Option<&'static Catalog> {
    ACTIVE.get()
}

/// Translate through the installed catalog, falling back to `source` when
/// no catalog is installed or the entry is absent.
pub fn tr<'a>(context: &str, source: &'a str) -> &'a str {
    match ACTIVE.get() {
        Some(catalog) => catalog.translate(context, source),
        None => source,
    }
}
