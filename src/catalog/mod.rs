//! Immutable lookup table built from a translation document.
//!
//! A [`Catalog`] is assembled once through a [`CatalogBuilder`] and is
//! read-only afterwards, so it can be shared across threads by reference.
//! Lookups are keyed by `(context, source)`, optionally narrowed by a
//! disambiguation comment, and fall back to the source text when nothing
//! is stored.

mod compiled;
mod error;
pub mod translator;

use std::{collections::HashMap, path::Path};

pub use compiled::{COMPILED_FORMAT, CompiledCatalog, CompiledMessage};
pub use error::{CatalogError, MissingTranslation};

use crate::core::{LocalizedMessage, TsDocument, parsers::ts};

/// Translations stored for one source text.
#[derive(Debug, Clone, Default)]
struct SourceEntry {
    /// Translation for the plain key (no disambiguation).
    plain: Option<String>,
    /// Translations keyed by disambiguation comment.
    disambiguated: HashMap<String, String>,
}

impl SourceEntry {
    fn get(&self, disambiguation: Option<&str>) -> Option<&str> {
        match disambiguation {
            None => self.plain.as_deref(),
            Some(comment) => self.disambiguated.get(comment).map(String::as_str),
        }
    }

    fn len(&self) -> usize {
        usize::from(self.plain.is_some()) + self.disambiguated.len()
    }
}

/// Read-only translation table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: Option<String>,
    entries: HashMap<String, HashMap<String, SourceEntry>>,
    len: usize,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from the finished messages of a document.
    ///
    /// Unfinished, obsolete and blank translations are left out, so lookups
    /// for them fall back to the source text.
    pub fn from_document(document: &TsDocument) -> Result<Self, CatalogError> {
        if !document.version.is_supported() {
            return Err(CatalogError::UnsupportedVersion(document.version));
        }

        let mut builder = CatalogBuilder::default().language(document.language.clone());
        for message in document.messages() {
            if !message.state.is_finished() || message.is_blank() {
                tracing::trace!(
                    context = %message.context,
                    source = %message.source,
                    state = %message.state,
                    "skipping message without a usable translation"
                );
                continue;
            }
            builder.insert(message.clone())?;
        }
        Ok(builder.build())
    }

    pub fn from_ts_str(content: &str) -> Result<Self, CatalogError> {
        let parsed = ts::parse_ts_str(content, "<memory>")?;
        Self::from_document(&parsed.document)
    }

    pub fn from_ts_file(path: &Path) -> Result<Self, CatalogError> {
        let parsed = ts::parse_ts_file(path)?;
        let catalog = Self::from_document(&parsed.document)?;
        tracing::debug!(
            "Loaded {} translation(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Target language of the table, when the document declares one.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Context names, sorted.
    pub fn contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, context: &str, source: &str) -> bool {
        self.get(context, source).is_ok()
    }

    /// Translation for `(context, source)`.
    pub fn get(&self, context: &str, source: &str) -> Result<&str, MissingTranslation> {
        self.get_disambiguated(context, source, None)
    }

    /// Translation for `(context, source, disambiguation)`.
    pub fn get_disambiguated(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
    ) -> Result<&str, MissingTranslation> {
        self.entries
            .get(context)
            .and_then(|sources| sources.get(source))
            .and_then(|entry| entry.get(disambiguation))
            .ok_or_else(|| MissingTranslation {
                context: context.to_string(),
                source_text: source.to_string(),
            })
    }

    /// Display string for `(context, source)`: the translation, or `source`
    /// unchanged when the table has none.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_disambiguated(context, source, None)
    }

    pub fn translate_disambiguated<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
    ) -> &'a str {
        match self.get_disambiguated(context, source, disambiguation) {
            Ok(translation) => translation,
            Err(missing) => {
                tracing::trace!("{}, using source text", missing);
                source
            }
        }
    }

    /// All entries as `(context, source, disambiguation, translation)`,
    /// sorted by context then source.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Option<&str>, &str)> {
        let mut rows = Vec::with_capacity(self.len);
        for (context, sources) in &self.entries {
            for (source, entry) in sources {
                if let Some(plain) = &entry.plain {
                    rows.push((context.as_str(), source.as_str(), None, plain.as_str()));
                }
                for (comment, translation) in &entry.disambiguated {
                    rows.push((
                        context.as_str(),
                        source.as_str(),
                        Some(comment.as_str()),
                        translation.as_str(),
                    ));
                }
            }
        }
        rows.sort_unstable();
        rows.into_iter()
    }
}

/// Accumulates entries for a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    language: Option<String>,
    entries: HashMap<String, HashMap<String, SourceEntry>>,
}

impl CatalogBuilder {
    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Add one message.
    ///
    /// Fails when the key is already present or the translation is blank.
    pub fn insert(&mut self, message: LocalizedMessage) -> Result<&mut Self, CatalogError> {
        if message.is_blank() {
            return Err(CatalogError::EmptyTranslation {
                context: message.context,
                source_text: message.source,
            });
        }

        let LocalizedMessage {
            context,
            source,
            translation,
            disambiguation,
            ..
        } = message;

        let entry = self
            .entries
            .entry(context.clone())
            .or_default()
            .entry(source.clone())
            .or_default();

        let slot = match disambiguation {
            None => &mut entry.plain,
            Some(comment) => {
                if entry.disambiguated.contains_key(&comment) {
                    return Err(CatalogError::DuplicateSource {
                        context,
                        source_text: source,
                    });
                }
                entry.disambiguated.insert(comment, translation);
                return Ok(self);
            }
        };
        if slot.is_some() {
            return Err(CatalogError::DuplicateSource {
                context,
                source_text: source,
            });
        }
        *slot = Some(translation);
        Ok(self)
    }

    /// Shorthand for inserting a plain `(context, source, translation)` entry.
    pub fn add(
        &mut self,
        context: &str,
        source: &str,
        translation: &str,
    ) -> Result<&mut Self, CatalogError> {
        self.insert(LocalizedMessage::new(context, source, translation))
    }

    pub fn build(self) -> Catalog {
        let len = self
            .entries
            .values()
            .flat_map(HashMap::values)
            .map(SourceEntry::len)
            .sum();
        Catalog {
            language: self.language,
            entries: self.entries,
            len,
        }
    }
}
