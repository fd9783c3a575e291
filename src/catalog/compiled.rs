//! JSON form of a catalog, produced at build time and loaded at startup.

use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogBuilder, CatalogError};
use crate::core::LocalizedMessage;

/// Current version of the compiled layout.
pub const COMPILED_FORMAT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledCatalog {
    pub format: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub messages: Vec<CompiledMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledMessage {
    pub context: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
    pub translation: String,
}

impl Catalog {
    /// Flatten into the compiled layout. Messages are sorted, so output is
    /// stable across runs.
    pub fn compile(&self) -> CompiledCatalog {
        CompiledCatalog {
            format: COMPILED_FORMAT,
            language: self.language.clone(),
            messages: self
                .iter()
                .map(|(context, source, disambiguation, translation)| CompiledMessage {
                    context: context.to_string(),
                    source: source.to_string(),
                    disambiguation: disambiguation.map(str::to_string),
                    translation: translation.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_compiled(compiled: CompiledCatalog) -> Result<Self, CatalogError> {
        if compiled.format != COMPILED_FORMAT {
            return Err(CatalogError::UnsupportedFormat(compiled.format));
        }

        let mut builder = CatalogBuilder::default().language(compiled.language);
        for message in compiled.messages {
            let mut entry =
                LocalizedMessage::new(message.context, message.source, message.translation);
            entry.disambiguation = message.disambiguation;
            builder.insert(entry)?;
        }
        Ok(builder.build())
    }

    pub fn from_compiled_json(json: &str) -> Result<Self, CatalogError> {
        let compiled: CompiledCatalog = serde_json::from_str(json)?;
        Self::from_compiled(compiled)
    }

    pub fn to_compiled_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.compile())?)
    }
}
