use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::{catalog::Catalog, dialogs::word_register};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let owned;
    let catalog = match &cmd.file {
        Some(path) => {
            owned = load_catalog(path)?;
            &owned
        }
        None => word_register::japanese()
            .map_err(|err| anyhow!("Bundled word register table is invalid: {}", err))?,
    };

    let (text, missing) =
        match catalog.get_disambiguated(&cmd.context, &cmd.source, cmd.disambiguation.as_deref()) {
            Ok(translation) => (translation.to_string(), None),
            Err(missing) => {
                tracing::debug!("{}", missing);
                (cmd.source.clone(), Some(missing))
            }
        };

    Ok(finish(
        CommandSummary::Lookup(LookupSummary {
            text,
            missing,
            strict: cmd.strict,
        }),
        Vec::new(),
        0,
    ))
}

/// Load a `.json` compiled catalog or a translation document.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if path.extension().is_some_and(|ext| ext == "json") {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read compiled catalog: {}", path.display()))?;
        Catalog::from_compiled_json(&json)
            .with_context(|| format!("Failed to load compiled catalog: {}", path.display()))
    } else {
        Catalog::from_ts_file(path)
            .with_context(|| format!("Failed to load translation document: {}", path.display()))
    }
}
