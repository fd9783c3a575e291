use std::fs;

use anyhow::{Context, Result};

use super::super::args::CompileCommand;
use super::{CommandResult, CommandSummary, CompileOutput, CompileSummary, helper::finish};
use crate::catalog::Catalog;

pub fn compile(cmd: CompileCommand) -> Result<CommandResult> {
    let catalog = Catalog::from_ts_file(&cmd.file)
        .with_context(|| format!("Failed to load translation document: {}", cmd.file.display()))?;
    let json = catalog.to_compiled_json()?;

    let output = match cmd.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            CompileOutput::File(path)
        }
        None => CompileOutput::Stdout(json),
    };

    Ok(finish(
        CommandSummary::Compile(CompileSummary {
            message_count: catalog.len(),
            output,
        }),
        Vec::new(),
        1,
    ))
}
