//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run document checks (duplicates, empty or unfinished translations, ...)
//! - `lookup`: Print the display string for a `(context, source)` pair
//! - `compile`: Convert a translation document into the compiled JSON form
//! - `fmt`: Rewrite documents in canonical layout
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.verbose,
            Some(Command::Compile(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by commands that discover documents.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to search for documents (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    /// Check these documents instead of searching the root directory
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    pub context: String,

    pub source: String,

    /// Translation document or compiled catalog (default: bundled word register table)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Disambiguation comment of the message
    #[arg(long)]
    pub disambiguation: Option<String>,

    /// Exit with status 1 when no translation exists
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    pub file: PathBuf,

    /// Write to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Documents to format (default: all documents under the root directory)
    pub files: Vec<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation documents for problems
    Check(CheckCommand),
    /// Look up the display string for a context and source text
    Lookup(LookupCommand),
    /// Compile a translation document to JSON
    Compile(CompileCommand),
    /// Rewrite translation documents in canonical layout
    Fmt(FmtCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}
