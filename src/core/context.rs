use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        ParsedDocument,
        parsers::scan::{parse_documents, scan_files},
    },
    issues::ParseErrorIssue,
};

/// Everything a check run needs: merged configuration and the parsed
/// documents.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--root translations`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory documents were discovered from.
    pub root_dir: PathBuf,

    /// Documents that parsed successfully, sorted by path.
    pub documents: Vec<ParsedDocument>,

    /// Documents that failed to read or parse.
    pub parse_errors: Vec<ParseErrorIssue>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

/// Configuration plus the documents a command should work on.
pub struct DiscoveredFiles {
    pub config: Config,
    pub root_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Load configuration and resolve the document list.
///
/// `files` overrides discovery; when empty, documents are found under the
/// root directory according to the configuration.
pub fn discover_files(common_args: &CommonArgs, files: &[PathBuf]) -> Result<DiscoveredFiles> {
    let search_dir = common_args
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let config_result = load_config(&search_dir)?;
    if !config_result.from_file {
        tracing::info!("No .tscatrc.json found, using default configuration");
    }
    let config = config_result.config;

    let root_dir = match &common_args.root {
        Some(root) => root.clone(),
        None => PathBuf::from(&config.translations_root),
    };

    let files = if files.is_empty() {
        let scan_result = scan_files(&root_dir, &config);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if common_args.verbose { "" } else { " (use -v for details)" }
            );
        }
        scan_result.files
    } else {
        files.to_vec()
    };

    Ok(DiscoveredFiles {
        config,
        root_dir,
        files,
    })
}

impl CheckContext {
    /// Load configuration and parse documents.
    pub fn new(common_args: &CommonArgs, files: &[PathBuf]) -> Result<Self> {
        let discovered = discover_files(common_args, files)?;
        Ok(Self::from_files(
            discovered.config,
            discovered.root_dir,
            &discovered.files,
            common_args.verbose,
        ))
    }

    /// Parse `files` with an already loaded configuration.
    pub fn from_files(config: Config, root_dir: PathBuf, files: &[PathBuf], verbose: bool) -> Self {
        let parsed = parse_documents(files);
        let parse_errors = parsed
            .warnings
            .into_iter()
            .map(|warning| ParseErrorIssue {
                file_path: warning.file_path,
                line: warning.error.line(),
                error: warning.error.to_string(),
            })
            .collect();

        Self {
            config,
            root_dir,
            documents: parsed.documents,
            parse_errors,
            verbose,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Number of documents looked at, including ones that failed to parse.
    pub fn files_checked(&self) -> usize {
        self.documents.len() + self.parse_errors.len()
    }
}
