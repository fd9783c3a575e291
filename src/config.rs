use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tscatrc.json";

/// Directories never searched for translation documents.
pub const SKIPPED_DIRS: &[&str] = &["node_modules", "target", ".git"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    /// Source texts allowed to keep an identical translation (e.g. product names).
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_translations_root", alias = "root")]
    pub translations_root: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_translations_root() -> String {
    "./".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            ignore_texts: Vec::new(),
            translations_root: default_translations_root(),
            source_language: default_source_language(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            anyhow::bail!("'extensions' must list at least one file extension");
        }

        Ok(())
    }

    pub fn is_ignored_text(&self, source: &str) -> bool {
        self.ignore_texts.iter().any(|text| text == source)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!("Loading configuration from: {:?}", path);
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(ConfigLoadResult {
                config: Config::default(),
                from_file: false,
            })
        }
    }
}
