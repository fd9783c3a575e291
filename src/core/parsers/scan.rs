use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use quick_xml::{Reader, events::Event};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::ts::parse_ts_file;
use crate::{
    config::{Config, SKIPPED_DIRS},
    core::{DocumentError, ParsedDocument},
};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for translation documents.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// A document that could not be read or parsed.
#[derive(Debug)]
pub struct DocumentScanWarning {
    pub file_path: String,
    pub error: DocumentError,
}

#[derive(Debug, Default)]
pub struct ParseDocumentsResult {
    pub documents: Vec<ParsedDocument>,
    pub warnings: Vec<DocumentScanWarning>,
}

/// Find translation documents below `base_dir` according to `config`.
pub fn scan_files(base_dir: &Path, config: &Config) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in &config.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("Invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if config.includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in &config.includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten()),
                    Err(e) => tracing::warn!("Invalid glob pattern '{}': {}", inc, e),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    tracing::warn!("Include path does not exist: {}", path.display());
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !SKIPPED_DIRS.iter().any(|skip| entry.file_name() == *skip)
        });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!("Cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            let path_str = path.to_string_lossy();
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if entry.file_type().is_file() && has_extension(path, &config.extensions) {
                if has_ts_root(path) {
                    files.push(path.to_path_buf());
                } else {
                    tracing::debug!("Skipping {}: no <TS> root element", path.display());
                }
            }
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!("Found {} translation document(s)", files.len());

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Bytes read when sniffing for the root element.
const SNIFF_LEN: u64 = 4096;

/// Whether the markup at the head of `path` opens with a `<TS>` element.
///
/// TypeScript sources share the `.ts` extension and are left out of discovery.
/// Unreadable files are kept so the read error surfaces while parsing.
fn has_ts_root(path: &Path) -> bool {
    let mut head = Vec::new();
    let read = File::open(path).and_then(|file| file.take(SNIFF_LEN).read_to_end(&mut head));
    if read.is_err() {
        return true;
    }
    let head = String::from_utf8_lossy(&head);
    let mut reader = Reader::from_str(head.trim_start_matches('\u{feff}'));
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => return e.name().as_ref() == b"TS",
            Ok(Event::Text(text)) if !text.iter().all(u8::is_ascii_whitespace) => return false,
            Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => {}
        }
    }
}

/// Parse documents in parallel. Output keeps the order of `files`.
pub fn parse_documents(files: &[PathBuf]) -> ParseDocumentsResult {
    let results: Vec<(String, Result<ParsedDocument, DocumentError>)> = files
        .par_iter()
        .map(|path| (path.to_string_lossy().to_string(), parse_ts_file(path)))
        .collect();

    let mut outcome = ParseDocumentsResult::default();
    for (file_path, result) in results {
        match result {
            Ok(document) => outcome.documents.push(document),
            Err(error) => {
                tracing::debug!("Failed to parse {}: {}", file_path, error);
                outcome
                    .warnings
                    .push(DocumentScanWarning { file_path, error });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const DOC: &str = r#"<TS version="2.0"><context><name>C</name>
<message><source>a</source><translation>b</translation></message>
</context></TS>"#;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative(base: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(base).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_scan_finds_documents_and_skips_node_modules() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "gui/dialog_ja.ts", DOC);
        write(dir.path(), "gui/dialog.ui", "<ui/>");
        write(dir.path(), "node_modules/pkg/index.ts", "export {}");

        let result = scan_files(dir.path(), &Config::default());
        assert_eq!(relative(dir.path(), &result.files), vec!["gui/dialog_ja.ts"]);
    }

    #[test]
    fn test_scan_respects_includes_and_ignores() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "gui/a_ja.ts", DOC);
        write(dir.path(), "gui/old/b_ja.ts", DOC);
        write(dir.path(), "web/c.ts", "export {}");

        let config = Config {
            includes: vec!["gui".to_string()],
            ignores: vec!["gui/old".to_string()],
            ..Default::default()
        };
        let result = scan_files(dir.path(), &config);
        assert_eq!(relative(dir.path(), &result.files), vec!["gui/a_ja.ts"]);
    }

    #[test]
    fn test_scan_skips_typescript_sources() {
        let dir = TempDir::new().unwrap();
        let declared = format!("\u{feff}<?xml version=\"1.0\"?>\n<!DOCTYPE TS>\n{DOC}");
        write(dir.path(), "i18n/app_ja.ts", &declared);
        write(dir.path(), "src/app.ts", "export const x = 1;");
        write(dir.path(), "src/cmp.ts", "const a = 1 < 2;");
        write(dir.path(), "src/view.ts", "<div>hello</div>");
        write(dir.path(), "src/empty.ts", "");

        let result = scan_files(dir.path(), &Config::default());
        assert_eq!(relative(dir.path(), &result.files), vec!["i18n/app_ja.ts"]);
    }

    #[test]
    fn test_parse_documents_collects_failures() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a_ja.ts", DOC);
        write(dir.path(), "b_ja.ts", r#"<TS version="2.0"><context><name>C</name>"#);

        let files = scan_files(dir.path(), &Config::default()).files;
        let result = parse_documents(&files);

        assert_eq!(result.documents.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].file_path.ends_with("b_ja.ts"));
    }
}
