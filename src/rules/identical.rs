//! Identical translation detection.
//!
//! A finished translation equal to its source usually means the text was
//! copied instead of translated. Sources without letters (numbers, symbols,
//! format placeholders) and texts listed in `ignoreTexts` are skipped.

use crate::{
    config::Config,
    core::{CheckContext, ParsedDocument},
    issues::IdenticalIssue,
    utils::contains_alphabetic,
};

pub fn check_identical_issues(ctx: &CheckContext) -> Vec<IdenticalIssue> {
    ctx.documents
        .iter()
        .flat_map(|document| check_identical(document, &ctx.config))
        .collect()
}

pub fn check_identical(document: &ParsedDocument, config: &Config) -> Vec<IdenticalIssue> {
    // A document written in its own source language is expected to match.
    if document.document.language.as_deref() == Some(config.source_language.as_str()) {
        return Vec::new();
    }

    document
        .sites
        .iter()
        .filter(|site| {
            let message = &site.message;
            message.state.is_finished()
                && message.translation == message.source
                && contains_alphabetic(&message.source)
                && !config.is_ignored_text(&message.source)
        })
        .map(|site| IdenticalIssue { site: site.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::test_support::parse_messages;

    const MESSAGES: &str = r#"    <message>
        <source>Mozc</source>
        <translation>Mozc</translation>
    </message>
    <message>
        <source>%1</source>
        <translation>%1</translation>
    </message>
    <message>
        <source>Word</source>
        <translation>単語</translation>
    </message>"#;

    #[test]
    fn test_identical_translation_is_reported() {
        let doc = parse_messages(MESSAGES);
        let issues = check_identical(&doc, &Config::default());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].site.message.source, "Mozc");
    }

    #[test]
    fn test_ignore_texts() {
        let doc = parse_messages(MESSAGES);
        let config = Config {
            ignore_texts: vec!["Mozc".to_string()],
            ..Default::default()
        };

        assert!(check_identical(&doc, &config).is_empty());
    }

    #[test]
    fn test_source_language_document_is_skipped() {
        let doc = parse_messages(MESSAGES);
        let config = Config {
            source_language: "ja".to_string(),
            ..Default::default()
        };

        assert!(check_identical(&doc, &config).is_empty());
    }
}
