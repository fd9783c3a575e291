//! Duplicate source detection.
//!
//! Within a context, a source text (with its disambiguation comment) is the
//! lookup key, so a second definition can never be reached.

use std::collections::HashMap;

use crate::{
    core::{CheckContext, ParsedDocument},
    issues::DuplicateSourceIssue,
};

pub fn check_duplicate_source_issues(ctx: &CheckContext) -> Vec<DuplicateSourceIssue> {
    ctx.documents.iter().flat_map(check_duplicate_source).collect()
}

/// Report every repeat of a key, pointing back at the first definition.
pub fn check_duplicate_source(document: &ParsedDocument) -> Vec<DuplicateSourceIssue> {
    let mut first_seen: HashMap<(&str, &str, Option<&str>), usize> = HashMap::new();
    let mut issues = Vec::new();

    for site in &document.sites {
        let message = &site.message;
        let key = (
            message.context.as_str(),
            message.source.as_str(),
            message.disambiguation.as_deref(),
        );
        match first_seen.get(&key) {
            Some(&first_line) => issues.push(DuplicateSourceIssue {
                site: site.clone(),
                first_line,
            }),
            None => {
                first_seen.insert(key, site.line());
            }
        }
    }

    issues
}
