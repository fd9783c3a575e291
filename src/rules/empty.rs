//! Empty translation detection.

use crate::{
    core::{CheckContext, ParsedDocument},
    issues::EmptyTranslationIssue,
};

pub fn check_empty_translation_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    ctx.documents.iter().flat_map(check_empty_translation).collect()
}

/// Finished messages must carry text; unfinished ones are reported by the
/// `unfinished` rule instead.
pub fn check_empty_translation(document: &ParsedDocument) -> Vec<EmptyTranslationIssue> {
    document
        .sites
        .iter()
        .filter(|site| site.message.state.is_finished() && site.message.is_blank())
        .map(|site| EmptyTranslationIssue { site: site.clone() })
        .collect()
}
