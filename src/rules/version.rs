use crate::{
    core::{CheckContext, ParsedDocument},
    issues::UnsupportedVersionIssue,
};

pub fn check_unsupported_version_issues(ctx: &CheckContext) -> Vec<UnsupportedVersionIssue> {
    ctx.documents
        .iter()
        .filter_map(check_unsupported_version)
        .collect()
}

pub fn check_unsupported_version(document: &ParsedDocument) -> Option<UnsupportedVersionIssue> {
    let version = document.document.version;
    (!version.is_supported()).then(|| UnsupportedVersionIssue {
        location: document.root.clone(),
        version,
    })
}
