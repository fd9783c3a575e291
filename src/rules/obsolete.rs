use crate::{
    core::{CheckContext, ParsedDocument},
    issues::ObsoleteIssue,
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    ctx.documents.iter().flat_map(check_obsolete).collect()
}

pub fn check_obsolete(document: &ParsedDocument) -> Vec<ObsoleteIssue> {
    document
        .sites
        .iter()
        .filter(|site| site.message.state.is_obsolete())
        .map(|site| ObsoleteIssue { site: site.clone() })
        .collect()
}
