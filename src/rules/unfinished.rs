use crate::{
    core::{CheckContext, ParsedDocument, TranslationState},
    issues::UnfinishedIssue,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.documents.iter().flat_map(check_unfinished).collect()
}

pub fn check_unfinished(document: &ParsedDocument) -> Vec<UnfinishedIssue> {
    document
        .sites
        .iter()
        .filter(|site| site.message.state == TranslationState::Unfinished)
        .map(|site| UnfinishedIssue { site: site.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::test_support::parse_messages;

    #[test]
    fn test_unfinished_translations() {
        let doc = parse_messages(
            r#"    <message>
        <source>Reading</source>
        <translation type="unfinished">よみ</translation>
    </message>
    <message>
        <source>Mozc</source>
        <translation type="obsolete">Mozc</translation>
    </message>"#,
        );

        let issues = check_unfinished(&doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].site.message.source, "Reading");
    }
}
