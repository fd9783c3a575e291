use anyhow::Result;

use crate::{CliTest, DIALOG_JA, stdout};

const COMPACT_JA: &str = r#"<TS version="2.0" language="ja"><context><name>WordRegisterDialog</name><message><source>Word</source><translation>単語</translation></message></context></TS>"#;

#[test]
fn test_fmt_dry_run_reports_changes() -> Result<()> {
    let test = CliTest::with_file("compact_ja.ts", COMPACT_JA)?;

    let output = test.command().arg("fmt").output()?;
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Would format ./compact_ja.ts"), "{}", stdout);
    assert!(stdout.contains("run with --apply to rewrite"), "{}", stdout);
    assert_eq!(test.read_file("compact_ja.ts")?, COMPACT_JA);

    Ok(())
}

#[test]
fn test_fmt_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("compact_ja.ts", COMPACT_JA)?;

    let output = test.command().args(["fmt", "--apply"]).output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Formatted ./compact_ja.ts"));

    let formatted = test.read_file("compact_ja.ts")?;
    assert!(formatted.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n"));

    let output = test.command().arg("fmt").output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ Checked 1 document - already formatted\n"
    );

    // Content survives formatting.
    let output = test
        .lookup_command()
        .args(["WordRegisterDialog", "Word", "--file", "compact_ja.ts"])
        .output()?;
    assert_eq!(crate::stdout(&output), "単語\n");

    Ok(())
}

#[test]
fn test_fmt_apply_keeps_length_variants() -> Result<()> {
    let content = r#"<TS version="2.1" language="ja"><context><name>C</name><message><source>Dictionary</source><translation variants="yes"><lengthvariant>登録先辞書</lengthvariant><lengthvariant>辞書</lengthvariant></translation></message></context></TS>"#;
    let test = CliTest::with_file("variants_ja.ts", content)?;

    let output = test.command().args(["fmt", "--apply"]).output()?;
    assert!(output.status.success());

    let formatted = test.read_file("variants_ja.ts")?;
    assert!(formatted.contains("<lengthvariant>辞書</lengthvariant>"), "{}", formatted);

    let output = test
        .lookup_command()
        .args(["C", "Dictionary", "--file", "variants_ja.ts"])
        .output()?;
    assert_eq!(stdout(&output), "登録先辞書\n");

    Ok(())
}

#[test]
fn test_fmt_explicit_files() -> Result<()> {
    let test = CliTest::with_file("compact_ja.ts", COMPACT_JA)?;
    test.write_file("other_ja.ts", DIALOG_JA)?;

    let output = test
        .command()
        .args(["fmt", "--apply", "other_ja.ts"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("compact_ja.ts")?, COMPACT_JA);

    Ok(())
}

#[test]
fn test_fmt_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "<TS version=\"2.0\">\n")?;

    let output = test.command().arg("fmt").output()?;
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("parse-error"), "{}", stdout);

    Ok(())
}
