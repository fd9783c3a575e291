use anyhow::Result;

use crate::{CliTest, DIALOG_JA, stdout};

const DUPLICATE_JA: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="ja">
<context>
    <name>WordRegisterDialog</name>
    <message>
        <source>Word</source>
        <translation>単語</translation>
    </message>
    <message>
        <source>Word</source>
        <translation>ことば</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_document() -> Result<()> {
    let test = CliTest::with_file(
        "translations/dialog_ja.ts",
        &DIALOG_JA.replace(" type=\"unfinished\"></translation>", ">よみ</translation>"),
    )?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Checked 1 document - no issues found\n");

    Ok(())
}

#[test]
fn test_typescript_sources_are_not_documents() -> Result<()> {
    let test = CliTest::with_file(
        "translations/dialog_ja.ts",
        &DIALOG_JA.replace(" type=\"unfinished\"></translation>", ">よみ</translation>"),
    )?;
    test.write_file("web/app.ts", "export const answer: number = 42;\n")?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Checked 1 document - no issues found\n");

    Ok(())
}

#[test]
fn test_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_file("dialog_ja.ts", DIALOG_JA)?;

    let output = test.check_command().output()?;
    let stdout = stdout(&output);

    assert!(output.status.success());
    assert!(stdout.contains("warning: \"Reading\"  unfinished"), "{}", stdout);
    assert!(stdout.contains("  --> ./dialog_ja.ts:12:9"), "{}", stdout);
    assert!(stdout.contains("✘ 1 problem (0 errors, 1 warning)"), "{}", stdout);

    Ok(())
}

#[test]
fn test_duplicate_source_fails() -> Result<()> {
    let test = CliTest::with_file("dialog_ja.ts", DUPLICATE_JA)?;

    let output = test.check_command().output()?;
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("error: \"Word\"  duplicate-source"), "{}", stdout);
    assert!(
        stdout.contains("= note: in WordRegisterDialog, first defined at line 7"),
        "{}",
        stdout
    );

    Ok(())
}

#[test]
fn test_selected_rules() -> Result<()> {
    let test = CliTest::with_file("dialog_ja.ts", DUPLICATE_JA)?;

    let output = test.check_command().arg("unfinished").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Checked 1 document - no issues found\n");

    Ok(())
}

#[test]
fn test_explicit_files() -> Result<()> {
    let test = CliTest::with_file("a/dialog_ja.ts", DIALOG_JA)?;
    test.write_file("b/dialog_ja.ts", DUPLICATE_JA)?;

    let output = test
        .check_command()
        .args(["--file", "a/dialog_ja.ts"])
        .output()?;

    assert!(output.status.success());
    assert!(!stdout(&output).contains("duplicate-source"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "<TS version=\"2.0\">\n<context>\n")?;

    let output = test.check_command().output()?;
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("parse-error"), "{}", stdout);
    assert!(stdout.contains("--> ./broken.ts"), "{}", stdout);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["**/old/**"] }"#)?;
    test.write_file("gui/dialog_ja.ts", DIALOG_JA)?;
    test.write_file("gui/old/dialog_ja.ts", DUPLICATE_JA)?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert!(!stdout(&output).contains("duplicate-source"));

    Ok(())
}

#[test]
fn test_config_ignore_texts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", r#"{ "ignoreTexts": ["Mozc"] }"#)?;
    test.write_file(
        "dialog_ja.ts",
        &DIALOG_JA.replace(
            "<source>Word</source>\n        <translation>単語</translation>",
            "<source>Mozc</source>\n        <translation>Mozc</translation>",
        ),
    )?;

    let output = test.check_command().arg("identical").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Checked 1 document - no issues found\n");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let stdout = stdout(&output);

    assert!(output.status.success());
    for command in ["check", "lookup", "compile", "fmt", "init"] {
        assert!(stdout.contains(command), "{}", stdout);
    }

    Ok(())
}
