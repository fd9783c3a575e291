use anyhow::Result;
use insta::assert_snapshot;
use serde_json::{Value, json};

use crate::{CliTest, DIALOG_JA, stderr, stdout};

#[test]
fn test_compile_to_stdout() -> Result<()> {
    let test = CliTest::with_file("dialog_ja.ts", DIALOG_JA)?;

    let output = test.command().args(["compile", "dialog_ja.ts"]).output()?;
    assert!(output.status.success(), "{}", stderr(&output));

    let compiled: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        compiled,
        json!({
            "format": 1,
            "language": "ja",
            "messages": [
                {
                    "context": "WordRegisterDialog",
                    "source": "Dictionary",
                    "translation": "登録先辞書"
                },
                {
                    "context": "WordRegisterDialog",
                    "source": "Word",
                    "translation": "単語"
                }
            ]
        })
    );

    Ok(())
}

#[test]
fn test_compile_to_file_then_lookup() -> Result<()> {
    let test = CliTest::with_file("dialog_ja.ts", DIALOG_JA)?;

    let output = test
        .command()
        .args(["compile", "dialog_ja.ts", "-o", "dialog_ja.json"])
        .output()?;
    assert!(output.status.success(), "{}", stderr(&output));
    assert_snapshot!(stdout(&output), @"✓ Compiled 2 messages to dialog_ja.json");
    assert!(test.root().join("dialog_ja.json").exists());

    let output = test
        .lookup_command()
        .args(["WordRegisterDialog", "Word", "--file", "dialog_ja.json"])
        .output()?;
    assert_snapshot!(stdout(&output), @"単語");

    Ok(())
}

#[test]
fn test_compile_rejects_duplicates() -> Result<()> {
    let duplicated = DIALOG_JA.replace("<source>Dictionary</source>", "<source>Word</source>");
    let test = CliTest::with_file("dialog_ja.ts", &duplicated)?;

    let output = test.command().args(["compile", "dialog_ja.ts"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("duplicate source \"Word\" in context \"WordRegisterDialog\""),
        "{}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_compile_rejects_unsupported_version() -> Result<()> {
    let test = CliTest::with_file(
        "dialog_ja.ts",
        &DIALOG_JA.replace("version=\"2.0\" language", "version=\"9.0\" language"),
    )?;

    let output = test.command().args(["compile", "dialog_ja.ts"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unsupported schema version 9.0"));

    Ok(())
}
