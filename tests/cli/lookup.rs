use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, DIALOG_JA, stderr, stdout};

#[test]
fn test_bundled_word() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .lookup_command()
        .args(["WordRegisterDialog", "Word"])
        .output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @"単語");

    Ok(())
}

#[test]
fn test_bundled_reading() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .lookup_command()
        .args(["WordRegisterDialog", "Reading"])
        .output()?;

    assert_snapshot!(stdout(&output), @"よみ");

    Ok(())
}

#[test]
fn test_bundled_code_message() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .lookup_command()
        .args([
            "mozc::gui::WordRegisterDialog",
            "Close dictionary tool before using word register dialog.",
        ])
        .output()?;

    assert_snapshot!(
        stdout(&output),
        @"辞書ツールが現在の辞書を開いています。単語登録を行う前に辞書ツールを終了してください。"
    );

    Ok(())
}

#[test]
fn test_missing_key_falls_back_to_source() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .lookup_command()
        .args(["mozc::gui::WordRegisterDialog", "NonexistentKey"])
        .output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @"NonexistentKey");
    assert!(stderr(&output).is_empty());

    Ok(())
}

#[test]
fn test_strict_missing_key_fails() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .lookup_command()
        .args(["mozc::gui::WordRegisterDialog", "NonexistentKey", "--strict"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @"NonexistentKey");
    assert!(stderr(&output).contains(
        "no translation for \"NonexistentKey\" in context \"mozc::gui::WordRegisterDialog\""
    ));

    Ok(())
}

#[test]
fn test_lookup_in_document() -> Result<()> {
    let test = CliTest::with_file("dialog_ja.ts", DIALOG_JA)?;

    let output = test
        .lookup_command()
        .args(["WordRegisterDialog", "Dictionary", "--file", "dialog_ja.ts"])
        .output()?;
    assert_snapshot!(stdout(&output), @"登録先辞書");

    // Unfinished translations are not used.
    let output = test
        .lookup_command()
        .args(["WordRegisterDialog", "Reading", "--file", "dialog_ja.ts"])
        .output()?;
    assert_snapshot!(stdout(&output), @"Reading");

    Ok(())
}

#[test]
fn test_lookup_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    let output = test
        .lookup_command()
        .args(["WordRegisterDialog", "Word", "--file", "missing.ts"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to load translation document: missing.ts"));

    Ok(())
}
