//! Strings of the word register dialog.
//!
//! Labels come from the dialog's UI definition and live in the
//! [`DIALOG_CONTEXT`] context; messages raised by the dialog code live in
//! [`CODE_CONTEXT`]. The Japanese table ships inside the binary.

use std::sync::LazyLock;

use crate::catalog::{Catalog, CatalogError};

/// Context of labels defined in the dialog layout.
pub const DIALOG_CONTEXT: &str = "WordRegisterDialog";
/// Context of messages raised by the dialog implementation.
pub const CODE_CONTEXT: &str = "mozc::gui::WordRegisterDialog";

/// Bundled Japanese translation document.
pub const JAPANESE_DOCUMENT: &str = include_str!("../../data/word_register_dialog_ja.ts");

static JAPANESE: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::from_ts_str(JAPANESE_DOCUMENT));

/// The bundled Japanese catalog, built on first use.
pub fn japanese() -> Result<&'static Catalog, &'static CatalogError> {
    Result::as_ref(&*JAPANESE)
}

/// A label shown in the dialog layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    WindowTitle,
    Word,
    Reading,
    PartOfSpeech,
    Dictionary,
    EditUserDictionary,
}

impl Label {
    pub const ALL: [Label; 6] = [
        Label::WindowTitle,
        Label::Word,
        Label::Reading,
        Label::PartOfSpeech,
        Label::Dictionary,
        Label::EditUserDictionary,
    ];

    pub fn source_text(self) -> &'static str {
        match self {
            Label::WindowTitle => "Mozc Word Register Dialog",
            Label::Word => "Word",
            Label::Reading => "Reading",
            Label::PartOfSpeech => "Part of Speech",
            Label::Dictionary => "Dictionary",
            Label::EditUserDictionary => "Edit user dictionary...",
        }
    }

    pub fn context(self) -> &'static str {
        DIALOG_CONTEXT
    }

    pub fn text(self, catalog: &Catalog) -> &str {
        catalog.translate(self.context(), self.source_text())
    }
}

/// A title, default value or condition reported by the dialog code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Title of message boxes.
    ProductName,
    /// The dictionary tool holds the dictionary open.
    DictionaryToolOpen,
    /// Name given to a newly created user dictionary.
    DefaultDictionaryName,
    InvalidReading,
    InvalidWord,
    UnexpectedError,
    UpdateFailed,
}

impl Notice {
    pub const ALL: [Notice; 7] = [
        Notice::ProductName,
        Notice::DictionaryToolOpen,
        Notice::DefaultDictionaryName,
        Notice::InvalidReading,
        Notice::InvalidWord,
        Notice::UnexpectedError,
        Notice::UpdateFailed,
    ];

    pub fn source_text(self) -> &'static str {
        match self {
            Notice::ProductName => "Mozc",
            Notice::DictionaryToolOpen => {
                "Close dictionary tool before using word register dialog."
            }
            Notice::DefaultDictionaryName => "User Dictionary 1",
            Notice::InvalidReading => "Reading part contains invalid characters.",
            Notice::InvalidWord => "Word part contains invalid characters.",
            Notice::UnexpectedError => "Unexpected error occurs.",
            Notice::UpdateFailed => "Failed to update user dictionary.",
        }
    }

    pub fn context(self) -> &'static str {
        CODE_CONTEXT
    }

    pub fn text(self, catalog: &Catalog) -> &str {
        catalog.translate(self.context(), self.source_text())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::core::parsers::ts::parse_ts_str;

    #[rstest]
    #[case(DIALOG_CONTEXT, "Word", "単語")]
    #[case(DIALOG_CONTEXT, "Reading", "よみ")]
    #[case(
        CODE_CONTEXT,
        "Close dictionary tool before using word register dialog.",
        "辞書ツールが現在の辞書を開いています。単語登録を行う前に辞書ツールを終了してください。"
    )]
    #[case(CODE_CONTEXT, "NonexistentKey", "NonexistentKey")]
    fn test_bundled_lookups(#[case] context: &str, #[case] source: &str, #[case] expected: &str) {
        let catalog = japanese().unwrap();
        assert_eq!(catalog.translate(context, source), expected);
    }

    #[test]
    fn test_bundled_catalog_shape() {
        let catalog = japanese().unwrap();
        assert_eq!(catalog.language(), None);
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.contexts(), vec![DIALOG_CONTEXT, CODE_CONTEXT]);
    }

    #[test]
    fn test_every_record_translates_to_its_pair() {
        let parsed = parse_ts_str(JAPANESE_DOCUMENT, "word_register_dialog_ja.ts").unwrap();
        let catalog = japanese().unwrap();

        for message in parsed.document.messages() {
            assert!(!message.translation.is_empty(), "{}", message.source);
            assert_eq!(
                catalog.get(&message.context, &message.source),
                Ok(message.translation.as_str())
            );
        }
    }

    #[test]
    fn test_typed_keys_cover_the_table() {
        let catalog = japanese().unwrap();

        for label in Label::ALL {
            assert!(catalog.contains(label.context(), label.source_text()), "{:?}", label);
        }
        for notice in Notice::ALL {
            assert!(catalog.contains(notice.context(), notice.source_text()), "{:?}", notice);
        }
        assert_eq!(Label::ALL.len() + Notice::ALL.len(), catalog.len());
    }

    #[test]
    fn test_typed_key_text() {
        let catalog = japanese().unwrap();
        assert_eq!(Label::PartOfSpeech.text(catalog), "品詞");
        assert_eq!(Label::Dictionary.text(catalog), "登録先辞書");
        assert_eq!(Notice::UpdateFailed.text(catalog), "辞書の更新に失敗しました。");
        assert_eq!(Notice::ProductName.text(catalog), "Mozc");
        assert_eq!(Label::Word.text(&Catalog::default()), "Word");
    }
}
