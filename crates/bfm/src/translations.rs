//! Static string translations keyed by language and text id
//!
//! Used only by the greeting flow; command output stays untranslated.

use thiserror::Error;

/// Lookup failure in the translation table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// No table exists for the requested language
    #[error("Language not found: {0}")]
    LanguageNotFound(String),
    /// The language exists but has no entry for the text id
    #[error("Text not found: {0}")]
    TextNotFound(String),
}

/// Two-level table: language -> (text id -> translated text).
static TRANSLATIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "en",
        &[
            ("hello", "Hello"),
            ("langChosen", "You have chosen English."),
        ],
    ),
    (
        "es",
        &[("hello", "Hola"), ("langChosen", "Has elegido Español.")],
    ),
];

/// Look up the translation of `text_id` in `language`.
pub fn translated_string(
    language: &str,
    text_id: &str,
) -> Result<&'static str, TranslationError> {
    let entries = TRANSLATIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, entries)| *entries)
        .ok_or_else(|| TranslationError::LanguageNotFound(language.to_string()))?;

    entries
        .iter()
        .find(|(key, _)| *key == text_id)
        .map(|(_, text)| *text)
        .ok_or_else(|| TranslationError::TextNotFound(text_id.to_string()))
}
