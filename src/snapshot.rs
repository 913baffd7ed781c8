//! Form data model: the known fields of the translation form and a
//! point-in-time snapshot of their values.

use serde::{Deserialize, Serialize};

/// Reserved source-language value meaning "ask the server to detect the language".
pub const AUTO_DETECT: &str = "auto";

/// The four fields of the translation form.
///
/// Each field carries three stable names:
/// - `name()` is the wire name used in the form-encoded request body and in
///   JSON responses (`source_language`, ...)
/// - `id()` is the DOM element id, also used as the key in rendered error
///   sets (`source-language`, ...)
/// - `label()` is the human-readable label shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SourceLanguage,
    TargetLanguage,
    TextToTranslate,
    TranslatedText,
}

impl Field {
    /// All fields, in form declaration order.
    pub const ALL: [Field; 4] = [
        Field::SourceLanguage,
        Field::TargetLanguage,
        Field::TextToTranslate,
        Field::TranslatedText,
    ];

    /// Wire name used when posting the form and in API responses.
    pub fn name(&self) -> &'static str {
        match self {
            Field::SourceLanguage => "source_language",
            Field::TargetLanguage => "target_language",
            Field::TextToTranslate => "text_to_translate",
            Field::TranslatedText => "translated_text",
        }
    }

    /// Element id; also the key under which validation errors for this
    /// field are rendered.
    pub fn id(&self) -> &'static str {
        match self {
            Field::SourceLanguage => "source-language",
            Field::TargetLanguage => "target-language",
            Field::TextToTranslate => "text-to-translate",
            Field::TranslatedText => "translated-text",
        }
    }

    /// Human-readable field label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::SourceLanguage => "Source language",
            Field::TargetLanguage => "Target language",
            Field::TextToTranslate => "Text",
            Field::TranslatedText => "Translated text",
        }
    }

    /// True for the two language selectors.
    pub fn is_language_select(&self) -> bool {
        matches!(self, Field::SourceLanguage | Field::TargetLanguage)
    }
}

/// Point-in-time mapping of form field to its string value.
///
/// Values are always strings, possibly empty. A snapshot is built from the
/// UI at the start of a submission cycle and discarded once the cycle has
/// updated the UI; nothing persists across submissions.
///
/// The struct serializes with the wire field names, so it can be posted
/// form-encoded as-is and decoded straight from a detect-language response.
/// All fields default to empty so a response that omits some of them still
/// decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub target_language: String,
    #[serde(default)]
    pub text_to_translate: String,
    #[serde(default)]
    pub translated_text: String,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SourceLanguage => &self.source_language,
            Field::TargetLanguage => &self.target_language,
            Field::TextToTranslate => &self.text_to_translate,
            Field::TranslatedText => &self.translated_text,
        }
    }

    /// Set the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::SourceLanguage => self.source_language = value,
            Field::TargetLanguage => self.target_language = value,
            Field::TextToTranslate => self.text_to_translate = value,
            Field::TranslatedText => self.translated_text = value,
        }
    }

    /// Copy every field value from `other` into `self`, returning the list
    /// of fields whose value actually changed, in form order.
    ///
    /// Used to fold a detect-language response back into the current form
    /// state so the caller can mirror exactly the changed fields to the UI.
    pub fn merge(&mut self, other: &FormSnapshot) -> Vec<Field> {
        let mut changed = Vec::new();
        for field in Field::ALL {
            if self.get(field) != other.get(field) {
                self.set(field, other.get(field));
                changed.push(field);
            }
        }
        changed
    }
}
