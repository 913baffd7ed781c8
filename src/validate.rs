//! Client-side validation of a form snapshot against its field constraints.

use crate::countries;
use crate::error::ErrorSet;
use crate::snapshot::{AUTO_DETECT, Field, FormSnapshot};

const REQUIRED_MESSAGE: &str = "Please fill out this field.";
const INVALID_OPTION_MESSAGE: &str = "Please select a valid option.";

/// Field constraints of the translation form: which values the two language
/// selectors accept.
///
/// Mirrors the native constraints the rendered form carries (required
/// fields, allowed option values). Validation never touches the network and
/// produces at most one message per field, keyed by the field id and
/// formatted as `"{label} : {message}"`.
#[derive(Debug, Clone)]
pub struct FormSchema {
    languages: Vec<String>,
}

impl FormSchema {
    /// Schema accepting an explicit set of language codes.
    pub fn new(languages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `language` is an allowed selector option (the auto sentinel
    /// is allowed for the source selector only and is checked separately).
    pub fn is_known_language(&self, language: &str) -> bool {
        self.languages.iter().any(|code| code == language)
    }

    /// Validate a snapshot, producing one error per invalid field in form
    /// order. An empty set means the form may be submitted.
    pub fn validate(&self, form: &FormSnapshot) -> ErrorSet {
        let mut errors = ErrorSet::new();

        let source = form.get(Field::SourceLanguage);
        if source.is_empty() {
            self.add(&mut errors, Field::SourceLanguage, REQUIRED_MESSAGE);
        } else if source != AUTO_DETECT && !self.is_known_language(source) {
            self.add(&mut errors, Field::SourceLanguage, INVALID_OPTION_MESSAGE);
        }

        let target = form.get(Field::TargetLanguage);
        if target.is_empty() {
            self.add(&mut errors, Field::TargetLanguage, REQUIRED_MESSAGE);
        } else if !self.is_known_language(target) {
            self.add(&mut errors, Field::TargetLanguage, INVALID_OPTION_MESSAGE);
        }

        if form.get(Field::TextToTranslate).is_empty() {
            self.add(&mut errors, Field::TextToTranslate, REQUIRED_MESSAGE);
        }

        errors
    }

    fn add(&self, errors: &mut ErrorSet, field: Field, message: &str) {
        errors.insert(field.id(), format!("{} : {}", field.label(), message));
    }
}

impl Default for FormSchema {
    /// Schema over the full supported language table.
    fn default() -> Self {
        Self::new(countries::LANGUAGES.iter().map(|(code, _)| *code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormSnapshot {
        FormSnapshot {
            source_language: AUTO_DETECT.to_string(),
            target_language: "fr".to_string(),
            text_to_translate: "Hello".to_string(),
            translated_text: String::new(),
        }
    }

    #[test]
    fn test_valid_form_produces_no_errors() {
        let schema = FormSchema::default();
        assert!(schema.validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_explicit_source_language_is_valid() {
        let schema = FormSchema::default();
        let mut form = valid_form();
        form.source_language = "en".to_string();
        assert!(schema.validate(&form).is_empty());
    }

    #[test]
    fn test_missing_target_language() {
        let schema = FormSchema::default();
        let mut form = valid_form();
        form.target_language = String::new();
        let errors = schema.validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("target-language"),
            Some("Target language : Please fill out this field.")
        );
    }

    #[test]
    fn test_unknown_option_values() {
        let schema = FormSchema::default();
        let mut form = valid_form();
        form.source_language = "xx".to_string();
        form.target_language = "yy".to_string();
        let errors = schema.validate(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("source-language"),
            Some("Source language : Please select a valid option.")
        );
    }

    #[test]
    fn test_auto_is_not_a_valid_target() {
        let schema = FormSchema::default();
        let mut form = valid_form();
        form.target_language = AUTO_DETECT.to_string();
        assert_eq!(schema.validate(&form).len(), 1);
    }

    #[test]
    fn test_one_error_per_invalid_field_in_form_order() {
        let schema = FormSchema::default();
        let form = FormSnapshot::new();
        let errors = schema.validate(&form);
        assert_eq!(errors.len(), 3);
        let keys: Vec<&str> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["source-language", "target-language", "text-to-translate"]
        );
    }

    #[test]
    fn test_custom_language_set() {
        let schema = FormSchema::new(["eo", "la"]);
        let mut form = valid_form();
        form.target_language = "eo".to_string();
        assert!(schema.validate(&form).is_empty());
        form.target_language = "fr".to_string();
        assert_eq!(schema.validate(&form).len(), 1);
    }
}
