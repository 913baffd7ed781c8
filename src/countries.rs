//! Static language-to-country lookup for flag display.
//!
//! Flag providers are keyed by ISO 3166 country codes while the form works
//! with ISO 639 language codes, so every supported language maps to one
//! representative country. The mapping is display-only; a language missing
//! from the table degrades to a broken flag image, never to an error.

/// Supported languages as `(language code, flag country code)` pairs, in the
/// order the language selectors list them.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("ar", "SA"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("de", "DE"),
    ("el", "GR"),
    ("en", "GB"),
    ("es", "ES"),
    ("fi", "FI"),
    ("fr", "FR"),
    ("he", "IL"),
    ("hi", "IN"),
    ("hu", "HU"),
    ("id", "ID"),
    ("it", "IT"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("nl", "NL"),
    ("no", "NO"),
    ("pl", "PL"),
    ("pt", "PT"),
    ("ro", "RO"),
    ("ru", "RU"),
    ("sv", "SE"),
    ("th", "TH"),
    ("tr", "TR"),
    ("uk", "UA"),
    ("vi", "VN"),
    ("zh", "CN"),
];

/// Country code whose flag represents `language`, if the language is known.
pub fn language_to_country(language: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, country)| *country)
}

/// Whether `language` is one of the supported language codes.
pub fn is_known_language(language: &str) -> bool {
    language_to_country(language).is_some()
}
