//! Flag icon resolution for the language selectors.

use crate::countries::language_to_country;
use crate::snapshot::AUTO_DETECT;

/// Icon shown when the source language is set to auto-detection.
pub const AUTO_ICON: &str = "/static/images/auto_language.png";

/// Resolve the icon URL to display next to a language selector.
///
/// The auto-detect sentinel maps to the fixed local auto icon; any other
/// value resolves through the country table into a flagsapi.com URL. An
/// unknown language code still produces a URL (using the raw code as the
/// country), which renders as a broken image rather than failing.
pub fn flag_icon_url(language: &str) -> String {
    if language == AUTO_DETECT {
        return AUTO_ICON.to_string();
    }
    let country = language_to_country(language).unwrap_or(language);
    format!("https://flagsapi.com/{}/shiny/32.png", country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_uses_fixed_icon() {
        assert_eq!(flag_icon_url("auto"), AUTO_ICON);
    }

    #[test]
    fn test_known_language_uses_flag_api() {
        assert_eq!(flag_icon_url("fr"), "https://flagsapi.com/FR/shiny/32.png");
        assert_eq!(flag_icon_url("ja"), "https://flagsapi.com/JP/shiny/32.png");
    }

    #[test]
    fn test_unknown_language_degrades_to_broken_url() {
        // Not an application error: the image reference just will not resolve
        assert_eq!(
            flag_icon_url("tlh"),
            "https://flagsapi.com/tlh/shiny/32.png"
        );
    }
}
