use std::collections::HashMap;

/// A translation table bundled with the app.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "en";

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        "en",
        LanguageInfo {
            code: "en",
            translation: include_str!("../translations/en.json"),
            native_name: "English",
        },
    )])
}
