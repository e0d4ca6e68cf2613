const LANGUAGE_FLAGS: [(&str, &str); 9] = [
    ("en", "US"),
    ("es", "ES"),
    ("fr", "FR"),
    ("de", "DE"),
    ("it", "IT"),
    ("zh", "CN"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("ca", "CA"),
];

/// Country whose flag stands in for an ISO 639-1 original language.
pub fn flag_code(language: &str) -> Option<&'static str> {
    LANGUAGE_FLAGS
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, flag)| *flag)
}
