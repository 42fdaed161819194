//! Language detection for search descriptions.
//!
//! Pattern-based detection returning an ISO 639-1 code: diacritics and
//! common stop-words for Latin-script languages, script ranges otherwise.
//! Used to autofill `SearchRequest.language` when the caller omits it.

use once_cell::sync::Lazy;
use regex::Regex;

struct LanguageRule {
    code: &'static str,
    pattern: Regex,
}

// Rule order matters: script checks sit between the diacritic-bearing
// Latin languages and the stop-word-only ones (pt/it), and the CJK ideograph
// range is checked before kana so mixed text resolves the same way on every
// run.
static LANGUAGE_RULES: Lazy<Vec<LanguageRule>> = Lazy::new(|| {
    let rule = |code, pattern: &str| LanguageRule {
        code,
        pattern: Regex::new(pattern).expect("static language pattern"),
    };

    vec![
        rule(
            "es",
            r"[áéíóúñü]|\b(el|la|los|las|de|que|y|a|en|un|una|es|son|con|por|para)\b",
        ),
        rule(
            "fr",
            r"[àâäéèêëïîôùûüÿç]|\b(le|la|les|de|du|des|et|est|un|une|dans|pour|avec|sur)\b",
        ),
        rule(
            "de",
            r"[äöüß]|\b(der|die|das|und|ist|sind|mit|für|von|zu|auf|in)\b",
        ),
        rule("ru", r"[а-яё]"),
        rule("zh", r"[\u{4e00}-\u{9fff}]"),
        rule("ja", r"[\u{3040}-\u{309f}\u{30a0}-\u{30ff}]"),
        rule("ko", r"[\u{ac00}-\u{d7a3}]"),
        rule("ar", r"[\u{0600}-\u{06ff}]"),
        rule(
            "pt",
            r"\b(o|a|os|as|de|do|da|dos|das|e|é|são|com|para|por|em|um|uma)\b",
        ),
        rule(
            "it",
            r"\b(il|la|lo|gli|le|di|del|della|dei|delle|e|è|sono|con|per|in|un|una)\b",
        ),
    ]
});

/// Fallback language when detection has nothing to work with.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Detects the language of `text`, returning an ISO 639-1 code.
///
/// Inputs shorter than 3 trimmed characters fall back to
/// [`DEFAULT_LANGUAGE`], as does anything no rule matches.
pub fn detect_language(text: &str) -> &'static str {
    let trimmed = text.trim();
    if trimmed.chars().count() < 3 {
        return DEFAULT_LANGUAGE;
    }

    let normalized = trimmed.to_lowercase();
    for rule in LANGUAGE_RULES.iter() {
        if rule.pattern.is_match(&normalized) {
            return rule.code;
        }
    }

    DEFAULT_LANGUAGE
}

/// Display name for an ISO 639-1 code, for presentation shells.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "ar" => "Arabic",
        "hi" => "Hindi",
        _ => "English",
    }
}
