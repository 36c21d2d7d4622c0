//! Coarse Arabic/English language detection.
//!
//! Input is Arabic when it contains any letter from a fixed set of Arabic
//! letters; everything else (Latin, other scripts, empty) is English.

use std::fmt;

/// Letters that mark an input as Arabic.
pub const ARABIC_LETTERS: &str = "اأإآبتثجحخدذرزسشصضطظعغفقكلمنهوي";

/// Language of a user turn; selects the localized system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify `text` as Arabic or English.
pub fn classify(text: &str) -> Language {
    if text.chars().any(|c| ARABIC_LETTERS.contains(c)) {
        Language::Ar
    } else {
        Language::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_is_english() {
        assert_eq!(classify("hello"), Language::En);
    }

    #[test]
    fn arabic_is_arabic() {
        assert_eq!(classify("مرحبا"), Language::Ar);
    }

    #[test]
    fn mixed_script_takes_arabic_path() {
        assert_eq!(classify("hi مرحبا"), Language::Ar);
    }

    #[test]
    fn other_scripts_and_empty_default_to_english() {
        assert_eq!(classify("привет"), Language::En);
        assert_eq!(classify("こんにちは"), Language::En);
        assert_eq!(classify(""), Language::En);
    }

    #[test]
    fn arabic_letter_outside_the_set_is_english() {
        // Teh marbuta and Arabic-Indic digits are not in the marker set.
        assert_eq!(classify("ة ١٢٣"), Language::En);
    }

    #[test]
    fn every_marker_letter_triggers_arabic() {
        for c in ARABIC_LETTERS.chars() {
            assert_eq!(classify(&c.to_string()), Language::Ar, "letter {c}");
        }
    }

    #[test]
    fn codes_match_display() {
        assert_eq!(Language::Ar.to_string(), "ar");
        assert_eq!(Language::En.code(), "en");
    }
}
