use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LipikaError;

/// Languages the translation backend supports.
///
/// Codes follow the MBART convention the backend expects (`ne_NP`, `si_LK`,
/// `en_XX`); short tags are what the preference store and interface strings
/// key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Nepali,
    Sinhala,
    English,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Nepali, Language::Sinhala, Language::English];

    /// MBART-style language code sent to the translation endpoint.
    pub fn mbart_code(&self) -> &'static str {
        match self {
            Language::Nepali => "ne_NP",
            Language::Sinhala => "si_LK",
            Language::English => "en_XX",
        }
    }

    pub fn short_tag(&self) -> &'static str {
        match self {
            Language::Nepali => "ne",
            Language::Sinhala => "si",
            Language::English => "en",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Nepali => "Nepali",
            Language::Sinhala => "Sinhala",
            Language::English => "English",
        }
    }

    /// How the language names itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Nepali => "नेपाली",
            Language::Sinhala => "සිංහල",
            Language::English => "English",
        }
    }

    /// Voice identifier for the espeak synthesizer.
    pub fn espeak_voice(&self) -> &'static str {
        self.short_tag()
    }

    /// Resolve a short tag (`ne`, `si`, `en`). Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "ne" => Some(Language::Nepali),
            "si" => Some(Language::Sinhala),
            "en" => Some(Language::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Language {
    type Err = LipikaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nepali" | "ne" | "ne_np" => Ok(Language::Nepali),
            "sinhala" | "si" | "si_lk" => Ok(Language::Sinhala),
            "english" | "en" | "en_xx" => Ok(Language::English),
            other => Err(LipikaError::Validation(format!(
                "Unsupported language: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mbart_codes() {
        assert_eq!(Language::Nepali.mbart_code(), "ne_NP");
        assert_eq!(Language::Sinhala.mbart_code(), "si_LK");
        assert_eq!(Language::English.mbart_code(), "en_XX");
    }

    #[test]
    fn test_parse_accepts_names_tags_and_codes() {
        assert_eq!("nepali".parse::<Language>().unwrap(), Language::Nepali);
        assert_eq!("si".parse::<Language>().unwrap(), Language::Sinhala);
        assert_eq!("EN_XX".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        let result = "klingon".parse::<Language>();
        assert!(matches!(result, Err(LipikaError::Validation(_))));
    }

    #[test]
    fn test_from_tag_roundtrip() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.short_tag()), Some(language));
        }
        assert_eq!(Language::from_tag("xx"), None);
    }
}
