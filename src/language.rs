//! Reply languages and their speech locales.
//!
//! A [`LanguageKey`] picks both the reply template set and the locale handed
//! to the speech synthesizer. The same enumeration keys the core-message and
//! empathy tables, so every selectable language is a variant here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable reply language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKey {
    English,
    Hindi,
    /// Romanised Hindi-English mix. Speaks with the Hindi locale.
    Hinglish,
    Tamil,
    Telugu,
    Bengali,
    Marathi,
}

impl LanguageKey {
    /// Every language, in selector order.
    pub const ALL: [LanguageKey; 7] = [
        Self::English,
        Self::Hindi,
        Self::Hinglish,
        Self::Tamil,
        Self::Telugu,
        Self::Bengali,
        Self::Marathi,
    ];

    /// Human-readable name shown in a language selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Hinglish => "Hinglish",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Bengali => "Bengali",
            Self::Marathi => "Marathi",
        }
    }

    /// ISO-639-1 locale code passed to the speech synthesizer.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi | Self::Hinglish => "hi",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Bengali => "bn",
            Self::Marathi => "mr",
        }
    }

    /// Map the binary detector result (`"en"` / `"hi"`) to a key.
    ///
    /// Anything other than `"hi"` is treated as English.
    pub fn from_detected_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("hi") {
            Self::Hindi
        } else {
            Self::English
        }
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LanguageKey {
    type Err = crate::error::EmotivaError;

    /// Accepts display names and locale codes, case-insensitively.
    ///
    /// `"hi"` resolves to Hindi; Hinglish is only reachable by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Some(key) = Self::ALL
            .iter()
            .copied()
            .find(|k| k.display_name().to_lowercase() == needle)
        {
            return Ok(key);
        }
        match needle.as_str() {
            "en" => Ok(Self::English),
            "hi" => Ok(Self::Hindi),
            "ta" => Ok(Self::Tamil),
            "te" => Ok(Self::Telugu),
            "bn" => Ok(Self::Bengali),
            "mr" => Ok(Self::Marathi),
            _ => Err(crate::error::EmotivaError::Config(format!(
                "unknown language: {s:?}"
            ))),
        }
    }
}

/// How the reply language of a turn is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageSelection {
    /// Use the binary en/hi detector for both templates and speech.
    #[default]
    Auto,
    /// User-selected language; the detector never overrides it.
    Explicit(LanguageKey),
}

impl LanguageSelection {
    /// Parse `"auto"` or any [`LanguageKey`] spelling.
    pub fn parse(s: &str) -> crate::error::Result<Self> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Explicit)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("tamil".parse::<LanguageKey>().unwrap(), LanguageKey::Tamil);
        assert_eq!(
            " HINGLISH ".parse::<LanguageKey>().unwrap(),
            LanguageKey::Hinglish
        );
    }

    #[test]
    fn parses_locale_codes() {
        assert_eq!("hi".parse::<LanguageKey>().unwrap(), LanguageKey::Hindi);
        assert_eq!("bn".parse::<LanguageKey>().unwrap(), LanguageKey::Bengali);
    }

    #[test]
    fn unknown_language_is_config_error() {
        assert!("klingon".parse::<LanguageKey>().is_err());
    }

    #[test]
    fn hinglish_speaks_hindi() {
        assert_eq!(LanguageKey::Hinglish.speech_locale(), "hi");
    }

    #[test]
    fn detected_code_is_binary() {
        assert_eq!(LanguageKey::from_detected_code("hi"), LanguageKey::Hindi);
        assert_eq!(LanguageKey::from_detected_code("en"), LanguageKey::English);
        assert_eq!(LanguageKey::from_detected_code("fr"), LanguageKey::English);
    }

    #[test]
    fn selection_parse() {
        assert_eq!(LanguageSelection::parse("AUTO").unwrap(), LanguageSelection::Auto);
        assert_eq!(
            LanguageSelection::parse("marathi").unwrap(),
            LanguageSelection::Explicit(LanguageKey::Marathi)
        );
    }

    #[test]
    fn display_matches_name() {
        for key in LanguageKey::ALL {
            assert_eq!(key.to_string(), key.display_name());
        }
    }
}
