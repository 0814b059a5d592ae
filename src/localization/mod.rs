//! Locales and localized text.
//!
//! The assistant speaks five languages. Lookups are total: an unknown key
//! yields `""` and an unsupported locale falls back to English.
//!
//! ```rust
//! use agri_advisor::localization::localize;
//!
//! assert_eq!(localize("signIn", "hi"), "साइन इन करें");
//! assert_eq!(localize("signIn", "zz"), "Sign In");
//! assert_eq!(localize("noSuchKey", "hi"), "");
//! ```

mod strings;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Locale used when a requested one has no entry.
pub const DEFAULT_LOCALE: &str = "en";

static TABLE: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    strings::STRINGS
        .iter()
        .map(|(key, texts)| (*key, texts.iter().copied().collect()))
        .collect()
});

/// Look up `key` for the locale code, falling back `locale → en → ""`.
pub fn localize(key: &str, locale: &str) -> &'static str {
    TABLE
        .get(key)
        .and_then(|texts| texts.get(locale).or_else(|| texts.get(DEFAULT_LOCALE)))
        .copied()
        .unwrap_or("")
}

/// Supported user languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Mr,
    Gu,
    Pa,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Hi, Locale::Mr, Locale::Gu, Locale::Pa];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Mr => "mr",
            Locale::Gu => "gu",
            Locale::Pa => "pa",
        }
    }

    /// Parse a code, resolving anything unsupported to English.
    pub fn from_code_lossy(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Locale::En)
    }

    /// Region-qualified voice for speech synthesis.
    pub fn voice_code(&self) -> &'static str {
        match self {
            Locale::Hi => "hi-IN",
            Locale::Mr => "mr-IN",
            Locale::Gu => "gu-IN",
            Locale::Pa => "pa-IN",
            Locale::En => "en-US",
        }
    }

    /// Sentence appended to prompts asking for a plain-text reply in this language.
    pub fn response_instruction(&self) -> &'static str {
        response_instruction(self.code())
    }

    pub fn localize(&self, key: &str) -> &'static str {
        localize(key, self.code())
    }
}

/// Plain-text reply instruction for a locale code; English when unsupported.
pub fn response_instruction(locale: &str) -> &'static str {
    let find = |code: &str| {
        strings::RESPONSE_INSTRUCTIONS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, text)| *text)
    };
    find(locale).or_else(|| find(DEFAULT_LOCALE)).unwrap_or("")
}

/// Prompt body followed by the locale's reply instruction.
pub fn localized_prompt(locale: Locale, base_prompt: &str) -> String {
    format!("{} {}", base_prompt, locale.response_instruction())
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "hi" => Ok(Locale::Hi),
            "mr" => Ok(Locale::Mr),
            "gu" => Ok(Locale::Gu),
            "pa" => Ok(Locale::Pa),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}
