//! Polish/English content selection.
//!
//! The language is always an explicit argument. There is no ambient "current
//! language": callers that render localized content pass a [`Lang`] down.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unsupported language '{0}' (expected one of: {supported})", supported = supported_codes())]
pub struct LangError(pub String);

fn supported_codes() -> String {
    Lang::SUPPORTED
        .iter()
        .map(|lang| lang.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Pl,
    En,
}

impl Lang {
    pub const SUPPORTED: [Lang; 2] = [Lang::Pl, Lang::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Pl => "pl",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pl" => Ok(Lang::Pl),
            "en" => Ok(Lang::En),
            _ => Err(LangError(s.to_string())),
        }
    }
}

/// Text available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<'a> {
    pub pl: &'a str,
    pub en: &'a str,
}

impl<'a> Localized<'a> {
    pub const fn new(pl: &'a str, en: &'a str) -> Self {
        Self { pl, en }
    }

    /// Text for `lang`, falling back to Polish when that variant is empty.
    pub fn t(&self, lang: Lang) -> &'a str {
        let text = match lang {
            Lang::Pl => self.pl,
            Lang::En => self.en,
        };
        if text.is_empty() { self.pl } else { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_polish() {
        assert_eq!(Lang::default(), Lang::Pl);
    }

    #[test]
    fn parse_languages() {
        assert_eq!("pl".parse::<Lang>(), Ok(Lang::Pl));
        assert_eq!("EN".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("de".parse::<Lang>(), Err(LangError("de".to_string())));
    }

    #[test]
    fn error_lists_supported_languages() {
        let err = "de".parse::<Lang>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported language 'de' (expected one of: pl, en)"
        );
    }

    #[test]
    fn translate_picks_language() {
        let text = Localized::new("Cześć", "Hello");
        assert_eq!(text.t(Lang::Pl), "Cześć");
        assert_eq!(text.t(Lang::En), "Hello");
    }

    #[test]
    fn missing_english_falls_back_to_polish() {
        let text = Localized::new("Tylko po polsku", "");
        assert_eq!(text.t(Lang::En), "Tylko po polsku");
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Lang::En).unwrap(), r#""en""#);
        let lang: Lang = serde_json::from_str(r#""pl""#).unwrap();
        assert_eq!(lang, Lang::Pl);
    }
}
