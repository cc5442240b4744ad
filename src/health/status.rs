// src/health/status.rs

use serde::Deserialize;
use std::fmt;

/// Visual state of one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Unknown,
    Ok,
    Error,
}

impl Status {
    /// Class token appended to the indicator's base class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unknown => "unknown",
            Status::Ok => "ok",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn labels(&self) -> Labels {
        match self {
            Locale::Ru => Labels {
                working: "Работает",
                error: "Ошибка",
                unknown: "Неизвестно",
            },
            Locale::En => Labels {
                working: "Working",
                error: "Error",
                unknown: "Unknown",
            },
        }
    }
}

/// Display words shown next to an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub working: &'static str,
    pub error: &'static str,
    pub unknown: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Locale::default().labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens_match_css_classes() {
        assert_eq!(Status::Unknown.to_string(), "unknown");
        assert_eq!(Status::Ok.to_string(), "ok");
        assert_eq!(Status::Error.to_string(), "error");
        assert_eq!(Status::default(), Status::Unknown);
    }

    #[test]
    fn russian_is_the_default_locale() {
        let labels = Labels::default();
        assert_eq!(labels.working, "Работает");
        assert_eq!(labels.error, "Ошибка");
        assert_eq!(labels.unknown, "Неизвестно");
    }

    #[test]
    fn locale_parses_from_lowercase_name() {
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
        assert_eq!(locale.labels().unknown, "Unknown");
    }
}
