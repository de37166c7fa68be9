//! src/strings.rs
//!
//! User-facing message templates. Every reply the command produces is one of
//! these (or the rendered output block), so hosts never see a raw error.

use serde::{Deserialize, Serialize};

/// Placeholder substituted into [`Strings::error`].
pub const ERROR_PLACEHOLDER: &str = "{error}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// The template set for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub error: &'static str,
    pub no_data: &'static str,
    pub not_installed: &'static str,
    pub unknown_error: &'static str,
    pub invalid_chat_id: &'static str,
    pub refresh_button: &'static str,
}

const EN: Strings = Strings {
    error: "<emoji document_id=5350477112677515642>⚠️</emoji> <b>Failed to execute fastfetch...</b>\n\n\
            <pre><code class='language-stderr'>{error}</code></pre>",
    no_data: "<emoji document_id=5449875850046481967>🤔</emoji> <b>No output from fastfetch.</b>",
    not_installed: "<emoji document_id=5449875850046481967>🤔</emoji> <b>Fastfetch is not installed.</b>",
    unknown_error: "An unexpected error occurred.",
    invalid_chat_id: "<emoji document_id=5350477112677515642>⚠️</emoji> <b>Invalid chat ID.</b>",
    refresh_button: "🔄 Refresh",
};

const RU: Strings = Strings {
    error: "<emoji document_id=5350477112677515642>⚠️</emoji> <b>Ошибка выполнения fastfetch...</b>\n\n\
            <pre><code class='language-stderr'>{error}</code></pre>",
    no_data: "<emoji document_id=5449875850046481967>🤔</emoji> <b>Fastfetch не вернул данных.</b>",
    not_installed: "<emoji document_id=5449875850046481967>🤔</emoji> <b>Fastfetch не установлен.</b>",
    unknown_error: "Произошла неизвестная ошибка.",
    invalid_chat_id: "<emoji document_id=5350477112677515642>⚠️</emoji> <b>Недопустимый ID чата.</b>",
    refresh_button: "🔄 Обновить",
};

impl Strings {
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    /// Fills the error template, falling back to `unknown_error` when the
    /// diagnostic is empty.
    pub fn error_with(&self, error: &str) -> String {
        let filler = if error.is_empty() { self.unknown_error } else { error };
        self.error.replace(ERROR_PLACEHOLDER, filler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_template_is_filled() {
        let s = Strings::for_locale(Locale::En);
        let out = s.error_with("boom");
        assert!(out.contains("<code class='language-stderr'>boom</code>"));
        assert!(!out.contains(ERROR_PLACEHOLDER));
    }

    #[test]
    fn test_empty_error_uses_unknown_filler() {
        let s = Strings::for_locale(Locale::Ru);
        assert!(s.error_with("").contains(s.unknown_error));
    }

    #[test]
    fn test_every_locale_has_placeholder() {
        for locale in [Locale::En, Locale::Ru] {
            assert!(Strings::for_locale(locale).error.contains(ERROR_PLACEHOLDER));
        }
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert!("de".parse::<Locale>().is_err());
    }
}
