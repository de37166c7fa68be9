//! Cleans captured terminal output for chat display.

use std::borrow::Cow;
use once_cell::sync::Lazy;
use regex::Regex;

/// `ESC [ params letter`, params being digits, `;` and `?`.
static ANSI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1B\[[0-9;?]*[a-zA-Z]").expect("valid ANSI pattern")
});

/// A run of quote characters glued to a `user@host` token.
static HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([`"']+)([A-Za-z0-9._-]+@[^ \t]+)"#).expect("valid host pattern")
});

/// Replaces until nothing matches. A single pass can expose a new match
/// (`ESC[ESC[1mm`), and callers rely on `format` being idempotent.
fn replace_to_fixpoint(re: &Regex, text: String, rep: &str) -> String {
    let mut current = text;
    loop {
        let next = match re.replace_all(&current, rep) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match next {
            Some(next) => current = next,
            None => return current,
        }
    }
}

/// Strips escape sequences, puts the `user@host` line on its own line and
/// trims surrounding whitespace.
pub fn format(text: &str) -> String {
    let stripped = replace_to_fixpoint(&ANSI_PATTERN, text.to_string(), "");
    let split = replace_to_fixpoint(&HOST_PATTERN, stripped, "$1\n$2");
    split.trim().to_string()
}
