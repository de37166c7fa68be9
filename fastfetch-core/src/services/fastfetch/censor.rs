use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;
use regex::{Captures, Regex, RegexBuilder};

use crate::Error;
use crate::config::RedactionRule;

/// Case-insensitive keyword substitution, applied only for restricted keys.
#[derive(Debug, Clone)]
pub struct Censor {
    pattern: Regex,
    replacement: String,
}

impl Censor {
    pub fn new(rule: &RedactionRule) -> Result<Self, Error> {
        if rule.keyword.is_empty() {
            return Err("redaction keyword must not be empty".into());
        }
        let pattern = RegexBuilder::new(&regex::escape(&rule.keyword))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::Config(format!("invalid redaction keyword: {}", e)))?;
        Ok(Self {
            pattern,
            replacement: rule.replacement.to_lowercase(),
        })
    }

    /// Returns `text` untouched unless `key` is in `restricted`.
    pub fn censor<'t, K>(&self, text: &'t str, key: &K, restricted: &HashSet<K>) -> Cow<'t, str>
    where
        K: Eq + Hash,
    {
        if !restricted.contains(key) {
            return Cow::Borrowed(text);
        }
        self.pattern
            .replace_all(text, |caps: &Captures| self.mirror_case(&caps[0]))
    }

    /// The replacement, with its first letter cased like the match's.
    fn mirror_case(&self, matched: &str) -> String {
        let upper = matched.chars().next().is_some_and(char::is_uppercase);
        let mut chars = self.replacement.chars();
        match chars.next() {
            Some(first) if upper => first.to_uppercase().chain(chars).collect(),
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
