//! src/config.rs
//!
//! Plugin configuration: built-in defaults, an optional JSON file, then
//! `FASTFETCH_*` environment overrides (a `.env` file is honoured).

use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Error;
use crate::strings::Locale;

/// Chats that get the hostname redaction unless configured otherwise.
pub const DEFAULT_RESTRICTED_CHATS: [i64; 2] = [2341345589, 1697279580];

/// Keyword substitution applied in restricted chats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionRule {
    pub keyword: String,
    pub replacement: String,
}

impl Default for RedactionRule {
    fn default() -> Self {
        Self {
            keyword: "vhost".to_string(),
            replacement: "mutehost".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FastfetchConfig {
    /// Used when the command is invoked without arguments.
    pub arguments: Option<String>,
    pub restricted_chats: Vec<i64>,
    pub redaction: RedactionRule,
    pub executable: String,
    pub timeout_ms: u64,
    pub locale: Locale,
}

impl Default for FastfetchConfig {
    fn default() -> Self {
        Self {
            arguments: None,
            restricted_chats: DEFAULT_RESTRICTED_CHATS.to_vec(),
            redaction: RedactionRule::default(),
            executable: "fastfetch".to_string(),
            timeout_ms: 5000,
            locale: Locale::default(),
        }
    }
}

impl FastfetchConfig {
    /// Defaults, then `path` (if any), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load), with overrides read through `lookup`
    /// instead of the process environment.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match path {
            Some(p) => {
                info!("Loading fastfetch config from {}", p.display());
                Self::from_json(&std::fs::read_to_string(p)?)?
            }
            None => Self::default(),
        };
        cfg.apply_env(lookup)?;
        cfg.validate()?;
        debug!("Effective fastfetch config: {:?}", cfg);
        Ok(cfg)
    }

    /// Parses a JSON document; type errors name the offending field.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let de = &mut serde_json::Deserializer::from_str(raw);
        serde_path_to_error::deserialize(de)
            .map_err(|e| Error::Config(format!("{} at `{}`", e.inner(), e.path())))
    }

    /// Applies `FASTFETCH_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(args) = lookup("FASTFETCH_ARGUMENTS") {
            self.arguments = if args.trim().is_empty() { None } else { Some(args) };
        }
        if let Some(chats) = lookup("FASTFETCH_RESTRICTED_CHATS") {
            self.restricted_chats = chats
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| {
                    c.parse::<i64>().map_err(|e| {
                        Error::Config(format!("FASTFETCH_RESTRICTED_CHATS: '{}' is not an integer ({})", c, e))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
        }
        if let Some(ms) = lookup("FASTFETCH_TIMEOUT_MS") {
            self.timeout_ms = ms
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("FASTFETCH_TIMEOUT_MS: {}", e)))?;
        }
        if let Some(exe) = lookup("FASTFETCH_EXECUTABLE") {
            self.executable = exe;
        }
        if let Some(locale) = lookup("FASTFETCH_LOCALE") {
            self.locale = locale.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.executable.trim().is_empty() {
            return Err("executable must not be empty".into());
        }
        if self.redaction.keyword.is_empty() {
            return Err("redaction.keyword must not be empty".into());
        }
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than zero".into());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
