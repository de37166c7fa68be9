// ================================================================
// File: fastfetch-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Timeout error: {0}")]
    Timeout(#[from] tokio::time::error::Elapsed),

    /// Spawn or wait failure of the subordinate process.
    #[error("Invocation error: {0}")]
    Invocation(String),

    #[error("Invalid chat id: {0}")]
    InvalidChatId(String),

    #[error("Argument parse error: {0}")]
    ArgumentParse(#[from] shell_words::ParseError),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Config(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Config(s.to_string())
    }
}
