// File: fastfetch-common/src/models/fetch.rs

use serde::{Deserialize, Serialize};

/// What a single run of the external tool produced.
///
/// `stdout`/`stderr` hold whatever was captured before the run ended; on a
/// timeout or spawn failure `stdout` is empty and `stderr` carries a
/// diagnostic instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvocationResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Everything needed to run the same invocation again from a refresh button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub args: Vec<String>,
    pub chat_id: i64,
}

/// The reply handed back to the chat host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchReply {
    pub text: String,
    /// Present only for inline replies that rendered real output.
    pub refresh: Option<RefreshToken>,
}

impl FetchReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            refresh: None,
        }
    }
}
