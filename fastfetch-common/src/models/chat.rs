// File: fastfetch-common/src/models/chat.rs
//! Chat peers as the host hands them to us, and how they map to a chat id.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::Error;

/// Where a command was issued from.
///
/// Hosts give us either a typed peer or some raw value they could not type;
/// only the numeric id matters for redaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ChatPeer {
    User(i64),
    Chat(i64),
    Channel(i64),
    Raw(String),
}

impl ChatPeer {
    /// Resolves the peer to the numeric id used as the redaction key.
    pub fn chat_id(&self) -> Result<i64, Error> {
        match self {
            ChatPeer::User(id) | ChatPeer::Chat(id) | ChatPeer::Channel(id) => Ok(*id),
            ChatPeer::Raw(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| Error::InvalidChatId(format!("{raw:?}: {e}"))),
        }
    }
}

/// Parses `user:<id>`, `chat:<id>`, `channel:<id>`; anything else is kept raw.
impl FromStr for ChatPeer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((kind, id)) = s.split_once(':') else {
            return Ok(ChatPeer::Raw(s.to_string()));
        };
        let parse = |id: &str| {
            id.trim()
                .parse::<i64>()
                .map_err(|e| Error::InvalidChatId(format!("{s:?}: {e}")))
        };
        match kind.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(ChatPeer::User(parse(id)?)),
            "chat" => Ok(ChatPeer::Chat(parse(id)?)),
            "channel" => Ok(ChatPeer::Channel(parse(id)?)),
            _ => Ok(ChatPeer::Raw(s.to_string())),
        }
    }
}

impl fmt::Display for ChatPeer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatPeer::User(id) => write!(f, "user:{id}"),
            ChatPeer::Chat(id) => write!(f, "chat:{id}"),
            ChatPeer::Channel(id) => write!(f, "channel:{id}"),
            ChatPeer::Raw(raw) => f.write_str(raw),
        }
    }
}
