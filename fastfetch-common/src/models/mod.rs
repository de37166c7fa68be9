// File: fastfetch-common/src/models/mod.rs
pub mod chat;
pub mod fetch;

pub use chat::ChatPeer;
pub use fetch::{FetchReply, InvocationResult, RefreshToken};
