// File: fastfetch-core/src/services/fastfetch/mod.rs
//! Runs fastfetch and turns its terminal output into a chat reply:
//! runner → formatter → censor → presenter, glued together by the command.

pub mod censor;
pub mod command;
pub mod formatter;
pub mod presenter;
pub mod runner;

pub use censor::Censor;
pub use command::FastfetchCommand;
pub use runner::{FastfetchRunner, TIMEOUT_MESSAGE};
