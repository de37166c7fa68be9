// src/lib.rs

pub mod config;
pub mod strings;
pub mod services;

pub use fastfetch_common::Error;
pub use config::FastfetchConfig;
pub use strings::{Locale, Strings};
pub use services::fastfetch::FastfetchCommand;
