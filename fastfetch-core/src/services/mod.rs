pub mod fastfetch;

pub use fastfetch::FastfetchCommand;
