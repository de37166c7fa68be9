pub mod runner_traits;

pub use runner_traits::FetchRunner;
