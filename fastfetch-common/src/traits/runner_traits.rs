use async_trait::async_trait;
use crate::models::InvocationResult;

/// Runs the external system-info tool once.
///
/// Implementations never fail past this boundary: every spawn, wait or
/// timeout problem is folded into an unsuccessful [`InvocationResult`].
#[mockall::automock]
#[async_trait]
pub trait FetchRunner: Send + Sync {
    /// Whether the executable can be found at all. Checked before `run`.
    fn is_installed(&self) -> bool;

    async fn run(&self, args: &[String]) -> InvocationResult;
}
