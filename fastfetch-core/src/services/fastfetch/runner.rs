use std::process::Stdio;
use std::time::Duration;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, warn};

use fastfetch_common::models::InvocationResult;
use fastfetch_common::traits::FetchRunner;
use crate::Error;
use crate::config::FastfetchConfig;

/// Diagnostic reported when the tool outlives its time budget.
pub const TIMEOUT_MESSAGE: &str = "Fastfetch execution timed out.";

/// Runs the real executable as a child process.
#[derive(Debug, Clone)]
pub struct FastfetchRunner {
    executable: String,
    timeout: Duration,
}

impl FastfetchRunner {
    pub fn new(executable: impl Into<String>, timeout: Duration) -> Self {
        Self {
            executable: executable.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &FastfetchConfig) -> Self {
        Self::new(cfg.executable.clone(), cfg.timeout())
    }

    /// Spawns, waits with the time budget and returns (exit ok, stdout, stderr).
    ///
    /// The child is spawned with `kill_on_drop`, so an elapsed timeout drops
    /// the wait future and the process is killed and reaped by tokio.
    async fn spawn_and_wait(&self, args: &[String]) -> Result<(bool, String, String), Error> {
        let child = Command::new(&self.executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::Invocation(format!("failed to spawn '{}': {}", self.executable, e)))?;
        debug!("Spawned {} (pid={:?}) args={:?}", self.executable, child.id(), args);

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await?
            .map_err(|e| Error::Invocation(format!("failed to wait for '{}': {}", self.executable, e)))?;

        debug!("{} exited with {}", self.executable, output.status);
        Ok((
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}

#[async_trait]
impl FetchRunner for FastfetchRunner {
    fn is_installed(&self) -> bool {
        which::which(&self.executable).is_ok()
    }

    async fn run(&self, args: &[String]) -> InvocationResult {
        match self.spawn_and_wait(args).await {
            Ok((success, stdout, stderr)) => {
                if !success {
                    warn!("{} failed: {}", self.executable, stderr);
                }
                InvocationResult {
                    success,
                    stdout,
                    stderr: html_escape::encode_text(&stderr).into_owned(),
                }
            }
            Err(Error::Timeout(_)) => {
                warn!("{} timed out after {:?}", self.executable, self.timeout);
                InvocationResult::failed(TIMEOUT_MESSAGE)
            }
            Err(e) => {
                error!("Error running {} => {:?}", self.executable, e);
                InvocationResult::failed(html_escape::encode_text(&e.to_string()).into_owned())
            }
        }
    }
}
