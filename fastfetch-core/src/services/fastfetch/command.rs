//! The `.fastfetch` (alias `.f`) chat command.
//!
//! Usage:  .fastfetch [inline] [fastfetch args...]
//!   └─ `inline`  → reply with a refresh button that re-runs the same args.
//!
//! Without args the configured default argument string is used.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use fastfetch_common::models::{ChatPeer, FetchReply, RefreshToken};
use fastfetch_common::traits::FetchRunner;
use crate::Error;
use crate::config::FastfetchConfig;
use crate::strings::Strings;
use super::censor::Censor;
use super::formatter;
use super::presenter::{self, is_rendered_output};
use super::runner::FastfetchRunner;

pub struct FastfetchCommand {
    runner: Arc<dyn FetchRunner>,
    censor: Censor,
    restricted_chats: HashSet<i64>,
    default_arguments: Option<String>,
    strings: &'static Strings,
}

impl FastfetchCommand {
    pub fn new(config: &FastfetchConfig, runner: Arc<dyn FetchRunner>) -> Result<Self, Error> {
        Ok(Self {
            runner,
            censor: Censor::new(&config.redaction)?,
            restricted_chats: config.restricted_chats.iter().copied().collect(),
            default_arguments: config.arguments.clone(),
            strings: Strings::for_locale(config.locale),
        })
    }

    /// Builds the command around the real executable.
    pub fn from_config(config: &FastfetchConfig) -> Result<Self, Error> {
        Self::new(config, Arc::new(FastfetchRunner::from_config(config)))
    }

    pub fn strings(&self) -> &'static Strings {
        self.strings
    }

    /// Entry point for a chat command. Never fails; errors become templates.
    pub async fn handle(&self, raw_args: Option<&str>, peer: &ChatPeer) -> FetchReply {
        if !self.runner.is_installed() {
            warn!("fastfetch requested by {} but executable is not installed", peer);
            return FetchReply::text(self.strings.not_installed);
        }

        let (args, inline) = match self.parse_args(raw_args) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Could not parse fastfetch args => {}", e);
                return FetchReply::text(
                    self.strings.error_with(&html_escape::encode_text(&e.to_string())),
                );
            }
        };

        let chat_id = match peer.chat_id() {
            Ok(id) => id,
            Err(e) => {
                warn!("{}", e);
                return FetchReply::text(self.strings.invalid_chat_id);
            }
        };

        let text = self.execute(&args, chat_id).await;
        if inline {
            self.with_refresh(text, args, chat_id)
        } else {
            FetchReply::text(text)
        }
    }

    /// Re-runs an inline reply with the args and chat it was created for.
    pub async fn refresh(&self, token: &RefreshToken) -> FetchReply {
        debug!("Refreshing fastfetch reply for chat {}", token.chat_id);
        let text = self.execute(&token.args, token.chat_id).await;
        self.with_refresh(text, token.args.clone(), token.chat_id)
    }

    /// Run → format → censor → present.
    pub async fn execute(&self, args: &[String], chat_id: i64) -> String {
        let result = self.runner.run(args).await;
        if !result.success || result.stdout.is_empty() {
            return presenter::present(result.success, &result.stdout, &result.stderr, self.strings);
        }

        let formatted = formatter::format(&result.stdout);
        let censored = self.censor.censor(&formatted, &chat_id, &self.restricted_chats);
        info!("fastfetch ok for chat {} ({} bytes)", chat_id, censored.len());
        presenter::present(true, &censored, "", self.strings)
    }

    /// Splits the raw argument string and peels off a leading `inline`.
    fn parse_args(&self, raw_args: Option<&str>) -> Result<(Vec<String>, bool), Error> {
        let raw = raw_args
            .filter(|s| !s.trim().is_empty())
            .or(self.default_arguments.as_deref())
            .unwrap_or("");
        let mut args = shell_words::split(raw)?;
        let inline = args
            .first()
            .is_some_and(|first| first.eq_ignore_ascii_case("inline"));
        if inline {
            args.remove(0);
        }
        Ok((args, inline))
    }

    fn with_refresh(&self, text: String, args: Vec<String>, chat_id: i64) -> FetchReply {
        let refresh = is_rendered_output(&text).then_some(RefreshToken { args, chat_id });
        FetchReply { text, refresh }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastfetch_common::models::InvocationResult;
    use fastfetch_common::traits::runner_traits::MockFetchRunner;

    fn command(runner: MockFetchRunner) -> FastfetchCommand {
        FastfetchCommand::new(&FastfetchConfig::default(), Arc::new(runner)).unwrap()
    }

    fn installed() -> MockFetchRunner {
        let mut runner = MockFetchRunner::new();
        runner.expect_is_installed().return_const(true);
        runner
    }

    #[tokio::test]
    async fn test_not_installed_short_circuits() {
        let mut runner = MockFetchRunner::new();
        runner.expect_is_installed().return_const(false);
        runner.expect_run().never();

        let cmd = command(runner);
        let reply = cmd.handle(None, &ChatPeer::User(1)).await;
        assert_eq!(reply, FetchReply::text(cmd.strings().not_installed));
    }

    #[tokio::test]
    async fn test_invalid_chat_short_circuits() {
        let mut runner = installed();
        runner.expect_run().never();

        let cmd = command(runner);
        let reply = cmd.handle(None, &ChatPeer::Raw("not-a-number".into())).await;
        assert_eq!(reply.text, cmd.strings().invalid_chat_id);
        assert_eq!(reply.refresh, None);
    }

    #[tokio::test]
    async fn test_args_are_split_and_inline_peeled() {
        let mut runner = installed();
        runner
            .expect_run()
            .withf(|args: &[String]| args == ["--logo", "none", "--title-format", "a b"])
            .times(1)
            .returning(|_| InvocationResult::ok("OS: Test"));

        let cmd = command(runner);
        let reply = cmd
            .handle(Some("INLINE --logo none --title-format 'a b'"), &ChatPeer::Chat(5))
            .await;
        assert_eq!(reply.text, "<pre><code class=\"language-fastfetch\">OS: Test</code></pre>");
        assert_eq!(
            reply.refresh,
            Some(RefreshToken {
                args: vec!["--logo".into(), "none".into(), "--title-format".into(), "a b".into()],
                chat_id: 5,
            })
        );
    }

    #[tokio::test]
    async fn test_default_arguments_used_when_none_given() {
        let mut runner = installed();
        runner
            .expect_run()
            .withf(|args: &[String]| args == ["--logo", "none"])
            .times(2)
            .returning(|_| InvocationResult::ok("x"));

        let cfg = FastfetchConfig {
            arguments: Some("--logo none".into()),
            ..FastfetchConfig::default()
        };
        let cmd = FastfetchCommand::new(&cfg, Arc::new(runner)).unwrap();
        cmd.handle(None, &ChatPeer::User(1)).await;
        cmd.handle(Some("   "), &ChatPeer::User(1)).await;
    }

    #[tokio::test]
    async fn test_unbalanced_quote_is_reported() {
        let mut runner = installed();
        runner.expect_run().never();

        let cmd = command(runner);
        let reply = cmd.handle(Some("--title 'oops"), &ChatPeer::User(1)).await;
        assert!(reply.text.contains("language-stderr"));
        assert_eq!(reply.refresh, None);
    }

    #[tokio::test]
    async fn test_restricted_chat_is_censored() {
        let mut runner = installed();
        runner
            .expect_run()
            .returning(|_| InvocationResult::ok("\x1b[1malice@VHost\x1b[0m\nOS: Test"));

        let cmd = command(runner);
        let restricted = cmd.execute(&[], 2341345589).await;
        let open = cmd.execute(&[], 7).await;
        assert!(restricted.contains("alice@Mutehost\nOS: Test"));
        assert!(open.contains("alice@VHost\nOS: Test"));
    }

    #[tokio::test]
    async fn test_failure_is_not_formatted() {
        let mut runner = installed();
        runner
            .expect_run()
            .returning(|_| InvocationResult::failed(""));

        let cmd = command(runner);
        let reply = cmd.handle(Some("inline"), &ChatPeer::User(1)).await;
        assert_eq!(reply.text, cmd.strings().error_with(""));
        assert_eq!(reply.refresh, None);
    }

    #[tokio::test]
    async fn test_empty_output_is_no_data() {
        let mut runner = installed();
        runner.expect_run().returning(|_| InvocationResult::ok(""));

        let cmd = command(runner);
        assert_eq!(cmd.execute(&[], 1).await, cmd.strings().no_data);
    }

    #[tokio::test]
    async fn test_refresh_reruns_same_args() {
        let mut runner = installed();
        runner
            .expect_run()
            .withf(|args: &[String]| args == ["-c", "all"])
            .times(1)
            .returning(|_| InvocationResult::ok("fresh"));

        let cmd = command(runner);
        let token = RefreshToken { args: vec!["-c".into(), "all".into()], chat_id: 9 };
        let reply = cmd.refresh(&token).await;
        assert!(reply.text.contains("fresh"));
        assert_eq!(reply.refresh, Some(token));
    }
}
