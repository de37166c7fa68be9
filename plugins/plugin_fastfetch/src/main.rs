use std::path::PathBuf;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use fastfetch_common::models::{ChatPeer, FetchReply};
use fastfetch_core::{FastfetchCommand, FastfetchConfig, Locale};

#[derive(Parser, Debug, Clone)]
#[command(name = "plugin_fastfetch")]
#[command(author, version, about = "Fastfetch system information display for chat")]
struct Args {
    /// JSON config file (arguments, restricted_chats, redaction, executable, timeout_ms, locale)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chat the command comes from: user:<id>, chat:<id>, channel:<id> or a raw id
    #[arg(long, default_value = "user:0")]
    chat: ChatPeer,

    /// Override the configured reply language
    #[arg(long)]
    locale: Option<Locale>,

    /// Raw command arguments, e.g. "inline --logo none". Uses the configured default when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    raw: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("plugin_fastfetch=info".parse().unwrap_or_default())
        .add_directive("fastfetch_core=info".parse().unwrap_or_default());
    let sub = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(sub)
        .expect("Failed to set global subscriber");
}

/// Re-quotes argv so the command's shell-style split yields the same list.
fn raw_arguments(raw: &[String]) -> Option<String> {
    (!raw.is_empty()).then(|| shell_words::join(raw))
}

fn print_reply(reply: &FetchReply, command: &FastfetchCommand) {
    println!("{}", reply.text);
    if reply.refresh.is_some() {
        println!("[{}] press Enter, Ctrl+D to quit", command.strings().refresh_button);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = FastfetchConfig::load(args.config.as_deref())?;
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    let command = FastfetchCommand::from_config(&config)?;

    let raw = raw_arguments(&args.raw);
    info!("fastfetch invoked from {} with {:?}", args.chat, raw);

    let mut reply = command.handle(raw.as_deref(), &args.chat).await;
    print_reply(&reply, &command);

    // Inline replies stay live: every line on stdin presses the refresh button.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(token) = reply.refresh.clone() {
        let Some(_) = lines.next_line().await? else {
            break;
        };
        debug!("Refresh requested for chat {}", token.chat_id);
        reply = command.refresh(&token).await;
        print_reply(&reply, &command);
    }

    info!("plugin_fastfetch finished. Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_falls_back_to_config() {
        assert_eq!(raw_arguments(&[]), None);
    }

    #[test]
    fn test_spaced_argument_survives_resplit() {
        let raw = argv(&["inline", "--title-format", "a b", "it's", ""]);
        let joined = raw_arguments(&raw).unwrap();
        assert_eq!(shell_words::split(&joined).unwrap(), raw);
    }

    #[test]
    fn test_cli_collects_trailing_argv() {
        let args = Args::try_parse_from([
            "plugin_fastfetch", "--chat", "chat:7", "--", "--title-format", "a b",
        ])
        .unwrap();
        assert_eq!(args.chat, ChatPeer::Chat(7));
        assert_eq!(
            shell_words::split(&raw_arguments(&args.raw).unwrap()).unwrap(),
            argv(&["--title-format", "a b"])
        );
    }
}
