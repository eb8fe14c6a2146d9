//! Runs the bot against standard input.
//!
//! Usage:
//!
//! ```text
//! tuinbot_console [config-path]
//! ```
//!
//! Every stdin line is handled as a guild message from a fixed console
//! member, who is reported as typing just before it is sent; replies,
//! posts, deletions, and reactions are written to stdout. Members
//! and custom emojis the commands can resolve come from the JSON config, for
//! example:
//!
//! ```json
//! {
//!   "trigger": "!",
//!   "logging": { "filter": "info,tuinbot=debug", "format": "compact" },
//!   "members": [
//!     { "id": 42, "display_name": "Alice97", "account_name": "alice" }
//!   ],
//!   "custom_emojis": [ { "name": "tuin", "id": 900 } ]
//! }
//! ```

use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mockable::DefaultClock;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{debug, info};

use tuinbot::command::adapters::{
    StaticEmojiCatalog, StaticMemberDirectory, TokioSideEffectScheduler,
};
use tuinbot::command::domain::{
    ChannelId, ChatUser, CommandDefinition, ConfigurationError, GuildId, IncomingMessage,
    MessageId, MessageRef, ReplyContent, ResolutionContext, RichMessage, UserId,
};
use tuinbot::command::ports::{ResponseSink, SinkError, SinkResult};
use tuinbot::command::services::{CommandDispatcher, CommandRegistry, MessageManager};
use tuinbot::config::{BotConfig, ConfigError};
use tuinbot::reaction::adapters::InMemoryReactionRepository;
use tuinbot::reaction::command::AutoReactionCommand;
use tuinbot::spoiler::adapters::InMemorySpoilerRepository;
use tuinbot::spoiler::command::AutoSpoilerCommand;
use tuinbot::telemetry::{self, TelemetryError};
use tuinbot::typing::adapters::InMemoryTypingMessageRepository;
use tuinbot::typing::command::TypingMessageCommand;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CONSOLE_GUILD: GuildId = GuildId::new(1);
const CONSOLE_CHANNEL: ChannelId = ChannelId::new(1);
const CONSOLE_USER: UserId = UserId::new(1);
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Errors that stop the console runner.
#[derive(Debug, Error)]
enum ConsoleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Registration(#[from] ConfigurationError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), BoxError> {
    let config = match env::args().nth(1) {
        Some(path) => BotConfig::load(path).map_err(ConsoleError::from)?,
        None => BotConfig::default(),
    };
    run(&config).map_err(Into::into)
}

fn run(config: &BotConfig) -> Result<(), ConsoleError> {
    telemetry::initialise(&config.logging)?;

    let runtime = Builder::new_multi_thread().enable_time().build()?;
    let sink = Arc::new(ConsoleResponseSink::default());
    let scheduler = Arc::new(TokioSideEffectScheduler::with_handle(
        sink,
        runtime.handle().clone(),
        config.reply_ttl(),
    ));

    let registry = Arc::new(CommandRegistry::with_commands(build_commands(config))?);
    let manager = MessageManager::new(CommandDispatcher::new(
        registry,
        scheduler,
        config.dispatch_settings(),
    ));

    let author = ChatUser::new(CONSOLE_USER, "console", "console");
    let members = StaticMemberDirectory::new(
        config
            .members
            .iter()
            .map(tuinbot::config::MemberConfig::to_user)
            .chain(std::iter::once(author.clone())),
    );
    let emojis = StaticEmojiCatalog::new(
        config
            .custom_emojis
            .iter()
            .map(tuinbot::config::CustomEmojiConfig::emoji_id),
    );
    let resolution = ResolutionContext::new(&members, &emojis);

    info!(trigger = %config.trigger, "console ready");
    for (line_number, line) in io::stdin().lock().lines().enumerate() {
        let content = line?;
        let typing_hooks = manager.manage_typing(CONSOLE_GUILD, CONSOLE_CHANNEL, &author);
        debug!(typing_hooks, "typing reported");
        let message = IncomingMessage::new(
            MessageId::new(u64::try_from(line_number).unwrap_or(u64::MAX)),
            CONSOLE_GUILD,
            CONSOLE_CHANNEL,
            author.clone(),
            content,
        );
        let outcome = manager.manage_message(&message, &resolution);
        info!(?outcome, "message handled");
    }

    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    Ok(())
}

fn build_commands(config: &BotConfig) -> Vec<CommandDefinition> {
    let reactions = Arc::new(AutoReactionCommand::new(
        Arc::new(InMemoryReactionRepository::new()),
        Arc::new(DefaultClock),
        config.max_reactions_per_target,
    ));
    let spoilers = Arc::new(AutoSpoilerCommand::new(
        Arc::new(InMemorySpoilerRepository::new()),
        Arc::new(DefaultClock),
        config.trigger,
    ));
    let typing_messages = Arc::new(TypingMessageCommand::new(
        Arc::new(InMemoryTypingMessageRepository::new()),
        Arc::new(DefaultClock),
        config.max_typing_messages_per_target,
    ));

    vec![
        CommandDefinition::overview(
            config.overview_command.as_str(),
            "Tuinbot commands",
            "Here is everything I can do for you:",
        ),
        spoilers.definition(),
        reactions.definition(),
        typing_messages.definition(),
    ]
}

/// Response sink writing every operation to stdout.
#[derive(Debug, Default)]
struct ConsoleResponseSink {
    next_id: AtomicU64,
}

impl ConsoleResponseSink {
    fn write(&self, text: &str) -> SinkResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|error| SinkError::Unavailable(error.to_string()))
    }
}

fn render(content: &ReplyContent) -> String {
    match content {
        ReplyContent::Text(text) => text.clone(),
        ReplyContent::Rich(rich) => render_rich(rich),
    }
}

fn render_rich(rich: &RichMessage) -> String {
    let mut lines = Vec::new();
    if !rich.title.is_empty() {
        lines.push(format!("== {} ==", rich.title));
    }
    lines.push(rich.description.clone());
    lines.extend(
        rich.fields
            .iter()
            .filter(|field| !field.name.trim_matches('\u{200B}').is_empty())
            .map(|field| format!("-- {}\n{}", field.name, field.value)),
    );
    if let Some(footer) = &rich.footer {
        lines.push(format!("({footer})"));
    }
    lines.join("\n")
}

#[async_trait]
impl ResponseSink for ConsoleResponseSink {
    async fn send(&self, to: MessageRef, content: ReplyContent) -> SinkResult<MessageRef> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.write(&format!("[reply to #{}] {}", to.message_id, render(&content)))?;
        Ok(MessageRef::new(to.channel_id, MessageId::new(u64::MAX.saturating_sub(id))))
    }

    async fn post(&self, channel_id: ChannelId, content: ReplyContent) -> SinkResult<MessageRef> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.write(&format!("[posted in #{channel_id}] {}", render(&content)))?;
        Ok(MessageRef::new(channel_id, MessageId::new(u64::MAX.saturating_sub(id))))
    }

    async fn delete(&self, message: MessageRef) -> SinkResult<()> {
        self.write(&format!("[deleted #{}]", message.message_id))
    }

    async fn react(&self, message: MessageRef, emoji: String) -> SinkResult<()> {
        self.write(&format!("[reaction on #{}] {emoji}", message.message_id))
    }
}
