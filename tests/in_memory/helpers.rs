//! Shared test helpers for in-memory integration tests.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use mockable::DefaultClock;
use rstest::fixture;
use tokio::runtime::Runtime;
use tuinbot::command::adapters::{
    InMemoryResponseSink, StaticEmojiCatalog, StaticMemberDirectory, TokioSideEffectScheduler,
};
use tuinbot::command::domain::{
    ChannelId, ChatUser, CommandDefinition, GuildId, IncomingMessage, MessageId,
    ResolutionContext, UserId,
};
use tuinbot::command::services::{
    CommandDispatcher, CommandRegistry, DispatchSettings, MessageManager, MessageOutcome,
};
use tuinbot::reaction::adapters::InMemoryReactionRepository;
use tuinbot::reaction::command::AutoReactionCommand;
use tuinbot::spoiler::adapters::InMemorySpoilerRepository;
use tuinbot::spoiler::command::AutoSpoilerCommand;
use tuinbot::typing::adapters::InMemoryTypingMessageRepository;
use tuinbot::typing::command::TypingMessageCommand;

/// Guild every test message is posted in.
pub const GUILD: GuildId = GuildId::new(7);
/// Channel every test message is posted in.
pub const CHANNEL: ChannelId = ChannelId::new(70);
/// Auto-deletion delay for ordinary replies.
pub const REPLY_TTL: Duration = Duration::from_millis(20);
/// Time given to spawned side effects before asserting.
pub const SETTLE: Duration = Duration::from_millis(250);

/// Provides a tokio runtime for the side-effect tasks.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
}

/// The member typing commands.
pub fn tester() -> ChatUser {
    ChatUser::new(UserId::new(1), "Tester", "tester")
}

/// The member commands are aimed at.
pub fn alicia() -> ChatUser {
    ChatUser::new(UserId::new(3), "alicia", "alicia")
}

/// A bot wired to an in-memory sink and reaction store.
pub struct TestBot {
    /// Records everything the bot sent, deleted, or reacted with.
    pub sink: Arc<InMemoryResponseSink>,
    manager: MessageManager<TokioSideEffectScheduler<InMemoryResponseSink>>,
    members: StaticMemberDirectory,
    emojis: StaticEmojiCatalog,
    next_message_id: u64,
}

impl TestBot {
    /// Builds the bot with the overview, `spoil`, `reac`, and `tape`
    /// commands.
    ///
    /// Help pages keep a long TTL so they outlive a test.
    ///
    /// # Errors
    ///
    /// Returns an error if a command definition is rejected.
    pub fn new(runtime: &Runtime) -> eyre::Result<Self> {
        let sink = Arc::new(InMemoryResponseSink::new());
        let scheduler = Arc::new(TokioSideEffectScheduler::with_handle(
            Arc::clone(&sink),
            runtime.handle().clone(),
            REPLY_TTL,
        ));
        let reactions = Arc::new(AutoReactionCommand::new(
            Arc::new(InMemoryReactionRepository::new()),
            Arc::new(DefaultClock),
            3,
        ));
        let spoilers = Arc::new(AutoSpoilerCommand::new(
            Arc::new(InMemorySpoilerRepository::new()),
            Arc::new(DefaultClock),
            '!',
        ));
        let typing_messages = Arc::new(TypingMessageCommand::new(
            Arc::new(InMemoryTypingMessageRepository::new()),
            Arc::new(DefaultClock),
            1,
        ));
        let registry = CommandRegistry::with_commands([
            CommandDefinition::overview("tuin", "Tuinbot commands", "Everything I can do:"),
            spoilers.definition(),
            reactions.definition(),
            typing_messages.definition(),
        ])?;
        let settings = DispatchSettings {
            trigger: '!',
            help_ttl: Duration::from_secs(60),
        };

        Ok(Self {
            sink,
            manager: MessageManager::new(CommandDispatcher::new(
                Arc::new(registry),
                scheduler,
                settings,
            )),
            members: StaticMemberDirectory::new([tester(), alicia()]),
            emojis: StaticEmojiCatalog::default(),
            next_message_id: 1,
        })
    }

    /// Posts a message and returns it together with the manager outcome.
    pub fn post(&mut self, author: ChatUser, content: &str) -> (IncomingMessage, MessageOutcome) {
        let message = IncomingMessage::new(
            MessageId::new(self.next_message_id),
            GUILD,
            CHANNEL,
            author,
            content,
        );
        self.next_message_id += 1;
        let outcome = self
            .manager
            .manage_message(&message, &ResolutionContext::new(&self.members, &self.emojis));
        (message, outcome)
    }

    /// Reports `user` as typing in the test channel; returns the number of
    /// typing hooks run.
    pub fn start_typing(&self, user: &ChatUser) -> usize {
        self.manager.manage_typing(GUILD, CHANNEL, user)
    }
}

/// Lets spawned side effects run to completion.
pub fn settle(runtime: &Runtime) {
    runtime.block_on(async { tokio::time::sleep(SETTLE).await });
}
