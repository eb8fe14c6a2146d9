//! Shared world state for command dispatch BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tuinbot::command::adapters::{RecordingScheduler, StaticEmojiCatalog, StaticMemberDirectory};
use tuinbot::command::domain::{
    ChannelId, ChatUser, CommandDefinition, CommandParam, CommandSyntax, GuildId,
    IncomingMessage, MessageId, ParamConfig, ParamType, Reply, ResolutionContext, UserId,
};
use tuinbot::command::services::{
    CommandDispatcher, CommandRegistry, DispatchSettings, MessageManager, MessageOutcome,
};
use tuinbot::reaction::adapters::InMemoryReactionRepository;
use tuinbot::reaction::command::AutoReactionCommand;

/// Manager type used by the BDD world.
pub type TestManager = MessageManager<RecordingScheduler>;

/// Scenario world for command dispatch behaviour tests.
pub struct DispatchWorld {
    /// Manager under test, once the bot is built.
    pub manager: Option<TestManager>,
    /// Records replies and reactions.
    pub scheduler: Arc<RecordingScheduler>,
    /// Members commands can resolve.
    pub members: Vec<ChatUser>,
    /// Outcome of the last typed message.
    pub last_outcome: Option<MessageOutcome>,
}

impl DispatchWorld {
    /// Creates a world without a bot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manager: None,
            scheduler: Arc::new(RecordingScheduler::new()),
            members: vec![typist()],
            last_outcome: None,
        }
    }

    /// Handles `content` as a message from the typing member.
    ///
    /// # Errors
    ///
    /// Returns an error when no bot was built yet.
    pub fn type_message(&mut self, content: &str) -> Result<MessageOutcome, eyre::Report> {
        let manager = self
            .manager
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no bot in scenario world"))?;
        let members = StaticMemberDirectory::new(self.members.iter().cloned());
        let emojis = StaticEmojiCatalog::default();
        let message = IncomingMessage::new(
            MessageId::new(1),
            GuildId::new(1),
            ChannelId::new(1),
            typist(),
            content,
        );
        Ok(manager.manage_message(&message, &ResolutionContext::new(&members, &emojis)))
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// The member typing every message.
pub fn typist() -> ChatUser {
    ChatUser::new(UserId::new(1), "Typist", "typist")
}

/// Builds the `volume` test command.
pub fn volume_command() -> CommandDefinition {
    let level = CommandParam::new("level", "A level from 1 to 10", ParamType::Integer)
        .with_config(ParamConfig::int_range(1, 10));

    CommandDefinition::new("volume", "Sets the volume")
        .with_syntax(
            CommandSyntax::new("Set a level", |invocation| {
                Ok(Reply::text(format!(
                    "Volume set to {}.",
                    invocation.integer(0)?
                )))
            })
            .with_param(level),
        )
        .with_syntax(
            CommandSyntax::new("Turn it up", |_| {
                Ok(Reply::text("Volume set to the maximum."))
            })
            .with_param(CommandParam::keyword("max")),
        )
}

/// Builds the manager with the `volume` and `reac` commands.
///
/// # Errors
///
/// Returns an error if a command definition is rejected.
pub fn build_manager(scheduler: Arc<RecordingScheduler>) -> Result<TestManager, eyre::Report> {
    let reactions = Arc::new(AutoReactionCommand::new(
        Arc::new(InMemoryReactionRepository::new()),
        Arc::new(DefaultClock),
        6,
    ));
    let registry = CommandRegistry::with_commands([volume_command(), reactions.definition()])?;
    Ok(MessageManager::new(CommandDispatcher::new(
        Arc::new(registry),
        scheduler,
        DispatchSettings::default(),
    )))
}
