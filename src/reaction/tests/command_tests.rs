//! Unit tests for the `reac` command and its message hook.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};

use crate::command::adapters::{RecordingScheduler, StaticEmojiCatalog, StaticMemberDirectory};
use crate::command::domain::{
    ChannelId, ChatUser, GuildId, IncomingMessage, MessageId, ResolutionContext, UserId,
};
use crate::command::ports::SideEffect;
use crate::command::services::{
    CommandDispatcher, CommandRegistry, DispatchSettings, MessageManager, MessageOutcome,
};
use crate::reaction::adapters::InMemoryReactionRepository;
use crate::reaction::command::AutoReactionCommand;
use crate::reaction::ports::ReactionRepository;

const GUILD: GuildId = GuildId::new(1);
const GENERAL: ChannelId = ChannelId::new(10);
const RANDOM: ChannelId = ChannelId::new(11);

fn member(id: u64, name: &str) -> ChatUser {
    ChatUser::new(UserId::new(id), name, name.to_lowercase())
}

fn tester() -> ChatUser {
    member(1, "Tester")
}

fn alicia() -> ChatUser {
    member(3, "alicia")
}

struct World {
    manager: MessageManager<RecordingScheduler>,
    scheduler: Arc<RecordingScheduler>,
    store: Arc<InMemoryReactionRepository>,
    members: StaticMemberDirectory,
    emojis: StaticEmojiCatalog,
}

impl World {
    fn say_in(&self, channel: ChannelId, author: ChatUser, content: &str) -> MessageOutcome {
        let message = IncomingMessage::new(MessageId::new(50), GUILD, channel, author, content);
        self.manager
            .manage_message(&message, &ResolutionContext::new(&self.members, &self.emojis))
    }

    fn say(&self, author: ChatUser, content: &str) -> Option<String> {
        let _outcome = self.say_in(GENERAL, author, content);
        self.scheduler.last_reply_text()
    }
}

#[fixture]
fn world() -> World {
    let store = Arc::new(InMemoryReactionRepository::new());
    let command = Arc::new(AutoReactionCommand::new(
        Arc::clone(&store),
        Arc::new(DefaultClock),
        2,
    ));
    let registry =
        Arc::new(CommandRegistry::with_commands([command.definition()]).expect("valid command"));
    let scheduler = Arc::new(RecordingScheduler::new());
    World {
        manager: MessageManager::new(CommandDispatcher::new(
            registry,
            Arc::clone(&scheduler),
            DispatchSettings::default(),
        )),
        scheduler,
        store,
        members: StaticMemberDirectory::new([
            tester(),
            member(2, "Alice97"),
            alicia(),
            member(4, "Mr_X"),
            member(5, "Bob"),
            member(6, "Carol"),
        ]),
        emojis: StaticEmojiCatalog::default(),
    }
}

#[rstest]
fn adding_a_reaction_stores_it(world: World) {
    let reply = world.say(tester(), "!reac alicia 🦀");

    assert_eq!(reply.as_deref(), Some("Reaction 🦀 added to **alicia**!"));
    assert_eq!(
        world
            .store
            .emojis_for(GUILD, alicia().id, Some(GENERAL))
            .expect("emojis"),
        vec!["🦀".to_owned()]
    );
}

#[rstest]
fn names_are_escaped_in_replies(world: World) {
    let reply = world.say(tester(), "!reac mr_x 🦀");

    assert_eq!(reply.as_deref(), Some("Reaction 🦀 added to **Mr\\_X**!"));
}

#[rstest]
fn the_same_emoji_cannot_be_stacked_in_one_channel(world: World) {
    world.say(tester(), "!reac alicia 🦀");

    let reply = world.say(member(5, "Bob"), "!reac alicia 🦀");

    assert_eq!(
        reply.as_deref(),
        Some("This emoji is already on **alicia** in this channel, pick another one.")
    );
}

#[rstest]
fn targets_carry_a_limited_number_of_reactions(world: World) {
    world.say(tester(), "!reac alicia 🦀");
    world.say(member(5, "Bob"), "!reac alicia 👀");

    let reply = world.say(member(6, "Carol"), "!reac alicia 🔥");

    assert_eq!(
        reply.as_deref(),
        Some("**alicia** already carries 2 reactions, let them breathe a little.")
    );
}

#[rstest]
fn removing_a_missing_reaction_has_nothing_to_do(world: World) {
    let reply = world.say(tester(), "!reac alicia stop");

    assert_eq!(reply.as_deref(), Some("Nothing to do."));
}

#[rstest]
fn removing_a_reaction_deletes_it(world: World) {
    world.say(tester(), "!reac alicia 🦀");

    let reply = world.say(tester(), "!reac alicia stop");

    assert_eq!(reply.as_deref(), Some("Reaction removed from **alicia**!"));
    assert_eq!(
        world
            .store
            .count_for_target(GUILD, alicia().id, None)
            .expect("count"),
        0
    );
}

#[rstest]
fn listing_summarises_reactions(world: World) {
    world.say(tester(), "!reac alicia 🦀");
    let _outcome = world.say_in(RANDOM, member(5, "Bob"), "!reac alicia 👀");

    let reply = world.say(tester(), "!reac alicia");

    assert_eq!(
        reply.as_deref(),
        Some("**alicia** has 2 reaction(s) (1 in this channel): 🦀 👀")
    );
}

#[rstest]
fn listing_an_untouched_member(world: World) {
    let reply = world.say(tester(), "!reac alicia");

    assert_eq!(reply.as_deref(), Some("**alicia** has 0 reaction(s)"));
}

#[rstest]
fn stop_alone_removes_every_reaction_on_the_author(world: World) {
    world.say(member(5, "Bob"), "!reac tester 🦀");

    let reply = world.say(tester(), "!reac stop");

    assert_eq!(
        reply.as_deref(),
        Some("Done, the reactions others set on you are gone!")
    );
}

#[rstest]
fn hook_reacts_to_targets_in_the_configured_channel(world: World) {
    world.say(tester(), "!reac alicia 🦀");
    world.scheduler.clear();

    let outcome = world.say_in(GENERAL, alicia(), "hello everyone");

    assert_eq!(outcome, MessageOutcome::Hooks { consumed: false });
    assert!(matches!(
        world.scheduler.effects().as_slice(),
        [SideEffect::React { emojis, .. }] if emojis == &["🦀".to_owned()]
    ));
}

#[rstest]
fn hook_ignores_other_channels(world: World) {
    world.say(tester(), "!reac alicia 🦀");
    world.scheduler.clear();

    let outcome = world.say_in(RANDOM, alicia(), "hello elsewhere");

    assert_eq!(outcome, MessageOutcome::Hooks { consumed: false });

    assert!(world.scheduler.effects().is_empty());
}
