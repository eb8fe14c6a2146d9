//! Domain model of the command grammar engine.
//!
//! Parameters declare what a token may be, executors interpret one token
//! against one parameter, and syntaxes group parameters into the shapes a
//! command accepts.

mod chat;
mod definition;
mod emoji;
mod error;
mod executor;
mod help;
mod hook;
mod invocation;
mod links;
mod param;
mod syntax;
mod tokenizer;
mod user_match;
mod value;

pub use chat::{
    ChannelId, ChatUser, EmojiId, GuildId, IncomingMessage, MessageId, MessageRef, Reply,
    ReplyContent, RichField, RichMessage, UserId, escape_markdown,
};
pub use definition::{CommandDefinition, HelpKind};
pub use emoji::{parse_custom_emoji, parse_unicode_emoji};
pub use error::{CommandHandlerError, ConfigurationError, DispatchError, TokenizeError};
pub use executor::{CommandParamExecutor, MIN_USER_QUERY_LENGTH, ResolutionContext, ResultState};
pub use help::{error_reply_text, render_help, render_overview};
pub use hook::{HookVerdict, MessageHook, TypingHook};
pub use invocation::{Invocation, NOTHING_TO_DO, reply_when_changed};
pub use links::{LinkExtract, extract_links, is_single_link};
pub use param::{CommandParam, ConfigRule, ParamConfig, ParamType, ValidationStage, ValueKind};
pub use syntax::{CommandSyntax, SyntaxCallback};
pub use tokenizer::{CommandLine, MalformedCommandLine, split_command, tokenize};
pub use user_match::{find_user, fold_name};
pub use value::{Emoji, ParamValue};
