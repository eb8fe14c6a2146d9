//! Emoji token recognition.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Emoji, EmojiId};

static CUSTOM_EMOJI: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(?P<markup><a?:(?P<name>[^:]+):(?P<id>\d+)>)").ok());

/// Recognises a standard Unicode emoji written as the whole token.
#[must_use]
pub fn parse_unicode_emoji(token: &str) -> Option<Emoji> {
    emojis::get(token).map(|emoji| Emoji::Unicode {
        glyph: emoji.as_str().to_owned(),
    })
}

/// Recognises custom emoji markup (`<:name:id>`) at the start of a token.
///
/// The markup only describes an emoji; whether the platform knows it is up
/// to the caller.
#[must_use]
pub fn parse_custom_emoji(token: &str) -> Option<Emoji> {
    let captures = CUSTOM_EMOJI.as_ref()?.captures(token)?;
    let id = captures.name("id")?.as_str().parse::<u64>().ok()?;
    Some(Emoji::Custom {
        name: captures.name("name")?.as_str().to_owned(),
        id: EmojiId::new(id),
        markup: captures.name("markup")?.as_str().to_owned(),
    })
}
