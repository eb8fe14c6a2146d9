//! Per-token parameter executors.
//!
//! An executor interprets one raw token against one parameter declaration
//! during a single dispatch. It records whether the token had the right
//! shape for the parameter (`is_input_format_valid`) separately from whether
//! the value passed every rule (`result_state`), which is what lets the
//! dispatcher tell "not meant for this syntax" apart from "meant for it, but
//! wrong".

use std::sync::Arc;

use super::emoji::{parse_custom_emoji, parse_unicode_emoji};
use super::user_match::find_user;
use super::{ChatUser, CommandParam, Emoji, ParamConfig, ParamType, ParamValue};
use crate::command::ports::{EmojiCatalog, MemberDirectory};

/// Minimum characters a user query must have before a lookup is attempted.
pub const MIN_USER_QUERY_LENGTH: usize = 3;

/// Outcome of an executor once a value has been set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultState {
    /// The token converted and passed every config.
    Valid,
    /// The token was rejected; see the executor error.
    Invalid,
}

/// Platform lookups an executor may need while converting a token.
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// Candidate pool for user references.
    pub members: &'a dyn MemberDirectory,
    /// Known custom emojis.
    pub emojis: &'a dyn EmojiCatalog,
}

impl<'a> ResolutionContext<'a> {
    /// Bundles the lookups supplied for one dispatch.
    #[must_use]
    pub const fn new(members: &'a dyn MemberDirectory, emojis: &'a dyn EmojiCatalog) -> Self {
        Self { members, emojis }
    }
}

enum Conversion {
    /// Wrong shape: the token was not meant for this parameter.
    Rejected(&'static str),
    /// Right shape, but the value could not be resolved.
    Failed(String),
    Converted(ParamValue),
}

/// Interprets one raw token for one parameter.
#[derive(Debug, Clone)]
pub struct CommandParamExecutor {
    param: Arc<CommandParam>,
    raw: Option<String>,
    value: Option<ParamValue>,
    state: ResultState,
    input_format_valid: bool,
    error: Option<String>,
}

impl CommandParamExecutor {
    /// Creates an executor that has not seen a token yet.
    #[must_use]
    pub const fn new(param: Arc<CommandParam>) -> Self {
        Self {
            param,
            raw: None,
            value: None,
            state: ResultState::Invalid,
            input_format_valid: false,
            error: None,
        }
    }

    /// Converts and validates a raw token.
    ///
    /// Input-format configs run before value configs; the first failing
    /// config stops validation.
    pub fn set_value(&mut self, raw: &str, context: &ResolutionContext<'_>) {
        self.raw = Some(raw.to_owned());
        self.value = None;
        self.state = ResultState::Invalid;
        self.input_format_valid = false;
        self.error = None;

        let value = match self.convert(raw, context) {
            Conversion::Rejected(reason) => {
                self.error = Some(reason.to_owned());
                return;
            }
            Conversion::Failed(message) => {
                self.input_format_valid = true;
                self.error = Some(message);
                return;
            }
            Conversion::Converted(value) => value,
        };

        let param = Arc::clone(&self.param);
        let (format_configs, value_configs): (Vec<_>, Vec<_>) = param
            .configs()
            .iter()
            .partition(|config| config.validates_input_format());

        if let Some(message) = first_failure(&format_configs, &value) {
            self.error = Some(message);
            self.value = Some(value);
            return;
        }
        self.input_format_valid = true;

        if let Some(message) = first_failure(&value_configs, &value) {
            self.error = Some(message);
            self.value = Some(value);
            return;
        }

        self.value = Some(value);
        self.state = ResultState::Valid;
    }

    fn convert(&self, raw: &str, context: &ResolutionContext<'_>) -> Conversion {
        match self.param.param_type() {
            ParamType::User => resolve_user(raw, context.members),
            ParamType::Emoji => resolve_emoji(raw, context.emojis),
            ParamType::FixedKeyword => {
                if raw == self.param.name() {
                    Conversion::Converted(ParamValue::Keyword(raw.to_owned()))
                } else {
                    Conversion::Rejected("token does not match the keyword")
                }
            }
            ParamType::Integer => raw.parse::<i64>().map_or(
                Conversion::Rejected("token is not an integer"),
                |number| Conversion::Converted(ParamValue::Integer(number)),
            ),
            ParamType::Text => Conversion::Converted(ParamValue::Text(raw.to_owned())),
        }
    }

    /// Whether this executor's kind accepts any token at the format stage.
    #[must_use]
    pub fn always_validates_input_format(&self) -> bool {
        self.param.param_type().always_validates_input_format()
    }

    /// Whether the last token had the shape this parameter expects.
    #[must_use]
    pub const fn is_input_format_valid(&self) -> bool {
        self.input_format_valid
    }

    /// Validation outcome of the last token.
    #[must_use]
    pub const fn result_state(&self) -> ResultState {
        self.state
    }

    /// Explanation of the last rejection, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The raw token last set.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The converted value, available once the token passed conversion.
    #[must_use]
    pub const fn value(&self) -> Option<&ParamValue> {
        self.value.as_ref()
    }

    /// The parameter this executor interprets.
    #[must_use]
    pub fn param(&self) -> &CommandParam {
        &self.param
    }

    /// The resolved user, for valid user parameters.
    #[must_use]
    pub const fn user(&self) -> Option<&ChatUser> {
        match self.valid_value() {
            Some(ParamValue::User(user)) => Some(user),
            _ => None,
        }
    }

    /// The resolved emoji, for valid emoji parameters.
    #[must_use]
    pub const fn emoji(&self) -> Option<&Emoji> {
        match self.valid_value() {
            Some(ParamValue::Emoji(emoji)) => Some(emoji),
            _ => None,
        }
    }

    /// The integer value, for valid integer parameters.
    #[must_use]
    pub const fn integer(&self) -> Option<i64> {
        match self.valid_value() {
            Some(ParamValue::Integer(number)) => Some(*number),
            _ => None,
        }
    }

    /// The text value, for valid text or keyword parameters.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self.valid_value() {
            Some(ParamValue::Text(text) | ParamValue::Keyword(text)) => Some(text),
            _ => None,
        }
    }

    const fn valid_value(&self) -> Option<&ParamValue> {
        match self.state {
            ResultState::Valid => self.value.as_ref(),
            ResultState::Invalid => None,
        }
    }
}

fn first_failure(configs: &[&ParamConfig], value: &ParamValue) -> Option<String> {
    configs
        .iter()
        .find_map(|config| config.validate(value).err())
}

fn resolve_user(raw: &str, members: &dyn MemberDirectory) -> Conversion {
    if raw.chars().count() < MIN_USER_QUERY_LENGTH {
        return Conversion::Failed(format!(
            "User name must be at least {MIN_USER_QUERY_LENGTH} characters long."
        ));
    }

    let candidates = members.candidates(raw);
    find_user(&candidates, raw).map_or_else(
        || Conversion::Failed("User not found.".to_owned()),
        |user| Conversion::Converted(ParamValue::User(user.clone())),
    )
}

fn resolve_emoji(raw: &str, catalog: &dyn EmojiCatalog) -> Conversion {
    if let Some(emoji) = parse_unicode_emoji(raw) {
        return Conversion::Converted(ParamValue::Emoji(emoji));
    }

    let known = parse_custom_emoji(raw).filter(|emoji| match emoji {
        Emoji::Custom { id, .. } => catalog.contains(*id),
        Emoji::Unicode { .. } => true,
    });
    known.map_or_else(
        || Conversion::Failed("Invalid emoji.".to_owned()),
        |emoji| Conversion::Converted(ParamValue::Emoji(emoji)),
    )
}
