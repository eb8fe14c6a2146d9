//! Parameter kinds, composable parameter configs, and parameter declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParamValue;

/// Closed set of kinds a command parameter can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// A guild member, resolved by fuzzy name matching.
    User,
    /// A Unicode emoji or a custom emoji reference.
    Emoji,
    /// A literal keyword equal to the parameter name.
    FixedKeyword,
    /// A signed integer.
    Integer,
    /// Any text.
    Text,
}

impl ParamType {
    /// Whether the executor for this kind accepts any token at the format
    /// stage.
    ///
    /// Such kinds can never tell two candidate syntaxes apart by shape alone.
    #[must_use]
    pub const fn always_validates_input_format(self) -> bool {
        match self {
            Self::User | Self::Emoji | Self::Text => true,
            Self::FixedKeyword | Self::Integer => false,
        }
    }

    /// Value kinds the executor for this parameter kind can produce.
    #[must_use]
    pub const fn produced_kinds(self) -> &'static [ValueKind] {
        match self {
            Self::User => &[ValueKind::User],
            Self::Emoji => &[ValueKind::Emoji],
            Self::FixedKeyword => &[ValueKind::Keyword],
            Self::Integer => &[ValueKind::Integer],
            Self::Text => &[ValueKind::Text],
        }
    }
}

/// Kind of a converted parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A resolved chat member.
    User,
    /// An emoji.
    Emoji,
    /// A matched keyword.
    Keyword,
    /// An integer.
    Integer,
    /// Free text.
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::User => "user",
            Self::Emoji => "emoji",
            Self::Keyword => "keyword",
            Self::Integer => "integer",
            Self::Text => "text",
        };
        f.write_str(label)
    }
}

/// When a config runs, and what its failure means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStage {
    /// Failure means the token was not meant for this parameter, letting
    /// matching move on to another candidate syntax.
    InputFormat,
    /// Failure is a business-rule error always reported to the user.
    Value,
}

/// Rule checked by a [`ParamConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ConfigRule {
    /// Inclusive integer bounds.
    IntRange {
        /// Lower bound.
        min: Option<i64>,
        /// Upper bound.
        max: Option<i64>,
    },
    /// Inclusive bounds on the value length in characters.
    Length {
        /// Minimum length.
        min: Option<usize>,
        /// Maximum length.
        max: Option<usize>,
    },
    /// The value must be one of the listed options.
    OneOf {
        /// Allowed values.
        options: Vec<String>,
    },
}

/// A composable validator attached to a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamConfig {
    rule: ConfigRule,
    stage: ValidationStage,
}

impl ParamConfig {
    /// Inclusive integer range, checked as a business rule.
    #[must_use]
    pub const fn int_range(min: i64, max: i64) -> Self {
        Self::value_rule(ConfigRule::IntRange {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Integer lower bound, checked as a business rule.
    #[must_use]
    pub const fn at_least(min: i64) -> Self {
        Self::value_rule(ConfigRule::IntRange {
            min: Some(min),
            max: None,
        })
    }

    /// Integer upper bound, checked as a business rule.
    #[must_use]
    pub const fn at_most(max: i64) -> Self {
        Self::value_rule(ConfigRule::IntRange {
            min: None,
            max: Some(max),
        })
    }

    /// Inclusive length range in characters, checked as a business rule.
    #[must_use]
    pub const fn length(min: Option<usize>, max: Option<usize>) -> Self {
        Self::value_rule(ConfigRule::Length { min, max })
    }

    /// Enumerated allowed values, checked at the input-format stage.
    #[must_use]
    pub fn one_of(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            rule: ConfigRule::OneOf {
                options: options.into_iter().map(Into::into).collect(),
            },
            stage: ValidationStage::InputFormat,
        }
    }

    const fn value_rule(rule: ConfigRule) -> Self {
        Self {
            rule,
            stage: ValidationStage::Value,
        }
    }

    /// Moves the config to another validation stage.
    #[must_use]
    pub const fn at_stage(mut self, stage: ValidationStage) -> Self {
        self.stage = stage;
        self
    }

    /// Returns the checked rule.
    #[must_use]
    pub const fn rule(&self) -> &ConfigRule {
        &self.rule
    }

    /// Returns the validation stage.
    #[must_use]
    pub const fn stage(&self) -> ValidationStage {
        self.stage
    }

    /// Whether a failure means "this token was not meant for me".
    #[must_use]
    pub const fn validates_input_format(&self) -> bool {
        matches!(self.stage, ValidationStage::InputFormat)
    }

    /// Short rule name used in configuration errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.rule {
            ConfigRule::IntRange { .. } => "int_range",
            ConfigRule::Length { .. } => "length",
            ConfigRule::OneOf { .. } => "one_of",
        }
    }

    /// Value kinds this config is able to check.
    #[must_use]
    pub const fn supported_kinds(&self) -> &'static [ValueKind] {
        match self.rule {
            ConfigRule::IntRange { .. } => &[ValueKind::Integer],
            ConfigRule::Length { .. } => &[ValueKind::Text, ValueKind::Keyword, ValueKind::Emoji],
            ConfigRule::OneOf { .. } => &[ValueKind::Text, ValueKind::Keyword, ValueKind::Integer],
        }
    }

    /// Checks that the config is well formed on its own.
    ///
    /// # Errors
    ///
    /// Returns a reason when bounds are missing or inverted, or when an
    /// option list is empty.
    pub fn check_definition(&self) -> Result<(), String> {
        match &self.rule {
            ConfigRule::IntRange { min: None, max: None }
            | ConfigRule::Length { min: None, max: None } => {
                Err("at least one bound must be set".to_owned())
            }
            ConfigRule::IntRange {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(format!("lower bound {min} exceeds upper bound {max}")),
            ConfigRule::Length {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(format!("minimum length {min} exceeds maximum {max}")),
            ConfigRule::OneOf { options } if options.is_empty() => {
                Err("option list must not be empty".to_owned())
            }
            _ => Ok(()),
        }
    }

    /// Human-readable description of the accepted values.
    #[must_use]
    pub fn definition(&self) -> String {
        match &self.rule {
            ConfigRule::IntRange { min, max } => describe_bounds(*min, *max, ""),
            ConfigRule::Length { min, max } => {
                describe_bounds(*min, *max, " characters long")
            }
            ConfigRule::OneOf { options } => format!("one of: {}", options.join(", ")),
        }
    }

    /// Validates an already converted value.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the value breaks the rule or is of
    /// a kind the rule cannot check.
    pub fn validate(&self, value: &ParamValue) -> Result<(), String> {
        let accepted = match (&self.rule, value) {
            (ConfigRule::IntRange { min, max }, ParamValue::Integer(number)) => {
                min.is_none_or(|low| *number >= low) && max.is_none_or(|high| *number <= high)
            }
            (ConfigRule::Length { min, max }, _) => {
                let Some(text) = value.as_text() else {
                    return Err(self.unsupported(value.kind()));
                };
                let length = text.chars().count();
                min.is_none_or(|low| length >= low) && max.is_none_or(|high| length <= high)
            }
            (ConfigRule::OneOf { options }, ParamValue::Integer(number)) => {
                let rendered = number.to_string();
                options.iter().any(|option| *option == rendered)
            }
            (ConfigRule::OneOf { options }, _) => match value.as_text() {
                Some(text) => options.iter().any(|option| option == text),
                None => return Err(self.unsupported(value.kind())),
            },
            (ConfigRule::IntRange { .. }, _) => return Err(self.unsupported(value.kind())),
        };

        if accepted {
            Ok(())
        } else {
            Err(format!("Value must be {}.", self.definition()))
        }
    }

    fn unsupported(&self, kind: ValueKind) -> String {
        format!("Config {} cannot check {kind} values.", self.name())
    }
}

fn describe_bounds<T: fmt::Display>(min: Option<T>, max: Option<T>, unit: &str) -> String {
    match (min, max) {
        (Some(low), Some(high)) => format!("between {low} and {high}{unit} inclusive"),
        (Some(low), None) => format!("at least {low}{unit}"),
        (None, Some(high)) => format!("at most {high}{unit}"),
        (None, None) => format!("anything{unit}"),
    }
}

/// A declared command parameter.
///
/// Parameters are built once at registration time and shared by every
/// syntax that references them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParam {
    name: String,
    description: String,
    param_type: ParamType,
    #[serde(default)]
    configs: Vec<ParamConfig>,
}

impl CommandParam {
    /// Creates a parameter declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type,
            configs: Vec::new(),
        }
    }

    /// Creates a fixed keyword parameter matching its own name.
    #[must_use]
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::new(name, "", ParamType::FixedKeyword)
    }

    /// Attaches a config.
    ///
    /// Input-format configs are kept ahead of value configs so that a
    /// syntax can be rejected before business rules are evaluated.
    #[must_use]
    pub fn with_config(mut self, config: ParamConfig) -> Self {
        if config.validates_input_format() {
            let position = self
                .configs
                .iter()
                .take_while(|existing| existing.validates_input_format())
                .count();
            self.configs.insert(position, config);
        } else {
            self.configs.push(config);
        }
        self
    }

    /// Parameter name; also the literal text of a fixed keyword.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human description shown in help.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parameter kind.
    #[must_use]
    pub const fn param_type(&self) -> ParamType {
        self.param_type
    }

    /// Attached configs, input-format configs first.
    #[must_use]
    pub fn configs(&self) -> &[ParamConfig] {
        &self.configs
    }

    /// Whether help shows this parameter as a placeholder.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        !matches!(self.param_type, ParamType::FixedKeyword)
    }
}
