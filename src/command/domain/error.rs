//! Error types for command registration, tokenization, and dispatch.

use thiserror::Error;

use super::ValueKind;

/// Startup-time errors raised while registering command definitions.
///
/// Any of these aborts process startup: a command that fails validation is
/// never reachable by users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Two always-authoritative syntaxes share a parameter count, so the
    /// later one can never be selected.
    #[error(
        "syntax '{syntax}' of command '{command}' is unreachable: another always-authoritative \
         syntax already takes {param_count} parameter(s)"
    )]
    UnreachableSyntax {
        /// Command name.
        command: String,
        /// Title of the unreachable syntax.
        syntax: String,
        /// Parameter count shared by both syntaxes.
        param_count: usize,
    },

    /// A parameter config cannot check the values its parameter produces.
    #[error(
        "config '{config}' on parameter '{parameter}' in syntax '{syntax}' of command \
         '{command}' does not support {kind} values"
    )]
    IncompatibleConfig {
        /// Command name.
        command: String,
        /// Syntax title.
        syntax: String,
        /// Parameter name.
        parameter: String,
        /// Config rule name.
        config: &'static str,
        /// Value kind produced by the parameter that the config rejects.
        kind: ValueKind,
    },

    /// A parameter config is malformed on its own.
    #[error("invalid config on parameter '{parameter}' of command '{command}': {reason}")]
    InvalidConfig {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
        /// Why the config is invalid.
        reason: String,
    },

    /// A syntax without parameters can never be selected: an empty argument
    /// list always shows the help page.
    #[error("syntax '{syntax}' of command '{command}' declares no parameters")]
    EmptySyntax {
        /// Command name.
        command: String,
        /// Syntax title.
        syntax: String,
    },

    /// Two different parameter declarations share a name within a command.
    #[error("command '{command}' declares parameter '{parameter}' more than once with different shapes")]
    ConflictingParam {
        /// Command name.
        command: String,
        /// Parameter name.
        parameter: String,
    },

    /// A parameter declaration has an empty name.
    #[error("parameter in syntax '{syntax}' of command '{command}' has an empty name")]
    EmptyParamName {
        /// Command name.
        command: String,
        /// Syntax title.
        syntax: String,
    },

    /// Command names must be non-empty and free of whitespace.
    #[error("invalid command name '{0}'")]
    InvalidCommandName(String),

    /// A command name was registered twice.
    #[error("command '{0}' is registered more than once")]
    DuplicateCommand(String),
}

/// User-visible dispatch failures; each one produces exactly one reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Token count lies outside the command's declared parameter counts.
    #[error("Unexpected number of parameters.")]
    WrongArgumentCount {
        /// Tokens supplied.
        provided: usize,
        /// Smallest declared parameter count.
        min: usize,
        /// Largest declared parameter count.
        max: usize,
    },

    /// A parameter was meant for a syntax but failed a business rule.
    #[error("{message}")]
    InvalidParameter {
        /// Parameter name.
        parameter: String,
        /// User-facing explanation.
        message: String,
    },

    /// The command line could not be tokenized.
    #[error("Your command could not be read: {0}.")]
    Malformed(TokenizeError),

    /// No declared syntax accepted the input at all.
    #[error("You must have made a small mistake somewhere.")]
    NoMatchingSyntax,
}

/// Errors raised by the quote-aware tokenizer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quoted run was opened but never closed.
    #[error("unterminated quoted value")]
    UnterminatedQuote,
}

/// Failures raised by syntax callbacks after a syntax fully matched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandHandlerError {
    /// The callback asked for a resolved value the syntax does not provide.
    #[error("no {expected} value at parameter position {index}")]
    MissingValue {
        /// Parameter position.
        index: usize,
        /// Value kind the callback expected.
        expected: ValueKind,
    },

    /// The invoking message has no guild although the command needs one.
    #[error("command requires a guild context")]
    MissingGuild,

    /// A persistence collaborator failed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}
