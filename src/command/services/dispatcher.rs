//! Multi-syntax command dispatcher.
//!
//! Given the argument tokens of one command message, the dispatcher picks
//! the syntax those tokens satisfy and runs its callback, or produces the
//! single user-facing reply explaining why none did.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use super::registry::{CommandRegistry, RegisteredCommand};
use crate::command::domain::{
    CommandDefinition, CommandParamExecutor, CommandSyntax, DispatchError, HelpKind,
    IncomingMessage, Invocation, Reply, ResolutionContext, ResultState, error_reply_text,
    render_help, render_overview,
};
use crate::command::ports::SideEffectScheduler;

const HANDLER_FAILURE_REPLY: &str = "Something went wrong while running this command.";

/// Dispatcher settings taken from the bot configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    /// Character prefixing every command.
    pub trigger: char,
    /// Auto-deletion delay for help pages.
    pub help_ttl: Duration,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            trigger: '!',
            help_ttl: Duration::from_secs(40),
        }
    }
}

/// What a dispatch did with one command message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No command with this name is registered; nothing was sent.
    UnknownCommand,
    /// The command's help page was shown.
    HelpShown,
    /// A syntax matched and its callback produced the reply.
    Invoked {
        /// Title of the matched syntax.
        syntax: String,
    },
    /// A syntax matched but its callback failed; a generic reply was sent.
    HandlerFailed {
        /// Title of the matched syntax.
        syntax: String,
        /// Handler failure, as logged.
        error: String,
    },
    /// The input was rejected with a user-facing error reply.
    Rejected(DispatchError),
}

enum Candidate {
    Matched,
    Skipped { parameter: String },
    Aborted(DispatchError),
}

type ExecutorCache<'c> = HashMap<(usize, &'c str), CommandParamExecutor>;

/// Selects and invokes command syntaxes.
pub struct CommandDispatcher<S> {
    registry: Arc<CommandRegistry>,
    scheduler: Arc<S>,
    settings: DispatchSettings,
}

impl<S> CommandDispatcher<S>
where
    S: SideEffectScheduler,
{
    /// Creates a dispatcher over a built registry.
    #[must_use]
    pub const fn new(
        registry: Arc<CommandRegistry>,
        scheduler: Arc<S>,
        settings: DispatchSettings,
    ) -> Self {
        Self {
            registry,
            scheduler,
            settings,
        }
    }

    /// The registry commands are looked up in.
    #[must_use]
    pub const fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// The scheduler replies are handed to.
    #[must_use]
    pub const fn scheduler(&self) -> &Arc<S> {
        &self.scheduler
    }

    /// Dispatcher settings.
    #[must_use]
    pub const fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Dispatches the argument tokens of a `name` command.
    ///
    /// Every outcome except [`DispatchOutcome::UnknownCommand`] schedules
    /// exactly one reply.
    #[must_use]
    pub fn dispatch(
        &self,
        name: &str,
        tokens: &[String],
        message: &IncomingMessage,
        resolution: &ResolutionContext<'_>,
    ) -> DispatchOutcome {
        let Some(command) = self.registry.find(name) else {
            return DispatchOutcome::UnknownCommand;
        };
        let definition = command.definition();

        if tokens.is_empty() || definition.syntaxes().is_empty() {
            self.show_help(definition, message);
            return DispatchOutcome::HelpShown;
        }

        let provided = tokens.len();
        if provided < command.min_params() || provided > command.max_params() {
            return self.report(
                definition.name(),
                message,
                DispatchError::WrongArgumentCount {
                    provided,
                    min: command.min_params(),
                    max: command.max_params(),
                },
            );
        }

        self.select_and_invoke(command, tokens, message, resolution)
    }

    /// Sends the reply for a dispatch error and returns the matching outcome.
    #[must_use]
    pub fn report(
        &self,
        command: &str,
        message: &IncomingMessage,
        error: DispatchError,
    ) -> DispatchOutcome {
        let text = error_reply_text(&error.to_string(), self.settings.trigger, command);
        self.scheduler.reply(message.reference(), Reply::text(text));
        DispatchOutcome::Rejected(error)
    }

    fn select_and_invoke(
        &self,
        command: &RegisteredCommand,
        tokens: &[String],
        message: &IncomingMessage,
        resolution: &ResolutionContext<'_>,
    ) -> DispatchOutcome {
        let definition = command.definition();
        let mut cache = ExecutorCache::new();

        for &index in command.candidate_order() {
            let Some(syntax) = definition.syntaxes().get(index) else {
                continue;
            };
            if syntax.param_count() != tokens.len() {
                continue;
            }

            match evaluate_candidate(syntax, tokens, &mut cache, resolution) {
                Candidate::Matched => return self.invoke(definition, syntax, &cache, message),
                Candidate::Skipped { parameter } => {
                    debug!(
                        command = definition.name(),
                        syntax = syntax.title(),
                        parameter = %parameter,
                        "syntax skipped on input format"
                    );
                }
                Candidate::Aborted(error) => return self.report(definition.name(), message, error),
            }
        }

        warn!(
            command = definition.name(),
            tokens = tokens.len(),
            "no syntax accepted the input"
        );
        self.report(definition.name(), message, DispatchError::NoMatchingSyntax)
    }

    fn invoke(
        &self,
        definition: &CommandDefinition,
        syntax: &CommandSyntax,
        cache: &ExecutorCache<'_>,
        message: &IncomingMessage,
    ) -> DispatchOutcome {
        let executors: Vec<&CommandParamExecutor> = syntax
            .params()
            .iter()
            .enumerate()
            .filter_map(|(position, param)| cache.get(&(position, param.name())))
            .collect();
        let invocation = Invocation::new(definition.name(), message, &executors);

        match (syntax.callback())(&invocation) {
            Ok(reply) => {
                debug!(
                    command = definition.name(),
                    syntax = syntax.title(),
                    "syntax invoked"
                );
                self.scheduler.reply(message.reference(), reply);
                DispatchOutcome::Invoked {
                    syntax: syntax.title().to_owned(),
                }
            }
            Err(failure) => {
                error!(
                    command = definition.name(),
                    syntax = syntax.title(),
                    error = %failure,
                    "command handler failed"
                );
                self.scheduler
                    .reply(message.reference(), Reply::text(HANDLER_FAILURE_REPLY));
                DispatchOutcome::HandlerFailed {
                    syntax: syntax.title().to_owned(),
                    error: failure.to_string(),
                }
            }
        }
    }

    fn show_help(&self, definition: &CommandDefinition, message: &IncomingMessage) {
        let trigger = self.settings.trigger;
        let rendered = match definition.help() {
            HelpKind::Generated => render_help(definition, trigger),
            HelpKind::Overview { intro } => render_overview(
                definition.description(),
                intro,
                self.registry.commands(),
                trigger,
            ),
        };

        let reply = match rendered {
            Ok(help) => Reply::rich(help),
            Err(failure) => {
                warn!(command = definition.name(), error = %failure, "help rendering failed");
                Reply::text(format!(
                    "{trigger}{}: {}",
                    definition.name(),
                    definition.description()
                ))
            }
        };
        self.scheduler
            .reply(message.reference(), reply.with_ttl(self.settings.help_ttl));
    }
}

/// Evaluates one candidate syntax left to right, creating each executor at
/// most once per (position, parameter name) within the dispatch.
fn evaluate_candidate<'c>(
    syntax: &'c CommandSyntax,
    tokens: &[String],
    cache: &mut ExecutorCache<'c>,
    resolution: &ResolutionContext<'_>,
) -> Candidate {
    for (position, (param, token)) in syntax.params().iter().zip(tokens).enumerate() {
        let executor = cache.entry((position, param.name())).or_insert_with(|| {
            let mut executor = CommandParamExecutor::new(Arc::clone(param));
            executor.set_value(token, resolution);
            executor
        });

        if executor.result_state() == ResultState::Valid {
            continue;
        }
        if !executor.always_validates_input_format() && !executor.is_input_format_valid() {
            return Candidate::Skipped {
                parameter: param.name().to_owned(),
            };
        }
        return Candidate::Aborted(DispatchError::InvalidParameter {
            parameter: param.name().to_owned(),
            message: executor.error().unwrap_or_default().to_owned(),
        });
    }
    Candidate::Matched
}
