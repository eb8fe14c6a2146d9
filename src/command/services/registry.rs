//! Write-once command registry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::validator::validate_syntaxes;
use crate::command::domain::{CommandDefinition, ConfigurationError, MessageHook, TypingHook};

/// A validated command with its matching metadata computed up front.
#[derive(Debug, Clone)]
pub struct RegisteredCommand {
    definition: CommandDefinition,
    candidate_order: Vec<usize>,
    min_params: usize,
    max_params: usize,
}

impl RegisteredCommand {
    /// Validates `definition` and precomputes its candidate order and bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the name or the syntaxes are
    /// invalid.
    pub fn new(definition: CommandDefinition) -> Result<Self, ConfigurationError> {
        let name = definition.name();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::InvalidCommandName(name.to_owned()));
        }
        validate_syntaxes(name, definition.syntaxes())?;

        let syntaxes = definition.syntaxes();
        let mut candidate_order: Vec<usize> = (0..syntaxes.len()).collect();
        candidate_order.sort_by_key(|&index| {
            syntaxes
                .get(index)
                .map(|syntax| (syntax.always_authoritative(), syntax.param_count()))
        });

        let counts = syntaxes.iter().map(|syntax| syntax.param_count());
        let min_params = counts.clone().min().unwrap_or(0);
        let max_params = counts.max().unwrap_or(0);

        Ok(Self {
            definition,
            candidate_order,
            min_params,
            max_params,
        })
    }

    /// The registered definition.
    #[must_use]
    pub const fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// Syntax indices in the order the dispatcher tries them: syntaxes that
    /// can be ruled out by shape first, then shorter before longer.
    #[must_use]
    pub fn candidate_order(&self) -> &[usize] {
        &self.candidate_order
    }

    /// Smallest declared parameter count.
    #[must_use]
    pub const fn min_params(&self) -> usize {
        self.min_params
    }

    /// Largest declared parameter count.
    #[must_use]
    pub const fn max_params(&self) -> usize {
        self.max_params
    }
}

/// Process-wide command registry, built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Validates and registers every definition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for the first invalid or duplicate
    /// definition; no partial registry is produced.
    pub fn with_commands(
        definitions: impl IntoIterator<Item = CommandDefinition>,
    ) -> Result<Self, ConfigurationError> {
        let mut registry = Self::default();
        for definition in definitions {
            let command = RegisteredCommand::new(definition)?;
            let name = command.definition().name().to_owned();
            if registry.index.contains_key(&name) {
                return Err(ConfigurationError::DuplicateCommand(name));
            }

            info!(
                command = %name,
                syntaxes = command.definition().syntaxes().len(),
                min_params = command.min_params(),
                max_params = command.max_params(),
                "registered command"
            );
            registry.index.insert(name, registry.commands.len());
            registry.commands.push(command);
        }
        Ok(registry)
    }

    /// Looks a command up by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RegisteredCommand> {
        self.index
            .get(&name.to_lowercase())
            .and_then(|&position| self.commands.get(position))
    }

    /// Registered definitions in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.commands.iter().map(RegisteredCommand::definition)
    }

    /// Message hooks in registration order.
    pub fn message_hooks(&self) -> impl Iterator<Item = &Arc<dyn MessageHook>> {
        self.commands()
            .filter_map(CommandDefinition::message_hook)
    }

    /// Typing hooks in registration order.
    pub fn typing_hooks(&self) -> impl Iterator<Item = &Arc<dyn TypingHook>> {
        self.commands().filter_map(CommandDefinition::typing_hook)
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
