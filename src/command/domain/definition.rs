//! Command definitions as registered at startup.

use std::fmt;
use std::sync::Arc;

use super::{CommandSyntax, MessageHook, TypingHook};

/// How a command renders its help page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpKind {
    /// Help generated from the declared syntaxes.
    Generated,
    /// A listing of every registered command, introduced by `intro`.
    Overview {
        /// Text shown above the listing.
        intro: String,
    },
}

/// A command: a name, its syntaxes, and optional hooks.
#[derive(Clone)]
pub struct CommandDefinition {
    name: String,
    description: String,
    details: Option<String>,
    help: HelpKind,
    syntaxes: Vec<CommandSyntax>,
    message_hook: Option<Arc<dyn MessageHook>>,
    typing_hook: Option<Arc<dyn TypingHook>>,
}

impl CommandDefinition {
    /// Creates a command with generated help and no syntaxes yet.
    ///
    /// The name is lowercased; lookups are case-insensitive.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: description.into(),
            details: None,
            help: HelpKind::Generated,
            syntaxes: Vec::new(),
            message_hook: None,
            typing_hook: None,
        }
    }

    /// Creates a syntax-less command whose help lists every command.
    #[must_use]
    pub fn overview(
        name: impl Into<String>,
        description: impl Into<String>,
        intro: impl Into<String>,
    ) -> Self {
        let mut definition = Self::new(name, description);
        definition.help = HelpKind::Overview {
            intro: intro.into(),
        };
        definition
    }

    /// Sets the detail text shown in the help footer.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Appends a syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: CommandSyntax) -> Self {
        self.syntaxes.push(syntax);
        self
    }

    /// Attaches a message hook.
    #[must_use]
    pub fn with_message_hook(mut self, hook: Arc<dyn MessageHook>) -> Self {
        self.message_hook = Some(hook);
        self
    }

    /// Attaches a typing hook.
    #[must_use]
    pub fn with_typing_hook(mut self, hook: Arc<dyn TypingHook>) -> Self {
        self.typing_hook = Some(hook);
        self
    }

    /// Command name, without trigger character.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Optional help footer.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Help rendering mode.
    #[must_use]
    pub const fn help(&self) -> &HelpKind {
        &self.help
    }

    /// Declared syntaxes in declaration order.
    #[must_use]
    pub fn syntaxes(&self) -> &[CommandSyntax] {
        &self.syntaxes
    }

    /// Attached message hook.
    #[must_use]
    pub const fn message_hook(&self) -> Option<&Arc<dyn MessageHook>> {
        self.message_hook.as_ref()
    }

    /// Attached typing hook.
    #[must_use]
    pub const fn typing_hook(&self) -> Option<&Arc<dyn TypingHook>> {
        self.typing_hook.as_ref()
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("help", &self.help)
            .field("syntaxes", &self.syntaxes)
            .field("message_hook", &self.message_hook.is_some())
            .field("typing_hook", &self.typing_hook.is_some())
            .finish_non_exhaustive()
    }
}
