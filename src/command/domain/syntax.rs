//! Syntax declarations: one accepted shape of a command.

use std::fmt;
use std::sync::Arc;

use super::{CommandHandlerError, CommandParam, Invocation, Reply};

/// Callback invoked once a syntax fully matched.
///
/// The callback returns the single reply sent for the message.
pub type SyntaxCallback =
    Arc<dyn Fn(&Invocation<'_>) -> Result<Reply, CommandHandlerError> + Send + Sync>;

/// An ordered parameter list with a title and a callback.
#[derive(Clone)]
pub struct CommandSyntax {
    title: String,
    callback: SyntaxCallback,
    params: Vec<Arc<CommandParam>>,
    always_authoritative: bool,
}

impl CommandSyntax {
    /// Creates a syntax with no parameters yet.
    #[must_use]
    pub fn new<F>(title: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> Result<Reply, CommandHandlerError> + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            callback: Arc::new(callback),
            params: Vec::new(),
            always_authoritative: true,
        }
    }

    /// Appends a parameter; pass an `Arc` to share one declaration across
    /// several syntaxes.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<Arc<CommandParam>>) -> Self {
        let shared = param.into();
        self.always_authoritative &= shared.param_type().always_validates_input_format();
        self.params.push(shared);
        self
    }

    /// Human title shown in help.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Callback run on a full match.
    #[must_use]
    pub const fn callback(&self) -> &SyntaxCallback {
        &self.callback
    }

    /// Ordered parameters.
    #[must_use]
    pub fn params(&self) -> &[Arc<CommandParam>] {
        &self.params
    }

    /// Number of parameters.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// True when every parameter accepts any token at the format stage, so
    /// this syntax can never be ruled out by shape alone.
    #[must_use]
    pub const fn always_authoritative(&self) -> bool {
        self.always_authoritative
    }
}

impl fmt::Debug for CommandSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSyntax")
            .field("title", &self.title)
            .field("params", &self.params)
            .field("always_authoritative", &self.always_authoritative)
            .finish_non_exhaustive()
    }
}
