//! Startup-time consistency checks for a command's syntax list.

use std::collections::{HashMap, HashSet};

use crate::command::domain::{CommandParam, CommandSyntax, ConfigurationError};

/// Validates the syntaxes of `command` before it is registered.
///
/// Rejects syntaxes that can never be reached, parameters with empty or
/// conflicting names, malformed configs, and configs that cannot check the
/// values their parameter produces.
///
/// # Errors
///
/// Returns the first [`ConfigurationError`] found, in declaration order.
pub fn validate_syntaxes(
    command: &str,
    syntaxes: &[CommandSyntax],
) -> Result<(), ConfigurationError> {
    let mut claimed_counts = HashSet::new();
    let mut declarations: HashMap<&str, &CommandParam> = HashMap::new();

    for syntax in syntaxes {
        if syntax.param_count() == 0 {
            return Err(ConfigurationError::EmptySyntax {
                command: command.to_owned(),
                syntax: syntax.title().to_owned(),
            });
        }

        if syntax.always_authoritative() && !claimed_counts.insert(syntax.param_count()) {
            return Err(ConfigurationError::UnreachableSyntax {
                command: command.to_owned(),
                syntax: syntax.title().to_owned(),
                param_count: syntax.param_count(),
            });
        }

        for param in syntax.params() {
            if param.name().is_empty() {
                return Err(ConfigurationError::EmptyParamName {
                    command: command.to_owned(),
                    syntax: syntax.title().to_owned(),
                });
            }

            let declared = declarations.entry(param.name()).or_insert(param.as_ref());
            if *declared != param.as_ref() {
                return Err(ConfigurationError::ConflictingParam {
                    command: command.to_owned(),
                    parameter: param.name().to_owned(),
                });
            }

            check_configs(command, syntax, param)?;
        }
    }

    Ok(())
}

fn check_configs(
    command: &str,
    syntax: &CommandSyntax,
    param: &CommandParam,
) -> Result<(), ConfigurationError> {
    for config in param.configs() {
        config
            .check_definition()
            .map_err(|reason| ConfigurationError::InvalidConfig {
                command: command.to_owned(),
                parameter: param.name().to_owned(),
                reason,
            })?;

        let unsupported = param
            .param_type()
            .produced_kinds()
            .iter()
            .find(|kind| !config.supported_kinds().contains(kind));
        if let Some(&kind) = unsupported {
            return Err(ConfigurationError::IncompatibleConfig {
                command: command.to_owned(),
                syntax: syntax.title().to_owned(),
                parameter: param.name().to_owned(),
                config: config.name(),
                kind,
            });
        }
    }
    Ok(())
}
