//! Help pages and user-facing error text.

use minijinja::{Environment, context};

use super::{CommandDefinition, RichMessage};

const HELP_COLOR: u32 = 0x0015_659e;
const OVERVIEW_COLOR: u32 = 0x0096_7b29;
const BLANK: &str = "\u{200B}";

const USAGE_TEMPLATE: &str = concat!(
    "```ini\n{{ trigger }}{{ name }}{% for shape in shapes %} {{ shape }}{% endfor %}```",
    "{% for line in descriptions %}\n{{ line }}{% endfor %}\n\u{200B}",
);

const OVERVIEW_TEMPLATE: &str = concat!(
    "{{ intro }}```apache",
    "{% for command in commands %}\n{{ trigger }}{{ command.name }}: {{ command.description }}{% endfor %}",
    "```\nType a command to see its help page.",
);

/// Renders the help page generated from a command's syntaxes.
///
/// Fixed keywords are printed literally and every other parameter as
/// `[name]`, followed by one description line per variable parameter.
///
/// # Errors
///
/// Returns the template error if rendering fails.
pub fn render_help(
    definition: &CommandDefinition,
    trigger: char,
) -> Result<RichMessage, minijinja::Error> {
    let environment = Environment::new();
    let mut help = RichMessage::new(
        format!("Command __{}__", definition.name()),
        format!("*{}*\n{BLANK}", definition.description()),
        HELP_COLOR,
    );

    for (position, syntax) in definition.syntaxes().iter().enumerate() {
        let shapes: Vec<String> = syntax
            .params()
            .iter()
            .map(|param| {
                if param.is_variable() {
                    format!("[{}]", param.name())
                } else {
                    param.name().to_owned()
                }
            })
            .collect();
        let descriptions: Vec<String> = syntax
            .params()
            .iter()
            .filter(|param| param.is_variable())
            .map(|param| format!("**[{}]**: {}", param.name(), param.description()))
            .collect();

        let usage = environment.render_str(
            USAGE_TEMPLATE,
            context! {
                trigger => trigger.to_string(),
                name => definition.name(),
                shapes => shapes,
                descriptions => descriptions,
            },
        )?;
        help = help.with_field(syntax.title(), usage, true);

        // Keeps fields in two columns.
        if position.is_multiple_of(2) {
            help = help.with_field(BLANK, BLANK, true);
        }
    }

    if let Some(details) = definition.details() {
        help = help.with_footer(details);
    }

    Ok(help)
}

/// Renders the listing of every registered command.
///
/// # Errors
///
/// Returns the template error if rendering fails.
pub fn render_overview<'a>(
    title: &str,
    intro: &str,
    commands: impl IntoIterator<Item = &'a CommandDefinition>,
    trigger: char,
) -> Result<RichMessage, minijinja::Error> {
    let listing: Vec<_> = commands
        .into_iter()
        .map(|command| {
            context! {
                name => command.name(),
                description => command.description(),
            }
        })
        .collect();

    let description = Environment::new().render_str(
        OVERVIEW_TEMPLATE,
        context! {
            intro => intro,
            trigger => trigger.to_string(),
            commands => listing,
        },
    )?;

    Ok(RichMessage::new(title, description, OVERVIEW_COLOR))
}

/// Formats a user-facing error with a pointer to the command help.
#[must_use]
pub fn error_reply_text(error: &str, trigger: char, command: &str) -> String {
    format!("{error} Type **{trigger}{command}** for help.")
}
