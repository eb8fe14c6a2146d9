//! Unit tests for help rendering.

use rstest::rstest;

use crate::command::domain::{
    CommandDefinition, CommandParam, CommandSyntax, ParamType, Reply, error_reply_text,
    render_help, render_overview,
};

fn reaction_like() -> CommandDefinition {
    CommandDefinition::new("reac", "Adds an automatic reaction.")
        .with_details("Only in this channel.")
        .with_syntax(
            CommandSyntax::new("Add", |_| Ok(Reply::text("ok")))
                .with_param(CommandParam::new("user", "A member", ParamType::User))
                .with_param(CommandParam::new("emoji", "An emoji", ParamType::Emoji)),
        )
        .with_syntax(
            CommandSyntax::new("Remove", |_| Ok(Reply::text("ok")))
                .with_param(CommandParam::new("user", "A member", ParamType::User))
                .with_param(CommandParam::keyword("stop")),
        )
}

#[rstest]
fn help_shows_one_usage_block_per_syntax() {
    let help = render_help(&reaction_like(), '!').expect("help renders");

    assert_eq!(help.title, "Command __reac__");
    assert!(help.description.contains("*Adds an automatic reaction.*"));
    assert_eq!(help.footer.as_deref(), Some("Only in this channel."));

    let usages: Vec<_> = help
        .fields
        .iter()
        .filter(|field| field.name == "Add" || field.name == "Remove")
        .map(|field| field.value.as_str())
        .collect();
    assert_eq!(usages.len(), 2);
    let add = usages.first().expect("add usage");
    assert!(add.contains("!reac [user] [emoji]"));
    assert!(add.contains("**[emoji]**: An emoji"));
    let remove = usages.get(1).expect("remove usage");
    assert!(remove.contains("!reac [user] stop"));
    assert!(!remove.contains("**[stop]**"));
}

#[rstest]
fn help_pads_fields_into_two_columns() {
    let help = render_help(&reaction_like(), '!').expect("help renders");

    let names: Vec<_> = help.fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["Add", "\u{200B}", "Remove"]);
}

#[rstest]
fn overview_lists_commands_with_the_trigger() {
    let commands = [reaction_like(), CommandDefinition::new("ping", "Pings.")];

    let overview =
        render_overview("Commands", "Pick one:", &commands, '?').expect("overview renders");

    assert_eq!(overview.title, "Commands");
    assert!(overview.description.starts_with("Pick one:"));
    assert!(overview.description.contains("?reac: Adds an automatic reaction."));
    assert!(overview.description.contains("?ping: Pings."));
}

#[rstest]
fn error_replies_point_at_the_help_page() {
    assert_eq!(
        error_reply_text("User not found.", '!', "reac"),
        "User not found. Type **!reac** for help."
    );
}
