//! Given steps for command dispatch BDD scenarios.

use std::sync::Arc;

use super::world::{DispatchWorld, build_manager};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tuinbot::command::domain::{ChatUser, UserId};

#[given("a bot with the volume and reaction commands")]
fn bot_with_commands(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    let manager =
        build_manager(Arc::clone(&world.scheduler)).wrap_err("register commands")?;
    world.manager = Some(manager);
    world.scheduler.clear();
    world.last_outcome = None;
    Ok(())
}

#[given(r#"a member named "{name}""#)]
fn member_named(world: &mut DispatchWorld, name: String) {
    let id = 100 + u64::try_from(world.members.len()).unwrap_or_default();
    let account = name.to_lowercase();
    world
        .members
        .push(ChatUser::new(UserId::new(id), name, account));
}
