//! When steps for command dispatch BDD scenarios.

use super::world::DispatchWorld;
use rstest_bdd_macros::when;

#[when(r#"the member types "{line}""#)]
fn member_types(world: &mut DispatchWorld, line: String) -> Result<(), eyre::Report> {
    let outcome = world.type_message(&line)?;
    world.last_outcome = Some(outcome);
    Ok(())
}
