//! Then steps for protocol selection BDD scenarios.

use super::world::ProtocolWorld;
use mysqlctl_client::mysqlctl::services::{RegistryError, SelectorError};
use rstest_bdd_macros::then;

#[then("a client is returned")]
fn a_client_is_returned(world: &ProtocolWorld) -> Result<(), eyre::Report> {
    if !world.client_returned {
        return Err(eyre::eyre!(
            "expected a client, got {:?}",
            world.selection_error
        ));
    }
    Ok(())
}

#[then(r#"the "{name}" factory was invoked {count:usize} times"#)]
fn factory_was_invoked(
    world: &ProtocolWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let factory = world
        .factories
        .get(&name)
        .ok_or_else(|| eyre::eyre!("no factory registered as '{name}'"))?;
    let calls = factory.calls().len();
    if calls != count {
        return Err(eyre::eyre!(
            "expected '{name}' to be invoked {count} times, found {calls}"
        ));
    }
    Ok(())
}

#[then(r#"the "{name}" factory received "{network}" and "{address}""#)]
fn factory_received(
    world: &ProtocolWorld,
    name: String,
    network: String,
    address: String,
) -> Result<(), eyre::Report> {
    let factory = world
        .factories
        .get(&name)
        .ok_or_else(|| eyre::eyre!("no factory registered as '{name}'"))?;
    let calls = factory.calls();
    if calls != vec![(network.clone(), address.clone())] {
        return Err(eyre::eyre!(
            "expected a single call with ({network}, {address}), found {calls:?}"
        ));
    }
    Ok(())
}

#[then(r#"selection fails naming "{name}""#)]
fn selection_fails_naming(world: &ProtocolWorld, name: String) -> Result<(), eyre::Report> {
    let err = world
        .selection_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected selection to fail"))?;
    if !matches!(err, SelectorError::UnknownProtocol(_)) || !err.to_string().contains(&name) {
        return Err(eyre::eyre!("expected unknown protocol '{name}', got {err}"));
    }
    if world.client_returned {
        return Err(eyre::eyre!("no client should be returned"));
    }
    Ok(())
}

#[then("registration fails with a duplicate protocol error")]
fn registration_fails_with_duplicate(world: &ProtocolWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(RegistryError::DuplicateProtocol(_))) {
        return Err(eyre::eyre!(
            "expected duplicate protocol error, got {result:?}"
        ));
    }
    Ok(())
}
