//! Given steps for protocol selection BDD scenarios.

use super::world::{ProtocolWorld, RecordingFactory, parse_protocol};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a registered protocol "{name}""#)]
fn a_registered_protocol(world: &mut ProtocolWorld, name: String) -> Result<(), eyre::Report> {
    let protocol = parse_protocol(&name)?;
    let factory = RecordingFactory::default();
    world
        .builder
        .register(protocol, factory.clone())
        .wrap_err("register protocol for scenario")?;
    world.factories.insert(name, factory);
    Ok(())
}

#[given(r#"the active protocol is "{name}""#)]
fn the_active_protocol_is(world: &mut ProtocolWorld, name: String) -> Result<(), eyre::Report> {
    world.active_protocol = Some(parse_protocol(&name)?);
    Ok(())
}
