//! When steps for protocol selection BDD scenarios.

use std::sync::Arc;

use super::world::{ProtocolWorld, RecordingFactory, parse_protocol, run_async};
use mysqlctl_client::mysqlctl::services::{ClientConfig, ClientSelector};
use rstest_bdd_macros::when;

#[when(r#"a client is requested over "{network}" at "{address}""#)]
fn a_client_is_requested(world: &mut ProtocolWorld, network: String, address: String) {
    let registry = std::mem::take(&mut world.builder).build();
    let config = world
        .active_protocol
        .clone()
        .map(ClientConfig::new)
        .unwrap_or_default();
    let selector = ClientSelector::new(Arc::new(registry), config);

    match run_async(selector.new_client(&network, &address)) {
        Ok(client) => {
            world.client_returned = true;
            client.close();
        }
        Err(err) => world.selection_error = Some(err),
    }
}

#[when(r#"protocol "{name}" is registered again"#)]
fn protocol_is_registered_again(
    world: &mut ProtocolWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let protocol = parse_protocol(&name)?;
    world.last_register_result = Some(
        world
            .builder
            .register(protocol, RecordingFactory::default()),
    );
    Ok(())
}
