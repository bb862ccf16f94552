//! Protocol registry mapping protocol names to client factories.
//!
//! Transports register during start-up through a
//! [`ProtocolRegistryBuilder`]. [`ProtocolRegistryBuilder::build`] freezes
//! the entries into a [`ProtocolRegistry`], which exposes lookups only and can
//! be shared across tasks without locking.

use crate::mysqlctl::{domain::ProtocolName, ports::ClientFactory};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned while populating a protocol registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A factory is already registered under this protocol name.
    #[error("mysqlctl client protocol '{0}' is already registered")]
    DuplicateProtocol(ProtocolName),
}

/// Start-up phase registry accepting one factory per protocol name.
#[derive(Default)]
pub struct ProtocolRegistryBuilder {
    factories: BTreeMap<ProtocolName, Arc<dyn ClientFactory>>,
}

impl ProtocolRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`.
    ///
    /// The existing entry is left untouched when the name is taken.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateProtocol`] when `name` is already
    /// registered.
    pub fn register(
        &mut self,
        name: ProtocolName,
        factory: impl ClientFactory + 'static,
    ) -> Result<(), RegistryError> {
        if self.factories.contains_key(&name) {
            warn!(protocol = %name, "rejected duplicate mysqlctl client protocol");
            return Err(RegistryError::DuplicateProtocol(name));
        }

        debug!(protocol = %name, "registered mysqlctl client protocol");
        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Registers `factory` under `name`, treating a duplicate as a build
    /// defect.
    ///
    /// Intended for start-up wiring where two transports compiled in under
    /// the same name must stop the process.
    ///
    /// # Panics
    ///
    /// Panics when `name` is already registered.
    #[must_use]
    pub fn with_factory(mut self, name: ProtocolName, factory: impl ClientFactory + 'static) -> Self {
        if let Err(err) = self.register(name, factory) {
            panic!("{err}");
        }
        self
    }

    /// Returns whether `name` has been registered so far.
    #[must_use]
    pub fn contains(&self, name: &ProtocolName) -> bool {
        self.factories.contains_key(name)
    }

    /// Freezes the registered entries.
    #[must_use]
    pub fn build(self) -> ProtocolRegistry {
        ProtocolRegistry {
            factories: self.factories,
        }
    }
}

impl fmt::Debug for ProtocolRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolRegistryBuilder")
            .field("protocols", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Read-only mapping from protocol name to client factory.
#[derive(Clone, Default)]
pub struct ProtocolRegistry {
    factories: BTreeMap<ProtocolName, Arc<dyn ClientFactory>>,
}

impl ProtocolRegistry {
    /// Starts a new registry.
    #[must_use]
    pub fn builder() -> ProtocolRegistryBuilder {
        ProtocolRegistryBuilder::new()
    }

    /// Returns the factory registered under `name`.
    #[must_use]
    pub fn get(&self, name: &ProtocolName) -> Option<&dyn ClientFactory> {
        self.factories.get(name).map(Arc::as_ref)
    }

    /// Returns whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &ProtocolName) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns registered protocol names in sorted order.
    pub fn protocols(&self) -> impl Iterator<Item = &ProtocolName> {
        self.factories.keys()
    }

    /// Returns the number of registered protocols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns whether no protocol is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for ProtocolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolRegistry")
            .field("protocols", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
