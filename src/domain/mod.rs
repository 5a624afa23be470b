//! Domain layer: identifiers, the domain registry, and the event system.
//!
//! This module contains the gateway-side domain model including the
//! ISD-AS identifier, the collaborator seam for per-domain runtime
//! state, the event bus for broadcasting reconciliation outcomes, and
//! the registry for concurrent domain storage.

pub mod domain_entry;
pub mod domain_event;
pub mod domain_registry;
pub mod event_bus;
pub mod isd_as;

#[cfg(test)]
pub(crate) mod test_util;

pub use domain_entry::{DomainEntry, DomainFactory};
pub use domain_event::DomainEvent;
pub use domain_registry::DomainRegistry;
pub use event_bus::EventBus;
pub use isd_as::{IsdAs, ParseIsdAsError};
