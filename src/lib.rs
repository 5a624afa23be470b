//! # ia-gateway
//!
//! Remote-domain registry and reconciliation core for an inter-domain
//! tunneling gateway.
//!
//! The crate tracks the set of remote network domains (ISD-AS pairs) a
//! gateway process knows about and converges that set to a desired
//! configuration snapshot. Per-domain runtime state — sessions, tunnel
//! devices, forwarding policy — lives behind the
//! [`domain::DomainEntry`] collaborator seam; this crate is the
//! coordination layer.
//!
//! ## Architecture
//!
//! ```text
//! Config trigger (file change, signal, control plane)
//!     │
//!     ├── Reconciler (service/)
//!     ├── EventBus (domain/)
//!     │
//!     ├── DomainRegistry (domain/)
//!     └── DomainEntry / DomainFactory (collaborator)
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod service;
