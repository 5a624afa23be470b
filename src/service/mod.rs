//! Service layer: reconciliation orchestration.
//!
//! [`Reconciler`] diffs configuration snapshots against the
//! [`super::domain::DomainRegistry`] and emits events through the
//! [`super::domain::EventBus`].

pub mod reconciler;

pub use reconciler::Reconciler;
