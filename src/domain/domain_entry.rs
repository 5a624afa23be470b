//! Collaborator seam for per-domain runtime state.
//!
//! The registry tracks *which* remote domains exist; everything a domain
//! owns at runtime (sessions, tunnel devices, forwarding policy) lives
//! behind [`DomainEntry`]. Entries are constructed through a
//! [`DomainFactory`], reconfigured via [`DomainEntry::apply_config`], and
//! torn down exactly once via [`DomainEntry::cleanup`].

use async_trait::async_trait;

use super::IsdAs;
use crate::config::DomainConfig;
use crate::error::GatewayError;

/// Runtime state owned by the registry for one remote domain.
///
/// Implementations may block internally (session negotiation, device
/// teardown); both lifecycle methods are async for that reason. The core
/// never retries a failed call — failures are surfaced to the
/// reconciliation caller in aggregate.
#[async_trait]
pub trait DomainEntry: Send + Sync + std::fmt::Debug + 'static {
    /// Returns the identifier this entry was created for.
    fn ia(&self) -> IsdAs;

    /// Applies a new desired configuration to this entry.
    ///
    /// A failure leaves the entry alive with its previous configuration;
    /// the next reconciliation pass will try again.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EntryConfigFailed`] (or a
    /// collaborator-specific kind) when the configuration cannot be
    /// applied.
    async fn apply_config(&self, cfg: &DomainConfig) -> Result<(), GatewayError>;

    /// Releases every resource this entry owns.
    ///
    /// Invoked exactly once, by [`super::DomainRegistry::del_ia`], after
    /// the entry has already been unlinked from the registry. A failure
    /// is reported to the caller but does not resurrect the entry.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::CleanupFailed`] (or a
    /// collaborator-specific kind) when resource release fails.
    async fn cleanup(&self) -> Result<(), GatewayError>;
}

/// Constructor for [`DomainEntry`] values.
///
/// The registry calls this once per identifier, under its write lock, so
/// implementations never see two concurrent creations for the same key.
#[async_trait]
pub trait DomainFactory: Send + Sync + std::fmt::Debug + 'static {
    /// Concrete entry type produced by this factory.
    type Entry: DomainEntry;

    /// Constructs the runtime state for a new remote domain.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EntryCreationFailed`] (or a
    /// collaborator-specific kind) on invalid input or resource
    /// exhaustion; the registry treats any error as fatal to that single
    /// add.
    async fn create(&self, ia: IsdAs) -> Result<Self::Entry, GatewayError>;
}
