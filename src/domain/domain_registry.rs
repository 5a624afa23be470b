//! Concurrent storage for remote-domain entries.
//!
//! [`DomainRegistry`] maps [`IsdAs`] identifiers to the runtime state of
//! each remote domain the gateway knows. The map sits behind a
//! [`tokio::sync::RwLock`] so point operations are atomic per call.
//!
//! # Concurrency
//!
//! - `lookup`, `iterate`, `len` and `is_empty` are safe from any number
//!   of tasks at any time and never observe a partially constructed
//!   entry.
//! - `add_ia` and `del_ia` are individually atomic and safe to call
//!   concurrently for distinct keys.
//! - The registry is **not** meant for multiple concurrent
//!   reconciliation authorities: two interleaved
//!   [`reload_config`](crate::service::Reconciler::reload_config) sweeps
//!   can tear each other's add/delete decision sets. Callers serialize
//!   sweeps; point lookups stay safe throughout.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::IsdAs;
use super::domain_entry::{DomainEntry, DomainFactory};
use crate::error::GatewayError;

/// Central store for all known remote domains.
///
/// Owns the entry factory and every entry it has created. An explicitly
/// constructed instance is passed by reference to the components that
/// need it; there is no process-wide singleton.
#[derive(Debug)]
pub struct DomainRegistry<F: DomainFactory> {
    factory: F,
    entries: RwLock<HashMap<IsdAs, Arc<F::Entry>>>,
}

impl<F: DomainFactory> DomainRegistry<F> {
    /// Creates an empty registry around the given entry factory.
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the entry for the given identifier, or `None` if absent.
    pub async fn lookup(&self, ia: IsdAs) -> Option<Arc<F::Entry>> {
        let map = self.entries.read().await;
        map.get(&ia).cloned()
    }

    /// Idempotently adds an entry for a remote domain.
    ///
    /// If an entry already exists for `ia` it is returned unchanged and
    /// the factory is not consulted. Otherwise a new entry is constructed
    /// and inserted. The write lock is held across construction, so a
    /// factory error leaves the map untouched and no concurrent lookup
    /// ever sees a half-made entry; writers for the same key serialize.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidIdentifier`] for wildcard
    /// identifiers, or the factory's error when entry construction fails.
    pub async fn add_ia(&self, ia: IsdAs) -> Result<Arc<F::Entry>, GatewayError> {
        if ia.is_wildcard() {
            return Err(GatewayError::InvalidIdentifier { ia });
        }
        let mut map = self.entries.write().await;
        if let Some(entry) = map.get(&ia) {
            return Ok(Arc::clone(entry));
        }
        let entry = Arc::new(self.factory.create(ia).await?);
        map.insert(ia, Arc::clone(&entry));
        Ok(entry)
    }

    /// Removes the entry for a remote domain and releases its resources.
    ///
    /// The key is unlinked from the map before
    /// [`cleanup`](DomainEntry::cleanup) runs, so concurrent lookups
    /// never see an entry that is being torn down. A cleanup failure is
    /// returned to the caller, but the key stays removed either way.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no entry exists for `ia`,
    /// or the collaborator's error when cleanup fails.
    pub async fn del_ia(&self, ia: IsdAs) -> Result<(), GatewayError> {
        let entry = {
            let mut map = self.entries.write().await;
            map.remove(&ia).ok_or(GatewayError::NotFound { ia })?
        };
        entry.cleanup().await
    }

    /// Visits a snapshot of the current `(identifier, entry)` pairs.
    ///
    /// The visitor returns `true` to continue and `false` to stop early.
    /// The snapshot is taken under the read lock and visited outside it:
    /// mutations that happen during the traversal are not reflected, but
    /// every key that is stable for its duration is visited exactly once.
    pub async fn iterate<V>(&self, mut visit: V)
    where
        V: FnMut(IsdAs, &Arc<F::Entry>) -> bool,
    {
        let snapshot: Vec<(IsdAs, Arc<F::Entry>)> = {
            let map = self.entries.read().await;
            map.iter().map(|(ia, e)| (*ia, Arc::clone(e))).collect()
        };
        for (ia, entry) in &snapshot {
            if !visit(*ia, entry) {
                break;
            }
        }
    }

    /// Returns the number of known remote domains.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if the registry contains no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
