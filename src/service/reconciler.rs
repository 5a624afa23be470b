//! Reconciler: converges the registry to a configuration snapshot.

use std::sync::Arc;

use chrono::Utc;

use crate::config::RemoteConfig;
use crate::domain::{DomainEntry, DomainEvent, DomainFactory, DomainRegistry, EventBus};

/// Orchestration layer driving the registry from configuration changes.
///
/// Stateless coordinator: owns a reference to the [`DomainRegistry`] for
/// state and an [`EventBus`] for event emission. An external trigger
/// (config file change, signal handler, control-plane push) hands each
/// new snapshot to [`reload_config`](Self::reload_config).
#[derive(Debug, Clone)]
pub struct Reconciler<F: DomainFactory> {
    registry: Arc<DomainRegistry<F>>,
    event_bus: EventBus,
}

impl<F: DomainFactory> Reconciler<F> {
    /// Creates a new `Reconciler`.
    #[must_use]
    pub fn new(registry: Arc<DomainRegistry<F>>, event_bus: EventBus) -> Self {
        Self {
            registry,
            event_bus,
        }
    }

    /// Returns a reference to the inner [`DomainRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<DomainRegistry<F>> {
        &self.registry
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Converges the registry to match the given snapshot.
    ///
    /// Two phases, in fixed order: every domain in `cfg` is added (or
    /// found) and has its configuration applied, then every registry key
    /// absent from `cfg` is removed. Per-domain failures are logged and
    /// folded into the returned aggregate; neither phase aborts early,
    /// and the deletion sweep runs even when additions failed, so stale
    /// domains are cleaned up on every pass. Returns `true` only if
    /// every individual operation succeeded; failed domains stay in
    /// their prior state for the next pass to retry.
    ///
    /// Not safe to invoke from multiple callers concurrently: interleaved
    /// sweeps can tear each other's add/delete decision sets. Callers
    /// serialize reconciliation; concurrent `lookup`/`iterate` stay safe.
    pub async fn reload_config(&self, cfg: &RemoteConfig) -> bool {
        // Bind the addition result before the deletion sweep so `&&`
        // short-circuiting cannot skip either phase.
        let (added_ok, synced) = self.add_new_domains(cfg).await;
        let (removed_ok, removed) = self.del_stale_domains(cfg).await;
        let success = removed_ok && added_ok;

        let _ = self.event_bus.publish(DomainEvent::ReloadCompleted {
            synced,
            removed,
            success,
            timestamp: Utc::now(),
        });
        tracing::info!(synced, removed, success, "config reload finished");
        success
    }

    /// Adds every domain in `cfg` and applies its configuration.
    async fn add_new_domains(&self, cfg: &RemoteConfig) -> (bool, usize) {
        let mut ok = true;
        let mut synced = 0;
        for (&ia, domain_cfg) in &cfg.domains {
            tracing::debug!(%ia, "reload: syncing domain");
            let entry = match self.registry.add_ia(ia).await {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::error!(%ia, error = %e, "reload: failed to add domain");
                    ok = false;
                    continue;
                }
            };
            if let Err(e) = entry.apply_config(domain_cfg).await {
                tracing::error!(%ia, error = %e, "reload: failed to apply domain config");
                ok = false;
                continue;
            }
            let _ = self.event_bus.publish(DomainEvent::DomainConfigured {
                ia,
                timestamp: Utc::now(),
            });
            tracing::info!(%ia, "reload: domain configured");
            synced += 1;
        }
        (ok, synced)
    }

    /// Removes every registry key that is absent from `cfg`.
    async fn del_stale_domains(&self, cfg: &RemoteConfig) -> (bool, usize) {
        let mut stale = Vec::new();
        self.registry
            .iterate(|ia, _| {
                if !cfg.domains.contains_key(&ia) {
                    stale.push(ia);
                }
                true
            })
            .await;

        let mut ok = true;
        let mut removed = 0;
        for ia in stale {
            tracing::debug!(%ia, "reload: removing stale domain");
            match self.registry.del_ia(ia).await {
                Ok(()) => {
                    let _ = self.event_bus.publish(DomainEvent::DomainRemoved {
                        ia,
                        timestamp: Utc::now(),
                    });
                    tracing::info!(%ia, "reload: domain removed");
                    removed += 1;
                }
                Err(e) => {
                    tracing::error!(%ia, error = %e, "reload: failed to remove domain");
                    ok = false;
                }
            }
        }
        (ok, removed)
    }
}
