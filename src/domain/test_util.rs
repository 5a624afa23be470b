//! Stub entry collaborator shared by registry and reconciler tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::domain_entry::{DomainEntry, DomainFactory};
use super::isd_as::IsdAs;
use crate::config::DomainConfig;
use crate::error::GatewayError;

/// Entry double that records lifecycle calls and can be told to fail.
#[derive(Debug)]
pub(crate) struct StubEntry {
    ia: IsdAs,
    fail_apply: bool,
    fail_cleanup: bool,
    apply_count: AtomicUsize,
    cleanup_count: AtomicUsize,
    last_config: Mutex<Option<DomainConfig>>,
}

impl StubEntry {
    pub(crate) fn apply_count(&self) -> usize {
        self.apply_count.load(Ordering::SeqCst)
    }

    pub(crate) fn cleanup_count(&self) -> usize {
        self.cleanup_count.load(Ordering::SeqCst)
    }

    pub(crate) fn last_config(&self) -> Option<DomainConfig> {
        self.last_config.lock().ok().and_then(|g| g.clone())
    }
}

#[async_trait]
impl DomainEntry for StubEntry {
    fn ia(&self) -> IsdAs {
        self.ia
    }

    async fn apply_config(&self, cfg: &DomainConfig) -> Result<(), GatewayError> {
        self.apply_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_apply {
            return Err(GatewayError::EntryConfigFailed {
                ia: self.ia,
                reason: "stub apply failure".to_string(),
            });
        }
        if let Ok(mut guard) = self.last_config.lock() {
            *guard = Some(cfg.clone());
        }
        Ok(())
    }

    async fn cleanup(&self) -> Result<(), GatewayError> {
        self.cleanup_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_cleanup {
            return Err(GatewayError::CleanupFailed {
                ia: self.ia,
                reason: "stub cleanup failure".to_string(),
            });
        }
        Ok(())
    }
}

/// Factory double with per-identifier failure injection.
#[derive(Debug, Default)]
pub(crate) struct StubFactory {
    created: AtomicUsize,
    create_failures: Mutex<HashSet<IsdAs>>,
    apply_failures: Mutex<HashSet<IsdAs>>,
    cleanup_failures: Mutex<HashSet<IsdAs>>,
}

impl StubFactory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Makes `create` fail for the given identifier.
    pub(crate) fn fail_create(self, ia: IsdAs) -> Self {
        Self::insert(&self.create_failures, ia);
        self
    }

    /// Makes entries for the given identifier fail `apply_config`.
    pub(crate) fn fail_apply(self, ia: IsdAs) -> Self {
        Self::insert(&self.apply_failures, ia);
        self
    }

    /// Makes entries for the given identifier fail `cleanup`.
    pub(crate) fn fail_cleanup(self, ia: IsdAs) -> Self {
        Self::insert(&self.cleanup_failures, ia);
        self
    }

    /// Returns how many entries this factory has constructed.
    pub(crate) fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    fn insert(set: &Mutex<HashSet<IsdAs>>, ia: IsdAs) {
        if let Ok(mut guard) = set.lock() {
            guard.insert(ia);
        }
    }

    fn contains(set: &Mutex<HashSet<IsdAs>>, ia: IsdAs) -> bool {
        set.lock().map(|g| g.contains(&ia)).unwrap_or(false)
    }
}

#[async_trait]
impl DomainFactory for StubFactory {
    type Entry = StubEntry;

    async fn create(&self, ia: IsdAs) -> Result<StubEntry, GatewayError> {
        if Self::contains(&self.create_failures, ia) {
            return Err(GatewayError::EntryCreationFailed {
                ia,
                reason: "stub create failure".to_string(),
            });
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(StubEntry {
            ia,
            fail_apply: Self::contains(&self.apply_failures, ia),
            fail_cleanup: Self::contains(&self.cleanup_failures, ia),
            apply_count: AtomicUsize::new(0),
            cleanup_count: AtomicUsize::new(0),
            last_config: Mutex::new(None),
        })
    }
}
