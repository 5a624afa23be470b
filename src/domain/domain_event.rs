//! Domain events reflecting registry state changes.
//!
//! Every reconciliation mutation emits a [`DomainEvent`] through the
//! [`super::EventBus`], giving observers (metrics exporters, operator
//! tooling) visibility into reload outcomes without polling the
//! registry.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::IsdAs;

/// Event emitted by the reconciler after registry mutations.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A remote domain was added or had its configuration re-applied.
    ///
    /// The registry's idempotent add hides whether the entry is new, so
    /// one event covers both outcomes.
    DomainConfigured {
        /// Identifier of the configured domain.
        ia: IsdAs,
        /// When the configuration was applied.
        timestamp: DateTime<Utc>,
    },

    /// A remote domain was removed and its resources released.
    DomainRemoved {
        /// Identifier of the removed domain.
        ia: IsdAs,
        /// When the removal completed.
        timestamp: DateTime<Utc>,
    },

    /// A full reconciliation pass finished.
    ReloadCompleted {
        /// Domains successfully added or reconfigured this pass.
        synced: usize,
        /// Stale domains successfully removed this pass.
        removed: usize,
        /// Whether every individual operation succeeded.
        success: bool,
        /// When the pass finished.
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Returns the identifier this event is about, if it concerns a
    /// single domain.
    #[must_use]
    pub const fn ia(&self) -> Option<IsdAs> {
        match self {
            Self::DomainConfigured { ia, .. } | Self::DomainRemoved { ia, .. } => Some(*ia),
            Self::ReloadCompleted { .. } => None,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::DomainConfigured { .. } => "domain_configured",
            Self::DomainRemoved { .. } => "domain_removed",
            Self::ReloadCompleted { .. } => "reload_completed",
        }
    }
}
