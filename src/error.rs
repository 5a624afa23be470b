//! Gateway error types.
//!
//! [`GatewayError`] is the central error type for the gateway core. Each
//! variant is a distinct failure kind and carries the offending
//! [`IsdAs`] where one exists, so call sites can log structured context
//! instead of downcasting a generic error.

use crate::domain::IsdAs;

/// Error enum covering registry and collaborator failures.
///
/// The registry constructs [`InvalidIdentifier`](Self::InvalidIdentifier)
/// and [`NotFound`](Self::NotFound) itself. The remaining variants exist
/// for the entry collaborator: factories report
/// [`EntryCreationFailed`](Self::EntryCreationFailed), apply-config
/// reports [`EntryConfigFailed`](Self::EntryConfigFailed), and teardown
/// reports [`CleanupFailed`](Self::CleanupFailed). Collaborator errors
/// pass through the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// A wildcard identifier was used where a concrete entry key is
    /// required.
    #[error("invalid identifier {ia}: ISD and AS must not be 0")]
    InvalidIdentifier {
        /// The offending identifier.
        ia: IsdAs,
    },

    /// No entry exists for the given identifier.
    #[error("no entry found for {ia}")]
    NotFound {
        /// The identifier that was looked up.
        ia: IsdAs,
    },

    /// The collaborator factory failed to construct an entry.
    #[error("failed to create entry for {ia}: {reason}")]
    EntryCreationFailed {
        /// The identifier the entry was being created for.
        ia: IsdAs,
        /// Collaborator-supplied failure description.
        reason: String,
    },

    /// Applying a configuration to an existing entry failed. The entry
    /// itself survives.
    #[error("failed to apply config to {ia}: {reason}")]
    EntryConfigFailed {
        /// The identifier of the entry being reconfigured.
        ia: IsdAs,
        /// Collaborator-supplied failure description.
        reason: String,
    },

    /// Releasing an entry's resources failed. The entry is still gone
    /// from the registry.
    #[error("cleanup failed for {ia}: {reason}")]
    CleanupFailed {
        /// The identifier of the entry being torn down.
        ia: IsdAs,
        /// Collaborator-supplied failure description.
        reason: String,
    },

    /// Internal error with no more specific kind.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the identifier this error is about, if it carries one.
    #[must_use]
    pub const fn ia(&self) -> Option<IsdAs> {
        match self {
            Self::InvalidIdentifier { ia }
            | Self::NotFound { ia }
            | Self::EntryCreationFailed { ia, .. }
            | Self::EntryConfigFailed { ia, .. }
            | Self::CleanupFailed { ia, .. } => Some(*ia),
            Self::Internal(_) => None,
        }
    }
}
