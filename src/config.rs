//! Gateway configuration.
//!
//! Two concerns live here. [`GatewayConfig`] holds process-level settings
//! loaded from environment variables in 12-factor style (or a `.env`
//! file via `dotenvy`). [`RemoteConfig`] is the data model of a desired
//! configuration snapshot — the complete set of remote domains the
//! gateway should know, supplied wholesale to
//! [`crate::service::Reconciler::reload_config`] on every pass. How a
//! snapshot is produced (file watch, control plane push) is the loading
//! collaborator's concern, not this crate's.

use std::collections::HashMap;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::domain::IsdAs;

/// Process-level gateway settings.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Capacity of the domain event broadcast channel.
    pub event_bus_capacity: usize,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            event_bus_capacity: parse_env("EVENT_BUS_CAPACITY", 1024),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            event_bus_capacity: 1024,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Desired state for a single remote domain.
///
/// Opaque to the registry core: only the entry collaborator's
/// `apply_config` interprets these fields (updating sessions, routes and
/// tunnel endpoints to match).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// IP prefixes routed through the tunnel to this domain.
    #[serde(default)]
    pub networks: Vec<String>,

    /// Remote gateway endpoints carrying tunnel and control traffic.
    #[serde(default)]
    pub gateways: Vec<SocketAddr>,
}

/// Complete desired set of remote domains, keyed by ISD-AS.
///
/// Each snapshot replaces the previous one in full; the reconciler diffs
/// it against the registry rather than merging it incrementally. Map keys
/// serialize as `"<isd>-<asn>"` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Desired remote domains and their per-domain configuration.
    #[serde(default)]
    pub domains: HashMap<IsdAs, DomainConfig>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_event_bus_capacity() {
        let cfg = GatewayConfig::default();
        assert_eq!(cfg.event_bus_capacity, 1024);
    }

    #[test]
    fn snapshot_deserializes_with_isd_as_keys() {
        let json = r#"{
            "domains": {
                "1-11": {
                    "networks": ["10.0.1.0/24"],
                    "gateways": ["192.0.2.10:10080"]
                },
                "1-12": {}
            }
        }"#;
        let cfg: Option<RemoteConfig> = serde_json::from_str(json).ok();
        let Some(cfg) = cfg else {
            panic!("expected snapshot to deserialize");
        };
        assert_eq!(cfg.domains.len(), 2);

        let Some(dom) = cfg.domains.get(&IsdAs::new(1, 11)) else {
            panic!("expected 1-11 to be present");
        };
        assert_eq!(dom.networks, vec!["10.0.1.0/24".to_string()]);
        assert_eq!(dom.gateways.len(), 1);

        // Missing fields fall back to empty per-domain config.
        assert_eq!(
            cfg.domains.get(&IsdAs::new(1, 12)),
            Some(&DomainConfig::default())
        );
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut cfg = RemoteConfig::default();
        cfg.domains.insert(
            IsdAs::new(2, 21),
            DomainConfig {
                networks: vec!["172.16.0.0/12".to_string()],
                gateways: Vec::new(),
            },
        );
        let json = serde_json::to_string(&cfg).ok();
        let Some(json) = json else {
            panic!("expected snapshot to serialize");
        };
        assert!(json.contains("\"2-21\""));
        let back: Option<RemoteConfig> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(cfg));
    }

    #[test]
    fn wildcard_keys_deserialize_but_are_flagged() {
        // The snapshot model does not reject wildcards; the registry does
        // when the reconciler tries to add them.
        let json = r#"{"domains": {"0-0": {}}}"#;
        let cfg: Option<RemoteConfig> = serde_json::from_str(json).ok();
        let Some(cfg) = cfg else {
            panic!("expected snapshot to deserialize");
        };
        let Some((&ia, _)) = cfg.domains.iter().next() else {
            panic!("expected one domain");
        };
        assert!(ia.is_wildcard());
    }
}
