//! Type-safe remote-domain identifier.
//!
//! [`IsdAs`] is the two-part (isolation domain, AS number) address of a
//! remote network domain. It is the dictionary key in
//! [`super::DomainRegistry`] and the identity carried by every
//! [`super::DomainEvent`] and error.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// AS numbers occupy the low 48 bits of the packed key form.
const AS_BITS: u32 = 48;
const AS_MASK: u64 = (1 << AS_BITS) - 1;

/// Identifier of a remote autonomous-system domain.
///
/// A value with either component zero is a *wildcard*: it matches "any
/// ISD" or "any AS" in routing contexts and is never a valid key for a
/// concrete registry entry. Construction does not reject wildcards;
/// [`super::DomainRegistry::add_ia`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsdAs {
    isd: u16,
    asn: u64,
}

impl IsdAs {
    /// Creates an identifier from an isolation-domain number and an AS
    /// number. The AS number is truncated to its meaningful 48 bits.
    #[must_use]
    pub const fn new(isd: u16, asn: u64) -> Self {
        Self {
            isd,
            asn: asn & AS_MASK,
        }
    }

    /// Returns the isolation-domain component.
    #[must_use]
    pub const fn isd(&self) -> u16 {
        self.isd
    }

    /// Returns the AS-number component.
    #[must_use]
    pub const fn asn(&self) -> u64 {
        self.asn
    }

    /// Returns `true` if either component is zero.
    ///
    /// Wildcards address "any domain" and cannot name a concrete entry.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.isd == 0 || self.asn == 0
    }

    /// Packs both components into a single ordered `u64` key.
    ///
    /// The ISD occupies the high 16 bits, so the packed form sorts by ISD
    /// first and AS second, matching the derived `Ord` on the pair.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        ((self.isd as u64) << AS_BITS) | self.asn
    }

    /// Rebuilds an identifier from its packed `u64` key form.
    #[must_use]
    pub const fn from_u64(key: u64) -> Self {
        Self {
            isd: (key >> AS_BITS) as u16,
            asn: key & AS_MASK,
        }
    }
}

impl fmt::Display for IsdAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.isd, self.asn)
    }
}

/// Error returned when parsing an `"<isd>-<asn>"` string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ISD-AS string {0:?}, expected \"<isd>-<asn>\"")]
pub struct ParseIsdAsError(String);

impl FromStr for IsdAs {
    type Err = ParseIsdAsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIsdAsError(s.to_string());
        let (isd, asn) = s.split_once('-').ok_or_else(err)?;
        let isd: u16 = isd.parse().map_err(|_| err())?;
        let asn: u64 = asn.parse().map_err(|_| err())?;
        if asn > AS_MASK {
            return Err(err());
        }
        Ok(Self { isd, asn })
    }
}

// Serialized as the "<isd>-<asn>" string so the type works directly as a
// JSON object key in configuration snapshots.
impl Serialize for IsdAs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsdAs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
