//! Transport kind selector
//!
//! Selector strings are parsed into [`TransportKind`] at the boundary. Only the
//! exact canonical names are accepted, and this is the only place an unknown
//! selector can be rejected; everything past it works with the closed enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a selector names no known transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown transport type: {0}")]
pub struct UnknownTransportKind(pub String);

impl UnknownTransportKind {
    /// The selector that was rejected, exactly as supplied
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Transport type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportKind {
    Truck,
    Ship,
}

impl TransportKind {
    /// Every kind, in declaration order
    pub const ALL: [TransportKind; 2] = [TransportKind::Truck, TransportKind::Ship];

    /// Canonical selector name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Truck => "Truck",
            TransportKind::Ship => "Ship",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = UnknownTransportKind;

    /// Matches the canonical names exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Truck" => Ok(TransportKind::Truck),
            "Ship" => Ok(TransportKind::Ship),
            _ => Err(UnknownTransportKind(s.to_string())),
        }
    }
}
