//! Transport abstraction for cargo delivery
//!
//! Every transport shares one capability: describing how it delivers cargo.
//! Concrete transports are created through [`factory::TransportFactory`], which
//! picks the implementation for a [`TransportKind`].

use std::fmt::Debug;

pub mod factory;
pub mod kind;
pub mod ship;
pub mod truck;

pub use factory::TransportFactory;
pub use kind::{TransportKind, UnknownTransportKind};
pub use ship::Ship;
pub use truck::Truck;

/// Abstract transport interface for cargo delivery
pub trait Transport: Debug + Send + Sync {
    /// Describe how this transport delivers cargo
    ///
    /// Pure: the same transport always returns the same text.
    fn deliver(&self) -> &str;

    /// The kind this transport was created for
    fn kind(&self) -> TransportKind;

    /// Get transport name for logging
    fn name(&self) -> &str {
        self.kind().as_str()
    }
}
