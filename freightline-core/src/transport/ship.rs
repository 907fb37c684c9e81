//! Sea transport

use super::{Transport, TransportKind};

/// Delivers cargo by sea
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ship;

impl Ship {
    pub const DESCRIPTION: &'static str = "Delivering cargo by sea in a ship.";
}

impl Transport for Ship {
    fn deliver(&self) -> &str {
        Self::DESCRIPTION
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Ship
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_delivers_by_sea() {
        assert_eq!(Ship.deliver(), "Delivering cargo by sea in a ship.");
        assert_eq!(Ship.kind(), TransportKind::Ship);
        assert_eq!(Ship.name(), "Ship");
    }
}
