//! Road transport

use super::{Transport, TransportKind};

/// Delivers cargo over land
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truck;

impl Truck {
    pub const DESCRIPTION: &'static str = "Delivering cargo by land in a truck.";
}

impl Transport for Truck {
    fn deliver(&self) -> &str {
        Self::DESCRIPTION
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Truck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_delivers_by_land() {
        assert_eq!(Truck.deliver(), "Delivering cargo by land in a truck.");
        assert_eq!(Truck.kind(), TransportKind::Truck);
        assert_eq!(Truck.name(), "Truck");
    }
}
