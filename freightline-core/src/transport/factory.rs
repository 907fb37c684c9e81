//! Transport factory for creating transport instances

use crate::transport::{Ship, Transport, TransportKind, Truck, UnknownTransportKind};

/// Creates transports for a requested kind
///
/// Holds no state, so one shared factory and one factory per call behave the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportFactory;

impl TransportFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create a transport instance for a kind
    pub fn create(&self, kind: TransportKind) -> Box<dyn Transport> {
        tracing::debug!(kind = %kind, "Creating transport");
        match kind {
            TransportKind::Truck => Box::new(Truck),
            TransportKind::Ship => Box::new(Ship),
        }
    }

    /// Parse a selector string, then create the transport it names
    ///
    /// Nothing is constructed when the selector is not a known kind.
    pub fn create_from_selector(
        &self,
        selector: &str,
    ) -> Result<Box<dyn Transport>, UnknownTransportKind> {
        let kind = selector.parse::<TransportKind>()?;
        Ok(self.create(kind))
    }
}

/// Create a transport instance for a kind
pub fn create_transport(kind: TransportKind) -> Box<dyn Transport> {
    TransportFactory::new().create(kind)
}

/// Create a transport instance from a selector string
pub fn create_transport_from_selector(
    selector: &str,
) -> Result<Box<dyn Transport>, UnknownTransportKind> {
    TransportFactory::new().create_from_selector(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_matches_requested_kind() {
        let factory = TransportFactory::new();
        for kind in TransportKind::ALL {
            assert_eq!(factory.create(kind).kind(), kind);
        }
    }

    #[test]
    fn test_create_from_selector_rejects_unknown() {
        let err = create_transport_from_selector("Plane").unwrap_err();
        assert_eq!(err.value(), "Plane");
    }

    #[test]
    fn test_instances_of_same_kind_behave_identically() {
        let first = create_transport(TransportKind::Truck);
        let second = create_transport(TransportKind::Truck);
        assert_eq!(first.deliver(), second.deliver());
        assert_eq!(first.name(), second.name());
    }
}
