//! Delivery record

use crate::transport::TransportKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Unique delivery identifier
    pub id: Uuid,
    /// Transport that carried the cargo
    pub kind: TransportKind,
    /// Text returned by the transport
    pub description: String,
    /// When the delivery was dispatched
    pub timestamp: DateTime<Utc>,
}

impl Delivery {
    pub fn new(kind: TransportKind, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_delivery_has_unique_id() {
        let a = Delivery::new(TransportKind::Truck, "a");
        let b = Delivery::new(TransportKind::Truck, "a");
        assert_ne!(a.id, b.id);
        assert_eq!(a.description, b.description);
    }

    #[test]
    fn test_delivery_json_shape() {
        let delivery = Delivery::new(TransportKind::Ship, "Delivering cargo by sea in a ship.");
        let value = serde_json::to_value(&delivery).unwrap();
        assert_eq!(value["kind"], "Ship");
        assert_eq!(value["description"], "Delivering cargo by sea in a ship.");
        assert!(value["id"].is_string());
        assert!(value["timestamp"].is_string());
    }
}
