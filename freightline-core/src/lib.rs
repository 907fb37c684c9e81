//! # Freightline Core Library
//!
//! Shared core functionality for freightline: the transport family, the factory
//! that selects between them, delivery records, and the delivery log.

pub mod models;
pub mod services;
pub mod transport;

pub use transport::factory::{create_transport, create_transport_from_selector, TransportFactory};
pub use transport::{Transport, TransportKind, UnknownTransportKind};
