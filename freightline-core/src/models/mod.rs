//! Data models for freightline

pub mod configuration;
pub mod delivery;

pub use configuration::*;
pub use delivery::*;
