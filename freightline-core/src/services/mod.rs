//! Business logic services

pub mod dispatch;
pub mod logging;

pub use dispatch::DispatchService;
