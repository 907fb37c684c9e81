//! Transport kind selection
//!
//! Decides which transport a command should use from the command-line argument,
//! the FREIGHTLINE_TRANSPORT environment variable, and the configured default.

mod detection;
mod transport_selection;

pub use detection::determine_transport_kind;
pub use transport_selection::{SelectionSource, TransportSelection};

use freightline_core::UnknownTransportKind;
use thiserror::Error;

/// Environment variable consulted when no kind is given on the command line
pub const TRANSPORT_ENV_VAR: &str = "FREIGHTLINE_TRANSPORT";

/// Error types for kind selection
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("{error} (from {origin})")]
    UnknownKind {
        origin: SelectionSource,
        error: UnknownTransportKind,
    },
}
