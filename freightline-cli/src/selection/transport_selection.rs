//! Outcome of transport kind selection

use freightline_core::TransportKind;
use std::fmt;

/// Source that determined the transport kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// KIND argument on the command line
    Argument,
    /// FREIGHTLINE_TRANSPORT environment variable
    Environment,
    /// default_kind from the configuration file
    Configuration,
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionSource::Argument => "argument",
            SelectionSource::Environment => "FREIGHTLINE_TRANSPORT",
            SelectionSource::Configuration => "configuration default_kind",
        };
        f.write_str(label)
    }
}

/// Selected transport kind and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportSelection {
    pub kind: TransportKind,
    pub source: SelectionSource,
}
