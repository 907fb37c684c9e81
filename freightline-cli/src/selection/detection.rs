//! Transport kind detection

use super::{SelectionError, SelectionSource, TransportSelection, TRANSPORT_ENV_VAR};
use freightline_core::TransportKind;
use std::env;

/// Determine the transport kind for a command
///
/// # Behavior
/// 1. An explicit KIND argument wins
/// 2. Otherwise FREIGHTLINE_TRANSPORT is used when set and non-blank
/// 3. Otherwise the configured default kind is used
///
/// Whichever source wins must name a known kind; the others are not consulted.
/// User input is forgiving about case and surrounding whitespace, see [`normalize_selector`].
pub fn determine_transport_kind(
    argument: Option<String>,
    config_default: &str,
) -> Result<TransportSelection, SelectionError> {
    determine_transport_kind_with_env(argument, config_default, None)
}

pub fn determine_transport_kind_with_env(
    argument: Option<String>,
    config_default: &str,
    env_override: Option<Option<String>>,
) -> Result<TransportSelection, SelectionError> {
    // Allow override for testing to avoid touching process state
    let env_kind = env_override
        .unwrap_or_else(|| env::var(TRANSPORT_ENV_VAR).ok())
        .filter(|value| !value.trim().is_empty());

    let (selector, origin) = if let Some(arg) = argument {
        (arg, SelectionSource::Argument)
    } else if let Some(env_value) = env_kind {
        (env_value, SelectionSource::Environment)
    } else {
        (config_default.to_string(), SelectionSource::Configuration)
    };

    let kind = normalize_selector(&selector)
        .parse::<TransportKind>()
        .map_err(|error| SelectionError::UnknownKind { origin, error })?;

    Ok(TransportSelection {
        kind,
        source: origin,
    })
}

/// Map a case-insensitive, padded kind name onto its canonical spelling
///
/// Anything that names no kind is returned unchanged so the error reports it verbatim.
fn normalize_selector(selector: &str) -> &str {
    let trimmed = selector.trim();
    for kind in TransportKind::ALL {
        if kind.as_str().eq_ignore_ascii_case(trimmed) {
            return kind.as_str();
        }
    }
    selector
}
