//! CLI command handlers

use crate::selection;
use anyhow::{anyhow, bail, Context, Result};
use freightline_core::models::{Configuration, Delivery};
use freightline_core::services::DispatchService;
use freightline_core::{TransportFactory, TransportKind};
use serde::Serialize;
use std::path::Path;

/// Load and validate the configuration at `path`
pub fn load_configuration(path: &Path) -> Result<Configuration> {
    let config = Configuration::load_from_file(path).map_err(|e| {
        anyhow!(
            "Failed to load configuration from {}: {}",
            path.display(),
            e
        )
    })?;

    config.validate().map_err(|errors| {
        anyhow!(
            "Invalid configuration in {}: {}",
            path.display(),
            errors.join("; ")
        )
    })?;

    Ok(config)
}

/// Handle the 'deliver' command
pub fn handle_deliver(
    kind: Option<String>,
    count: u32,
    json: bool,
    config: &Configuration,
) -> Result<()> {
    let selection = selection::determine_transport_kind(kind, &config.default_kind)
        .context("Failed to select transport")?;
    tracing::debug!(
        kind = %selection.kind,
        source = %selection.source,
        count = count,
        "Transport selected"
    );

    let mut service = DispatchService::from_config(config);
    let deliveries: Vec<Delivery> = (0..count)
        .map(|_| service.dispatch(selection.kind).clone())
        .collect();

    if json {
        let output = serde_json::to_string_pretty(&deliveries)
            .context("Failed to serialize deliveries")?;
        println!("{}", output);
    } else {
        for delivery in &deliveries {
            println!("{}", delivery.description);
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct KindInfo {
    kind: TransportKind,
    description: String,
}

/// Handle the 'kinds' command
pub fn handle_kinds(json: bool) -> Result<()> {
    let factory = TransportFactory::new();
    let kinds: Vec<KindInfo> = TransportKind::ALL
        .into_iter()
        .map(|kind| KindInfo {
            kind,
            description: factory.create(kind).deliver().to_string(),
        })
        .collect();

    if json {
        let output =
            serde_json::to_string_pretty(&kinds).context("Failed to serialize transport kinds")?;
        println!("{}", output);
    } else {
        for info in &kinds {
            println!("{:<6} {}", info.kind.as_str(), info.description);
        }
    }

    Ok(())
}

/// Handle the 'demo' command: one truck, then one ship
pub fn handle_demo(json: bool, config: &Configuration) -> Result<()> {
    let mut service = DispatchService::from_config(config);
    service.dispatch(TransportKind::Truck);
    service.dispatch(TransportKind::Ship);

    let summary = service.summary();

    if json {
        let deliveries: Vec<&Delivery> = service.history().collect();
        let counts: serde_json::Map<String, serde_json::Value> = summary
            .iter()
            .map(|(kind, count)| (kind.to_string(), serde_json::json!(count)))
            .collect();
        let output = serde_json::to_string_pretty(&serde_json::json!({
            "deliveries": deliveries,
            "summary": counts,
        }))
        .context("Failed to serialize demo output")?;
        println!("{}", output);
    } else {
        println!("Logistics Management Application");
        println!();
        for delivery in service.history() {
            println!("{}", delivery.description);
        }
        println!();
        for (kind, count) in &summary {
            println!("{}: {}", kind, count);
        }
    }

    Ok(())
}

/// Handle the 'config --init' command
pub fn handle_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Configuration::default()
        .save_to_file(path)
        .map_err(|e| anyhow!("Failed to write configuration to {}: {}", path.display(), e))?;

    println!("Configuration written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_configuration_rejects_invalid_kind() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "default_kind = \"Plane\"\n").unwrap();

        let err = load_configuration(&path).unwrap_err();
        assert!(err.to_string().contains("default_kind"));
    }

    #[test]
    fn test_config_init_refuses_overwrite_without_force() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        handle_config_init(&path, false).unwrap();
        assert!(handle_config_init(&path, false).is_err());
        handle_config_init(&path, true).unwrap();

        let config = load_configuration(&path).unwrap();
        assert_eq!(config.default_kind, "Truck");
    }
}
