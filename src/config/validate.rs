use std::str::FromStr;

use anyhow::{Result, bail};
use tracing::Level;

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if Level::from_str(cfg.logging.generator_level.trim()).is_err() {
        errors.push(format!(
            "logging.generator_level ({}) must be one of trace, debug, info, warn, error",
            cfg.logging.generator_level
        ));
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.max_connections == 0 {
            errors.push("database.max_connections must be > 0".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }
    }

    if cfg.generator.default_namespace.trim().is_empty() {
        errors.push("generator.default_namespace must not be empty".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
