//! Initialize the configuration directory: create ~/.smsdigest, default config, and the example payload.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::payload::SAMPLE_JSON;

/// Location of the seeded example payload, relative to the config directory.
pub const SAMPLE_PAYLOAD_PATH: &str = "payloads/sms_received.json";

/// Create the config directory and default files if they do not exist.
/// - Creates the config directory (parent of config file path).
/// - Writes `config.json` with `{}` if missing.
/// - Writes the example payload to `payloads/sms_received.json` if missing.
pub fn init_config_dir(config_path: &Path) -> Result<PathBuf> {
    let config_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("creating config directory {}", config_dir.display()))?;

    if !config_path.exists() {
        std::fs::write(config_path, b"{}")
            .with_context(|| format!("writing default config to {}", config_path.display()))?;
        log::info!("created default config at {}", config_path.display());
    }

    let sample = config_dir.join(SAMPLE_PAYLOAD_PATH);
    if !sample.exists() {
        if let Some(dir) = sample.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating payload directory {}", dir.display()))?;
        }
        std::fs::write(&sample, SAMPLE_JSON)
            .with_context(|| format!("writing example payload to {}", sample.display()))?;
        log::info!("wrote example payload to {}", sample.display());
    } else {
        log::debug!("example payload already exists at {}, skipping", sample.display());
    }

    Ok(config_dir.to_path_buf())
}
