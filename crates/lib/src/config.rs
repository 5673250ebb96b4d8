//! Configuration types and loading.
//!
//! Config is loaded from a JSON file (e.g. `~/.smsdigest/config.json`) and environment.
//! Every field is optional; a missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::payload::MissingFieldPolicy;

/// Top-level application config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Accessor behaviour (missing-field policy).
    #[serde(default)]
    pub accessor: AccessorConfig,

    /// Default payload source.
    #[serde(default)]
    pub payload: PayloadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorConfig {
    /// "error" (default) fails on an absent field; "empty" substitutes the empty string. Overridden by SMSDIGEST_MISSING_FIELDS env.
    #[serde(default)]
    pub missing_fields: MissingFieldPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadConfig {
    /// Payload JSON file used when the CLI gets no --file. Relative paths are resolved against the config file's parent. Omit to use the built-in example payload.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Resolve the missing-field policy: env SMSDIGEST_MISSING_FIELDS overrides config.
pub fn resolve_missing_field_policy(config: &Config) -> MissingFieldPolicy {
    let env = std::env::var("SMSDIGEST_MISSING_FIELDS").ok();
    policy_with_override(config, env.as_deref())
}

fn policy_with_override(config: &Config, env: Option<&str>) -> MissingFieldPolicy {
    env.filter(|s| !s.trim().is_empty())
        .and_then(|s| {
            let parsed = MissingFieldPolicy::parse(s);
            if parsed.is_none() {
                log::warn!("ignoring SMSDIGEST_MISSING_FIELDS={:?}: expected \"error\" or \"empty\"", s);
            }
            parsed
        })
        .unwrap_or(config.accessor.missing_fields)
}

/// Resolve config path from env or default.
pub fn default_config_path() -> PathBuf {
    std::env::var("SMSDIGEST_CONFIG_PATH").map(PathBuf::from).unwrap_or_else(|_| {
        dirs::home_dir()
            .map(|h| h.join(".smsdigest").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"))
    })
}

/// Load config from the given path, else the default path (or SMSDIGEST_CONFIG_PATH). Missing file => default config.
/// Returns the config and the path that was used (for resolving relative paths).
pub fn load_config(path: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let path = path.unwrap_or_else(default_config_path);
    let config = if !path.exists() {
        log::debug!("config file not found, using defaults: {}", path.display());
        Config::default()
    } else {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&s)
            .with_context(|| format!("parsing config from {}", path.display()))?
    };
    Ok((config, path))
}

/// Resolve the configured payload file, if any. Relative paths are resolved against the config file's parent.
pub fn resolve_payload_path(config: &Config, config_path: &Path) -> Option<PathBuf> {
    let config_parent = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    match &config.payload.path {
        Some(p) if !p.as_os_str().is_empty() => {
            if p.is_absolute() {
                Some(p.clone())
            } else {
                Some(config_parent.join(p))
            }
        }
        _ => None,
    }
}
