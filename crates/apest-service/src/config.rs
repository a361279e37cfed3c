use std::path::Path;

use apest_core::models::dimension::ApestDimension;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config_version {0} is newer than this build supports ({max})", max = CURRENT_VERSION)]
    UnsupportedVersion(u32),

    #[error("config is not a JSON object")]
    NotAnObject,

    #[error("dimension_priority must list each of the five dimensions exactly once")]
    InvalidPriority,

    #[error("required_completion_percentage must be between 0 and 100, got {0}")]
    InvalidCompletion(u8),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Tie-break order for gift ranking, highest priority first.
    #[serde(default = "default_priority")]
    pub dimension_priority: Vec<ApestDimension>,
    /// Added in v1. An attempt must reach this before it can be scored.
    #[serde(default = "default_required_completion")]
    pub required_completion_percentage: u8,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_priority() -> Vec<ApestDimension> {
    ApestDimension::ALL.to_vec()
}

fn default_required_completion() -> u8 {
    100
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            dimension_priority: default_priority(),
            required_completion_percentage: default_required_completion(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServiceConfig {
    /// The tie-break order as a fixed array, checked to be a permutation.
    pub fn priority(&self) -> Result<[ApestDimension; 5], ConfigError> {
        let order: [ApestDimension; 5] = self
            .dimension_priority
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::InvalidPriority)?;
        if ApestDimension::ALL.iter().all(|d| order.contains(d)) {
            Ok(order)
        } else {
            Err(ConfigError::InvalidPriority)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.priority()?;
        if self.required_completion_percentage > 100 {
            return Err(ConfigError::InvalidCompletion(
                self.required_completion_percentage,
            ));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ServiceConfig = serde_json::from_value(migrated)?;
    config.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion(from_version));
    }

    // v0 → v1: scoring used to accept any attempt, so keep that behaviour
    // for configs written before the threshold existed.
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        obj.entry("required_completion_percentage")
            .or_insert(serde_json::Value::Number(0.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added required_completion_percentage)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ServiceConfig) -> Result<(), ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.display().to_string(),
        source,
    };

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
    std::fs::rename(&tmp_path, path).map_err(io_err)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
