use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::comments::ReflowConfig;
use crate::error::{Error, Result};
use crate::paths;
use crate::snippets::SnippetDefaults;
use crate::utils::io;

/// Root configuration structure for droidkit.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DroidkitConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via droidkit.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Defaults {
    #[serde(default)]
    pub comments: ReflowConfig,

    #[serde(default)]
    pub snippets: SnippetDefaults,
}

impl DroidkitConfig {
    pub fn validate(&self) -> Result<()> {
        self.defaults.comments.validate()
    }
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the full droidkit.json config, falling back to defaults on any error.
pub fn load_config() -> DroidkitConfig {
    let Ok(path) = paths::droidkit_json() else {
        return DroidkitConfig::default();
    };

    if !path.exists() {
        return DroidkitConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            crate::log_status!(
                "config",
                "Ignoring {}: {}; using built-in defaults",
                path.display(),
                err.details["error"].as_str().unwrap_or(&err.message)
            );
            DroidkitConfig::default()
        }
    }
}

/// Load and validate a config file.
pub fn load_config_from(path: &Path) -> Result<DroidkitConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let config: DroidkitConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    config.validate()?;
    Ok(config)
}

/// Save config to droidkit.json (creates if missing).
pub fn save_config(config: &DroidkitConfig) -> Result<()> {
    save_config_to(&paths::droidkit_json()?, config)
}

pub fn save_config_to(path: &Path, config: &DroidkitConfig) -> Result<()> {
    config.validate()?;
    io::ensure_parent_dir(path)?;

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize droidkit.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}

/// Return a copy of `config` with the value at a JSON pointer replaced.
///
/// Only paths that already exist in the config shape can be set.
pub fn with_pointer(
    config: &DroidkitConfig,
    pointer: &str,
    value: Value,
) -> Result<DroidkitConfig> {
    if !pointer.starts_with('/') {
        return Err(Error::validation_invalid_argument(
            "pointer",
            "JSON pointer must start with '/'",
            Some(pointer.to_string()),
            None,
        ));
    }

    let mut json = serde_json::to_value(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize config".to_string()))
    })?;

    let slot = json.pointer_mut(pointer).ok_or_else(|| {
        Error::validation_invalid_argument(
            "pointer",
            format!("Unknown configuration path: {}", pointer),
            Some(pointer.to_string()),
            Some(known_pointers()),
        )
    })?;
    *slot = value;

    let updated: DroidkitConfig = serde_json::from_value(json).map_err(|e| {
        Error::validation_invalid_json(e, Some("deserialize config".to_string()), None)
    })?;

    updated.validate()?;
    Ok(updated)
}

fn known_pointers() -> Vec<String> {
    let Ok(json) = serde_json::to_value(DroidkitConfig::default()) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    collect_leaf_pointers(&json, String::new(), &mut out);
    out
}

fn collect_leaf_pointers(value: &Value, prefix: String, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaf_pointers(child, format!("{}/{}", prefix, key), out);
            }
        }
        _ => out.push(prefix),
    }
}

/// Delete droidkit.json (reset to defaults)
pub fn reset_config() -> Result<bool> {
    let path = paths::droidkit_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Check if droidkit.json exists
pub fn config_exists() -> bool {
    paths::droidkit_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Get the path to droidkit.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::droidkit_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
