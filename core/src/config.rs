use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading an [`EffectPolicy`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse effect config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

/// How `effect` and `suspend_effect` treat failures raised by an action.
///
/// Loaded from the `[effect]` table of a TOML document:
///
/// ```toml
/// [effect]
/// capture_panics = true
/// log_failures = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EffectPolicy {
    /// Convert unwinding panics into `Error`. When `false` the panic is
    /// resumed unchanged.
    pub capture_panics: bool,
    /// Emit a tracing event for every captured failure.
    pub log_failures: bool,
}

impl Default for EffectPolicy {
    fn default() -> Self {
        Self {
            capture_panics: true,
            log_failures: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    effect: EffectPolicy,
}

impl EffectPolicy {
    /// Policy that lets panics propagate to the caller.
    pub fn propagate_panics() -> Self {
        Self {
            capture_panics: false,
            ..Self::default()
        }
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }

    /// Parses the `[effect]` table. A missing table yields the default.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        parse_effect_table(content).map_err(|source| ConfigError::Parse { source })
    }

    /// Loads the policy from a TOML file.
    ///
    /// - If the file doesn't exist, returns `EffectPolicy::default()`.
    /// - Otherwise reads and parses the `[effect]` table; errors carry the path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        parse_effect_table(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn parse_effect_table(content: &str) -> Result<EffectPolicy, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.effect)
}
