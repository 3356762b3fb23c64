//! Host configuration loaded from `keyrelay-host.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming an alternative config file path.
pub const CONFIG_ENV: &str = "KEYRELAY_HOST_CONFIG";

/// Environment variable overriding the `op` binary path.
pub const OP_PATH_ENV: &str = "KEYRELAY_OP_PATH";

/// Default config filename, looked up in the working directory.
const CONFIG_FILENAME: &str = "keyrelay-host.toml";

/// Default absolute path to the 1Password CLI. Native-messaging hosts are
/// launched by the browser and do not inherit a shell PATH.
const DEFAULT_OP_PATH: &str = "/opt/homebrew/bin/op";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Host configuration. All fields are optional; missing files and missing
/// fields fall back to permissive defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Absolute path to the `op` binary.
    #[serde(default = "default_op_path")]
    pub op_path: PathBuf,
    /// Vault applied when a request names none.
    #[serde(default)]
    pub default_vault: Option<String>,
    /// Per-invocation timeout for `op` commands, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_op_path() -> PathBuf {
    PathBuf::from(DEFAULT_OP_PATH)
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            op_path: default_op_path(),
            default_vault: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HostConfig {
    /// Loads configuration from the environment-selected config file, then
    /// applies environment overrides.
    ///
    /// A missing file yields defaults; an unreadable or invalid file is an
    /// error so misconfiguration does not silently degrade.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map_or_else(|| PathBuf::from(CONFIG_FILENAME), PathBuf::from);

        let mut config = Self::load_from(&path)?;
        if let Some(op_path) = std::env::var_os(OP_PATH_ENV) {
            config.op_path = PathBuf::from(op_path);
        }
        Ok(config)
    }

    /// Loads configuration from a specific path, without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// The `op` timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// Errors loading the host config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown fields.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}
