//! Configuration loading and management
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. an optional YAML file named by `RENTDESK_CONFIG`
//! 3. the `RENTDESK_HOST`, `RENTDESK_PORT` and `RENTDESK_INVOICE_AMOUNT`
//!    environment variables
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 5000
//! billing:
//!   invoice_amount: 1200.0
//! log_filter: info
//! ```

use crate::storage::DEFAULT_INVOICE_AMOUNT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "RENTDESK_CONFIG";
pub const HOST_VAR: &str = "RENTDESK_HOST";
pub const PORT_VAR: &str = "RENTDESK_PORT";
pub const INVOICE_AMOUNT_VAR: &str = "RENTDESK_INVOICE_AMOUNT";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config{}: {source}", file_suffix(.file))]
    Parse {
        file: Option<String>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_deref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

/// Where the HTTP listener binds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Amount written on every generated invoice
    pub invoice_amount: f64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            invoice_amount: DEFAULT_INVOICE_AMOUNT,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub billing: BillingConfig,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ListenConfig::default(),
            billing: BillingConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            file: Some(path.to_string()),
            source,
        })?;
        config.validate()
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse { file: None, source })?;
        config.validate()
    }

    /// Apply overrides looked up through `lookup` (normally `std::env::var`)
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(HOST_VAR) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: PORT_VAR.to_string(),
                value: port.clone(),
                message: "expected a port number".to_string(),
            })?;
        }
        if let Some(amount) = lookup(INVOICE_AMOUNT_VAR) {
            self.billing.invoice_amount =
                amount.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    field: INVOICE_AMOUNT_VAR.to_string(),
                    value: amount.clone(),
                    message: "expected a number".to_string(),
                })?;
        }

        self.validate()
    }

    /// `host:port` string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        let amount = self.billing.invoice_amount;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "billing.invoice_amount".to_string(),
                value: amount.to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        Ok(self)
    }
}
