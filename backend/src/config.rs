//! Server configuration.
//!
//! Settings are resolved in three layers: built-in defaults, an optional
//! TOML file, then environment variables.
//!
//! # Configuration file
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8443
//! api_prefix = "/api"
//! environment = "production"
//! cors_origins = ["https://localhost:3000"]
//! body_limit_bytes = 1048576
//! ```
//!
//! # Environment Variables
//!
//! - `PARITY_CONFIG`: Path to the TOML file (default: `parity.toml` if present)
//! - `HOST`, `PORT`, `API_PREFIX`, `APP_ENV`, `BODY_LIMIT_BYTES`
//! - `CORS_ORIGINS`: Comma separated list of allowed origins (`*` for any)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "parity.toml";

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Server configuration errors: {}", .0.join(", "))]
    Invalid(Vec<String>),
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix in front of `/parity` routes, e.g. `/api`. Empty for none.
    pub api_prefix: String,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_prefix: String::new(),
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            body_limit_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerConfig,
}

impl ServerConfig {
    /// Parse a TOML document with a `[server]` table.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.server)
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply overrides from a key/value source (normally the process env).
    pub fn apply_overrides(&mut self, vars: &HashMap<String, String>) -> Result<(), ConfigError> {
        if let Some(host) = vars.get("HOST") {
            self.host = host.clone();
        }
        if let Some(port) = vars.get("PORT") {
            self.port = parse_env("PORT", port)?;
        }
        if let Some(prefix) = vars.get("API_PREFIX") {
            self.api_prefix = prefix.clone();
        }
        if let Some(env) = vars.get("APP_ENV") {
            self.environment = env.clone();
        }
        if let Some(origins) = vars.get("CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(limit) = vars.get("BODY_LIMIT_BYTES") {
            self.body_limit_bytes = parse_env("BODY_LIMIT_BYTES", limit)?;
        }
        Ok(())
    }

    /// Resolve the full configuration: defaults, then file, then `vars`.
    ///
    /// The file is `PARITY_CONFIG` when set (and must exist), otherwise
    /// `parity.toml` in the working directory when present.
    pub fn load_from(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = match vars.get("PARITY_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };
        config.apply_overrides(vars)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(&vars)
    }

    /// Check every setting, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.host.trim().is_empty() {
            errors.push("Host is required".to_string());
        }
        if self.port == 0 {
            errors.push("Invalid port number".to_string());
        }
        if !self.api_prefix.is_empty()
            && (!self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/'))
        {
            errors.push("API prefix must start with '/' and not end with '/'".to_string());
        }
        if self.body_limit_bytes == 0 {
            errors.push("Body limit must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }

    /// Socket address string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full path of a parity route, e.g. `route("/check")` → `/api/parity/check`.
    pub fn route(&self, path: &str) -> String {
        format!("{}/parity{}", self.api_prefix, path)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}
