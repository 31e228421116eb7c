//! Configuration loading for the Pokerun server.
//!
//! Reads `pokerun-config.yaml` into [`AppConfig`]. Every section has
//! defaults, so an empty or missing file yields a working local setup
//! backed by the in-memory store.
//!
//! Environment variables override YAML values:
//! - `DATABASE_URL` overrides `store.database_url`
//! - `POKERUN_PORT` overrides `server.port`
//! - `POKEAPI_URL` overrides `species.api_url`

use std::path::Path;

use pokerun_roster::DEFAULT_CALL_TIMEOUT_MS;
use pokerun_species::SpeciesConfig;
use serde::Deserialize;
use uuid::Uuid;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "pokerun-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The file is not valid YAML or does not match the schema.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value for {name}: {value}")]
    Env {
        /// Variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerSection,

    /// Persistence settings.
    #[serde(default)]
    pub store: StoreSection,

    /// PokeAPI species source.
    #[serde(default)]
    pub species: SpeciesConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingSection,

    /// Lookup data and admins loaded into the in-memory store. Ignored
    /// when a database is configured.
    #[serde(default)]
    pub seed: SeedSection,
}

impl AppConfig {
    /// Load configuration from a YAML file, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it cannot be parsed, or
    /// [`ConfigError::Env`] if an override is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] or [`ConfigError::Env`].
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise start from defaults. Environment
    /// overrides apply either way.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_file`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            let mut config = Self::default();
            config.apply_overrides(|name| std::env::var(name).ok())?;
            Ok(config)
        }
    }

    fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if `POKERUN_PORT` is not a port number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.store.database_url = Some(url);
        }
        if let Some(raw) = lookup("POKERUN_PORT") {
            self.server.port = raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::Env {
                    name: "POKERUN_PORT",
                    value: format!("{raw} ({e})"),
                })?;
        }
        if let Some(url) = lookup("POKEAPI_URL").filter(|v| !v.trim().is_empty()) {
            self.species.api_url = url;
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreSection {
    /// `PostgreSQL` connection URL. Without one the server keeps its data
    /// in memory.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Maximum pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Bound on every store call, in milliseconds.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,

    /// Run pending migrations at startup.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_call_timeout_ms() -> u64 {
    DEFAULT_CALL_TIMEOUT_MS
}

const fn default_run_migrations() -> bool {
    true
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: default_max_connections(),
            call_timeout_ms: default_call_timeout_ms(),
            run_migrations: default_run_migrations(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    String::from("info")
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Fixture data for running without a database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SeedSection {
    /// Games with their routes.
    #[serde(default)]
    pub games: Vec<SeedGame>,

    /// Player ids granted the admin role at startup.
    #[serde(default)]
    pub admins: Vec<Uuid>,

    /// Game made active at startup, by name.
    #[serde(default)]
    pub active_game: Option<String>,
}

/// One seeded game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedGame {
    /// Game name, e.g. `Kanto`.
    pub name: String,

    /// Route names.
    #[serde(default)]
    pub routes: Vec<String>,
}
