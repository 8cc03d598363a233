use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for QBR
///
/// Every section and field is optional in files and the environment; omitted
/// values keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct QbrConfig {
    /// Translation settings
    pub locale: LocaleConfig,
    /// External solver settings
    pub solver: SolverConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used for every user facing string
    pub locale: String,
    /// Locale consulted when a key or file is missing
    pub fallback: String,
    /// Directory holding `{locale}.json` files that override the embedded catalogs
    pub translations_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Program invoked with the facelet string as its last argument
    pub program: String,
    /// Extra arguments placed before the facelet string
    pub args: Vec<String>,
    /// Kill the solver after this many seconds; 0 waits forever
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines instead of human readable text
    pub json_logs: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback: "en".to_string(),
            translations_dir: Some("translations".to_string()),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            program: "kociemba".to_string(),
            args: Vec::new(),
            timeout_seconds: 60,
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: true,
        }
    }
}

impl QbrConfig {
    /// Load configuration from the current directory, see [`QbrConfig::load_from`]
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (qbr.toml, .qbr-rc) in `dir`
    /// 3. Environment variables (prefixed with QBR_, nested with `__`)
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&QbrConfig::default())?);

        let toml = dir.join("qbr.toml");
        if toml.exists() {
            builder = builder.add_source(File::from(toml));
        }

        let rc = dir.join(".qbr-rc");
        if rc.exists() {
            builder = builder.add_source(File::from(rc).format(config::FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("QBR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load .env file if it exists; returns whether one was loaded.
    ///
    /// Runs before telemetry exists, so the caller logs the outcome.
    pub fn load_env_file() -> Result<bool> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            return Ok(true);
        }
        Ok(false)
    }
}
