use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

const DEFAULT_AI_MODEL_URL: &str = "http://langchain-service:7860";
const DEFAULT_VECTOR_DB_URL: &str = "http://chromadb:8000";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub readings: ReadingsSection,
    pub interpretation: InterpretationSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("TAROT_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TAROT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        // Legacy deployment variables
        if let Ok(url) = env::var("AI_MODEL_URL") {
            config.interpretation.ai_model_url = url;
        }
        if let Ok(url) = env::var("VECTOR_DB_URL") {
            config.interpretation.vector_db_url = url;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        if self.readings.path.trim().is_empty() {
            bail!("readings.path must be specified");
        }
        if self.interpretation.timeout_secs == 0 {
            bail!("interpretation.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_permissive: bool,
    /// Directory served under `/static`
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7870,
            cors_permissive: true,
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadingsSection {
    pub path: String,
    pub id_scheme: IdScheme,
}

impl Default for ReadingsSection {
    fn default() -> Self {
        Self {
            path: "./readings".to_string(),
            id_scheme: IdScheme::default(),
        }
    }
}

/// How reading identifiers are generated
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// `reading_<uuid v4>`
    #[default]
    Random,
    /// `reading_<YYYYmmdd_HHMMSS>_<1000-9999>`, as older deployments wrote
    Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterpretationSection {
    pub strategy: StrategyKind,
    pub timeout_secs: u64,
    /// Placeholder; no strategy calls it yet
    pub ai_model_url: String,
    /// Placeholder; no strategy calls it yet
    pub vector_db_url: String,
}

impl Default for InterpretationSection {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            timeout_secs: 30,
            ai_model_url: DEFAULT_AI_MODEL_URL.to_string(),
            vector_db_url: DEFAULT_VECTOR_DB_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Template,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
