//! Runtime configuration read from the environment.
//!
//! A `.env` file next to the binary is honoured (loaded by `main` through `dotenv`).

use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const ENV_LOG: &str = "MINDCARE_LOG";
const ENV_LOG_FORMAT: &str = "MINDCARE_LOG_FORMAT";
const ENV_SEED: &str = "MINDCARE_SEED";
const ENV_LEXICON: &str = "MINDCARE_LEXICON";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `EnvFilter` directive string
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Seed for greeting selection; `None` draws from entropy
    pub seed: Option<u64>,
    /// External lexicon file replacing the built-in phrase lists
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
            seed: None,
            lexicon_path: None,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from `MINDCARE_*` environment variables.
    ///
    /// Unset or empty variables fall back to defaults; present but invalid values are errors.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(filter) = non_empty_var(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(format) = non_empty_var(ENV_LOG_FORMAT) {
            config.log_format = LogFormat::parse(&format)?;
        }
        if let Some(seed) = non_empty_var(ENV_SEED) {
            config.seed = Some(seed.trim().parse::<u64>()?);
        }
        config.lexicon_path = non_empty_var(ENV_LEXICON).map(PathBuf::from);

        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
