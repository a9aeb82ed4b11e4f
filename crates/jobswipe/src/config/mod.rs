use std::env;
use std::fmt;
use std::path::PathBuf;

/// Deployment stage, read from `APP_ENV`. Unknown values fall back to development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log filter used when `APP_LOG_LEVEL` is unset.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub data: DataConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var("APP_ENV")
            .map(|raw| AppEnvironment::parse_lossy(&raw))
            .unwrap_or(AppEnvironment::Development);

        let data = DataConfig {
            catalog_path: optional_path("JOBSWIPE_CATALOG_PATH")?,
            profile_path: optional_path("JOBSWIPE_PROFILE_PATH")?,
        };

        let log_level = env::var("APP_LOG_LEVEL")
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            data,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn optional_path(key: &'static str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Err(ConfigError::EmptyPath { key }),
        Ok(raw) => Ok(Some(PathBuf::from(raw.trim()))),
        Err(_) => Ok(None),
    }
}

/// Where the job catalog and student profile come from. `None` selects the built-in seed data.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    pub catalog_path: Option<PathBuf>,
    pub profile_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { key } => {
                write!(f, "{key} must be a file path when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
