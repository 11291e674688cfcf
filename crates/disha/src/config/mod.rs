use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the advisor binaries.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub catalogs: CatalogConfig,
    /// Optional override for the quiz hard cap, mainly used by demos and CI.
    pub quiz_max_questions: Option<u32>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let question_bank = env::var("APP_QUESTION_BANK").ok().map(PathBuf::from);
        let course_catalog = env::var("APP_COURSE_CATALOG").ok().map(PathBuf::from);

        let quiz_max_questions = match env::var("APP_QUIZ_MAX_QUESTIONS") {
            Ok(raw) => Some(raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "APP_QUIZ_MAX_QUESTIONS",
                value: raw,
            })?),
            Err(_) => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            catalogs: CatalogConfig {
                question_bank,
                course_catalog,
            },
            quiz_max_questions,
        })
    }
}

/// Tracing output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Optional on-disk overrides for the built-in catalogs.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub question_bank: Option<PathBuf>,
    pub course_catalog: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "{key} has invalid value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_QUESTION_BANK");
        env::remove_var("APP_COURSE_CATALOG");
        env::remove_var("APP_QUIZ_MAX_QUESTIONS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.catalogs.question_bank.is_none());
        assert!(config.catalogs.course_catalog.is_none());
    }

    #[test]
    fn load_picks_up_catalog_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("APP_COURSE_CATALOG", "/data/courses.csv");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.catalogs.course_catalog,
            Some(PathBuf::from("/data/courses.csv"))
        );
        reset_env();
    }

    #[test]
    fn load_rejects_unparseable_quiz_cap() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_QUIZ_MAX_QUESTIONS", "a dozen");
        let err = AppConfig::load().expect_err("non-numeric cap rejected");
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "APP_QUIZ_MAX_QUESTIONS"));
        reset_env();
    }
}
