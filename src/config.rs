use std::env;
use std::fmt;

/// Home institution credited by the graduate-from bonus when the
/// environment does not override it: Prince Sattam bin Abdulaziz
/// University, spelled the way roster exports spell it.
pub const DEFAULT_HOME_INSTITUTION: &str = "جامعة الأمير سطام بن عبدالعزيز";

/// Top-level configuration for the command-line driver.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub home_institution: String,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let home_institution = env::var("ADMISSIONS_HOME_INSTITUTION")
            .unwrap_or_else(|_| DEFAULT_HOME_INSTITUTION.to_string())
            .trim()
            .to_string();
        if home_institution.is_empty() {
            return Err(ConfigError::BlankHomeInstitution);
        }

        let log_level =
            env::var("ADMISSIONS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            home_institution,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    BlankHomeInstitution,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BlankHomeInstitution => {
                write!(f, "ADMISSIONS_HOME_INSTITUTION must not be blank")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
