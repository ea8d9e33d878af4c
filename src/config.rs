use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapter::MlEngineConfig;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Settings {
    pub http_port: u16,
    /// Vocabulary CSV mapping class ids to names
    pub vocabulary_path: PathBuf,
    /// Directory of TFRecord files to sample from
    pub records_dir: PathBuf,
    pub predict_endpoint: String,
    pub predict_project: String,
    pub predict_model: String,
    pub predict_version: String,
    pub predict_token: Option<String>,
    pub predict_timeout: Duration,
    /// Number of bars on the random prediction chart
    pub top_k: usize,
    pub landing_video_id: String,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_port(self.http_port)?;
        validate_non_empty("APP_PREDICT_ENDPOINT", &self.predict_endpoint)?;
        validate_non_empty("APP_PREDICT_PROJECT", &self.predict_project)?;
        validate_non_empty("APP_PREDICT_MODEL", &self.predict_model)?;
        validate_non_empty("APP_PREDICT_VERSION", &self.predict_version)?;
        if self.top_k == 0 {
            return Err(AppError::Config("APP_TOP_K must be at least 1".into()));
        }
        if self.predict_timeout.is_zero() {
            return Err(AppError::Config(
                "APP_PREDICT_TIMEOUT_SECS cannot be 0".into(),
            ));
        }
        Ok(())
    }

    pub fn ml_engine(&self) -> MlEngineConfig {
        MlEngineConfig {
            endpoint: self.predict_endpoint.clone(),
            project: self.predict_project.clone(),
            model: self.predict_model.clone(),
            version: self.predict_version.clone(),
            access_token: self.predict_token.clone(),
            timeout: self.predict_timeout,
        }
    }
}

fn validate_non_empty(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Config(format!("{name} cannot be empty")));
    }
    Ok(())
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), AppError> {
    if port == 0 {
        return Err(AppError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

/// Read an optional value from environment variable, with support for _FILE suffix (Docker Secrets)
fn get_optional_env_or_file(env_name: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let file_env = format!("{env_name}_FILE");
    if let Ok(file_path) = env::var(&file_env) {
        return match fs::read_to_string(&file_path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) => Err(format!("Failed to read {file_env}: {e}").into()),
        };
    }

    Ok(env::var(env_name).ok())
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn get_configuration() -> Result<Settings, Box<dyn std::error::Error>> {
    let records_dir = env::var("APP_RECORDS_DIR")
        .map_err(|_| "Missing required environment variable: APP_RECORDS_DIR")?;
    let predict_project = env::var("APP_PREDICT_PROJECT")
        .map_err(|_| "Missing required environment variable: APP_PREDICT_PROJECT")?;

    let http_port = env_or("HTTP_PORT", "8080").parse::<u16>()?;
    let predict_timeout_secs = env_or("APP_PREDICT_TIMEOUT_SECS", "30").parse::<u64>()?;
    let top_k = env_or("APP_TOP_K", "5").parse::<usize>()?;

    let settings = Settings {
        http_port,
        vocabulary_path: PathBuf::from(env_or("APP_VOCABULARY_PATH", "vocabulary.csv")),
        records_dir: PathBuf::from(records_dir),
        predict_endpoint: env_or("APP_PREDICT_ENDPOINT", "https://ml.googleapis.com"),
        predict_project,
        predict_model: env_or("APP_PREDICT_MODEL", "test_Moe"),
        predict_version: env_or("APP_PREDICT_VERSION", "v1"),
        predict_token: get_optional_env_or_file("APP_PREDICT_TOKEN")?,
        predict_timeout: Duration::from_secs(predict_timeout_secs),
        top_k,
        landing_video_id: env_or("APP_LANDING_VIDEO_ID", "iVecSyZJbUU"),
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
