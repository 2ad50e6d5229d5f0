use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Settings for the hosted file service documents are uploaded to.
#[derive(Clone, Debug, Default)]
pub struct UploadConfig {
    /// Upload endpoint. Uploads are rejected when unset.
    pub url: Option<String>,
    /// Preset forwarded as the `upload_preset` form field.
    pub preset: Option<String>,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,
    pub session_secure: bool,
    pub upload: UploadConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_secure: std::env::var("SESSION_SECURE")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            upload: UploadConfig {
                url: optional("UPLOAD_URL"),
                preset: optional("UPLOAD_PRESET"),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
