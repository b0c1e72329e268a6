use crate::error::{AppError, Result};

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub gemini: GeminiConfig,
    pub profile_service: ProfileServiceConfig,
}

/// Completion-endpoint settings. The API key is optional on purpose: a
/// missing key must not prevent startup: generation degrades to fallback
/// results that tell the user to configure the key.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

/// Where to read stored business profiles from. Unset means the service
/// runs profile-less and every prompt is built from request fields alone.
#[derive(Debug, Clone)]
pub struct ProfileServiceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let (default_host, default_port, default_log_level) = match environment.as_str() {
            "production" => ("0.0.0.0", 8807, "info"),
            "staging" => ("0.0.0.0", 8807, "debug"),
            _ => ("127.0.0.1", 8807, "debug"),
        };

        Ok(Config {
            host: env::var("GENERATION_HOST").unwrap_or_else(|_| default_host.to_string()),
            port: env::var("GENERATION_PORT")
                .unwrap_or_else(|_| default_port.to_string())
                .parse()
                .map_err(|e| AppError::ConfigurationError(format!("Invalid port: {}", e)))?,
            environment,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level.to_string()),
            gemini: GeminiConfig::from_env()?,
            profile_service: ProfileServiceConfig::from_env()?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(AppError::ConfigurationError(
                "Host cannot be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(AppError::ConfigurationError(format!(
                "Invalid port: {}",
                self.port
            )));
        }

        self.gemini.validate()?;
        self.profile_service.validate()?;

        Ok(())
    }
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(GeminiConfig {
            // Missing key is tolerated: checked per call, surfaced as a
            // fallback result, never as a startup failure.
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            max_output_tokens: env::var("GEMINI_MAX_OUTPUT_TOKENS")
                .unwrap_or_else(|_| "8192".to_string())
                .parse()
                .map_err(|e| {
                    AppError::ConfigurationError(format!("Invalid GEMINI_MAX_OUTPUT_TOKENS: {}", e))
                })?,
            temperature: env::var("GEMINI_TEMPERATURE")
                .unwrap_or_else(|_| "0.7".to_string())
                .parse()
                .map_err(|e| {
                    AppError::ConfigurationError(format!("Invalid GEMINI_TEMPERATURE: {}", e))
                })?,
            timeout_seconds: env::var("GEMINI_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|e| {
                    AppError::ConfigurationError(format!("Invalid GEMINI_TIMEOUT_SECONDS: {}", e))
                })?,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(AppError::ConfigurationError(
                "Gemini API URL cannot be empty".to_string(),
            ));
        }

        if self.model.is_empty() {
            return Err(AppError::ConfigurationError(
                "Gemini model cannot be empty".to_string(),
            ));
        }

        if self.max_output_tokens == 0 || self.max_output_tokens > 65536 {
            return Err(AppError::ConfigurationError(format!(
                "Invalid max_output_tokens: {} (must be 1-65536)",
                self.max_output_tokens
            )));
        }

        if self.temperature < 0.0 || self.temperature > 2.0 {
            return Err(AppError::ConfigurationError(format!(
                "Invalid temperature: {} (must be 0.0-2.0)",
                self.temperature
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(AppError::ConfigurationError(
                "Gemini timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

impl ProfileServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(ProfileServiceConfig {
            base_url: env::var("PROFILE_SERVICE_URL").ok().filter(|v| !v.is_empty()),
            timeout_seconds: env::var("PROFILE_SERVICE_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|e| {
                    AppError::ConfigurationError(format!(
                        "Invalid PROFILE_SERVICE_TIMEOUT_SECONDS: {}",
                        e
                    ))
                })?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::ConfigurationError(
                    "Profile service URL must start with http:// or https://".to_string(),
                ));
            }
        }

        Ok(())
    }
}

// Development configuration defaults
impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8807,
            environment: "development".to_string(),
            log_level: "debug".to_string(),
            gemini: GeminiConfig::default(),
            profile_service: ProfileServiceConfig::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: "".to_string(),
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash".to_string(),
            max_output_tokens: 8192,
            temperature: 0.7,
            timeout_seconds: 60,
        }
    }
}

impl Default for ProfileServiceConfig {
    fn default() -> Self {
        ProfileServiceConfig {
            base_url: None,
            timeout_seconds: 10,
        }
    }
}
