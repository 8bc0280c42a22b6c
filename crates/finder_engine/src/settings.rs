use std::time::Duration;

use thiserror::Error;

/// Required credential for the generative-language API.
pub const API_KEY_VAR: &str = "API_KEY";
pub const MODEL_VAR: &str = "JOB_FINDER_MODEL";
pub const API_BASE_VAR: &str = "JOB_FINDER_API_BASE";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} environment variable not set")]
    MissingCredential { var: &'static str },
}

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub connect_timeout: Duration,
    /// `None` leaves the transport's own behaviour in place.
    pub request_timeout: Option<Duration>,
}

impl ServiceSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key =
            read(API_KEY_VAR).ok_or(ConfigError::MissingCredential { var: API_KEY_VAR })?;
        let mut settings = Self::new(api_key);
        if let Some(model) = read(MODEL_VAR) {
            settings.model = model;
        }
        if let Some(api_base) = read(API_BASE_VAR) {
            settings.api_base = api_base.trim_end_matches('/').to_string();
        }
        Ok(settings)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model)
    }
}
