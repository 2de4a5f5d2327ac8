use crate::{
    Config,
    model::{ErrorInfo, GENERIC_ERROR_MESSAGE, WeatherReport},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::{fmt::Debug, sync::Arc};
use thiserror::Error;

pub mod openweather;

/// Every failure of a lookup, whatever its cause, surfaces as this one kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("{message}")]
    ProviderRequestFailed { message: String },
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

impl WeatherError {
    /// Extracts `message` from a provider error body, or falls back to the
    /// generic message when the body does not carry one.
    pub fn from_payload(body: &str) -> Self {
        let message = serde_json::from_str::<ProviderErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        WeatherError::ProviderRequestFailed { message }
    }

    pub fn generic() -> Self {
        WeatherError::ProviderRequestFailed {
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            WeatherError::ProviderRequestFailed { message } => message,
        }
    }
}

impl From<&WeatherError> for ErrorInfo {
    fn from(err: &WeatherError) -> Self {
        ErrorInfo::new(err.message())
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a free-form city or country query, in metric units.
    async fn current_weather(&self, query: &str) -> Result<WeatherReport, WeatherError>;
}

/// Construct the OpenWeather provider from config; the credential is required.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `weather configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    let provider = OpenWeatherProvider::with_options(
        api_key.to_owned(),
        &config.base_url,
        config.timeout(),
    )?;

    Ok(Arc::new(provider))
}
