use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::model::{Condition, WeatherReport};

use super::{WeatherError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Provider against a custom endpoint, with an optional transport timeout.
    pub fn with_options(api_key: String, base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    /// Meters; missing for some stations.
    visibility: Option<f64>,
}

/// Maps a successful `/weather` body onto a report dated `observed_on`.
pub(crate) fn parse_current(body: &str, observed_on: NaiveDate) -> Result<WeatherReport> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather current JSON")?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .context("OpenWeather response contained no weather entry")?;

    Ok(WeatherReport {
        location_name: parsed.name,
        country: parsed.sys.country,
        temperature_c: parsed.main.temp.trunc() as i64,
        feels_like_c: parsed.main.feels_like.trunc() as i64,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        visibility_km: parsed.visibility.map(|m| m / 1000.0),
        condition: Condition::from(weather.main),
        description: weather.description,
        observed_on,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn current_weather(&self, query: &str) -> Result<WeatherReport, WeatherError> {
        let res = self
            .http
            .get(self.endpoint())
            .query(&[
                ("q", query),
                ("units", "metric"),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "Failed to send request to OpenWeather");
                WeatherError::generic()
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            warn!(error = %err, "Failed to read OpenWeather response body");
            WeatherError::generic()
        })?;

        if !status.is_success() {
            debug!(%status, body = %truncate_body(&body), "OpenWeather request failed");
            return Err(WeatherError::from_payload(&body));
        }

        parse_current(&body, Local::now().date_naive()).map_err(|err| {
            warn!(error = %format!("{err:#}"), "Unusable OpenWeather response");
            WeatherError::generic()
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
