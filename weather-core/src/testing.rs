//! Scripted provider shared by the unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::{collections::HashMap, sync::Mutex, time::Duration};

use crate::{
    model::{Condition, WeatherReport},
    provider::{WeatherError, WeatherProvider},
};

pub(crate) fn sample_report(location: &str) -> WeatherReport {
    WeatherReport {
        location_name: location.to_string(),
        country: "FR".to_string(),
        temperature_c: 26,
        feels_like_c: 27,
        humidity_pct: 64,
        wind_speed_mps: 4.6,
        visibility_km: Some(20.0),
        condition: Condition::Clear,
        description: "clear sky".to_string(),
        observed_on: NaiveDate::from_ymd_opt(2022, 6, 12).unwrap(),
    }
}

/// Answers each query after a fixed delay; unknown queries get "city not found".
#[derive(Debug, Default)]
pub(crate) struct ScriptedProvider {
    script: HashMap<String, (Duration, Result<WeatherReport, WeatherError>)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub(crate) fn respond(
        mut self,
        query: &str,
        delay: Duration,
        outcome: Result<WeatherReport, WeatherError>,
    ) -> Self {
        self.script.insert(query.to_string(), (delay, outcome));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for ScriptedProvider {
    async fn current_weather(&self, query: &str) -> Result<WeatherReport, WeatherError> {
        self.calls.lock().unwrap().push(query.to_string());

        match self.script.get(query) {
            Some((delay, outcome)) => {
                tokio::time::sleep(*delay).await;
                outcome.clone()
            }
            None => Err(WeatherError::from_payload(r#"{"message":"city not found"}"#)),
        }
    }
}
