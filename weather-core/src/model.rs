use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when a failure carries nothing usable from the provider.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to retrieve weather data";

/// Provider condition category (`weather[0].main`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Clouds,
    Haze,
    Rain,
    Clear,
    Drizzle,
    Snow,
    Thunderstorm,
    /// Any category outside the recognized set, kept verbatim.
    Other(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Clouds => "Clouds",
            Condition::Haze => "Haze",
            Condition::Rain => "Rain",
            Condition::Clear => "Clear",
            Condition::Drizzle => "Drizzle",
            Condition::Snow => "Snow",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        match value {
            "Clouds" => Condition::Clouds,
            "Haze" => Condition::Haze,
            "Rain" => Condition::Rain,
            "Clear" => Condition::Clear,
            "Drizzle" => Condition::Drizzle,
            "Snow" => Condition::Snow,
            "Thunderstorm" => Condition::Thunderstorm,
            other => Condition::Other(other.to_string()),
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::from(value.as_str())
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub country: String,
    /// Degrees Celsius, truncated toward zero.
    pub temperature_c: i64,
    pub feels_like_c: i64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub visibility_km: Option<f64>,
    pub condition: Condition,
    pub description: String,
    /// Client-side date of the lookup; the payload's own timestamp is ignored.
    pub observed_on: NaiveDate,
}

/// Display message for a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    message: String,
}

impl ErrorInfo {
    /// Builds the display message, upper-casing only the first character.
    pub fn new(message: &str) -> Self {
        let mut chars = message.chars();
        let message: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => GENERIC_ERROR_MESSAGE.to_string(),
        };

        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
