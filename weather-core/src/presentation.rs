//! Pure mapping from request state to what the display region shows.

use std::fmt;

use crate::{
    fetch::RequestState,
    model::{Condition, WeatherReport},
};

/// Display icon for a recognized condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Cloudy,
    Haze,
    Rainy,
    Sunny,
    Drizzle,
    Snowy,
    Thunderstorm,
}

impl Icon {
    /// Stable identifier, suitable for asset lookup.
    pub fn id(&self) -> &'static str {
        match self {
            Icon::Cloudy => "cloudy",
            Icon::Haze => "haze",
            Icon::Rainy => "rainy",
            Icon::Sunny => "sunny",
            Icon::Drizzle => "drizzle",
            Icon::Snowy => "snowy",
            Icon::Thunderstorm => "thunderstorm",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Cloudy => "☁",
            Icon::Haze => "🌫",
            Icon::Rainy => "🌧",
            Icon::Sunny => "☀",
            Icon::Drizzle => "🌦",
            Icon::Snowy => "❄",
            Icon::Thunderstorm => "⛈",
        }
    }
}

/// Unrecognized categories deliberately get no icon.
pub fn icon_for(condition: &Condition) -> Option<Icon> {
    match condition {
        Condition::Clouds => Some(Icon::Cloudy),
        Condition::Haze => Some(Icon::Haze),
        Condition::Rain => Some(Icon::Rainy),
        Condition::Clear => Some(Icon::Sunny),
        Condition::Drizzle => Some(Icon::Drizzle),
        Condition::Snow => Some(Icon::Snowy),
        Condition::Thunderstorm => Some(Icon::Thunderstorm),
        Condition::Other(_) => None,
    }
}

/// Formatted fields of the report card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub icon: Option<Icon>,
    /// "Paris, FR"
    pub location: String,
    /// dd/mm/yyyy
    pub date: String,
    pub temperature: String,
    pub description: String,
    pub visibility: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
}

impl From<&WeatherReport> for ReportView {
    fn from(report: &WeatherReport) -> Self {
        let visibility = match report.visibility_km {
            Some(km) => format!("{km} km"),
            None => "n/a".to_string(),
        };

        Self {
            icon: icon_for(&report.condition),
            location: format!("{}, {}", report.location_name, report.country),
            date: report.observed_on.format("%d/%m/%Y").to_string(),
            temperature: format!("{} °C", report.temperature_c),
            description: report.description.clone(),
            visibility,
            feels_like: format!("{} °C", report.feels_like_c),
            humidity: format!("{} %", report.humidity_pct),
            wind: format!("{} m/s", report.wind_speed_mps),
        }
    }
}

/// Exactly one of these occupies the display region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Shown only before the first submit.
    Prompt,
    Loading,
    Error(String),
    Report(ReportView),
}

impl From<&RequestState> for View {
    fn from(state: &RequestState) -> Self {
        match state {
            RequestState::Idle => View::Prompt,
            RequestState::Loading => View::Loading,
            RequestState::Error(info) => View::Error(info.message().to_string()),
            RequestState::Success(report) => View::Report(ReportView::from(report)),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Prompt => write!(f, "Enter a city or country to see its weather."),
            View::Loading => write!(f, "Loading..."),
            View::Error(message) => write!(f, "{message}"),
            View::Report(r) => {
                let icon = r.icon.map(|i| i.glyph()).unwrap_or(" ");
                writeln!(f, "{icon}  {}", r.location)?;
                writeln!(f, "   {}", r.date)?;
                writeln!(f)?;
                writeln!(f, "   {}", r.temperature)?;
                writeln!(f, "   {}", r.description)?;
                writeln!(f)?;
                writeln!(f, "   Visibility  {:<12} Feels like  {}", r.visibility, r.feels_like)?;
                write!(f, "   Humidity    {:<12} Wind        {}", r.humidity, r.wind)
            }
        }
    }
}
