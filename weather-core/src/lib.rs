//! Core library for the `weather` lookup widget.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeather provider behind a `WeatherProvider` trait
//! - The input controller and the fetch state machine
//! - The pure mapping from request state to rendered view
//!
//! It is used by `weather-cli`, but can also drive other front ends.

pub mod config;
pub mod fetch;
pub mod input;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use fetch::{FetchStateMachine, RequestState};
pub use input::InputController;
pub use model::{Condition, ErrorInfo, WeatherReport};
pub use presentation::{Icon, ReportView, View, icon_for};
pub use provider::{WeatherError, WeatherProvider, provider_from_config};
pub use session::WeatherSession;
