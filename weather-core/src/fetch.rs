//! Lifecycle of the outstanding weather lookup.
//!
//! The state lives in a single `watch` slot. Every submit re-enters
//! `Loading` and spawns one request; nothing cancels or orders the
//! requests, so when lookups overlap the one that completes last wins.

use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    model::{ErrorInfo, WeatherReport},
    provider::WeatherProvider,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Loading,
    Success(WeatherReport),
    Error(ErrorInfo),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

#[derive(Debug, Clone)]
pub struct FetchStateMachine {
    provider: Arc<dyn WeatherProvider>,
    state: Arc<watch::Sender<RequestState>>,
}

impl FetchStateMachine {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            provider,
            state: Arc::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Moves to `Loading` immediately and issues one request for `query`.
    ///
    /// Must be called within a Tokio runtime. The returned handle resolves
    /// once the outcome has been written; dropping it does not cancel the
    /// request.
    pub fn begin_fetch(&self, query: String) -> JoinHandle<()> {
        self.state.send_replace(RequestState::Loading);
        debug!(%query, "weather lookup started");

        let provider = Arc::clone(&self.provider);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let next = match provider.current_weather(&query).await {
                Ok(report) => {
                    debug!(%query, location = %report.location_name, "weather lookup succeeded");
                    RequestState::Success(report)
                }
                Err(err) => {
                    warn!(%query, error = %err, "weather lookup failed");
                    RequestState::Error(ErrorInfo::from(&err))
                }
            };
            state.send_replace(next);
        })
    }
}
