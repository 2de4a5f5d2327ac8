use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};

use crate::{
    fetch::{FetchStateMachine, RequestState},
    input::InputController,
    presentation::View,
    provider::WeatherProvider,
};

/// Session-scoped owner of the query and the request state.
#[derive(Debug)]
pub struct WeatherSession {
    input: InputController,
    fetch: FetchStateMachine,
}

impl WeatherSession {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            input: InputController::new(),
            fetch: FetchStateMachine::new(provider),
        }
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.input.set_query(text);
    }

    pub fn can_submit(&self) -> bool {
        self.input.can_submit()
    }

    pub fn submit(&mut self) -> Option<JoinHandle<()>> {
        self.input.submit(&self.fetch)
    }

    pub fn state(&self) -> RequestState {
        self.fetch.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.fetch.subscribe()
    }

    pub fn view(&self) -> View {
        View::from(&self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        presentation::ReportView,
        testing::{ScriptedProvider, sample_report},
    };
    use std::time::Duration;

    fn session() -> WeatherSession {
        WeatherSession::new(Arc::new(ScriptedProvider::default().respond(
            "Paris",
            Duration::from_millis(10),
            Ok(sample_report("Paris")),
        )))
    }

    #[tokio::test]
    async fn fresh_session_prompts() {
        let s = session();
        assert_eq!(s.view(), View::Prompt);
        assert!(!s.can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_walks_through_loading_to_report() {
        let mut s = session();
        s.set_query("Paris");

        let handle = s.submit().expect("submits");
        assert_eq!(s.view(), View::Loading);
        assert_eq!(s.query(), "");

        handle.await.unwrap();
        assert_eq!(
            s.view(),
            View::Report(ReportView::from(&sample_report("Paris")))
        );
    }

    #[tokio::test]
    async fn empty_submit_leaves_prompt() {
        let mut s = session();
        assert!(s.submit().is_none());
        assert_eq!(s.view(), View::Prompt);
    }

    #[tokio::test]
    async fn error_keeps_input_usable() {
        let mut s = session();
        s.set_query("Atlantis");
        s.submit().expect("submits").await.unwrap();
        assert_eq!(s.view(), View::Error("City not found".to_string()));

        s.set_query("Paris");
        assert!(s.can_submit());
        s.submit().expect("submits").await.unwrap();
        assert!(matches!(s.view(), View::Report(_)));
    }
}
