//! HTTP API handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::info::{CounterStep, InfoCounter, InfoRecord, Variant};
use crate::metrics::{self, LatencyTimer};

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Body served on `/`.
    pub greeting: Arc<str>,
    /// Parity counter for `/info`; one lock per request.
    pub counter: Arc<Mutex<InfoCounter>>,
}

impl AppState {
    /// Create new app state.
    pub fn new(server_name: &str, counter_start: i64) -> Self {
        Self::from_config(&Config {
            server_name: server_name.to_string(),
            counter_start,
            ..Config::default()
        })
    }

    /// Create app state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            greeting: Arc::from(config.greeting()),
            counter: Arc::new(Mutex::new(InfoCounter::new(config.counter_start))),
        }
    }

    /// Pick the next variant and step the counter as one critical section.
    pub async fn next_variant(&self) -> Variant {
        self.next_step().await.variant
    }

    /// Same as [`next_variant`](Self::next_variant), keeping the counter values.
    pub async fn next_step(&self) -> CounterStep {
        self.counter.lock().await.step()
    }

    /// Current counter value.
    pub async fn counter_value(&self) -> i64 {
        self.counter.lock().await.value()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Greeting handler - static text, never touches the counter.
pub async fn greeting(State(state): State<AppState>) -> Response {
    let _timer = LatencyTimer::new("/");
    debug!("Greeting requested");
    metrics::inc_greeting_requests();

    state.greeting.to_string().into_response()
}

/// Info handler - serves the record shape selected by the counter.
pub async fn info(State(state): State<AppState>) -> Response {
    let _timer = LatencyTimer::new("/info");
    let step = state.next_step().await;

    info!(
        variant = %step.variant,
        with_optional = (step.variant == Variant::Extended),
        before = step.before,
        after = step.after,
        "Sending info record"
    );
    metrics::inc_info_requests(step.variant);

    // Serialized here so the timer covers it
    Json(InfoRecord::for_variant(step.variant)).into_response()
}
