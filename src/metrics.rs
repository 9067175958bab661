//! Prometheus metrics for request counts and handler latency.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::debug;

use crate::error::ServerError;
use crate::info::Variant;

// === Metric Name Constants ===

/// `/` requests counter metric name.
pub const METRIC_GREETING_REQUESTS: &str = "greeting_requests_total";
/// `/info` requests counter metric name, labelled by variant.
pub const METRIC_INFO_REQUESTS: &str = "info_requests_total";
/// HTTP handler latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_GREETING_REQUESTS,
        "Total number of greeting requests served"
    );
    describe_counter!(
        METRIC_INFO_REQUESTS,
        "Total number of info requests served, by record variant"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP handler latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder with a scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<(), ServerError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| ServerError::Metrics(e.to_string()))
}

/// Increment greeting requests counter.
pub fn inc_greeting_requests() {
    counter!(METRIC_GREETING_REQUESTS).increment(1);
}

/// Increment info requests counter for the served variant.
pub fn inc_info_requests(variant: Variant) {
    counter!(METRIC_INFO_REQUESTS, "variant" => variant.to_string()).increment(1);
}

/// RAII guard for timing a handler.
/// Records latency for its endpoint when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Start timing a request to `endpoint`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.elapsed_ms();
        histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => self.endpoint).record(latency_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("/test");
        sleep(Duration::from_millis(10));
        assert!(timer.elapsed_ms() >= 9.0);
    }

    #[test]
    fn counters_and_timer_reach_the_recorder() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            init_metrics();
            inc_greeting_requests();
            inc_info_requests(Variant::Base);
            inc_info_requests(Variant::Extended);
            inc_info_requests(Variant::Extended);
            let _timer = LatencyTimer::new("/info");
        });

        let rendered = handle.render();
        assert!(rendered.contains("greeting_requests_total 1"));
        assert!(rendered.contains(r#"info_requests_total{variant="base"} 1"#));
        assert!(rendered.contains(r#"info_requests_total{variant="extended"} 2"#));
        assert!(rendered.contains(r#"http_request_latency_ms_count{endpoint="/info"} 1"#));
    }
}
