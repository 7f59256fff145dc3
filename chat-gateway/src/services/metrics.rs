use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static UPSTREAM_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Install the global recorder and the gateway's own counters.
///
/// Only the first call has any effect.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus recorder");
            return;
        }
    }

    let registry = Registry::new();

    let upstream_counter = match IntCounterVec::new(
        Opts::new(
            "chat_upstream_requests_total",
            "Chat completion calls to the upstream API by outcome",
        ),
        &["outcome"],
    ) {
        Ok(counter) => counter,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create chat_upstream_requests_total");
            return;
        }
    };

    if let Err(e) = registry.register(Box::new(upstream_counter.clone())) {
        tracing::error!(error = %e, "Failed to register chat_upstream_requests_total");
        return;
    }

    let _ = PROMETHEUS_REGISTRY.set(registry);
    let _ = UPSTREAM_REQUESTS_TOTAL.set(upstream_counter);
}

pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&registry.gather(), &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Count one upstream call. No-op until `init_metrics` has run.
pub fn record_upstream(outcome: &str) {
    if let Some(counter) = UPSTREAM_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}
