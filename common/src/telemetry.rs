// Telemetry module for structured logging and metrics

use anyhow::Result;
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `env_mode == "development"` selects a human-readable format; any other
/// value selects JSON formatting for log aggregation. `RUST_LOG` overrides
/// the configured log level when set.
pub fn init_logging(env_mode: &str, log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {}", e))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if env_mode == "development" {
        registry
            .with(fmt::layer().with_target(false))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;
    }

    tracing::info!(
        env_mode = env_mode,
        log_level = log_level,
        "Structured logging initialized"
    );

    Ok(())
}

/// Install the Prometheus metrics recorder and describe the request metrics.
///
/// Returns the handle used to render the exposition text for `/metrics`;
/// callers pass it into the application state rather than reaching for a
/// global.
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;

    describe_counter!(
        "http_requests_total",
        "Total number of handled HTTP requests"
    );
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request latency in seconds"
    );

    Ok(handle)
}
