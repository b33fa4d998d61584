//! Subscriber setup: `EnvFilter` plus an OpenTelemetry layer exporting to file.

use super::tracer;
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name recorded on every span.
const SERVICE_NAME: &str = "countrydir";

/// Name of the trace file inside the data directory.
const TRACE_FILE: &str = "countrydir-otlp.json";

/// Installs the global tracing subscriber.
///
/// Spans at or above `config.trace_level` (default `info`) are written to
/// `~/.local/share/zellij/countrydir/countrydir-otlp.json`. Setup failures are
/// silent and tracing stays disabled; repeated calls keep the first subscriber.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource, SERVICE_NAME);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
