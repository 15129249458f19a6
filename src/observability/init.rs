//! Tracing subscriber setup.

use super::{tracer, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
const TRACE_FILE_NAME: &str = "catalogs-otlp.json";

/// Path of the trace file under `data_dir`.
#[must_use]
pub fn trace_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TRACE_FILE_NAME)
}

/// Installs the global subscriber exporting spans to the trace file.
///
/// Tracing is best effort: if the data directory cannot be created, or a
/// subscriber is already installed, this returns without doing anything.
/// Calling it more than once is harmless.
///
/// # Parameters
///
/// * `config` - Supplies `trace_level` and the data directory
///
/// # Example
///
/// ```rust
/// use catalogs::observability::init_tracing;
/// use catalogs::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: std::env::temp_dir().join("catalogs-doc"),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider =
        tracer::create_tracer_provider(trace_file_path(&config.data_dir), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
