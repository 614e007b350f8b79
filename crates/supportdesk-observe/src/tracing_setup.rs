//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! // Structured logging at the default `info` level
//! supportdesk_observe::tracing_setup::init_tracing(None, false).unwrap();
//!
//! // Debug logging with spans exported to stdout
//! supportdesk_observe::tracing_setup::init_tracing(Some("debug"), true).unwrap();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Instrumentation scope name reported on exported spans.
pub const TRACER_NAME: &str = "supportdesk";

/// Filter used when `RUST_LOG` is unset and no level is forced.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Kept so [`shutdown_tracing`] can flush it.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Build the env filter: an explicit level wins, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Stdout span exporter, registered as the global tracer provider.
fn stdout_provider() -> SdkTracerProvider {
    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .build();
    let _ = TRACER_PROVIDER.set(provider.clone());
    opentelemetry::global::set_tracer_provider(provider.clone());
    provider
}

/// Install the global subscriber: env filter, `fmt` output, and, when
/// `enable_otel` is set, an OpenTelemetry bridge.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(
    level: Option<&str>,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let otel_layer = enable_otel.then(|| {
        let tracer = stdout_provider().tracer(TRACER_NAME);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(otel_layer)
        .try_init()?;

    tracing::debug!(otel = enable_otel, "Tracing initialized");
    Ok(())
}

/// Flush and shut down the OpenTelemetry provider. No-op without `--otel`.
pub fn shutdown_tracing() {
    let Some(provider) = TRACER_PROVIDER.get() else {
        return;
    };
    if let Err(e) = provider.shutdown() {
        tracing::warn!(error = %e, "OpenTelemetry shutdown failed");
    }
}
