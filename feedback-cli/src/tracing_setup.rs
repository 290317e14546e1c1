//! Tracing setup for the feedback CLI
//!
//! Console output always goes through one compact fmt layer. With the
//! `telemetry` feature and `--otel`, spans are also exported over OTLP.
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (default: info, or debug with --debug)
//!   OTEL_EXPORTER_OTLP_ENDPOINT       # OTLP endpoint (default: http://localhost:4317)
//!   OTEL_SERVICE_NAME                 # Service name (default: feedback)

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    /// Export spans over OTLP; ignored unless built with `telemetry`
    pub otel: bool,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    let default = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[cfg(feature = "telemetry")]
fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_owned())
}

/// OTLP span export layer, present only when `--otel` is set.
#[cfg(feature = "telemetry")]
fn otel_layer<S>(
    config: &TracingConfig,
) -> Result<Option<tracing_opentelemetry::OpenTelemetryLayer<S, opentelemetry_sdk::trace::Tracer>>>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::{runtime, trace::TracerProvider, Resource};

    if !config.otel {
        return Ok(None);
    }

    let endpoint = env_or("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317");
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| anyhow!("OTLP exporter setup failed: {}", e))?;

    let service = env_or("OTEL_SERVICE_NAME", "feedback");
    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(Resource::new([KeyValue::new("service.name", service)]))
        .build();
    let tracer = provider.tracer("feedback-server");

    // The global handle keeps the provider (and its export loop) alive
    let _previous = opentelemetry::global::set_tracer_provider(provider);

    Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer)))
}

#[cfg(not(feature = "telemetry"))]
fn otel_layer(
    _config: &TracingConfig,
) -> Result<Option<tracing_subscriber::layer::Identity>> {
    Ok(None)
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(console)
        .with(otel_layer(config)?)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    if config.otel && cfg!(not(feature = "telemetry")) {
        tracing::warn!("--otel ignored: built without the telemetry feature");
    }
    Ok(())
}

/// Flush pending spans before exit.
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

