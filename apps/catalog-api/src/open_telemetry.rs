use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    logs::LoggerProvider as SdkLoggerProvider,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, TracerProvider as SdkTracerProvider},
};
use std::env;
use tracing_subscriber::{Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: console output always, plus OTLP trace and
/// log export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
pub fn init_tracing() -> Result<(), anyhow::Error> {
    let service_name = env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "catalog-api".to_string());

    let (telemetry_layer, log_layer) = match env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(otlp_endpoint) => {
            global::set_text_map_propagator(TraceContextPropagator::new());

            let resource = Resource::new(vec![KeyValue::new("service.name", service_name.clone())]);

            let trace_exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_tonic()
                .with_endpoint(&otlp_endpoint)
                .build()?;

            let tracer_provider = SdkTracerProvider::builder()
                .with_batch_exporter(trace_exporter, runtime::Tokio)
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource.clone())
                .build();

            // Tracer must come from the provider before it is made global
            let tracer = tracer_provider.tracer(service_name);
            global::set_tracer_provider(tracer_provider);

            let log_exporter = opentelemetry_otlp::LogExporter::builder()
                .with_tonic()
                .with_endpoint(&otlp_endpoint)
                .build()?;

            let logger_provider = SdkLoggerProvider::builder()
                .with_batch_exporter(log_exporter, runtime::Tokio)
                .with_resource(resource)
                .build();

            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(OpenTelemetryTracingBridge::new(&logger_provider)),
            )
        }
        Err(_) => (None, None),
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "catalog=debug,catalog_api=debug,axum=info".into());

    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry_layer)
        .with(log_layer)
        .try_init()?;

    Ok(())
}
