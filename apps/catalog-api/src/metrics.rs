use opentelemetry::{
    KeyValue,
    metrics::{Counter, Histogram, MeterProvider},
};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    metrics::{MeterProviderBuilder, PeriodicReader, SdkMeterProvider},
};
use std::time::Duration;

pub struct Metrics {
    pub lookup_counter: Counter<u64>,
    pub lookup_duration: Histogram<f64>,
}

impl Metrics {
    pub fn new(provider: &SdkMeterProvider) -> Self {
        let meter = provider.meter("catalog");

        Self {
            lookup_counter: meter
                .u64_counter("catalog_lookups_total")
                .with_description("Total number of record lookups by kind and outcome")
                .build(),
            lookup_duration: meter
                .f64_histogram("catalog_lookup_duration_milliseconds")
                .with_description("Record lookup duration")
                .build(),
        }
    }

    /// `outcome` is one of `found`, `not_found` or `failed`.
    pub fn record_lookup(&self, kind: &'static str, outcome: &'static str, elapsed: Duration) {
        self.lookup_counter.add(
            1,
            &[KeyValue::new("kind", kind), KeyValue::new("outcome", outcome)],
        );
        self.lookup_duration
            .record(elapsed.as_secs_f64() * 1000.0, &[KeyValue::new("kind", kind)]);
    }
}

/// Creates the meter provider. Metrics are only exported when
/// `OTEL_EXPORTER_OTLP_ENDPOINT` is set; otherwise they stay in-process.
pub fn init_metrics() -> Result<(SdkMeterProvider, Metrics), anyhow::Error> {
    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "catalog-api".to_string());

    let resource = Resource::new(vec![KeyValue::new("service.name", service_name)]);

    let mut builder = MeterProviderBuilder::default().with_resource(resource);

    if let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        let exporter = opentelemetry_otlp::MetricExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint)
            .build()?;

        let reader = PeriodicReader::builder(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_interval(Duration::from_secs(15))
            .build();

        builder = builder.with_reader(reader);
    }

    let provider = builder.build();
    let metrics = Metrics::new(&provider);

    Ok((provider, metrics))
}
