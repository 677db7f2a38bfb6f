use anyhow::Context;
use axum::{
    Router,
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use catalog::{
    CustomerService, JsonCustomerRepository, JsonProductRepository, Lookup, ProductService,
};
use tokio::signal;
use tokio::task::{self, JoinError};
use tracing::{Span, debug, error, info, instrument};

// Expose modules for use in main.rs and tests
pub mod metrics;
pub mod open_telemetry;

use metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
    pub products: Arc<ProductService>,
    pub customers_path: PathBuf,
    pub products_path: PathBuf,
    pub metrics: Arc<Metrics>,
}

// --- Request/Response DTOs ---

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            message: "not found".to_string(),
        }
    }
}

// --- Configuration ---

pub struct Config {
    pub listen_addr: String,
    pub customers_path: PathBuf,
    pub products_path: PathBuf,
}

pub fn load_config() -> Config {
    Config {
        listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        customers_path: PathBuf::from(
            std::env::var("CATALOG_CUSTOMERS_FILE")
                .unwrap_or_else(|_| "data/customers.json".to_string()),
        ),
        products_path: PathBuf::from(
            std::env::var("CATALOG_PRODUCTS_FILE")
                .unwrap_or_else(|_| "data/products.json".to_string()),
        ),
    }
}

// --- Wiring ---

/// Builds repositories and services for the configured stores.
pub fn build_state(config: &Config, metrics: Arc<Metrics>) -> AppState {
    let customer_repo = Arc::new(JsonCustomerRepository::new(&config.customers_path));
    let product_repo = Arc::new(JsonProductRepository::new(&config.products_path));

    AppState {
        customers: Arc::new(CustomerService::new(customer_repo.clone())),
        products: Arc::new(ProductService::new(product_repo.clone())),
        customers_path: customer_repo.path().to_path_buf(),
        products_path: product_repo.path().to_path_buf(),
        metrics,
    }
}

// --- Router Setup ---

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Customers
        .route("/api/customers/:id", get(get_customer_handler))
        // Products
        .route("/api/products/:id", get(get_product_handler))
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .with_state(state)
}

// --- Server Lifecycle ---

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    open_telemetry::init_tracing().context("Failed to initialize tracing")?;
    let (meter_provider, metrics) =
        metrics::init_metrics().context("Failed to initialize metrics")?;

    info!("Starting catalog API...");

    let config = load_config();
    info!(
        customers = ?config.customers_path,
        products = ?config.products_path,
        "Serving JSON stores"
    );

    let state = build_state(&config, Arc::new(metrics));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .context("Failed to bind port")?;

    info!(addr = %config.listen_addr, "Listening for requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(meter_provider))
        .await
        .context("Server error")?;

    opentelemetry::global::shutdown_tracer_provider();

    Ok(())
}

async fn shutdown_signal(meter_provider: opentelemetry_sdk::metrics::SdkMeterProvider) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");

    if let Err(e) = meter_provider.shutdown() {
        error!(error = %e, "Failed to shutdown meter provider");
    }
}

// --- Handlers ---

#[instrument(skip(state))]
async fn get_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let start = Instant::now();
    let customers = state.customers.clone();
    let span = Span::current();
    let result =
        task::spawn_blocking(move || span.in_scope(|| customers.get_customer(&id))).await;
    lookup_response("customer", result, start, &state.metrics)
}

#[instrument(skip(state))]
async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let start = Instant::now();
    let products = state.products.clone();
    let span = Span::current();
    let result = task::spawn_blocking(move || span.in_scope(|| products.get_product(&id))).await;
    lookup_response("product", result, start, &state.metrics)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let customers = state.customers_path.exists();
    let products = state.products_path.exists();
    let status = if customers && products {
        "healthy"
    } else {
        "degraded"
    };

    Json(json!({
        "status": status,
        "stores": {
            "customers": customers,
            "products": products,
        },
    }))
}

async fn version_handler() -> impl IntoResponse {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// --- Helper Functions ---

/// Maps the outcome of a blocking lookup task onto the HTTP contract.
///
/// Store failures answer like an absent record; the cause only goes to the log.
fn lookup_response<T: Serialize>(
    kind: &'static str,
    result: Result<catalog::Result<Lookup<T>>, JoinError>,
    start: Instant,
    metrics: &Metrics,
) -> Response {
    let (outcome, response) = match result {
        Ok(Ok(Lookup::Found(record))) => {
            ("found", (StatusCode::OK, Json(record)).into_response())
        }
        Ok(Ok(Lookup::NotFound)) => {
            debug!(kind, "Record not found");
            ("not_found", not_found())
        }
        Ok(Err(e)) => {
            error!(kind, error = %e, cause = e.kind(), "Store lookup failed");
            ("failed", not_found())
        }
        Err(e) => {
            error!(kind, error = %e, "Lookup task did not complete");
            ("failed", not_found())
        }
    };

    metrics.record_lookup(kind, outcome, start.elapsed());
    response
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response()
}
