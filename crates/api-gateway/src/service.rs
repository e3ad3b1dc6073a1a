//! Gateway service: router construction, handlers, server lifecycle.

use crate::benchmark::run_benchmark;
use crate::domain::config::{BenchmarkConfig, GatewayConfig};
use crate::domain::error::{ApiError, GatewayError};
use crate::domain::types::{BenchmarkRecord, ProcessRequest, ProcessResponse};
use crate::middleware::create_cors_layer;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use duplex_engine::{square, DigitSequence};
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// API gateway service state
pub struct GatewayService {
    config: GatewayConfig,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl GatewayService {
    /// Create a new gateway service
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            shutdown_tx: None,
        })
    }

    /// Start the HTTP server and run until shutdown
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let router = self.build_router();
        let addr = self.config.http_addr();

        info!(addr = %addr, "Starting HTTP server");
        let listener = tokio::net::TcpListener::bind(addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await?;

        info!("API gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Build the HTTP router.
    ///
    /// Public so tests can drive the router without binding a socket.
    pub fn build_router(&self) -> Router {
        let state = AppState {
            benchmark: Arc::new(self.config.benchmark.clone()),
            max_digits: self.config.http.max_digits,
        };

        Router::new()
            .route("/api/process", post(handle_process))
            .route("/api/benchmark", get(handle_benchmark))
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&self.config.cors))
            .with_state(state)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    benchmark: Arc<BenchmarkConfig>,
    max_digits: usize,
}

/// Handle `POST /api/process`
async fn handle_process(State(state): State<AppState>, body: String) -> Response {
    // Parse request; malformed bodies get the wire error shape, not a
    // framework rejection
    let request: ProcessRequest = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            return ApiError::invalid_argument(format!("malformed request body: {}", e))
                .into_response();
        }
    };

    match process_digits(&request.digits, state.max_digits) {
        Ok(result) => (StatusCode::OK, Json(ProcessResponse::success(result))).into_response(),
        Err(e) => {
            warn!(status = %e.status, message = %e.message, "process request failed");
            e.into_response()
        }
    }
}

/// Validate the raw wire digits and run the engine.
fn process_digits(raw: &[i64], max_digits: usize) -> Result<Vec<u8>, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::invalid_argument("no data provided"));
    }

    if raw.len() > max_digits {
        return Err(ApiError::invalid_argument(format!(
            "too many digits: {} (limit {})",
            raw.len(),
            max_digits
        )));
    }

    // Reject negatives and oversized values before narrowing to u8 so the
    // error names the wire value the caller sent
    let mut digits = Vec::with_capacity(raw.len());
    for (index, &value) in raw.iter().enumerate() {
        if !(0..=9).contains(&value) {
            return Err(ApiError::invalid_argument(format!(
                "digit out of range at index {}: {} (must be 0-9)",
                index, value
            )));
        }
        digits.push(value as u8);
    }

    let sequence = DigitSequence::new(digits)?;
    Ok(square(&sequence)?)
}

/// Handle `GET /api/benchmark`
async fn handle_benchmark(State(state): State<AppState>) -> Result<Json<Vec<BenchmarkRecord>>, ApiError> {
    let config = BenchmarkConfig::clone(&state.benchmark);

    // Pure CPU work; keep it off the async reactor
    let records = tokio::task::spawn_blocking(move || run_benchmark(&config))
        .await
        .map_err(|e| ApiError::internal(format!("benchmark task failed: {}", e)))?;

    Ok(Json(records))
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "api-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
