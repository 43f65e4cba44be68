// Web server — Axum-based serving boundary for the inference pipeline.
//
// The model is loaded once, before the listener binds; every request
// shares the same immutable pipeline through AppState. All inference
// semantics live in the core facade — this layer only parses JSON and
// maps errors to status codes.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::pipeline::TopicPipeline;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TopicPipeline>,
}

/// Start the Axum server and block until it exits.
pub async fn run_server(pipeline: Arc<TopicPipeline>, bind: &str, port: u16) -> Result<()> {
    let state = AppState { pipeline };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Topical API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home() -> &'static str {
    "Let's do some topic modeling!"
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /predict request body. `top_n` defaults to 10 terms.
#[derive(Deserialize)]
struct PredictRequest {
    article: String,
    #[serde(default = "default_top_n")]
    top_n: usize,
}

fn default_top_n() -> usize {
    10
}

/// POST /predict — score one article, return the dominant topic and its
/// top terms as JSON.
async fn predict(State(state): State<AppState>, Json(request): Json<PredictRequest>) -> Response {
    match state.pipeline.infer(&request.article, request.top_n) {
        Ok(inference) => Json(inference).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Inference failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Inference failed")
        }
    }
}

/// Uniform JSON error body for API responses.
fn api_error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
