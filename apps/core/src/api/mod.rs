//! # API Module
//!
//! HTTP facade over the analysis pipeline:
//! - `GET /process?url=` runs Scraper -> EquiCheck -> Riskify and returns
//!   the combined report
//! - `GET /numeracy-questions` returns the Berlin Numeracy Test questions
//! - `POST /numeracy-score` scores submitted answers
//!
//! Errors surface as JSON `{"error": ...}` bodies: validation problems as
//! 400, everything else as 500.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::analysis::{EquiCheck, EquiCheckReport};
use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::models::ScrapedDocument;
use crate::risk::{numeracy, RiskAnalyzer, RiskReport};
use crate::scrape::Scraper;

/// Shared, immutable application state. The keyword lexicon inside
/// `EquiCheck` is loaded once at startup.
pub struct AppState {
    pub scraper: Scraper,
    pub equicheck: EquiCheck,
    pub risk: RiskAnalyzer,
    pub settings: Settings,
}

/// Combined response of the full pipeline.
#[derive(Debug, Serialize)]
struct ProcessResponse {
    source_url: String,
    scraped_content: ScrapedDocument,
    equicheck_analysis: EquiCheckReport,
    riskify_analysis: RiskReport,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/process", get(process_url))
        .route("/numeracy-questions", get(numeracy_questions))
        .route("/numeracy-score", post(numeracy_score))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve the API.
pub async fn serve(state: Arc<AppState>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))
}

/// `GET /process?url=` - full analysis pipeline for a URL.
async fn process_url(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>> {
    let url = params
        .get("url")
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("'url' query parameter is required.".to_string()))?;

    info!("Processing URL: {}", url);

    // Artifacts for this request live under a unique directory so
    // concurrent requests never collide.
    let request_dir = state.settings.artifacts_dir.join(Uuid::new_v4().to_string());
    let images_dir = request_dir.join("images");
    let riskify_dir = request_dir.join("riskify_artifacts");
    tokio::fs::create_dir_all(&riskify_dir).await?;

    let scraped = state.scraper.run(url, Some(&images_dir)).await?;
    if scraped.is_empty() {
        return Err(AppError::Extraction(
            "Could not extract text from the URL.".to_string(),
        ));
    }

    let equicheck_analysis = state.equicheck.analyze_document(&scraped);
    let riskify_analysis = state.risk.run(&scraped.text, Some(&riskify_dir))?;

    let response = ProcessResponse {
        source_url: url.clone(),
        scraped_content: scraped,
        equicheck_analysis,
        riskify_analysis,
    };
    Ok(Json(serde_json::to_value(response)?))
}

/// `GET /numeracy-questions` - the question bank, answers stripped.
async fn numeracy_questions() -> Json<Value> {
    Json(serde_json::json!(numeracy::public_questions()))
}

/// `POST /numeracy-score` - score a JSON array of `{id, answer}` responses.
async fn numeracy_score(Json(payload): Json<Value>) -> Result<Json<Value>> {
    if !payload.is_array() {
        return Err(AppError::Validation(
            "Invalid or missing JSON payload.".to_string(),
        ));
    }
    let responses: Vec<numeracy::UserResponse> = serde_json::from_value(payload)?;
    let result = numeracy::score(&responses);
    Ok(Json(serde_json::to_value(result)?))
}
