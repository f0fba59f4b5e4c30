// src/api/handlers.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::phrases;
use crate::state::AppState;
use crate::store::AffirmationRecord;

/// Notice appended to locally composed affirmations when no credential is
/// configured, so callers can tell remote generation was disabled.
const AI_DISABLED_NOTICE: &str = " [Add GROQ_API_KEY to .env for AI-powered affirmations]";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub mood: Option<String>,
    pub situation: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub affirmation: String,
    pub mood: String,
    pub id: u64,
    pub ai_generated: bool,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub affirmations: Vec<AffirmationRecord>,
}

/// Health check endpoint
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "AI Wellness Affirmation API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "ai_enabled": state.ai_enabled(),
    }))
}

/// POST /api/generate-affirmation
///
/// Validates the mood, generates an affirmation (remotely when a credential
/// is configured, locally otherwise), and appends the result to the store.
/// Validation failures never touch the store.
pub async fn generate_affirmation_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult<Json<GenerateResponse>> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request("No data provided"))?;

    let mood = request.mood.unwrap_or_default().trim().to_string();
    let situation = request.situation.unwrap_or_default().trim().to_string();

    if mood.is_empty() {
        return Err(ApiError::bad_request("Mood is required"));
    }

    let affirmation = match &state.llm_client {
        Some(client) => client.generate(&mood, &situation).await,
        None => phrases::compose(&mood, &situation) + AI_DISABLED_NOTICE,
    };

    // ai_generated reflects credential presence, not remote success: a
    // request that silently fell back to the local composer is still
    // flagged as AI-generated.
    let record = state
        .store
        .append(mood, situation, affirmation, state.ai_enabled());

    info!(
        "Stored affirmation #{} for mood '{}' (ai_generated: {})",
        record.id, record.mood, record.ai_generated
    );

    Ok(Json(GenerateResponse {
        success: true,
        affirmation: record.affirmation,
        mood: record.mood,
        id: record.id,
        ai_generated: record.ai_generated,
    }))
}

/// GET /api/affirmations - all stored records in insert order, unbounded
pub async fn list_affirmations_handler(State(state): State<AppState>) -> Json<ListResponse> {
    let affirmations = state.store.snapshot();

    Json(ListResponse {
        success: true,
        count: affirmations.len(),
        affirmations,
    })
}
