use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{info, warn};

use crate::catalog::{SummaryFormat, SummaryLength};
use crate::error::ApiError;
use crate::state::AppState;
use crate::summarize::interface::{SummarizeRequest, SummarizeResponse, SummaryStats};
use crate::translate::interface::{TranslateRequest, TranslateResponse};
use crate::utils::validation::validate_text;

pub async fn home() -> Json<Value> {
    Json(json!({
        "status": "online",
        "message": "Text Tools API is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `model_used` is the id that actually ran: an unknown `model` falls back to the default
pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let started = Instant::now();
    let request: TranslateRequest = parse_body(payload)?;

    let text = request.text.trim();
    validate_text(text, 1, state.config.system_config.max_text_length)?;

    let translation = state
        .translator
        .translate(text, &request.source, &request.target, &request.model)
        .await;

    let processing_time = elapsed_secs(started);
    info!("Translation finished in {}s", processing_time);

    Ok(Json(TranslateResponse {
        success: true,
        translated_text: translation.text,
        source_language: request.source,
        target_language: request.target,
        model_used: translation.model_id,
        processing_time,
    }))
}

/// `model_used` reports the resolved model id, as for `/translate`
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let started = Instant::now();
    let request: SummarizeRequest = parse_body(payload)?;

    let system_config = &state.config.system_config;
    let text = request.text.trim();
    validate_text(text, system_config.min_summary_length, system_config.max_text_length)?;

    let summary = state
        .summarizer
        .summarize(
            text,
            &request.model,
            SummaryLength::from_key(&request.length),
            SummaryFormat::from_key(&request.format),
        )
        .await;

    let processing_time = elapsed_secs(started);
    info!("Summarization finished in {}s", processing_time);

    Ok(Json(SummarizeResponse {
        success: true,
        stats: SummaryStats::compute(text, &summary.text),
        summary: summary.text,
        model_used: summary.model_id,
        length: request.length,
        format: request.format,
        processing_time,
    }))
}

pub async fn languages(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "languages": state.catalog.languages
    }))
}

pub async fn translation_models(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "models": state.catalog.translation_models.models()
    }))
}

pub async fn summarization_models(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "models": state.catalog.summarization_models.models()
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Decode a JSON body; a missing or unparsable body, or one that is null, false, zero or empty,
/// counts as no data
fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(value) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection);
        ApiError::NoData
    })?;

    let is_empty = match &value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    };
    if is_empty {
        return Err(ApiError::NoData);
    }

    serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Seconds since `started`, two decimal places
fn elapsed_secs(started: Instant) -> f64 {
    (started.elapsed().as_secs_f64() * 100.0).round() / 100.0
}
