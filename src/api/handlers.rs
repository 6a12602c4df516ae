//! API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Html,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::error::ApiError;
use crate::api::AppState;
use crate::types::{Card, Reading, ReadingRequest};

const SERVICE_NAME: &str = "Golden Dawn Tarot AI";

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Golden Dawn Tarot AI</title>
</head>
<body>
    <h1>Golden Dawn Tarot AI</h1>
    <p>Tarot readings drawn from the Golden Dawn deck.</p>
    <ul>
        <li><a href="/docs">API documentation</a></li>
        <li><a href="/health">Health check</a></li>
        <li><a href="/cards">Card catalog</a></li>
        <li><a href="/spreads">Available spreads</a></li>
    </ul>
</body>
</html>
"#;

/// Landing page
pub async fn root() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Full card catalog
pub async fn list_cards(State(state): State<AppState>) -> Json<CardsResponse> {
    let catalog = state.catalog();
    Json(CardsResponse {
        deck: catalog.deck_name().to_string(),
        cards: catalog.all_cards().to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub deck: String,
    pub cards: Vec<Card>,
}

/// Spread catalog keyed by spread id
pub async fn list_spreads(
    State(state): State<AppState>,
) -> Result<Json<SpreadsResponse>, ApiError> {
    let spreads = serde_json::to_value(state.catalog().list_spreads())
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(SpreadsResponse { spreads }))
}

#[derive(Debug, Serialize)]
pub struct SpreadsResponse {
    pub spreads: serde_json::Value,
}

/// Draw, interpret and persist a new reading
pub async fn create_reading(
    State(state): State<AppState>,
    payload: Result<Json<ReadingRequest>, JsonRejection>,
) -> Result<Json<CreateReadingResponse>, ApiError> {
    let Json(payload) = payload?;
    let reading = state.service.create(&payload).await.map_err(|e| {
        tracing::error!(spread_type = %payload.spread_type, error = %e, "Error creating reading");
        ApiError::from(e)
    })?;

    let message = format!("Reading completed successfully: {}", reading.reading_id);

    Ok(Json(CreateReadingResponse {
        success: true,
        reading,
        message,
    }))
}

#[derive(Debug, Serialize)]
pub struct CreateReadingResponse {
    pub success: bool,
    pub reading: Reading,
    pub message: String,
}

/// Fetch a stored reading
pub async fn get_reading(
    State(state): State<AppState>,
    Path(reading_id): Path<String>,
) -> Result<Json<GetReadingResponse>, ApiError> {
    let reading = state.service.load(&reading_id).await.map_err(|e| {
        if !matches!(e, crate::Error::NotFound(_)) {
            tracing::error!(%reading_id, error = %e, "Error retrieving reading");
        }
        ApiError::from(e)
    })?;

    Ok(Json(GetReadingResponse { reading }))
}

#[derive(Debug, Serialize)]
pub struct GetReadingResponse {
    pub reading: Reading,
}
