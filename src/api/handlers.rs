use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::ingest::parse_equipment_csv;
use crate::models::{EquipmentRecord, PredictionResult};
use crate::recommend::generate_recommendations;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Parse an uploaded CSV and return the validated rows
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadResponse>> {
    let bytes = read_csv_upload(&mut multipart).await?;
    let rows = parse_equipment_csv(&bytes)?;

    tracing::info!(rows = rows.len(), "Parsed uploaded CSV");

    Ok(Json(UploadResponse {
        rows_count: rows.len(),
        rows,
    }))
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub rows_count: usize,
    pub rows: Vec<EquipmentRecord>,
}

/// Parse an uploaded CSV and assign a risk level per row
pub async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>> {
    let bytes = read_csv_upload(&mut multipart).await?;
    let rows = parse_equipment_csv(&bytes)?;
    let predictions = state.risk.predict(rows)?;

    tracing::info!(rows = predictions.len(), "Classified uploaded CSV");

    Ok(Json(PredictResponse {
        rows_count: predictions.len(),
        predictions,
    }))
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub rows_count: usize,
    pub predictions: Vec<PredictionResult>,
}

/// Parse, classify, and return one maintenance recommendation per row
pub async fn recommend(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecommendResponse>> {
    let bytes = read_csv_upload(&mut multipart).await?;
    let rows = parse_equipment_csv(&bytes)?;
    let predictions = state.risk.predict(rows)?;
    let recommendations = generate_recommendations(&predictions);

    tracing::info!(rows = recommendations.len(), "Generated recommendations");

    Ok(Json(RecommendResponse {
        rows_count: recommendations.len(),
        recommendations,
    }))
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub rows_count: usize,
    pub recommendations: Vec<String>,
}

/// Pull the CSV file out of the multipart body.
///
/// The extension check runs on the filename alone, before any of the file
/// content is read.
async fn read_csv_upload(multipart: &mut Multipart) -> Result<Bytes> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .ok_or_else(|| AppError::BadExtension("(missing filename)".to_string()))?
            .to_string();

        if !filename.to_ascii_lowercase().ends_with(".csv") {
            return Err(AppError::BadExtension(filename));
        }

        return Ok(field.bytes().await?);
    }

    Err(AppError::Upload("missing multipart field 'file'".to_string()))
}
