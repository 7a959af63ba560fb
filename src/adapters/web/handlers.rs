//! HTTP request handlers. Translate requests into recommendation port calls.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Multipart, State},
    http::Uri,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{ApiError, ApiResult};
use super::uploads::UploadStore;
use crate::domain::{Enumerations, RecommendationRequest, RecommendationResult};
use crate::ports::RecommendationPort;

pub const SERVICE_NAME: &str = "StyleAI Fashion Recommender";
pub const NO_IMAGE_MESSAGE: &str = "No image selected";
pub const INVALID_FILE_TYPE_MESSAGE: &str =
    "Invalid file type. Please upload PNG, JPG, JPEG, or GIF files.";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<dyn RecommendationPort>,
    pub uploads: UploadStore,
    pub enumerations: Enumerations,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Missing fields arrive as empty strings so validation reports them.
#[derive(Debug, Deserialize)]
pub struct QuickRecommendForm {
    #[serde(default)]
    pub skin_tone: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub dress_code: String,
}

/// Form options for the client: genders, dress codes and skin tones.
pub async fn index(State(state): State<AppState>) -> Json<Enumerations> {
    Json(state.enumerations)
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Recommendation from a caller-supplied tone; no image involved.
pub async fn quick_recommend(
    State(state): State<AppState>,
    Form(form): Form<QuickRecommendForm>,
) -> ApiResult<Json<RecommendationResult>> {
    let result = state
        .recommendations
        .quick_orchestrate(&form.skin_tone, &form.gender, &form.dress_code)
        .await?;
    Ok(Json(result))
}

/// Fields collected from the `/analyze` multipart body.
#[derive(Default)]
struct AnalyzeForm {
    image: Option<(String, Vec<u8>)>,
    gender: String,
    dress_code: String,
    preferences: String,
}

async fn read_analyze_form(mut multipart: Multipart) -> ApiResult<AnalyzeForm> {
    let mut form = AnalyzeForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed form data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed image upload: {}", e)))?;
                form.image = Some((file_name, bytes.to_vec()));
            }
            "gender" | "dress_code" | "preferences" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Malformed field {}: {}", name, e)))?;
                match name.as_str() {
                    "gender" => form.gender = value,
                    "dress_code" => form.dress_code = value,
                    _ => form.preferences = value,
                }
            }
            _ => {}
        }
    }
    Ok(form)
}

/// Full pipeline on an uploaded photo.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<RecommendationResult>> {
    let form = read_analyze_form(multipart).await?;

    let (file_name, bytes) = match form.image {
        Some((name, bytes)) if !name.is_empty() => (name, bytes),
        _ => return Err(ApiError::bad_request(NO_IMAGE_MESSAGE)),
    };
    if !UploadStore::allowed_file(&file_name) {
        return Err(ApiError::bad_request(INVALID_FILE_TYPE_MESSAGE));
    }

    let upload = state.uploads.save(&file_name, &bytes).await?;
    info!(path = %upload.path.display(), "image uploaded");

    let preferences = Some(form.preferences.trim().to_string()).filter(|p| !p.is_empty());
    let request = RecommendationRequest {
        gender: form.gender,
        dress_code: form.dress_code,
        preferences,
        image_reference: Some(upload.image_reference()),
    };

    // The upload is kept on success (including degraded results) so `image_path`
    // stays servable; only rejected requests remove it.
    match state.recommendations.orchestrate(request).await {
        Ok(mut result) => {
            result.image_path = Some(upload.public_path);
            Ok(Json(result))
        }
        Err(e) => {
            warn!(error = %e, "analysis rejected");
            state.uploads.remove(&upload).await;
            Err(e.into())
        }
    }
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}
