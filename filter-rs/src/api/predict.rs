//! Prediction API endpoints

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::classifier::Label;
use crate::error::FilterError;
use crate::inference::InferenceService;
use crate::store::FsArtifactStore;

/// Shared API state
pub struct AppState {
    pub service: Arc<InferenceService<FsArtifactStore>>,
}

/// Predict request: a single email body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub email: String,
}

/// Predict response: "spam" or "ham"
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
}

/// Raw-endpoint response: a header line ready to inject into the message
#[derive(Debug, Serialize)]
pub struct HeaderResponse {
    pub header: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub ready: bool,
}

/// API error body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

fn error_status(err: &FilterError) -> StatusCode {
    match err {
        FilterError::ModelNotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
        FilterError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// POST /predict/ - classify a JSON-wrapped email body
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ApiError>)> {
    match state.service.predict(&request.email).await {
        Ok(prediction) => Ok(Json(PredictResponse {
            prediction: prediction.label.as_str().to_string(),
        })),
        Err(e) => {
            warn!("prediction failed: {}", e);
            Err((error_status(&e), Json(ApiError::new(e.to_string()))))
        }
    }
}

/// POST /predict/raw - classify a raw message body
///
/// For mail servers that POST the message verbatim; the body is decoded as
/// UTF-8 with invalid sequences replaced, and the answer is a header line
/// the caller can stamp onto the message.
pub async fn predict_raw(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<HeaderResponse>, (StatusCode, Json<ApiError>)> {
    let text = String::from_utf8_lossy(&body);

    match state.service.predict(&text).await {
        Ok(prediction) => {
            let verdict = match prediction.label {
                Label::Spam => "yes",
                Label::Ham => "no",
            };
            Ok(Json(HeaderResponse {
                header: format!("X-Spam-ML-Score: {verdict}"),
            }))
        }
        Err(e) => {
            warn!("prediction failed: {}", e);
            Err((error_status(&e), Json(ApiError::new(e.to_string()))))
        }
    }
}

/// GET /health - liveness plus model readiness
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        ready: state.service.is_ready().await,
    })
}
