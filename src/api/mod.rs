// API Surface
// Thin axum layer over the analysis pipeline: request validation, error
// mapping, and the endpoint aliases. No scoring logic lives here.

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::config::AppConfig;
use crate::models::{AnalysisResponse, ErrorBody, TextRequest, UrlRequest};
use crate::services::analysis::{analyze, AnalysisContext};
use crate::services::extraction::{ExtractError, PageFetcher};
use crate::services::ocr::OcrClient;

/// Upload limit for the image endpoint, checked before any processing.
pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;
/// Body limit for the multipart route; headroom above the file limit so the
/// explicit file-size check produces the 413, not the framework default.
const MULTIPART_BODY_LIMIT: usize = 4 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Text cannot be empty")]
    EmptyText,
    #[error("URL cannot be empty")]
    EmptyUrl,
    #[error(transparent)]
    Extraction(#[from] ExtractError),
    #[error("Image upload is missing a file field")]
    MissingFile,
    #[error("Invalid multipart payload")]
    InvalidUpload,
    #[error("Image exceeds the 1 MiB upload limit")]
    PayloadTooLarge,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Shared per-process collaborators behind the handlers.
pub struct AppState {
    pub context: AnalysisContext,
    pub fetcher: PageFetcher,
    pub ocr: OcrClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            context: AnalysisContext::from_config(config),
            fetcher: PageFetcher::new(),
            ocr: OcrClient::new(config.ocr_api_key.clone()),
        }
    }

    /// State with no network collaborators; used by tests.
    pub fn offline() -> Self {
        Self {
            context: AnalysisContext::offline(),
            fetcher: PageFetcher::new(),
            ocr: OcrClient::new(None),
        }
    }
}

async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "status": "active",
        "message": "FactCheck AI Backend is running."
    }))
}

pub async fn predict_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TextRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }
    Ok(Json(analyze(&request.text, &state.context).await))
}

pub async fn predict_url(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UrlRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(ApiError::EmptyUrl);
    }
    let text = state.fetcher.extract_article(request.url.trim()).await?;
    Ok(Json(analyze(&text, &state.context).await))
}

pub async fn predict_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::InvalidUpload)?
    {
        if field.file_name().is_some() || field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.png").to_string();
            let bytes = field.bytes().await.map_err(|_| ApiError::InvalidUpload)?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let (filename, bytes) = upload.ok_or(ApiError::MissingFile)?;
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::PayloadTooLarge);
    }

    let text = state.ocr.extract_text(&filename, bytes).await;
    Ok(Json(analyze(&text, &state.context).await))
}

fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    error!("[api] handler panicked; returning generic 500");
    let body = ErrorBody {
        detail: "Internal server error".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Build the application router. All text-analysis aliases dispatch to the
/// same handler.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/predict_text", post(predict_text))
        .route("/predict", post(predict_text))
        .route("/analyze/text", post(predict_text))
        .route("/predict_url", post(predict_url))
        .route(
            "/predict_image",
            post(predict_image).layer(DefaultBodyLimit::max(MULTIPART_BODY_LIMIT)),
        )
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analysis::Classification;

    #[tokio::test]
    async fn test_empty_text_rejected_before_scoring() {
        let state = Arc::new(AppState::offline());
        let result = predict_text(
            State(state),
            Json(TextRequest {
                text: "   \n ".to_string(),
            }),
        )
        .await;
        let err = result.err().expect("whitespace-only text must be rejected");
        assert!(matches!(err, ApiError::EmptyText));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_url_rejected() {
        let state = Arc::new(AppState::offline());
        let result = predict_url(
            State(state),
            Json(UrlRequest {
                url: String::new(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::EmptyUrl)));
    }

    #[tokio::test]
    async fn test_text_endpoint_returns_analysis() {
        let state = Arc::new(AppState::offline());
        let result = predict_text(
            State(state),
            Json(TextRequest {
                text: "SHOCKING secret EXPOSED - they don't want you to know! 100% guaranteed miracle!!!!"
                    .to_string(),
            }),
        )
        .await
        .expect("analysis should succeed");
        assert_eq!(result.0.classification, Classification::Fake);
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(ApiError::EmptyText.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Extraction(ExtractError::TooShort).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
