//! Request handlers

use axum::extract::{Multipart, State};
use axum::Json;
use carousel_ocr_common::text_or_placeholder;
use tracing::{debug, info, warn};

use super::response::{
    ApiError, ExtractTextResponse, MessageResponse, INVALID_TYPE_DETAIL, WELCOME_MESSAGE,
};
use super::AppState;
use crate::ocr::{decode_image, extract_text};

/// Accepted upload content types
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/png", "image/jpeg"];

const FILE_FIELD: &str = "file";

/// GET / - liveness check
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse { message: WELCOME_MESSAGE.to_string() })
}

/// POST /extract-text - OCR an uploaded PNG/JPEG
///
/// # Errors
/// - 400: not PNG/JPEG, missing `file` field, malformed multipart body
/// - 500: decode or OCR failure
pub async fn extract_text_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, ApiError> {
    let (filename, content_type, bytes) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError { status: e.status(), detail: e.body_text() })?
            .ok_or_else(|| ApiError::bad_request("Campo 'file' ausente no formulário."))?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);

        if !content_type
            .as_deref()
            .is_some_and(|ct| ALLOWED_CONTENT_TYPES.contains(&ct))
        {
            warn!("rejected upload {:?} with content type {:?}", filename, content_type);
            return Err(ApiError::bad_request(INVALID_TYPE_DETAIL));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError { status: e.status(), detail: e.body_text() })?;
        break (filename, content_type, bytes);
    };

    debug!(
        "upload {:?} ({:?}, {} bytes)",
        filename,
        content_type,
        bytes.len()
    );

    let engine = state.engine.clone();
    let lang = state.lang.clone();
    let cleaned = tokio::task::spawn_blocking(move || {
        let image = decode_image(&bytes)?;
        extract_text(engine.as_ref(), &image, &lang)
    })
    .await
    .map_err(ApiError::processing)?
    .map_err(|e| {
        warn!("ocr failed for {:?}: {}", filename, e);
        ApiError::processing(e)
    })?;

    info!("ocr complete for {:?}: {} chars", filename, cleaned.chars().count());

    Ok(Json(ExtractTextResponse {
        filename,
        text: text_or_placeholder(&cleaned).to_string(),
    }))
}
