//! Response bodies

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str =
    "Bem-vindo à API de Extração de Texto. Use o endpoint /extract-text para enviar uma imagem.";

pub const INVALID_TYPE_DETAIL: &str =
    "Tipo de arquivo inválido. Por favor, envie uma imagem PNG ou JPG.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractTextResponse {
    pub filename: Option<String>,
    /// Cleaned text, or the no-text placeholder
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Error returned by handlers: status code plus a `{"detail": ...}` body.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, detail: detail.into() }
    }

    pub fn processing(cause: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: format!("Ocorreu um erro ao processar a imagem: {}", cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorDetail { detail: self.detail })).into_response()
    }
}
