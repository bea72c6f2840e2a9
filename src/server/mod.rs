//! OCR HTTP API
//!
//! - `GET /` welcome message
//! - `POST /extract-text` multipart image upload → cleaned text

pub mod handlers;
pub mod response;

use crate::error::{CarouselOcrError, Result};
use crate::ocr::OcrEngine;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared per-server state. Requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn OcrEngine>,
    pub lang: String,
}

impl AppState {
    pub fn new(engine: Arc<dyn OcrEngine>, lang: impl Into<String>) -> Self {
        Self { engine, lang: lang.into() }
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/extract-text", post(handlers::extract_text_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState, max_upload_bytes: usize) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API de extração de texto ouvindo em {}", addr);

    axum::serve(listener, router(state, max_upload_bytes))
        .await
        .map_err(|e| CarouselOcrError::Server(e.to_string()))
}
