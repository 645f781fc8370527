//! HTTP transport shim over the vidbrief pipeline. Routing and JSON decoding
//! only; all sequencing and error containment live in `vidbrief-core`.

use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use vidbrief_core::{Capabilities, PipelineConfig};

pub mod error;
pub mod handlers;

pub use error::HttpError;

#[derive(Clone)]
pub struct AppState {
    pub caps: Arc<Capabilities>,
    pub config: Arc<PipelineConfig>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(handlers::summarize))
        .route("/api/chat", post(handlers::chat))
        .route("/api/quiz", post(handlers::quiz))
        .with_state(state)
}
