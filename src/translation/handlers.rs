use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use super::{
    dto::{TranslateRequest, TranslateResponse},
    service::{translate_text, ChunkPlan},
};
use crate::{extract::ApiJson, state::AppState};

pub fn translation_routes() -> Router<AppState> {
    Router::new().route("/translate", post(translate))
}

#[instrument(skip_all)]
pub async fn translate(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TranslateRequest>,
) -> (StatusCode, Json<TranslateResponse>) {
    if payload.text.is_empty() {
        warn!("translate called without text");
        return (
            StatusCode::BAD_REQUEST,
            Json(TranslateResponse {
                translated_text: "No text provided".into(),
            }),
        );
    }

    let cfg = &state.config.translation;
    let target = payload
        .target_lang
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(cfg.default_target.as_str());
    let plan = ChunkPlan {
        max_len: cfg.chunk_size,
        delay: Duration::from_millis(cfg.chunk_delay_ms),
    };

    let translated_text = translate_text(
        state.translator.as_ref(),
        &payload.text,
        &cfg.source_lang,
        target,
        &plan,
    )
    .await;

    info!(lang = target, chars = payload.text.chars().count(), "translation completed");
    (StatusCode::OK, Json(TranslateResponse { translated_text }))
}
