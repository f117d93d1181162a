//! UI code generation endpoint — POST /ui/code
//!
//! Maps a free-text prompt to one of the canned page templates by keyword.
//! No language understanding happens here: the dispatcher is a substring
//! matcher over a fixed rule set, and an unmatched prompt is answered with
//! an empty `code` rather than an error.
//!
//! Request:  `{"prompt": "재고 현황 보여줘"}`  (prompt may be null or absent)
//! Response: `{"code": "..."}`  (empty string when no keyword matches)

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct UiCodeRequest {
    /// Free-text description of the desired UI, used only for matching.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UiCodeResponse {
    pub code: String,
}

/// POST /ui/code — resolve a prompt to template source.
///
/// Total over every body the extractor accepts: a `null` body, a null
/// prompt and an unmatched prompt all produce 200 with a `code` field.
pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Option<UiCodeRequest>>,
) -> Json<UiCodeResponse> {
    let prompt = req.and_then(|r| r.prompt);
    let selected = state.dispatcher.select(prompt.as_deref());

    info!(
        prompt_len = prompt.as_deref().map_or(0, str::len),
        template = selected.map_or("none", |id| id.as_str()),
        "ui code request"
    );

    let code = match selected {
        Some(id) => state.dispatcher.content(id).to_string(),
        None => String::new(),
    };
    Json(UiCodeResponse { code })
}
