//! Account stub — POST /api/me/change-password
//!
//! Accepts the change-password payload and unconditionally acknowledges it
//! with 204. No credential validation happens anywhere in this backend; the
//! endpoint exists so the canned password page has something to call.

use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

/// POST /api/me/change-password — always 204, no body.
pub async fn change_password_handler(Json(_req): Json<ChangePasswordRequest>) -> StatusCode {
    StatusCode::NO_CONTENT
}
