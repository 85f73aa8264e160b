//! Handler for `POST /contact`.
//!
//! Accepts any JSON object. `name`, `email`, `subject` and `message` are
//! recognised; everything else is forwarded in the message body. Answers
//! `{"success": true}`, or 500 `{"error": "..."}` with the provider's raw
//! response body whatever status the provider returned. A body that is not
//! a JSON object is answered with 400 `{"error": "..."}`.

use axum::{Json, extract::State};
use rinkside_notify::Submission;
use serde_json::{Value, json};

use crate::{AppState, error::ApiError, extract::ApiJson};

/// `POST /contact`
pub async fn handler(
  State(state): State<AppState>,
  ApiJson(submission): ApiJson<Submission>,
) -> Result<Json<Value>, ApiError> {
  state.mailer.dispatch(&submission).await?;
  Ok(Json(json!({ "success": true })))
}
