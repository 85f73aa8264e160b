//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The email provider refused the message or could not be reached.
  #[error("dispatch failed: {0}")]
  Dispatch(#[from] rinkside_notify::Error),
}

impl From<rinkside_core::Error> for ApiError {
  fn from(e: rinkside_core::Error) -> Self { ApiError::BadRequest(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      // Always 500, whatever the provider answered.
      ApiError::Dispatch(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.detail()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
