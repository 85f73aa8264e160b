//! Request extractors whose rejections answer with the API's JSON error
//! body instead of axum's plain-text one.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// [`axum::Json`] with rejections mapped to [`ApiError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
