//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Failures use the same `{success, message}` envelope as successes, with
//! `success: false` and no `data` key. The one deliberate exception is the
//! login failure, which responds `{detail: ...}`; existing clients match on
//! that shape.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use kpa_core::{MapError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A presence or format rule failed — 400.
  #[error("{0}")]
  Validation(#[from] ValidationError),

  /// The payload could not be translated into a record input — 400.
  #[error("Invalid data format: {0}")]
  InvalidFormat(String),

  /// Login credentials did not match the configured pair — 401.
  #[error("Invalid phone number or password")]
  InvalidCredentials,

  /// A persistence-layer fault — 500, with the endpoint's context prefix.
  #[error("{context}: {source}")]
  Store {
    context: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Wrap a store fault with the per-endpoint message prefix.
  pub fn store(
    context: &'static str,
    source: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    ApiError::Store { context, source: Box::new(source) }
  }
}

impl From<MapError> for ApiError {
  fn from(e: MapError) -> Self { ApiError::InvalidFormat(e.to_string()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::Validation(_) | ApiError::InvalidFormat(_) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
      ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match &self {
      ApiError::InvalidCredentials => json!({ "detail": self.to_string() }),
      _ => json!({ "message": self.to_string(), "success": false }),
    };

    (status, Json(body)).into_response()
  }
}
