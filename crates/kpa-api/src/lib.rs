//! JSON REST API for the KPA forms service.
//!
//! Exposes an axum [`Router`] backed by any [`kpa_core::store::FormStore`].
//! TLS and transport concerns are the caller's responsibility; request
//! logging is applied by the hosting binary, not here.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, kpa_api::api_router(state)).await?;
//! ```

pub mod auth;
pub mod envelope;
pub mod error;
pub mod forms;
pub mod users;


use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use kpa_core::store::FormStore;

pub use auth::AuthConfig;
pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
///
/// Credentials are injected here at construction time rather than read from
/// ambient configuration, so tests can substitute fixtures.
#[derive(Clone)]
pub struct AppState<S: FormStore> {
  pub store: Arc<S>,
  pub auth:  Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: FormStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Forms
    .route(
      "/api/forms/bogie-checksheet",
      post(forms::create_bogie_checksheet::<S>),
    )
    .route(
      "/api/forms/wheel-specifications",
      post(forms::create_wheel_specification::<S>),
    )
    .route(
      "/api/forms/wheel-specifications/list",
      get(forms::list_wheel_specifications::<S>),
    )
    // Users
    .route("/api/users/login", post(users::login::<S>))
    .with_state(state)
}
