//! Handler for `POST /api/users/login`.
//!
//! A demo stub: one configured credential pair, one fixed token. Touches no
//! stored records on either path.

use axum::{Json, extract::State};
use kpa_core::{store::FormStore, validate};
use serde::Deserialize;
use serde_json::Value;

use crate::{
  AppState,
  auth::verify_login,
  envelope::{Envelope, LoginData, login_succeeded},
  error::ApiError,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginBody {
  pub phone:    Option<String>,
  pub password: Option<String>,
}

/// `POST /api/users/login` — body: `{"phone":"...","password":"..."}`.
///
/// 400 when either field is missing, 401 `{detail}` on a credential
/// mismatch, 200 with the configured token on a match.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Value>,
) -> Result<Json<Envelope<LoginData>>, ApiError>
where
  S: FormStore,
{
  let body: LoginBody = serde_json::from_value(body)
    .map_err(|e| ApiError::InvalidFormat(e.to_string()))?;

  validate::validate_login_fields(
    body.phone.as_deref(),
    body.password.as_deref(),
  )?;

  let token = verify_login(
    &state.auth,
    body.phone.as_deref().unwrap_or_default(),
    body.password.as_deref().unwrap_or_default(),
  )?;

  Ok(Json(login_succeeded(token)))
}
