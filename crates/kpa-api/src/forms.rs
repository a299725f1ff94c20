//! Handlers for `/api/forms` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/forms/bogie-checksheet` | 201 on success |
//! | `POST` | `/api/forms/wheel-specifications` | 201 on success |
//! | `GET`  | `/api/forms/wheel-specifications/list` | Optional `formNumber`, `submittedBy`, `submittedDate` filters |
//!
//! Each handler is a single-shot transition: validate, map, store, format.
//! Bodies are taken as raw JSON values so both the nested camelCase shape
//! and the legacy flat shape reach the mapper, and so malformed bodies
//! surface as 400 rather than an extractor rejection.

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use kpa_core::{
  store::{FormStore, WheelSpecQuery},
  validate, wire,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
  AppState,
  envelope::{
    self, Envelope, WheelSpecificationEntry, bogie_checksheet_saved,
    wheel_specification_saved,
  },
  error::ApiError,
};

// ─── Bogie checksheet ────────────────────────────────────────────────────────

/// `POST /api/forms/bogie-checksheet`
///
/// Validation runs in a fixed order: section presence, then form number,
/// then inspection date. The first failure is reported.
pub async fn create_bogie_checksheet<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FormStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let payload = wire::bogie_payload(body)?;

  validate::validate_bogie_checksheet_fields(
    payload.bogie_details.as_ref(),
    payload.bogie_checksheet.as_ref(),
    payload.bmbc_checksheet.as_ref(),
  )?;
  validate::validate_form_number(payload.form_number.as_deref())?;
  validate::validate_date(payload.inspection_date.as_deref())?;

  let record = state
    .store
    .create_bogie_checksheet(payload.into_input()?)
    .await
    .map_err(|e| ApiError::store("Error submitting bogie checksheet", e))?;

  Ok((StatusCode::CREATED, Json(bogie_checksheet_saved(&record))))
}

// ─── Wheel specification: create ─────────────────────────────────────────────

/// `POST /api/forms/wheel-specifications`
pub async fn create_wheel_specification<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FormStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let payload = wire::wheel_payload(body)?;

  validate::validate_wheel_specification_fields(payload.fields.as_ref())?;
  validate::validate_form_number(payload.form_number.as_deref())?;
  validate::validate_date(payload.submitted_date.as_deref())?;

  let record = state
    .store
    .create_wheel_specification(payload.into_input()?)
    .await
    .map_err(|e| ApiError::store("Error submitting wheel specification", e))?;

  Ok((StatusCode::CREATED, Json(wheel_specification_saved(&record))))
}

// ─── Wheel specification: list ───────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
  pub form_number:    Option<String>,
  pub submitted_by:   Option<String>,
  /// Exact `YYYY-MM-DD` match; an empty value imposes no constraint.
  pub submitted_date: Option<String>,
}

impl ListParams {
  fn into_query(self) -> Result<WheelSpecQuery, ApiError> {
    let submitted_date = match self.submitted_date.as_deref() {
      None | Some("") => None,
      Some(s) => Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(
        |_| ApiError::InvalidFormat(format!("unparseable submittedDate value: {s:?}")),
      )?),
    };

    Ok(WheelSpecQuery {
      form_number:    self.form_number.filter(|s| !s.is_empty()),
      submitted_by:   self.submitted_by.filter(|s| !s.is_empty()),
      submitted_date,
    })
  }
}

/// `GET /api/forms/wheel-specifications/list[?formNumber=..][&submittedBy=..][&submittedDate=..]`
pub async fn list_wheel_specifications<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Envelope<Vec<WheelSpecificationEntry>>>, ApiError>
where
  S: FormStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = params.into_query()?;

  let records = state
    .store
    .list_wheel_specifications(&query)
    .await
    .map_err(|e| ApiError::store("Error fetching wheel specifications", e))?;

  Ok(Json(envelope::wheel_specifications_fetched(records)))
}
