//! The `FormStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `kpa-store-sqlite`).
//! Higher layers (`kpa-api`, `kpa-server`) depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::{
  checksheet::{BogieChecksheetRecord, NewBogieChecksheet},
  wheel::{NewWheelSpecification, WheelSpecificationRecord},
};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Parameters for [`FormStore::list_wheel_specifications`].
///
/// Any subset of the options may be set; unset options impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct WheelSpecQuery {
  /// Case-insensitive substring match on the form number.
  pub form_number:    Option<String>,
  /// Case-insensitive substring match on the submitter.
  pub submitted_by:   Option<String>,
  /// Exact date match.
  pub submitted_date: Option<NaiveDate>,
}

/// Parameters for [`FormStore::list_bogie_checksheets`].
#[derive(Debug, Clone, Default)]
pub struct BogieChecksheetQuery {
  /// Case-insensitive substring match on the form number.
  pub form_number: Option<String>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a KPA forms store backend.
///
/// Records are insert-only: there are no update or delete operations, and
/// none will be added. Creation assigns the numeric id and the server-side
/// creation timestamp. List results are returned in insertion order.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait FormStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new bogie checksheet and return the stored record.
  fn create_bogie_checksheet(
    &self,
    input: NewBogieChecksheet,
  ) -> impl Future<Output = Result<BogieChecksheetRecord, Self::Error>> + Send + '_;

  /// Persist a new wheel specification and return the stored record.
  fn create_wheel_specification(
    &self,
    input: NewWheelSpecification,
  ) -> impl Future<Output = Result<WheelSpecificationRecord, Self::Error>> + Send + '_;

  /// List bogie checksheets matching `query`, in insertion order.
  fn list_bogie_checksheets<'a>(
    &'a self,
    query: &'a BogieChecksheetQuery,
  ) -> impl Future<Output = Result<Vec<BogieChecksheetRecord>, Self::Error>> + Send + 'a;

  /// List wheel specifications matching `query`, in insertion order.
  fn list_wheel_specifications<'a>(
    &'a self,
    query: &'a WheelSpecQuery,
  ) -> impl Future<Output = Result<Vec<WheelSpecificationRecord>, Self::Error>> + Send + 'a;
}
