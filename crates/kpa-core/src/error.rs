//! Error types for `kpa-core`.
//!
//! Display strings double as the API's user-facing messages, so they are
//! written as complete sentences rather than debug text.

use thiserror::Error;

/// A request payload failed a presence or format check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// An entire form section (e.g. `bogieDetails`) is absent or empty.
  /// Carries the full user-facing sentence ("Bogie details are required").
  #[error("{0}")]
  MissingSection(&'static str),

  /// One or more required fields within a section are absent or empty.
  /// Field names are reported in the wire vocabulary (camelCase).
  #[error("Missing required {section} fields: {}", .fields.join(", "))]
  MissingFields {
    section: &'static str,
    fields:  Vec<&'static str>,
  },

  #[error("Date is required")]
  DateRequired,

  #[error("Invalid date format. Expected YYYY-MM-DD")]
  BadDateFormat,

  #[error("Form number is required")]
  FormNumberRequired,

  #[error("Form number is too short")]
  FormNumberTooShort,
}

/// A wire payload could not be translated into a record-creation input.
///
/// Distinct from [`ValidationError`]: validation checks business rules over a
/// well-formed payload, mapping fails only on structurally bad data (wrong
/// JSON types, unparseable non-empty dates).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
  #[error("unexpected shape for {context}: {detail}")]
  BadShape {
    context: &'static str,
    detail:  String,
  },

  #[error("unparseable {field} value: {value:?}")]
  BadDate { field: &'static str, value: String },
}
