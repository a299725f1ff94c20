//! Response envelope shaping.
//!
//! Every endpoint responds `{success, message, data}`; only the `data` shape
//! varies. These are pure functions from persisted records to wire shapes —
//! no handler builds response JSON by hand.

use chrono::NaiveDate;
use kpa_core::{
  checksheet::BogieChecksheetRecord,
  wheel::{WheelSpecFields, WheelSpecificationRecord},
};
use serde::Serialize;

/// The uniform success envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  pub message: String,
  pub data:    T,
}

fn envelope<T>(message: &str, data: T) -> Envelope<T> {
  Envelope { success: true, message: message.to_owned(), data }
}

// ─── Bogie checksheet creation ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BogieChecksheetSaved {
  pub form_number:     String,
  pub inspection_by:   Option<String>,
  pub inspection_date: Option<NaiveDate>,
  pub status:          &'static str,
}

pub fn bogie_checksheet_saved(
  record: &BogieChecksheetRecord,
) -> Envelope<BogieChecksheetSaved> {
  envelope("Bogie checksheet submitted successfully.", BogieChecksheetSaved {
    form_number:     record.form_number.clone(),
    inspection_by:   record.inspection_by.clone(),
    inspection_date: record.inspection_date,
    status:          "Saved",
  })
}

// ─── Wheel specification creation ────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpecificationSaved {
  pub form_number:    String,
  pub status:         &'static str,
  pub submitted_by:   Option<String>,
  pub submitted_date: Option<NaiveDate>,
}

pub fn wheel_specification_saved(
  record: &WheelSpecificationRecord,
) -> Envelope<WheelSpecificationSaved> {
  envelope(
    "Wheel specification submitted successfully.",
    WheelSpecificationSaved {
      form_number:    record.form_number.clone(),
      status:         "Saved",
      submitted_by:   record.submitted_by.clone(),
      submitted_date: record.submitted_date,
    },
  )
}

// ─── Wheel specification listing ─────────────────────────────────────────────

/// One matched record in a list response; `fields` round-trips the submitted
/// measurement map exactly.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpecificationEntry {
  pub fields:         WheelSpecFields,
  pub form_number:    String,
  pub submitted_by:   Option<String>,
  pub submitted_date: Option<NaiveDate>,
}

pub fn wheel_specifications_fetched(
  records: Vec<WheelSpecificationRecord>,
) -> Envelope<Vec<WheelSpecificationEntry>> {
  let entries = records
    .into_iter()
    .map(|record| WheelSpecificationEntry {
      fields:         record.fields,
      form_number:    record.form_number,
      submitted_by:   record.submitted_by,
      submitted_date: record.submitted_date,
    })
    .collect();

  envelope("Filtered wheel specification forms fetched successfully.", entries)
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginData {
  pub token: String,
}

pub fn login_succeeded(token: String) -> Envelope<LoginData> {
  envelope("Login successful.", LoginData { token })
}
