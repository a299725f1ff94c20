//! Bogie checksheet record types.
//!
//! A checksheet is an immutable inspection record: once created it is never
//! updated or deleted. Component-condition fields are free-form strings
//! ("GOOD", "WORN OUT", ...); no controlled vocabulary is enforced.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identity block of the inspected bogie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BogieDetails {
  pub bogie_no:              String,
  #[serde(rename = "dateOfIOH")]
  pub date_of_ioh:           Option<NaiveDate>,
  pub incoming_div_and_date: String,
  pub maker_year_built:      String,
  pub deficit_components:    Option<String>,
}

/// Condition of the bogie frame components.
///
/// The first five fields are required at creation under strict validation;
/// the remainder were added in a later revision of the paper form and default
/// to the empty string when not reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BogieChecksheetFields {
  pub bogie_frame_condition:      String,
  pub bolster:                    String,
  pub bolster_suspension_bracket: String,
  pub lower_spring_seat:          String,
  pub axle_guide:                 String,
  pub axle_guide_assembly:        String,
  pub protective_tubes:           String,
  pub anchor_links:               String,
  pub side_bearer:                String,
}

/// Condition of the bogie-mounted brake cylinder (BMBC) components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmbcChecksheetFields {
  pub cylinder_body:        String,
  pub piston_trunnion:      String,
  pub adjusting_tube:       String,
  pub plunger_spring:       String,
  pub tee_bolt_hex_nut:     String,
  pub pawl_and_pawl_spring: String,
  pub dust_excluder:        String,
}

/// Input for creating a checksheet. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBogieChecksheet {
  pub details:         BogieDetails,
  pub checksheet:      BogieChecksheetFields,
  pub bmbc:            BmbcChecksheetFields,
  pub form_number:     String,
  pub inspection_by:   Option<String>,
  pub inspection_date: Option<NaiveDate>,
}

/// A persisted bogie checksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BogieChecksheetRecord {
  pub id:              i64,
  pub details:         BogieDetails,
  pub checksheet:      BogieChecksheetFields,
  pub bmbc:            BmbcChecksheetFields,
  pub form_number:     String,
  pub inspection_by:   Option<String>,
  pub inspection_date: Option<NaiveDate>,
  pub created_at:      DateTime<Utc>,
}
