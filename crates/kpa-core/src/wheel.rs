//! Wheel specification record types.
//!
//! Every measurement is kept as submitted — free text with units, ranges and
//! tolerances (e.g. `"280 (+0.030/+0.052)"`). Nothing here parses numbers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The fifteen dimensional measurements of a wheel specification form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpecFields {
  pub axle_box_housing_bore_dia: String,
  pub bearing_seat_diameter:     String,
  pub condemning_dia:            String,
  #[serde(rename = "intermediateWWP")]
  pub intermediate_wwp:          String,
  pub last_shop_issue_size:      String,
  pub roller_bearing_bore_dia:   String,
  pub roller_bearing_outer_dia:  String,
  pub roller_bearing_width:      String,
  pub tread_diameter_new:        String,
  pub variation_same_axle:       String,
  pub variation_same_bogie:      String,
  pub variation_same_coach:      String,
  pub wheel_disc_width:          String,
  pub wheel_gauge:               String,
  pub wheel_profile:             String,
}

/// Input for creating a wheel specification. The store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWheelSpecification {
  pub fields:         WheelSpecFields,
  pub form_number:    String,
  pub submitted_by:   Option<String>,
  pub submitted_date: Option<NaiveDate>,
}

/// A persisted wheel specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpecificationRecord {
  pub id:             i64,
  pub fields:         WheelSpecFields,
  pub form_number:    String,
  pub submitted_by:   Option<String>,
  pub submitted_date: Option<NaiveDate>,
  pub created_at:     DateTime<Utc>,
}
