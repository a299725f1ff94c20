//! Wire-format payloads and their translation into record-creation inputs.
//!
//! Two request vocabularies are accepted:
//!
//! - the canonical nested shape, camelCase keys grouped into `bogieDetails`
//!   / `bogieChecksheet` / `bmbcChecksheet` (or `fields` for wheel specs);
//! - the legacy flat shape, snake_case column names at the top level of the
//!   body, as produced by older form clients.
//!
//! A flat body is reshaped into the nested payload before validation ever
//! sees it, so both vocabularies flow through one validated path.
//!
//! Translation into [`NewBogieChecksheet`] / [`NewWheelSpecification`] is a
//! pure defaulting step: absent text fields become the empty string (or
//! `None` for free-text optionals), and absent or empty date strings become
//! `None` — never the empty string, so no unparseable date is persisted.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::{
  MapError,
  checksheet::{
    BmbcChecksheetFields, BogieChecksheetFields, BogieDetails,
    NewBogieChecksheet,
  },
  wheel::{NewWheelSpecification, WheelSpecFields},
};

// ─── Defaulting helpers ──────────────────────────────────────────────────────

fn text(value: Option<String>) -> String { value.unwrap_or_default() }

/// Empty strings collapse to `None` for optional free-text fields.
fn opt_text(value: Option<String>) -> Option<String> {
  value.filter(|s| !s.is_empty())
}

/// Absent or empty date strings map to `None`; a non-empty string must be a
/// strict `YYYY-MM-DD` calendar date.
fn opt_date(
  value: Option<&str>,
  field: &'static str,
) -> Result<Option<NaiveDate>, MapError> {
  match value {
    None | Some("") => Ok(None),
    Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
      .map(Some)
      .map_err(|_| MapError::BadDate { field, value: s.to_owned() }),
  }
}

// ─── Bogie checksheet wire shapes ────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BogieDetailsWire {
  pub bogie_no:              Option<String>,
  #[serde(rename = "dateOfIOH")]
  pub date_of_ioh:           Option<String>,
  pub incoming_div_and_date: Option<String>,
  pub maker_year_built:      Option<String>,
  pub deficit_components:    Option<String>,
}

impl BogieDetailsWire {
  /// An all-absent section is treated the same as a missing one.
  pub fn is_empty(&self) -> bool {
    self.bogie_no.is_none()
      && self.date_of_ioh.is_none()
      && self.incoming_div_and_date.is_none()
      && self.maker_year_built.is_none()
      && self.deficit_components.is_none()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BogieChecksheetWire {
  pub bogie_frame_condition:      Option<String>,
  pub bolster:                    Option<String>,
  pub bolster_suspension_bracket: Option<String>,
  pub lower_spring_seat:          Option<String>,
  pub axle_guide:                 Option<String>,
  pub axle_guide_assembly:        Option<String>,
  pub protective_tubes:           Option<String>,
  pub anchor_links:               Option<String>,
  pub side_bearer:                Option<String>,
}

impl BogieChecksheetWire {
  pub fn is_empty(&self) -> bool {
    self.bogie_frame_condition.is_none()
      && self.bolster.is_none()
      && self.bolster_suspension_bracket.is_none()
      && self.lower_spring_seat.is_none()
      && self.axle_guide.is_none()
      && self.axle_guide_assembly.is_none()
      && self.protective_tubes.is_none()
      && self.anchor_links.is_none()
      && self.side_bearer.is_none()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BmbcChecksheetWire {
  pub cylinder_body:        Option<String>,
  pub piston_trunnion:      Option<String>,
  pub adjusting_tube:       Option<String>,
  pub plunger_spring:       Option<String>,
  pub tee_bolt_hex_nut:     Option<String>,
  pub pawl_and_pawl_spring: Option<String>,
  pub dust_excluder:        Option<String>,
}

impl BmbcChecksheetWire {
  pub fn is_empty(&self) -> bool {
    self.cylinder_body.is_none()
      && self.piston_trunnion.is_none()
      && self.adjusting_tube.is_none()
      && self.plunger_spring.is_none()
      && self.tee_bolt_hex_nut.is_none()
      && self.pawl_and_pawl_spring.is_none()
      && self.dust_excluder.is_none()
  }
}

/// The canonical nested bogie-checksheet request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BogieChecksheetPayload {
  pub bogie_details:    Option<BogieDetailsWire>,
  pub bogie_checksheet: Option<BogieChecksheetWire>,
  pub bmbc_checksheet:  Option<BmbcChecksheetWire>,
  pub form_number:      Option<String>,
  pub inspection_by:    Option<String>,
  pub inspection_date:  Option<String>,
}

impl BogieChecksheetPayload {
  /// Translate the payload into a creation input, resolving every field to a
  /// default when absent. Performs no validation beyond date parsing.
  pub fn into_input(self) -> Result<NewBogieChecksheet, MapError> {
    let d = self.bogie_details.unwrap_or_default();
    let c = self.bogie_checksheet.unwrap_or_default();
    let b = self.bmbc_checksheet.unwrap_or_default();

    Ok(NewBogieChecksheet {
      details:         BogieDetails {
        bogie_no:              text(d.bogie_no),
        date_of_ioh:           opt_date(d.date_of_ioh.as_deref(), "dateOfIOH")?,
        incoming_div_and_date: text(d.incoming_div_and_date),
        maker_year_built:      text(d.maker_year_built),
        deficit_components:    opt_text(d.deficit_components),
      },
      checksheet:      BogieChecksheetFields {
        bogie_frame_condition:      text(c.bogie_frame_condition),
        bolster:                    text(c.bolster),
        bolster_suspension_bracket: text(c.bolster_suspension_bracket),
        lower_spring_seat:          text(c.lower_spring_seat),
        axle_guide:                 text(c.axle_guide),
        axle_guide_assembly:        text(c.axle_guide_assembly),
        protective_tubes:           text(c.protective_tubes),
        anchor_links:               text(c.anchor_links),
        side_bearer:                text(c.side_bearer),
      },
      bmbc:            BmbcChecksheetFields {
        cylinder_body:        text(b.cylinder_body),
        piston_trunnion:      text(b.piston_trunnion),
        adjusting_tube:       text(b.adjusting_tube),
        plunger_spring:       text(b.plunger_spring),
        tee_bolt_hex_nut:     text(b.tee_bolt_hex_nut),
        pawl_and_pawl_spring: text(b.pawl_and_pawl_spring),
        dust_excluder:        text(b.dust_excluder),
      },
      form_number:     text(self.form_number),
      inspection_by:   opt_text(self.inspection_by),
      inspection_date: opt_date(
        self.inspection_date.as_deref(),
        "inspectionDate",
      )?,
    })
  }
}

/// The legacy flat bogie-checksheet body: the store's snake_case column names
/// at the top level, no grouping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BogieChecksheetFlat {
  bogie_no:                   Option<String>,
  date_of_ioh:                Option<String>,
  incoming_div_and_date:      Option<String>,
  maker_year_built:           Option<String>,
  deficit_components:         Option<String>,
  bogie_frame_condition:      Option<String>,
  bolster:                    Option<String>,
  bolster_suspension_bracket: Option<String>,
  lower_spring_seat:          Option<String>,
  axle_guide:                 Option<String>,
  axle_guide_assembly:        Option<String>,
  protective_tubes:           Option<String>,
  anchor_links:               Option<String>,
  side_bearer:                Option<String>,
  cylinder_body:              Option<String>,
  piston_trunnion:            Option<String>,
  adjusting_tube:             Option<String>,
  plunger_spring:             Option<String>,
  tee_bolt_hex_nut:           Option<String>,
  pawl_and_pawl_spring:       Option<String>,
  dust_excluder:              Option<String>,
  form_number:                Option<String>,
  inspection_by:              Option<String>,
  inspection_date:            Option<String>,
}

impl BogieChecksheetFlat {
  fn into_payload(self) -> BogieChecksheetPayload {
    BogieChecksheetPayload {
      bogie_details:    Some(BogieDetailsWire {
        bogie_no:              self.bogie_no,
        date_of_ioh:           self.date_of_ioh,
        incoming_div_and_date: self.incoming_div_and_date,
        maker_year_built:      self.maker_year_built,
        deficit_components:    self.deficit_components,
      }),
      bogie_checksheet: Some(BogieChecksheetWire {
        bogie_frame_condition:      self.bogie_frame_condition,
        bolster:                    self.bolster,
        bolster_suspension_bracket: self.bolster_suspension_bracket,
        lower_spring_seat:          self.lower_spring_seat,
        axle_guide:                 self.axle_guide,
        axle_guide_assembly:        self.axle_guide_assembly,
        protective_tubes:           self.protective_tubes,
        anchor_links:               self.anchor_links,
        side_bearer:                self.side_bearer,
      }),
      bmbc_checksheet:  Some(BmbcChecksheetWire {
        cylinder_body:        self.cylinder_body,
        piston_trunnion:      self.piston_trunnion,
        adjusting_tube:       self.adjusting_tube,
        plunger_spring:       self.plunger_spring,
        tee_bolt_hex_nut:     self.tee_bolt_hex_nut,
        pawl_and_pawl_spring: self.pawl_and_pawl_spring,
        dust_excluder:        self.dust_excluder,
      }),
      form_number:      self.form_number,
      inspection_by:    self.inspection_by,
      inspection_date:  self.inspection_date,
    }
  }
}

// ─── Wheel specification wire shapes ─────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelSpecFieldsWire {
  pub axle_box_housing_bore_dia: Option<String>,
  pub bearing_seat_diameter:     Option<String>,
  pub condemning_dia:            Option<String>,
  #[serde(rename = "intermediateWWP")]
  pub intermediate_wwp:          Option<String>,
  pub last_shop_issue_size:      Option<String>,
  pub roller_bearing_bore_dia:   Option<String>,
  pub roller_bearing_outer_dia:  Option<String>,
  pub roller_bearing_width:      Option<String>,
  pub tread_diameter_new:        Option<String>,
  pub variation_same_axle:       Option<String>,
  pub variation_same_bogie:      Option<String>,
  pub variation_same_coach:      Option<String>,
  pub wheel_disc_width:          Option<String>,
  pub wheel_gauge:               Option<String>,
  pub wheel_profile:             Option<String>,
}

impl WheelSpecFieldsWire {
  pub fn is_empty(&self) -> bool {
    self.as_required_pairs().iter().all(|(_, v)| v.is_none())
  }

  /// The fifteen measurement fields paired with their wire names, in the
  /// order they are reported when missing.
  pub fn as_required_pairs(&self) -> [(&'static str, Option<&str>); 15] {
    [
      ("axleBoxHousingBoreDia", self.axle_box_housing_bore_dia.as_deref()),
      ("bearingSeatDiameter", self.bearing_seat_diameter.as_deref()),
      ("condemningDia", self.condemning_dia.as_deref()),
      ("intermediateWWP", self.intermediate_wwp.as_deref()),
      ("lastShopIssueSize", self.last_shop_issue_size.as_deref()),
      ("rollerBearingBoreDia", self.roller_bearing_bore_dia.as_deref()),
      ("rollerBearingOuterDia", self.roller_bearing_outer_dia.as_deref()),
      ("rollerBearingWidth", self.roller_bearing_width.as_deref()),
      ("treadDiameterNew", self.tread_diameter_new.as_deref()),
      ("variationSameAxle", self.variation_same_axle.as_deref()),
      ("variationSameBogie", self.variation_same_bogie.as_deref()),
      ("variationSameCoach", self.variation_same_coach.as_deref()),
      ("wheelDiscWidth", self.wheel_disc_width.as_deref()),
      ("wheelGauge", self.wheel_gauge.as_deref()),
      ("wheelProfile", self.wheel_profile.as_deref()),
    ]
  }
}

/// The canonical nested wheel-specification request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelSpecificationPayload {
  pub fields:         Option<WheelSpecFieldsWire>,
  pub form_number:    Option<String>,
  pub submitted_by:   Option<String>,
  pub submitted_date: Option<String>,
}

impl WheelSpecificationPayload {
  pub fn into_input(self) -> Result<NewWheelSpecification, MapError> {
    let f = self.fields.unwrap_or_default();

    Ok(NewWheelSpecification {
      fields:         WheelSpecFields {
        axle_box_housing_bore_dia: text(f.axle_box_housing_bore_dia),
        bearing_seat_diameter:     text(f.bearing_seat_diameter),
        condemning_dia:            text(f.condemning_dia),
        intermediate_wwp:          text(f.intermediate_wwp),
        last_shop_issue_size:      text(f.last_shop_issue_size),
        roller_bearing_bore_dia:   text(f.roller_bearing_bore_dia),
        roller_bearing_outer_dia:  text(f.roller_bearing_outer_dia),
        roller_bearing_width:      text(f.roller_bearing_width),
        tread_diameter_new:        text(f.tread_diameter_new),
        variation_same_axle:       text(f.variation_same_axle),
        variation_same_bogie:      text(f.variation_same_bogie),
        variation_same_coach:      text(f.variation_same_coach),
        wheel_disc_width:          text(f.wheel_disc_width),
        wheel_gauge:               text(f.wheel_gauge),
        wheel_profile:             text(f.wheel_profile),
      },
      form_number:    text(self.form_number),
      submitted_by:   opt_text(self.submitted_by),
      submitted_date: opt_date(
        self.submitted_date.as_deref(),
        "submittedDate",
      )?,
    })
  }
}

/// The legacy flat wheel-specification body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct WheelSpecificationFlat {
  axle_box_housing_bore_dia: Option<String>,
  bearing_seat_diameter:     Option<String>,
  condemning_dia:            Option<String>,
  intermediate_wwp:          Option<String>,
  last_shop_issue_size:      Option<String>,
  roller_bearing_bore_dia:   Option<String>,
  roller_bearing_outer_dia:  Option<String>,
  roller_bearing_width:      Option<String>,
  tread_diameter_new:        Option<String>,
  variation_same_axle:       Option<String>,
  variation_same_bogie:      Option<String>,
  variation_same_coach:      Option<String>,
  wheel_disc_width:          Option<String>,
  wheel_gauge:               Option<String>,
  wheel_profile:             Option<String>,
  form_number:               Option<String>,
  submitted_by:              Option<String>,
  submitted_date:            Option<String>,
}

impl WheelSpecificationFlat {
  fn into_payload(self) -> WheelSpecificationPayload {
    WheelSpecificationPayload {
      fields:         Some(WheelSpecFieldsWire {
        axle_box_housing_bore_dia: self.axle_box_housing_bore_dia,
        bearing_seat_diameter:     self.bearing_seat_diameter,
        condemning_dia:            self.condemning_dia,
        intermediate_wwp:          self.intermediate_wwp,
        last_shop_issue_size:      self.last_shop_issue_size,
        roller_bearing_bore_dia:   self.roller_bearing_bore_dia,
        roller_bearing_outer_dia:  self.roller_bearing_outer_dia,
        roller_bearing_width:      self.roller_bearing_width,
        tread_diameter_new:        self.tread_diameter_new,
        variation_same_axle:       self.variation_same_axle,
        variation_same_bogie:      self.variation_same_bogie,
        variation_same_coach:      self.variation_same_coach,
        wheel_disc_width:          self.wheel_disc_width,
        wheel_gauge:               self.wheel_gauge,
        wheel_profile:             self.wheel_profile,
      }),
      form_number:    self.form_number,
      submitted_by:   self.submitted_by,
      submitted_date: self.submitted_date,
    }
  }
}

// ─── Payload extraction ──────────────────────────────────────────────────────

const BOGIE_SECTION_KEYS: [&str; 3] =
  ["bogieDetails", "bogieChecksheet", "bmbcChecksheet"];

fn has_key(value: &Value, keys: &[&str]) -> bool {
  value
    .as_object()
    .is_some_and(|map| keys.iter().any(|k| map.contains_key(*k)))
}

fn shape_error(context: &'static str) -> impl FnOnce(serde_json::Error) -> MapError {
  move |e| MapError::BadShape { context, detail: e.to_string() }
}

/// Parse a bogie-checksheet request body, accepting either vocabulary.
///
/// Nested wins whenever any of the section keys is present; otherwise the
/// body is read as the legacy flat shape and reshaped.
pub fn bogie_payload(value: Value) -> Result<BogieChecksheetPayload, MapError> {
  if !value.is_object() {
    return Err(MapError::BadShape {
      context: "bogie checksheet body",
      detail:  "expected a JSON object".to_owned(),
    });
  }

  if has_key(&value, &BOGIE_SECTION_KEYS) {
    serde_json::from_value(value).map_err(shape_error("bogie checksheet body"))
  } else {
    serde_json::from_value::<BogieChecksheetFlat>(value)
      .map(BogieChecksheetFlat::into_payload)
      .map_err(shape_error("bogie checksheet body"))
  }
}

/// Parse a wheel-specification request body, accepting either vocabulary.
pub fn wheel_payload(
  value: Value,
) -> Result<WheelSpecificationPayload, MapError> {
  if !value.is_object() {
    return Err(MapError::BadShape {
      context: "wheel specification body",
      detail:  "expected a JSON object".to_owned(),
    });
  }

  if has_key(&value, &["fields"]) {
    serde_json::from_value(value)
      .map_err(shape_error("wheel specification body"))
  } else {
    serde_json::from_value::<WheelSpecificationFlat>(value)
      .map(WheelSpecificationFlat::into_payload)
      .map_err(shape_error("wheel specification body"))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn nested_bogie_body_parses() {
    let payload = bogie_payload(json!({
      "bogieDetails": { "bogieNo": "BG1234", "dateOfIOH": "2025-07-01" },
      "bogieChecksheet": { "bolster": "Good" },
      "bmbcChecksheet": { "cylinderBody": "WORN OUT" },
      "formNumber": "BOGIE-2025-001"
    }))
    .unwrap();

    let details = payload.bogie_details.as_ref().unwrap();
    assert_eq!(details.bogie_no.as_deref(), Some("BG1234"));
    assert_eq!(payload.form_number.as_deref(), Some("BOGIE-2025-001"));
  }

  #[test]
  fn flat_bogie_body_is_reshaped() {
    let payload = bogie_payload(json!({
      "bogie_no": "BG1234",
      "bolster": "Good",
      "cylinder_body": "GOOD",
      "form_number": "BOGIE-2025-001",
      "inspection_date": "2025-07-03"
    }))
    .unwrap();

    let details = payload.bogie_details.as_ref().unwrap();
    assert_eq!(details.bogie_no.as_deref(), Some("BG1234"));
    let bmbc = payload.bmbc_checksheet.as_ref().unwrap();
    assert_eq!(bmbc.cylinder_body.as_deref(), Some("GOOD"));
    assert_eq!(payload.inspection_date.as_deref(), Some("2025-07-03"));
  }

  #[test]
  fn non_object_body_is_rejected() {
    let err = bogie_payload(json!(["not", "an", "object"])).unwrap_err();
    assert!(matches!(err, MapError::BadShape { .. }));
  }

  #[test]
  fn wrongly_typed_field_is_rejected() {
    let err = bogie_payload(json!({
      "bogieDetails": { "bogieNo": 17 }
    }))
    .unwrap_err();
    assert!(matches!(err, MapError::BadShape { .. }));
  }

  #[test]
  fn empty_date_maps_to_none() {
    let input = BogieChecksheetPayload {
      inspection_date: Some(String::new()),
      ..Default::default()
    }
    .into_input()
    .unwrap();
    assert_eq!(input.inspection_date, None);
    assert_eq!(input.details.date_of_ioh, None);
  }

  #[test]
  fn unparseable_date_is_a_map_error() {
    let err = BogieChecksheetPayload {
      inspection_date: Some("03-07-2025".into()),
      ..Default::default()
    }
    .into_input()
    .unwrap_err();
    assert_eq!(err, MapError::BadDate {
      field: "inspectionDate",
      value: "03-07-2025".into(),
    });
  }

  #[test]
  fn absent_fields_default_to_empty_strings() {
    let input = wheel_payload(json!({
      "fields": { "wheelGauge": "1600 (+2,-1)" },
      "formNumber": "WHEEL-2025-001"
    }))
    .unwrap()
    .into_input()
    .unwrap();

    assert_eq!(input.fields.wheel_gauge, "1600 (+2,-1)");
    assert_eq!(input.fields.condemning_dia, "");
    assert_eq!(input.submitted_by, None);
  }

  #[test]
  fn flat_wheel_body_is_reshaped() {
    let payload = wheel_payload(json!({
      "tread_diameter_new": "915 (900-1000)",
      "intermediate_wwp": "20 TO 28",
      "form_number": "WHEEL-2025-001"
    }))
    .unwrap();

    let fields = payload.fields.as_ref().unwrap();
    assert_eq!(fields.tread_diameter_new.as_deref(), Some("915 (900-1000)"));
    assert_eq!(fields.intermediate_wwp.as_deref(), Some("20 TO 28"));
  }
}
