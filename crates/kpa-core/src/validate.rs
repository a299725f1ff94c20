//! Field-presence and format validation for incoming form payloads.
//!
//! All functions are pure and operate on the wire shapes, before any mapping
//! to record inputs, so missing fields are reported under the names the
//! client actually sent. A field counts as missing when the key is absent,
//! the value is `null`, or the value is the empty string.

use chrono::NaiveDate;

use crate::{
  ValidationError,
  wire::{BmbcChecksheetWire, BogieChecksheetWire, BogieDetailsWire,
         WheelSpecFieldsWire},
};

/// Require a strict ISO `YYYY-MM-DD` calendar date. Any other format is
/// rejected, not coerced.
pub fn validate_date(value: Option<&str>) -> Result<(), ValidationError> {
  match value {
    None | Some("") => Err(ValidationError::DateRequired),
    Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
      .map(|_| ())
      .map_err(|_| ValidationError::BadDateFormat),
  }
}

/// Form numbers must be present and at least three characters. No charset or
/// checksum constraint.
pub fn validate_form_number(value: Option<&str>) -> Result<(), ValidationError> {
  match value {
    None | Some("") => Err(ValidationError::FormNumberRequired),
    Some(s) if s.chars().count() < 3 => Err(ValidationError::FormNumberTooShort),
    Some(_) => Ok(()),
  }
}

/// Check every `(name, value)` pair and report the missing names, in given
/// order, under `section`.
pub fn validate_required_fields(
  fields:  &[(&'static str, Option<&str>)],
  section: &'static str,
) -> Result<(), ValidationError> {
  let missing: Vec<&'static str> = fields
    .iter()
    .filter(|(_, value)| matches!(value, None | Some("")))
    .map(|(name, _)| *name)
    .collect();

  if missing.is_empty() {
    Ok(())
  } else {
    Err(ValidationError::MissingFields { section, fields: missing })
  }
}

/// Validate the three sections of a bogie checksheet submission.
///
/// Short-circuits: section presence first (details, checksheet, BMBC), then
/// required fields per section in the same order. The first failing check is
/// the one reported.
pub fn validate_bogie_checksheet_fields(
  details:    Option<&BogieDetailsWire>,
  checksheet: Option<&BogieChecksheetWire>,
  bmbc:       Option<&BmbcChecksheetWire>,
) -> Result<(), ValidationError> {
  let details = match details {
    Some(d) if !d.is_empty() => d,
    _ => return Err(ValidationError::MissingSection("Bogie details are required")),
  };
  let checksheet = match checksheet {
    Some(c) if !c.is_empty() => c,
    _ => {
      return Err(ValidationError::MissingSection(
        "Bogie checksheet fields are required",
      ));
    }
  };
  let bmbc = match bmbc {
    Some(b) if !b.is_empty() => b,
    _ => {
      return Err(ValidationError::MissingSection(
        "BMB checksheet fields are required",
      ));
    }
  };

  validate_required_fields(
    &[
      ("bogieNo", details.bogie_no.as_deref()),
      ("dateOfIOH", details.date_of_ioh.as_deref()),
      ("incomingDivAndDate", details.incoming_div_and_date.as_deref()),
      ("makerYearBuilt", details.maker_year_built.as_deref()),
    ],
    "bogie details",
  )?;

  validate_required_fields(
    &[
      ("axleGuide", checksheet.axle_guide.as_deref()),
      ("bogieFrameCondition", checksheet.bogie_frame_condition.as_deref()),
      ("bolster", checksheet.bolster.as_deref()),
      (
        "bolsterSuspensionBracket",
        checksheet.bolster_suspension_bracket.as_deref(),
      ),
      ("lowerSpringSeat", checksheet.lower_spring_seat.as_deref()),
    ],
    "bogie checksheet",
  )?;

  validate_required_fields(
    &[
      ("adjustingTube", bmbc.adjusting_tube.as_deref()),
      ("cylinderBody", bmbc.cylinder_body.as_deref()),
      ("pistonTrunnion", bmbc.piston_trunnion.as_deref()),
      ("plungerSpring", bmbc.plunger_spring.as_deref()),
    ],
    "BMB checksheet",
  )
}

/// Validate the `fields` object of a wheel specification submission: the
/// object itself, then all fifteen measurement keys.
pub fn validate_wheel_specification_fields(
  fields: Option<&WheelSpecFieldsWire>,
) -> Result<(), ValidationError> {
  let fields = match fields {
    Some(f) if !f.is_empty() => f,
    _ => return Err(ValidationError::MissingSection("Fields object is required")),
  };

  validate_required_fields(&fields.as_required_pairs(), "wheel specification")
}

/// Both login credentials must be present and non-empty.
pub fn validate_login_fields(
  phone:    Option<&str>,
  password: Option<&str>,
) -> Result<(), ValidationError> {
  validate_required_fields(
    &[("phone", phone), ("password", password)],
    "login",
  )
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn iso_date_is_accepted() {
    assert!(validate_date(Some("2025-07-03")).is_ok());
  }

  #[test]
  fn non_iso_dates_are_rejected() {
    assert_eq!(
      validate_date(Some("07-03-2025")),
      Err(ValidationError::BadDateFormat)
    );
    assert_eq!(validate_date(Some("")), Err(ValidationError::DateRequired));
    assert_eq!(validate_date(None), Err(ValidationError::DateRequired));
  }

  #[test]
  fn form_number_length_boundary() {
    assert_eq!(
      validate_form_number(Some("AB")),
      Err(ValidationError::FormNumberTooShort)
    );
    assert!(validate_form_number(Some("ABC")).is_ok());
    assert_eq!(
      validate_form_number(None),
      Err(ValidationError::FormNumberRequired)
    );
  }

  #[test]
  fn form_number_length_counts_characters_not_bytes() {
    // Two characters, six bytes.
    assert_eq!(
      validate_form_number(Some("日本")),
      Err(ValidationError::FormNumberTooShort)
    );
    assert!(validate_form_number(Some("日本型")).is_ok());
  }

  #[test]
  fn missing_fields_reported_in_given_order() {
    let err = validate_required_fields(
      &[("alpha", None), ("beta", Some("x")), ("gamma", Some(""))],
      "demo",
    )
    .unwrap_err();

    assert_eq!(
      err.to_string(),
      "Missing required demo fields: alpha, gamma"
    );
  }

  fn full_details() -> BogieDetailsWire {
    BogieDetailsWire {
      bogie_no:              Some("BG1234".into()),
      date_of_ioh:           Some("2025-07-01".into()),
      incoming_div_and_date: Some("NR / 2025-06-25".into()),
      maker_year_built:      Some("RDSO/2018".into()),
      deficit_components:    None,
    }
  }

  fn full_checksheet() -> BogieChecksheetWire {
    BogieChecksheetWire {
      bogie_frame_condition:      Some("Good".into()),
      bolster:                    Some("Good".into()),
      bolster_suspension_bracket: Some("Cracked".into()),
      lower_spring_seat:          Some("Good".into()),
      axle_guide:                 Some("Worn".into()),
      ..Default::default()
    }
  }

  fn full_bmbc() -> BmbcChecksheetWire {
    BmbcChecksheetWire {
      cylinder_body:   Some("WORN OUT".into()),
      piston_trunnion: Some("GOOD".into()),
      adjusting_tube:  Some("DAMAGED".into()),
      plunger_spring:  Some("GOOD".into()),
      ..Default::default()
    }
  }

  #[test]
  fn complete_bogie_sections_pass() {
    assert!(
      validate_bogie_checksheet_fields(
        Some(&full_details()),
        Some(&full_checksheet()),
        Some(&full_bmbc()),
      )
      .is_ok()
    );
  }

  #[test]
  fn absent_section_short_circuits_before_field_checks() {
    let err = validate_bogie_checksheet_fields(
      None,
      Some(&BogieChecksheetWire::default()),
      None,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Bogie details are required");

    // An all-empty section object counts as missing too.
    let err = validate_bogie_checksheet_fields(
      Some(&full_details()),
      Some(&BogieChecksheetWire::default()),
      Some(&full_bmbc()),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Bogie checksheet fields are required");
  }

  #[test]
  fn one_missing_detail_field_is_named() {
    let mut details = full_details();
    details.date_of_ioh = None;

    let err = validate_bogie_checksheet_fields(
      Some(&details),
      Some(&full_checksheet()),
      Some(&full_bmbc()),
    )
    .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Missing required bogie details fields: dateOfIOH"
    );
  }

  #[test]
  fn bmbc_errors_only_after_earlier_sections_pass() {
    let mut bmbc = full_bmbc();
    bmbc.plunger_spring = Some(String::new());

    let err = validate_bogie_checksheet_fields(
      Some(&full_details()),
      Some(&full_checksheet()),
      Some(&bmbc),
    )
    .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Missing required BMB checksheet fields: plungerSpring"
    );
  }

  #[test]
  fn wheel_fields_object_required() {
    let err = validate_wheel_specification_fields(None).unwrap_err();
    assert_eq!(err.to_string(), "Fields object is required");

    let err =
      validate_wheel_specification_fields(Some(&WheelSpecFieldsWire::default()))
        .unwrap_err();
    assert_eq!(err.to_string(), "Fields object is required");
  }

  #[test]
  fn wheel_missing_measurements_are_listed() {
    let fields = WheelSpecFieldsWire {
      wheel_gauge: Some("1600 (+2,-1)".into()),
      ..Default::default()
    };

    let err = validate_wheel_specification_fields(Some(&fields)).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Missing required wheel specification fields:"));
    assert!(message.contains("condemningDia"));
    assert!(!message.contains("wheelGauge"));
  }

  #[test]
  fn login_fields_both_required() {
    assert!(validate_login_fields(Some("7760873976"), Some("pw")).is_ok());
    let err = validate_login_fields(Some("7760873976"), None).unwrap_err();
    assert_eq!(err.to_string(), "Missing required login fields: password");
  }
}
