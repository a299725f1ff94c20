//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, calendar dates as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use kpa_core::{
  checksheet::{
    BmbcChecksheetFields, BogieChecksheetFields, BogieChecksheetRecord,
    BogieDetails,
  },
  wheel::{WheelSpecFields, WheelSpecificationRecord},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String {
  d.format("%Y-%m-%d").to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

fn decode_date_opt(s: Option<String>) -> Result<Option<NaiveDate>> {
  s.as_deref().map(decode_date).transpose()
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `bogie_checksheets` row.
pub struct RawBogieChecksheet {
  pub id:                         i64,
  pub bogie_no:                   String,
  pub date_of_ioh:                Option<String>,
  pub incoming_div_and_date:      String,
  pub maker_year_built:           String,
  pub deficit_components:         Option<String>,
  pub bogie_frame_condition:      String,
  pub bolster:                    String,
  pub bolster_suspension_bracket: String,
  pub lower_spring_seat:          String,
  pub axle_guide:                 String,
  pub axle_guide_assembly:        String,
  pub protective_tubes:           String,
  pub anchor_links:               String,
  pub side_bearer:                String,
  pub cylinder_body:              String,
  pub piston_trunnion:            String,
  pub adjusting_tube:             String,
  pub plunger_spring:             String,
  pub tee_bolt_hex_nut:           String,
  pub pawl_and_pawl_spring:       String,
  pub dust_excluder:              String,
  pub form_number:                String,
  pub inspection_by:              Option<String>,
  pub inspection_date:            Option<String>,
  pub created_at:                 String,
}

impl RawBogieChecksheet {
  pub fn into_record(self) -> Result<BogieChecksheetRecord> {
    Ok(BogieChecksheetRecord {
      id:              self.id,
      details:         BogieDetails {
        bogie_no:              self.bogie_no,
        date_of_ioh:           decode_date_opt(self.date_of_ioh)?,
        incoming_div_and_date: self.incoming_div_and_date,
        maker_year_built:      self.maker_year_built,
        deficit_components:    self.deficit_components,
      },
      checksheet:      BogieChecksheetFields {
        bogie_frame_condition:      self.bogie_frame_condition,
        bolster:                    self.bolster,
        bolster_suspension_bracket: self.bolster_suspension_bracket,
        lower_spring_seat:          self.lower_spring_seat,
        axle_guide:                 self.axle_guide,
        axle_guide_assembly:        self.axle_guide_assembly,
        protective_tubes:           self.protective_tubes,
        anchor_links:               self.anchor_links,
        side_bearer:                self.side_bearer,
      },
      bmbc:            BmbcChecksheetFields {
        cylinder_body:        self.cylinder_body,
        piston_trunnion:      self.piston_trunnion,
        adjusting_tube:       self.adjusting_tube,
        plunger_spring:       self.plunger_spring,
        tee_bolt_hex_nut:     self.tee_bolt_hex_nut,
        pawl_and_pawl_spring: self.pawl_and_pawl_spring,
        dust_excluder:        self.dust_excluder,
      },
      form_number:     self.form_number,
      inspection_by:   self.inspection_by,
      inspection_date: decode_date_opt(self.inspection_date)?,
      created_at:      decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `wheel_specifications` row.
pub struct RawWheelSpecification {
  pub id:                        i64,
  pub axle_box_housing_bore_dia: String,
  pub bearing_seat_diameter:     String,
  pub condemning_dia:            String,
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
  pub form_number:               String,
  pub submitted_by:              Option<String>,
  pub submitted_date:            Option<String>,
  pub created_at:                String,
}

impl RawWheelSpecification {
  pub fn into_record(self) -> Result<WheelSpecificationRecord> {
    Ok(WheelSpecificationRecord {
      id:             self.id,
      fields:         WheelSpecFields {
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
      },
      form_number:    self.form_number,
      submitted_by:   self.submitted_by,
      submitted_date: decode_date_opt(self.submitted_date)?,
      created_at:     decode_dt(&self.created_at)?,
    })
  }
}
