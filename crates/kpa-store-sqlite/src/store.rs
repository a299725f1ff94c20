//! [`SqliteStore`] — the SQLite implementation of [`FormStore`].

use std::path::Path;

use chrono::Utc;

use kpa_core::{
  checksheet::{BogieChecksheetRecord, NewBogieChecksheet},
  store::{BogieChecksheetQuery, FormStore, WheelSpecQuery},
  wheel::{NewWheelSpecification, WheelSpecificationRecord},
};

use crate::{
  Error, Result,
  encode::{RawBogieChecksheet, RawWheelSpecification, encode_date, encode_dt},
  schema::SCHEMA,
};

const BOGIE_COLUMNS: &str = "\
  id, bogie_no, date_of_ioh, incoming_div_and_date, maker_year_built,
  deficit_components, bogie_frame_condition, bolster,
  bolster_suspension_bracket, lower_spring_seat, axle_guide,
  axle_guide_assembly, protective_tubes, anchor_links, side_bearer,
  cylinder_body, piston_trunnion, adjusting_tube, plunger_spring,
  tee_bolt_hex_nut, pawl_and_pawl_spring, dust_excluder,
  form_number, inspection_by, inspection_date, created_at";

const WHEEL_COLUMNS: &str = "\
  id, axle_box_housing_bore_dia, bearing_seat_diameter, condemning_dia,
  intermediate_wwp, last_shop_issue_size, roller_bearing_bore_dia,
  roller_bearing_outer_dia, roller_bearing_width, tread_diameter_new,
  variation_same_axle, variation_same_bogie, variation_same_coach,
  wheel_disc_width, wheel_gauge, wheel_profile,
  form_number, submitted_by, submitted_date, created_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A KPA forms store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone, Debug)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn read_bogie_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawBogieChecksheet> {
  Ok(RawBogieChecksheet {
    id:                         row.get(0)?,
    bogie_no:                   row.get(1)?,
    date_of_ioh:                row.get(2)?,
    incoming_div_and_date:      row.get(3)?,
    maker_year_built:           row.get(4)?,
    deficit_components:         row.get(5)?,
    bogie_frame_condition:      row.get(6)?,
    bolster:                    row.get(7)?,
    bolster_suspension_bracket: row.get(8)?,
    lower_spring_seat:          row.get(9)?,
    axle_guide:                 row.get(10)?,
    axle_guide_assembly:        row.get(11)?,
    protective_tubes:           row.get(12)?,
    anchor_links:               row.get(13)?,
    side_bearer:                row.get(14)?,
    cylinder_body:              row.get(15)?,
    piston_trunnion:            row.get(16)?,
    adjusting_tube:             row.get(17)?,
    plunger_spring:             row.get(18)?,
    tee_bolt_hex_nut:           row.get(19)?,
    pawl_and_pawl_spring:       row.get(20)?,
    dust_excluder:              row.get(21)?,
    form_number:                row.get(22)?,
    inspection_by:              row.get(23)?,
    inspection_date:            row.get(24)?,
    created_at:                 row.get(25)?,
  })
}

fn read_wheel_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<RawWheelSpecification> {
  Ok(RawWheelSpecification {
    id:                        row.get(0)?,
    axle_box_housing_bore_dia: row.get(1)?,
    bearing_seat_diameter:     row.get(2)?,
    condemning_dia:            row.get(3)?,
    intermediate_wwp:          row.get(4)?,
    last_shop_issue_size:      row.get(5)?,
    roller_bearing_bore_dia:   row.get(6)?,
    roller_bearing_outer_dia:  row.get(7)?,
    roller_bearing_width:      row.get(8)?,
    tread_diameter_new:        row.get(9)?,
    variation_same_axle:       row.get(10)?,
    variation_same_bogie:      row.get(11)?,
    variation_same_coach:      row.get(12)?,
    wheel_disc_width:          row.get(13)?,
    wheel_gauge:               row.get(14)?,
    wheel_profile:             row.get(15)?,
    form_number:               row.get(16)?,
    submitted_by:              row.get(17)?,
    submitted_date:            row.get(18)?,
    created_at:                row.get(19)?,
  })
}

// ─── FormStore impl ──────────────────────────────────────────────────────────

impl FormStore for SqliteStore {
  type Error = Error;

  async fn create_bogie_checksheet(
    &self,
    input: NewBogieChecksheet,
  ) -> Result<BogieChecksheetRecord> {
    let created_at = Utc::now();
    let created_at_str = encode_dt(created_at);
    let row = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO bogie_checksheets (
             bogie_no, date_of_ioh, incoming_div_and_date, maker_year_built,
             deficit_components, bogie_frame_condition, bolster,
             bolster_suspension_bracket, lower_spring_seat, axle_guide,
             axle_guide_assembly, protective_tubes, anchor_links, side_bearer,
             cylinder_body, piston_trunnion, adjusting_tube, plunger_spring,
             tee_bolt_hex_nut, pawl_and_pawl_spring, dust_excluder,
             form_number, inspection_by, inspection_date, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                     ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24,
                     ?25)",
          rusqlite::params![
            row.details.bogie_no,
            row.details.date_of_ioh.map(encode_date),
            row.details.incoming_div_and_date,
            row.details.maker_year_built,
            row.details.deficit_components,
            row.checksheet.bogie_frame_condition,
            row.checksheet.bolster,
            row.checksheet.bolster_suspension_bracket,
            row.checksheet.lower_spring_seat,
            row.checksheet.axle_guide,
            row.checksheet.axle_guide_assembly,
            row.checksheet.protective_tubes,
            row.checksheet.anchor_links,
            row.checksheet.side_bearer,
            row.bmbc.cylinder_body,
            row.bmbc.piston_trunnion,
            row.bmbc.adjusting_tube,
            row.bmbc.plunger_spring,
            row.bmbc.tee_bolt_hex_nut,
            row.bmbc.pawl_and_pawl_spring,
            row.bmbc.dust_excluder,
            row.form_number,
            row.inspection_by,
            row.inspection_date.map(encode_date),
            created_at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(BogieChecksheetRecord {
      id,
      details: input.details,
      checksheet: input.checksheet,
      bmbc: input.bmbc,
      form_number: input.form_number,
      inspection_by: input.inspection_by,
      inspection_date: input.inspection_date,
      created_at,
    })
  }

  async fn create_wheel_specification(
    &self,
    input: NewWheelSpecification,
  ) -> Result<WheelSpecificationRecord> {
    let created_at = Utc::now();
    let created_at_str = encode_dt(created_at);
    let row = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO wheel_specifications (
             axle_box_housing_bore_dia, bearing_seat_diameter, condemning_dia,
             intermediate_wwp, last_shop_issue_size, roller_bearing_bore_dia,
             roller_bearing_outer_dia, roller_bearing_width,
             tread_diameter_new, variation_same_axle, variation_same_bogie,
             variation_same_coach, wheel_disc_width, wheel_gauge,
             wheel_profile, form_number, submitted_by, submitted_date,
             created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                     ?14, ?15, ?16, ?17, ?18, ?19)",
          rusqlite::params![
            row.fields.axle_box_housing_bore_dia,
            row.fields.bearing_seat_diameter,
            row.fields.condemning_dia,
            row.fields.intermediate_wwp,
            row.fields.last_shop_issue_size,
            row.fields.roller_bearing_bore_dia,
            row.fields.roller_bearing_outer_dia,
            row.fields.roller_bearing_width,
            row.fields.tread_diameter_new,
            row.fields.variation_same_axle,
            row.fields.variation_same_bogie,
            row.fields.variation_same_coach,
            row.fields.wheel_disc_width,
            row.fields.wheel_gauge,
            row.fields.wheel_profile,
            row.form_number,
            row.submitted_by,
            row.submitted_date.map(encode_date),
            created_at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(WheelSpecificationRecord {
      id,
      fields: input.fields,
      form_number: input.form_number,
      submitted_by: input.submitted_by,
      submitted_date: input.submitted_date,
      created_at,
    })
  }

  async fn list_bogie_checksheets(
    &self,
    query: &BogieChecksheetQuery,
  ) -> Result<Vec<BogieChecksheetRecord>> {
    let form_number = query.form_number.clone();

    let raws: Vec<RawBogieChecksheet> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {BOGIE_COLUMNS}
           FROM bogie_checksheets
           WHERE (?1 IS NULL OR instr(lower(form_number), lower(?1)) > 0)
           ORDER BY id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![form_number], read_bogie_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawBogieChecksheet::into_record).collect()
  }

  async fn list_wheel_specifications(
    &self,
    query: &WheelSpecQuery,
  ) -> Result<Vec<WheelSpecificationRecord>> {
    let form_number = query.form_number.clone();
    let submitted_by = query.submitted_by.clone();
    let submitted_date = query.submitted_date.map(encode_date);

    let raws: Vec<RawWheelSpecification> = self
      .conn
      .call(move |conn| {
        // Unset options bind NULL and impose no constraint. Substring
        // matches are case-insensitive; the date match is exact. A NULL
        // submitted_by column never matches a set submitted_by filter.
        let sql = format!(
          "SELECT {WHEEL_COLUMNS}
           FROM wheel_specifications
           WHERE (?1 IS NULL OR instr(lower(form_number), lower(?1)) > 0)
             AND (?2 IS NULL OR instr(lower(submitted_by), lower(?2)) > 0)
             AND (?3 IS NULL OR submitted_date = ?3)
           ORDER BY id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![form_number, submitted_by, submitted_date],
            read_wheel_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawWheelSpecification::into_record)
      .collect()
  }
}
