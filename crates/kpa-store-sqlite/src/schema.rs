//! SQL schema for the KPA SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Both tables are insert-only: no UPDATE or DELETE is ever issued against
/// them. Dates are stored as `YYYY-MM-DD` text, timestamps as RFC 3339 text.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS bogie_checksheets (
    id                          INTEGER PRIMARY KEY AUTOINCREMENT,
    -- bogie details
    bogie_no                    TEXT NOT NULL,
    date_of_ioh                 TEXT,            -- YYYY-MM-DD or NULL
    incoming_div_and_date       TEXT NOT NULL,
    maker_year_built            TEXT NOT NULL,
    deficit_components          TEXT,
    -- bogie checksheet conditions
    bogie_frame_condition       TEXT NOT NULL,
    bolster                     TEXT NOT NULL,
    bolster_suspension_bracket  TEXT NOT NULL,
    lower_spring_seat           TEXT NOT NULL,
    axle_guide                  TEXT NOT NULL,
    axle_guide_assembly         TEXT NOT NULL DEFAULT '',
    protective_tubes            TEXT NOT NULL DEFAULT '',
    anchor_links                TEXT NOT NULL DEFAULT '',
    side_bearer                 TEXT NOT NULL DEFAULT '',
    -- BMBC conditions
    cylinder_body               TEXT NOT NULL,
    piston_trunnion             TEXT NOT NULL,
    adjusting_tube              TEXT NOT NULL,
    plunger_spring              TEXT NOT NULL,
    tee_bolt_hex_nut            TEXT NOT NULL DEFAULT '',
    pawl_and_pawl_spring        TEXT NOT NULL DEFAULT '',
    dust_excluder               TEXT NOT NULL DEFAULT '',
    -- metadata
    form_number                 TEXT NOT NULL,
    inspection_by               TEXT,
    inspection_date             TEXT,            -- YYYY-MM-DD or NULL
    created_at                  TEXT NOT NULL    -- RFC 3339 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS wheel_specifications (
    id                          INTEGER PRIMARY KEY AUTOINCREMENT,
    -- measurements, free text with units and tolerances
    axle_box_housing_bore_dia   TEXT NOT NULL,
    bearing_seat_diameter       TEXT NOT NULL,
    condemning_dia              TEXT NOT NULL,
    intermediate_wwp            TEXT NOT NULL,
    last_shop_issue_size        TEXT NOT NULL,
    roller_bearing_bore_dia     TEXT NOT NULL,
    roller_bearing_outer_dia    TEXT NOT NULL,
    roller_bearing_width        TEXT NOT NULL,
    tread_diameter_new          TEXT NOT NULL,
    variation_same_axle         TEXT NOT NULL,
    variation_same_bogie        TEXT NOT NULL,
    variation_same_coach        TEXT NOT NULL,
    wheel_disc_width            TEXT NOT NULL,
    wheel_gauge                 TEXT NOT NULL,
    wheel_profile               TEXT NOT NULL,
    -- metadata
    form_number                 TEXT NOT NULL,
    submitted_by                TEXT,
    submitted_date              TEXT,            -- YYYY-MM-DD or NULL
    created_at                  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS bogie_checksheets_form_idx
    ON bogie_checksheets(form_number);
CREATE INDEX IF NOT EXISTS wheel_specs_form_idx
    ON wheel_specifications(form_number);
CREATE INDEX IF NOT EXISTS wheel_specs_date_idx
    ON wheel_specifications(submitted_date);

PRAGMA user_version = 1;
";
