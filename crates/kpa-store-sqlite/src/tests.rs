//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use kpa_core::{
  checksheet::{
    BmbcChecksheetFields, BogieChecksheetFields, BogieDetails,
    NewBogieChecksheet,
  },
  store::{BogieChecksheetQuery, FormStore, WheelSpecQuery},
  wheel::{NewWheelSpecification, WheelSpecFields},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(s: &str) -> NaiveDate {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

fn bogie_input(form_number: &str) -> NewBogieChecksheet {
  NewBogieChecksheet {
    details:         BogieDetails {
      bogie_no:              "BG1234".into(),
      date_of_ioh:           Some(date("2025-07-01")),
      incoming_div_and_date: "NR / 2025-06-25".into(),
      maker_year_built:      "RDSO/2018".into(),
      deficit_components:    None,
    },
    checksheet:      BogieChecksheetFields {
      bogie_frame_condition: "Good".into(),
      bolster: "Good".into(),
      bolster_suspension_bracket: "Cracked".into(),
      lower_spring_seat: "Good".into(),
      axle_guide: "Worn".into(),
      ..Default::default()
    },
    bmbc:            BmbcChecksheetFields {
      cylinder_body: "WORN OUT".into(),
      piston_trunnion: "GOOD".into(),
      adjusting_tube: "DAMAGED".into(),
      plunger_spring: "GOOD".into(),
      ..Default::default()
    },
    form_number:     form_number.into(),
    inspection_by:   Some("user_id_456".into()),
    inspection_date: Some(date("2025-07-03")),
  }
}

fn wheel_input(form_number: &str, submitted_by: &str) -> NewWheelSpecification {
  NewWheelSpecification {
    fields:         WheelSpecFields {
      axle_box_housing_bore_dia: "280 (+0.030/+0.052)".into(),
      bearing_seat_diameter:     "130.043 TO 130.068".into(),
      condemning_dia:            "825 (800-900)".into(),
      intermediate_wwp:          "20 TO 28".into(),
      last_shop_issue_size:      "837 (800-900)".into(),
      roller_bearing_bore_dia:   "130 (+0.0/-0.025)".into(),
      roller_bearing_outer_dia:  "280 (+0.0/-0.035)".into(),
      roller_bearing_width:      "93 (+0/-0.250)".into(),
      tread_diameter_new:        "915 (900-1000)".into(),
      variation_same_axle:       "0.5".into(),
      variation_same_bogie:      "5".into(),
      variation_same_coach:      "13".into(),
      wheel_disc_width:          "127 (+4/-0)".into(),
      wheel_gauge:               "1600 (+2,-1)".into(),
      wheel_profile:             "29.4 Flange Thickness".into(),
    },
    form_number:    form_number.into(),
    submitted_by:   Some(submitted_by.into()),
    submitted_date: Some(date("2025-07-03")),
  }
}

// ─── Opening ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn open_surfaces_database_errors() {
  let err = SqliteStore::open("/nonexistent-dir/forms.db")
    .await
    .expect_err("opening under a missing directory should fail");

  assert!(matches!(err, Error::Database(_)));
}

// ─── Bogie checksheets ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_bogie_checksheet_assigns_identity() {
  let s = store().await;

  let record = s
    .create_bogie_checksheet(bogie_input("BOGIE-2025-001"))
    .await
    .unwrap();

  assert_eq!(record.form_number, "BOGIE-2025-001");
  assert!(record.id >= 1);
}

#[tokio::test]
async fn bogie_checksheet_round_trips_through_storage() {
  let s = store().await;
  let input = bogie_input("BOGIE-2025-001");

  let created = s.create_bogie_checksheet(input.clone()).await.unwrap();

  let listed = s
    .list_bogie_checksheets(&BogieChecksheetQuery {
      form_number: Some("BOGIE-2025-001".into()),
    })
    .await
    .unwrap();

  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0], created);
  assert_eq!(listed[0].details, input.details);
  assert_eq!(listed[0].bmbc, input.bmbc);
}

#[tokio::test]
async fn bogie_ids_are_monotonic() {
  let s = store().await;

  let a = s.create_bogie_checksheet(bogie_input("BOGIE-A")).await.unwrap();
  let b = s.create_bogie_checksheet(bogie_input("BOGIE-B")).await.unwrap();

  assert!(b.id > a.id);
}

#[tokio::test]
async fn bogie_filter_matches_substring_case_insensitively() {
  let s = store().await;
  s.create_bogie_checksheet(bogie_input("BOGIE-2025-001")).await.unwrap();
  s.create_bogie_checksheet(bogie_input("OTHER-2025-001")).await.unwrap();

  let hits = s
    .list_bogie_checksheets(&BogieChecksheetQuery {
      form_number: Some("bogie".into()),
    })
    .await
    .unwrap();

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].form_number, "BOGIE-2025-001");
}

#[tokio::test]
async fn nullable_bogie_fields_survive_round_trip() {
  let s = store().await;
  let mut input = bogie_input("BOGIE-2025-002");
  input.details.date_of_ioh = None;
  input.inspection_by = None;
  input.inspection_date = None;

  s.create_bogie_checksheet(input).await.unwrap();

  let listed = s
    .list_bogie_checksheets(&BogieChecksheetQuery::default())
    .await
    .unwrap();
  assert_eq!(listed[0].details.date_of_ioh, None);
  assert_eq!(listed[0].inspection_by, None);
  assert_eq!(listed[0].inspection_date, None);
}

// ─── Wheel specifications ────────────────────────────────────────────────────

#[tokio::test]
async fn wheel_specification_round_trips_all_fields() {
  let s = store().await;
  let input = wheel_input("WHEEL-2025-001", "user_id_123");

  let created = s.create_wheel_specification(input.clone()).await.unwrap();

  let listed = s
    .list_wheel_specifications(&WheelSpecQuery::default())
    .await
    .unwrap();

  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0], created);
  assert_eq!(listed[0].fields, input.fields);
}

#[tokio::test]
async fn unfiltered_list_returns_insertion_order() {
  let s = store().await;
  for n in ["WHEEL-001", "WHEEL-002", "WHEEL-003"] {
    s.create_wheel_specification(wheel_input(n, "user_id_123"))
      .await
      .unwrap();
  }

  let listed = s
    .list_wheel_specifications(&WheelSpecQuery::default())
    .await
    .unwrap();
  let numbers: Vec<&str> =
    listed.iter().map(|r| r.form_number.as_str()).collect();
  assert_eq!(numbers, ["WHEEL-001", "WHEEL-002", "WHEEL-003"]);
}

#[tokio::test]
async fn form_number_filter_is_case_insensitive_substring() {
  let s = store().await;
  for n in ["WHEEL-001", "WHEEL-002", "OTHER-001"] {
    s.create_wheel_specification(wheel_input(n, "user_id_123"))
      .await
      .unwrap();
  }

  let hits = s
    .list_wheel_specifications(&WheelSpecQuery {
      form_number: Some("wheel".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  let numbers: Vec<&str> = hits.iter().map(|r| r.form_number.as_str()).collect();
  assert_eq!(numbers, ["WHEEL-001", "WHEEL-002"]);
}

#[tokio::test]
async fn submitted_by_filter_is_case_insensitive_substring() {
  let s = store().await;
  s.create_wheel_specification(wheel_input("WHEEL-001", "user_id_123"))
    .await
    .unwrap();
  s.create_wheel_specification(wheel_input("WHEEL-002", "someone_else"))
    .await
    .unwrap();

  let hits = s
    .list_wheel_specifications(&WheelSpecQuery {
      submitted_by: Some("USER_ID".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].form_number, "WHEEL-001");
}

#[tokio::test]
async fn submitted_date_filter_is_exact() {
  let s = store().await;
  let mut early = wheel_input("WHEEL-001", "user_id_123");
  early.submitted_date = Some(date("2025-07-01"));
  s.create_wheel_specification(early).await.unwrap();
  s.create_wheel_specification(wheel_input("WHEEL-002", "user_id_123"))
    .await
    .unwrap();

  let hits = s
    .list_wheel_specifications(&WheelSpecQuery {
      submitted_date: Some(date("2025-07-03")),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].form_number, "WHEEL-002");
}

#[tokio::test]
async fn filters_combine_conjunctively() {
  let s = store().await;
  s.create_wheel_specification(wheel_input("WHEEL-001", "user_id_123"))
    .await
    .unwrap();
  s.create_wheel_specification(wheel_input("WHEEL-002", "someone_else"))
    .await
    .unwrap();

  let hits = s
    .list_wheel_specifications(&WheelSpecQuery {
      form_number:    Some("WHEEL".into()),
      submitted_by:   Some("someone".into()),
      submitted_date: Some(date("2025-07-03")),
    })
    .await
    .unwrap();

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].form_number, "WHEEL-002");
}

#[tokio::test]
async fn null_submitted_by_never_matches_a_set_filter() {
  let s = store().await;
  let mut anonymous = wheel_input("WHEEL-001", "ignored");
  anonymous.submitted_by = None;
  s.create_wheel_specification(anonymous).await.unwrap();

  let hits = s
    .list_wheel_specifications(&WheelSpecQuery {
      submitted_by: Some("user".into()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(hits.is_empty());

  // But it still appears unfiltered.
  let all = s
    .list_wheel_specifications(&WheelSpecQuery::default())
    .await
    .unwrap();
  assert_eq!(all.len(), 1);
}
