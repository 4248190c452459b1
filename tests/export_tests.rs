use predicates::str::contains;
use std::fs;

mod common;
use common::{lw, seed_settings, setup_settings, temp_out};

#[test]
fn test_export_grid_csv() {
    let settings = setup_settings("export_csv");
    seed_settings(&settings);

    let out = temp_out("export_csv", "csv");

    lw().args([
        "--settings",
        &settings,
        "--today",
        "2024-01-01",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    // header + (90+1)*52 cells
    assert_eq!(lines.len(), 1 + 91 * 52);
    assert!(lines[0].starts_with("age_year,unit_index,start_week,status"));
    assert!(content.contains("current"));
    assert!(content.contains("Started school"));
}

#[test]
fn test_export_grid_json_year_view() {
    let settings = setup_settings("export_json_year");
    seed_settings(&settings);

    let out = temp_out("export_json_year", "json");

    lw().args([
        "--settings",
        &settings,
        "--today",
        "2024-01-01",
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--view",
        "year",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let cells: serde_json::Value = serde_json::from_str(&content).unwrap();
    let arr = cells.as_array().unwrap();

    assert_eq!(arr.len(), 91);
    assert_eq!(arr[24]["status"], "current");
    assert_eq!(arr[0]["status"], "past");
    assert_eq!(arr[90]["status"], "future");
}

#[test]
fn test_export_xlsx_and_pdf_produce_files() {
    let settings = setup_settings("export_xlsx_pdf");
    seed_settings(&settings);

    let xlsx = temp_out("export_xlsx_pdf", "xlsx");
    lw().args([
        "--settings",
        &settings,
        "--today",
        "2024-01-01",
        "export",
        "--format",
        "xlsx",
        "--file",
        &xlsx,
        "--force",
    ])
    .assert()
    .success();
    assert!(fs::metadata(&xlsx).map(|m| m.len() > 0).unwrap_or(false));

    let pdf = temp_out("export_xlsx_pdf", "pdf");
    lw().args([
        "--settings",
        &settings,
        "--today",
        "2024-01-01",
        "export",
        "--format",
        "pdf",
        "--file",
        &pdf,
        "--force",
    ])
    .assert()
    .success();

    let bytes = fs::read(&pdf).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_without_birthdate_fails() {
    let settings = setup_settings("export_no_birthdate");
    let out = temp_out("export_no_birthdate", "csv");

    lw().args([
        "--settings",
        &settings,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("no birthdate set"));
}
