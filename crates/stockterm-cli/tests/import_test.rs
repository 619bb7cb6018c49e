//! Import & Store Tests
//!
//! Loading exports into the workspace store and listing stored dates.

use anyhow::Result;
use stockterm_testing::fixtures::{self, PREVIOUS_DATE, SAMPLE_DATE};
use stockterm_testing::{TestWorld, assertions};

#[test]
fn test_import_reports_count_and_dates() -> Result<()> {
    let world = TestWorld::new().with_export("export.json", &fixtures::sample_export());
    let path = world.path("export.json");

    let json = world.run_json(&["import", &path.to_string_lossy()])?;

    assertions::assert_badge(&json, "Imported 6 records")?;
    assert_eq!(json["content"]["imported"], 6);
    let dates = json["content"]["dates"].as_array().unwrap();
    assert_eq!(dates.len(), 2);
    assert_eq!(dates[0]["date"], SAMPLE_DATE);
    assert_eq!(dates[0]["records"], 5);
    assert_eq!(dates[0]["latest"], true);
    assert_eq!(dates[1]["date"], PREVIOUS_DATE);
    assert!(world.database_path().exists());
    Ok(())
}

#[test]
fn test_reimport_upserts_instead_of_duplicating() -> Result<()> {
    let world = TestWorld::new()
        .with_export("export.json", &fixtures::sample_export())
        .imported("export.json")
        .imported("export.json");

    let json = world.run_json(&["dates"])?;
    let dates = json["content"]["dates"].as_array().unwrap();
    assert_eq!(dates[0]["records"], 5);
    assert_eq!(dates[1]["records"], 1);
    Ok(())
}

#[test]
fn test_undated_records_need_date_flag() -> Result<()> {
    let world = TestWorld::new().with_export("undated.json", &fixtures::undated_export());
    let path = world.path("undated.json");
    let path = path.to_string_lossy();

    let result = world.run(&["import", &path])?;
    assert!(!result.success());
    assert!(result.stderr().contains("2 of 2 records carry no date"));

    let json = world.run_json(&["import", &path, "--date", "2024-12-31"])?;
    assert_eq!(json["content"]["dates"][0]["date"], "2024-12-31");
    Ok(())
}

#[test]
fn test_import_directory_of_exports() -> Result<()> {
    let world = TestWorld::new();
    world.write_export("batch/a.json", &fixtures::sample_export())?;
    world.write_export(
        "batch/b.json",
        &serde_json::json!([fixtures::with(
            fixtures::stock("ZZZZ", "Zeta", "Energy", "Coal"),
            serde_json::json!({ "date": "2025-01-11" })
        )]),
    )?;

    let json = world.run_json(&["import", &world.path("batch").to_string_lossy()])?;
    assert_eq!(json["content"]["imported"], 7);
    assert_eq!(json["content"]["dates"][0]["date"], "2025-01-11");
    Ok(())
}

#[test]
fn test_import_missing_path_fails() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["import", &world.path("nope.json").to_string_lossy()])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Import path does not exist"));
    Ok(())
}

#[test]
fn test_dates_on_empty_workspace() -> Result<()> {
    let world = TestWorld::new();
    let json = world.run_json(&["dates"])?;
    assertions::assert_badge(&json, "No snapshots stored")?;
    assert!(json["content"]["dates"].as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_import_rejects_non_iso_record_date() -> Result<()> {
    let world = TestWorld::new().with_export(
        "export.json",
        &serde_json::json!([
            fixtures::with(
                fixtures::stock("AAAA", "Alpha", "Energy", "Coal"),
                serde_json::json!({ "date": "2025-01-10" })
            ),
            fixtures::with(
                fixtures::stock("BBBB", "Beta", "Energy", "Coal"),
                serde_json::json!({ "date": "10/01/2025" })
            ),
        ]),
    );

    let result = world.run(&["import", &world.path("export.json").to_string_lossy()])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Record BBBB has snapshot date '10/01/2025'"));

    let json = world.run_json(&["dates"])?;
    assert!(json["content"]["dates"].as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_date_flag_is_normalized_to_iso() -> Result<()> {
    let world = TestWorld::new().with_export("undated.json", &fixtures::undated_export());
    let path = world.path("undated.json");
    let path = path.to_string_lossy();

    let result = world.run(&["import", &path, "--date", "31/12/2024"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("expected YYYY-MM-DD"));

    let json = world.run_json(&["import", &path, "--date", "2024-1-9"])?;
    assert_eq!(json["content"]["dates"][0]["date"], "2024-01-09");
    Ok(())
}
