//! Vocabulary, presets, config and guidance.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use stockterm_testing::TestWorld;
use stockterm_testing::fixtures;

#[test]
fn test_vocab_lists_sorted_distinct_values() -> Result<()> {
    let world = TestWorld::new()
        .with_export("export.json", &fixtures::sample_export())
        .imported("export.json");

    let json = world.run_json(&["vocab"])?;
    let content = &json["content"];
    assert_eq!(
        content["sectors"],
        serde_json::json!(["Energy", "Financials", "Technology"])
    );
    assert_eq!(
        content["sub_sectors"],
        serde_json::json!(["Banks", "Coal", "Internet"])
    );
    assert_eq!(content["tags"], serde_json::json!(["Blue Chip"]));

    let json = world.run_json(&["vocab", "--sector", "Energy"])?;
    assert_eq!(json["content"]["sub_sectors"], serde_json::json!(["Coal"]));
    Ok(())
}

#[test]
fn test_presets_plain() -> Result<()> {
    let result = TestWorld::new().run(&["presets"])?;
    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("1    strong-buy   Strong Buy   score ≥ 80"));
    assert!(out.contains("6    illiquid     Illiquid     FF < 15%"));
    Ok(())
}

#[test]
fn test_presets_csv_is_refused() -> Result<()> {
    let result = TestWorld::new().run(&["--format", "csv", "presets"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("csv output is not available"));
    Ok(())
}

#[test]
fn test_config_init_then_show() -> Result<()> {
    let world = TestWorld::new();

    let json = world.run_json(&["config", "show"])?;
    assert_eq!(json["content"]["config_exists"], false);
    assert_eq!(json["content"]["config"]["view"]["overscan"], 20);

    let json = world.run_json(&["config", "init"])?;
    assert_eq!(json["content"]["written"], true);
    assert!(world.data_dir().join("config.toml").exists());

    let json = world.run_json(&["config", "init"])?;
    assert_eq!(json["content"]["written"], false);

    let json = world.run_json(&["config", "show"])?;
    assert_eq!(json["content"]["config_exists"], true);
    Ok(())
}

#[test]
fn test_config_database_override() -> Result<()> {
    let world = TestWorld::new().with_export("export.json", &fixtures::sample_export());
    std::fs::write(
        world.data_dir().join("config.toml"),
        "[store]\ndatabase = \"snapshots.db\"\n",
    )?;

    let json = world.run_json(&["import", &world.path("export.json").to_string_lossy()])?;
    assert!(
        json["content"]["database"]
            .as_str()
            .unwrap()
            .ends_with("snapshots.db")
    );
    assert!(world.data_dir().join("snapshots.db").exists());
    Ok(())
}

#[test]
fn test_no_command_prints_guidance() -> Result<()> {
    let result = TestWorld::new().run(&[])?;
    assert!(result.success());
    assert!(result.stdout().contains("Get started:"));
    assert!(result.stdout().contains("stockterm --help"));
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_help_lists_commands() {
    let world = TestWorld::new();
    let mut cmd = Command::cargo_bin("stockterm").unwrap();
    world
        .configure_command(&mut cmd)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("screen")
                .and(predicate::str::contains("import"))
                .and(predicate::str::contains("dates")),
        );
}

#[test]
#[allow(deprecated)]
fn test_invalid_format_is_rejected() {
    let world = TestWorld::new();
    let mut cmd = Command::cargo_bin("stockterm").unwrap();
    world
        .configure_command(&mut cmd)
        .args(["--format", "yaml", "presets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}
