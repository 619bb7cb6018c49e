//! Stock Detail Tests

use anyhow::Result;
use stockterm_testing::TestWorld;
use stockterm_testing::fixtures;

fn world() -> TestWorld {
    TestWorld::new()
        .with_export("export.json", &fixtures::sample_export())
        .imported("export.json")
}

#[test]
fn test_show_is_case_insensitive() -> Result<()> {
    let result = world().run(&["show", "bbca"])?;
    assert!(result.success(), "{}", result.stderr());

    let out = result.stdout();
    assert!(out.starts_with("BBCA  Bank Central Asia\nFinancials | Banks  (2025-01-10)\n"));
    assert!(out.contains("Price 9.500  +100 (+1.1%)   Score 85   Action BUY"));
    assert!(out.contains("Indexes\n  LQ45, IDX30\n"));
    Ok(())
}

#[test]
fn test_show_json_keeps_raw_values() -> Result<()> {
    let json = world().run_json(&["show", "ADRO"])?;
    let content = &json["content"];
    assert_eq!(content["code"], "ADRO");
    assert_eq!(content["price"], 2500.0);
    assert_eq!(content["action"], "BUY");
    assert_eq!(content["score_tier"], "high");

    let warnings: Vec<&str> = content["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["kind"].as_str())
        .collect();
    assert!(warnings.contains(&"cash_generative"));
    Ok(())
}

#[test]
fn test_show_stale_code_is_not_found() -> Result<()> {
    let result = world().run(&["show", "OLDX"])?;
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("Stock 'OLDX' not found in snapshot 2025-01-10")
    );
    Ok(())
}
