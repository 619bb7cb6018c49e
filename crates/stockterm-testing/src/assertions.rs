//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Codes of `content.rows`, in output order.
pub fn row_codes(json: &Value) -> Result<Vec<String>> {
    let rows = json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row["code"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Row {} missing code", i))
        })
        .collect()
}

/// Assert the screened rows are exactly `expected`, in order.
pub fn assert_rows(json: &Value, expected: &[&str]) -> Result<()> {
    let codes = row_codes(json)?;
    if codes != expected {
        anyhow::bail!("Expected rows {:?}, got {:?}", expected, codes);
    }
    Ok(())
}

/// Assert the result badge carries `label`.
pub fn assert_badge(json: &Value, label: &str) -> Result<()> {
    let actual = json["badge"]["label"]
        .as_str()
        .context("Expected 'badge.label' in JSON")?;
    if actual != label {
        anyhow::bail!("Expected badge '{}', got '{}'", label, actual);
    }
    Ok(())
}
