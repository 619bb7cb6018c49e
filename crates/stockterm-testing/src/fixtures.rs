//! Snapshot export documents for tests.
//!
//! Records are plain JSON in the export shape (`{"stocks": [...]}`), so
//! tests exercise the same decoding path as a real import.

use serde_json::{Value, json};

/// Latest date of [`sample_export`].
pub const SAMPLE_DATE: &str = "2025-01-10";
/// Older date of [`sample_export`]; never part of the live snapshot.
pub const PREVIOUS_DATE: &str = "2025-01-09";

/// One record with the fields most screens look at.
pub fn stock(code: &str, name: &str, sector: &str, sub_sector: &str) -> Value {
    json!({
        "date": SAMPLE_DATE,
        "stock_code": code,
        "name": name,
        "sector": sector,
        "sub_sector": sub_sector,
    })
}

/// Merge `fields` into `record`, overwriting existing keys.
pub fn with(mut record: Value, fields: Value) -> Value {
    if let (Some(target), Value::Object(extra)) = (record.as_object_mut(), fields) {
        target.extend(extra);
    }
    record
}

/// Five stocks on [`SAMPLE_DATE`] plus one stale record on [`PREVIOUS_DATE`].
///
/// | code | sector     | score | action | notes                       |
/// |------|------------|-------|--------|-----------------------------|
/// | BBCA | Financials | 85    | BUY    | pbv below fair, tag Blue Chip |
/// | BMRI | Financials | 72    | HOLD   | dividend 6%                 |
/// | ADRO | Energy     | 91    | BUY    | altman z 3.4, tag Blue Chip |
/// | PTBA | Energy     | 45    | AVOID  | free float 12%              |
/// | GOTO | Technology | -     | -      | unscored                    |
pub fn sample_export() -> Value {
    let stocks = vec![
        with(
            stock("BBCA", "Bank Central Asia", "Financials", "Banks"),
            json!({
                "tag": "Blue Chip",
                "price": 9500.0,
                "previous": 9400.0,
                "market_cap": 1.17e15,
                "pbv": 4.5,
                "fair_pbv": 5.0,
                "pe_ttm": 24.1,
                "roe": 0.21,
                "dividend_yield": 0.028,
                "free_float": 0.42,
                "altman_z": 2.9,
                "score": 85.0,
                "action": "BUY",
                "indexes": ["LQ45", "IDX30"],
            }),
        ),
        with(
            stock("BMRI", "Bank Mandiri", "Financials", "Banks"),
            json!({
                "price": 6000.0,
                "previous": 6100.0,
                "pbv": 2.1,
                "dividend_yield": 0.06,
                "free_float": 0.4,
                "score": 72.0,
                "action": "HOLD",
            }),
        ),
        with(
            stock("ADRO", "Adaro Energy", "Energy", "Coal"),
            json!({
                "tag": "Blue Chip",
                "price": 2500.0,
                "pbv": 0.9,
                "fair_pbv": 0.8,
                "altman_z": 3.4,
                "fcf_ttm": 1.2e13,
                "score": 91.0,
                "action": "BUY",
            }),
        ),
        with(
            stock("PTBA", "Bukit Asam", "Energy", "Coal"),
            json!({
                "price": 2700.0,
                "free_float": 0.12,
                "shareholder_top3_pct": 0.8,
                "score": 45.0,
                "action": "AVOID",
            }),
        ),
        stock("GOTO", "GoTo Gojek Tokopedia", "Technology", "Internet"),
        with(
            stock("OLDX", "Delisted Holdings", "Energy", "Coal"),
            json!({ "date": PREVIOUS_DATE, "score": 99.0, "action": "BUY" }),
        ),
    ];
    json!({ "stocks": stocks })
}

/// Records with no `date`, for imports that need `--date`.
pub fn undated_export() -> Value {
    json!([
        { "stock_code": "AAAA", "name": "Alpha", "sector": "Energy", "score": 60.0 },
        { "stock_code": "BBBB", "name": "Beta", "sector": "Energy", "score": 70.0 },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overwrites_fields() {
        let record = with(stock("AAAA", "A", "S", "T"), json!({ "date": "2024-12-31" }));
        assert_eq!(record["date"], "2024-12-31");
        assert_eq!(record["stock_code"], "AAAA");
    }

    #[test]
    fn test_sample_export_shape() {
        let export = sample_export();
        let stocks = export["stocks"].as_array().unwrap();
        assert_eq!(stocks.len(), 6);
        let latest = stocks.iter().filter(|s| s["date"] == SAMPLE_DATE).count();
        assert_eq!(latest, 5);
    }
}
