use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use stockterm_types::{StockRecord, normalize_snapshot_date};

use crate::{Error, Result};

/// Load record documents from a JSON file or a directory of JSON files.
///
/// Accepted shapes: `{"stocks": [...]}`, a bare array of records, or a single
/// record object. Directory entries are read in path order.
pub fn load_documents(path: &Path) -> Result<Vec<StockRecord>> {
    let files = if path.is_dir() {
        json_files(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut records = Vec::new();
    for file in files {
        let loaded = load_file(&file)?;
        tracing::debug!(path = %file.display(), count = loaded.len(), "loaded import file");
        records.extend(loaded);
    }
    Ok(records)
}

fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn load_file(path: &Path) -> Result<Vec<StockRecord>> {
    let text = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("stocks") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(Error::Format {
                    path: path.to_path_buf(),
                    reason: "\"stocks\" is not an array".to_string(),
                });
            }
            None if map.contains_key("stock_code") => vec![Value::Object(map)],
            None => {
                return Err(Error::Format {
                    path: path.to_path_buf(),
                    reason: "expected an array of records or a \"stocks\" array".to_string(),
                });
            }
        },
        _ => {
            return Err(Error::Format {
                path: path.to_path_buf(),
                reason: "expected a JSON array or object".to_string(),
            });
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Error::from))
        .collect()
}

/// Keep only the records that share the most recent date, in input order,
/// with their dates in canonical form. Records whose date does not parse are
/// dropped once any valid date exists; undated records form the batch only
/// when nothing carries a valid date.
pub fn latest_batch(records: Vec<StockRecord>) -> (Option<String>, Vec<StockRecord>) {
    let dated: Vec<Option<String>> = records
        .iter()
        .map(|r| normalize_snapshot_date(&r.date).ok())
        .collect();

    // Canonical YYYY-MM-DD strings order chronologically.
    let Some(latest) = dated.iter().flatten().max().cloned() else {
        return (None, records);
    };

    let skipped = records
        .iter()
        .zip(&dated)
        .filter(|(r, d)| d.is_none() && !r.date.trim().is_empty())
        .count();
    if skipped > 0 {
        tracing::warn!(skipped, "ignored records with an unparseable snapshot date");
    }

    let batch = records
        .into_iter()
        .zip(dated)
        .filter(|(_, d)| d.as_deref() == Some(latest.as_str()))
        .map(|(mut r, _)| {
            r.date = latest.clone();
            r
        })
        .collect();
    (Some(latest), batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_stocks_envelope() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(
            &path,
            r#"{"stocks": [{"stock_code": "AAA", "date": "2025-01-10"}, {"stock_code": "BBB", "date": "2025-01-10"}]}"#,
        )
        .unwrap();

        let records = load_documents(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].code.as_str(), "BBB");
    }

    #[test]
    fn test_load_directory_in_path_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"[{"stock_code": "BBB"}]"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"stock_code": "AAA"}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let records = load_documents(dir.path()).unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_unrecognized_shape_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"rows": []}"#).unwrap();

        let err = load_documents(&path).unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn test_latest_batch() {
        let mut a = StockRecord::new("AAA");
        a.date = "2025-01-09".to_string();
        let mut b = StockRecord::new("BBB");
        b.date = "2025-01-10".to_string();
        let c = StockRecord::new("CCC");

        let (date, batch) = latest_batch(vec![a, b, c]);
        assert_eq!(date.as_deref(), Some("2025-01-10"));
        assert_eq!(batch.len(), 1);

        let (date, batch) = latest_batch(vec![StockRecord::new("X"), StockRecord::new("Y")]);
        assert_eq!(date, None);
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_latest_batch_orders_dates_chronologically() {
        let mut a = StockRecord::new("AAA");
        a.date = "2025-01-10".to_string();
        let mut b = StockRecord::new("BBB");
        b.date = "2025-1-9".to_string();
        let mut c = StockRecord::new("CCC");
        c.date = "10/01/2025".to_string();
        let mut d = StockRecord::new("DDD");
        d.date = "2025-1-10".to_string();

        let (date, batch) = latest_batch(vec![a, b, c, d]);
        assert_eq!(date.as_deref(), Some("2025-01-10"));
        let codes: Vec<&str> = batch.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["AAA", "DDD"]);
        assert!(batch.iter().all(|r| r.date == "2025-01-10"));
    }
}
