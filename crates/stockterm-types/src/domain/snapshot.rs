use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::stock::{StockCode, StockRecord};
use crate::{Error, Result};

pub const SNAPSHOT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a snapshot date and return it in canonical `YYYY-MM-DD` form, so
/// stored dates order correctly as text. Unpadded months and days are accepted.
pub fn normalize_snapshot_date(raw: &str) -> Result<String> {
    NaiveDate::parse_from_str(raw.trim(), SNAPSHOT_DATE_FORMAT)
        .map(|d| d.format(SNAPSHOT_DATE_FORMAT).to_string())
        .map_err(|_| Error::InvalidValue {
            kind: "snapshot date (expected YYYY-MM-DD)",
            value: raw.to_string(),
        })
}

/// Distinct, sorted, non-empty category values observed in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    pub sectors: Vec<String>,
    pub sub_sectors: Vec<String>,
    pub tags: Vec<String>,
}

impl Vocabulary {
    pub fn from_records(records: &[StockRecord]) -> Self {
        Self {
            sectors: distinct(records.iter().map(|r| r.sector())),
            sub_sectors: distinct(records.iter().map(|r| r.sub_sector())),
            tags: distinct(records.iter().map(|r| r.tag())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty() && self.sub_sectors.is_empty() && self.tags.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The latest dated batch of records. Immutable once built; a refresh
/// replaces the whole value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: Option<String>,
    pub records: Vec<StockRecord>,
    pub vocab: Vocabulary,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(date: Option<String>, records: Vec<StockRecord>) -> Self {
        let vocab = Vocabulary::from_records(&records);
        Self {
            date,
            records,
            vocab,
            fetched_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(None, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn find(&self, code: &StockCode) -> Option<&StockRecord> {
        self.records.iter().find(|r| &r.code == code)
    }

    /// Sub-sectors observed under `sector`, sorted and distinct.
    pub fn sub_sectors_of(&self, sector: &str) -> Vec<String> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.sector() == sector)
                .map(|r| r.sub_sector()),
        )
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_snapshot_date() {
        assert_eq!(normalize_snapshot_date("2025-01-10").unwrap(), "2025-01-10");
        assert_eq!(normalize_snapshot_date(" 2025-1-9 ").unwrap(), "2025-01-09");
        assert!(normalize_snapshot_date("10/01/2025").is_err());
        assert!(normalize_snapshot_date("2025-02-30").is_err());

        let err = normalize_snapshot_date("yesterday").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid snapshot date (expected YYYY-MM-DD): 'yesterday'"
        );
    }

    fn record(code: &str, sector: &str, sub_sector: &str, tag: Option<&str>) -> StockRecord {
        let mut r = StockRecord::new(code);
        r.sector = Some(sector.to_string());
        r.sub_sector = Some(sub_sector.to_string());
        r.tag = tag.map(str::to_string);
        r
    }

    #[test]
    fn test_vocabulary_is_sorted_distinct_non_empty() {
        let records = vec![
            record("A", "Technology", "Software", Some("growth")),
            record("B", "Financials", "Banks", None),
            record("C", "Technology", "Hardware", Some("")),
            record("D", "", "Banks", Some("growth")),
        ];

        let vocab = Vocabulary::from_records(&records);
        assert_eq!(vocab.sectors, vec!["Financials", "Technology"]);
        assert_eq!(vocab.sub_sectors, vec!["Banks", "Hardware", "Software"]);
        assert_eq!(vocab.tags, vec!["growth"]);
    }

    #[test]
    fn test_sub_sectors_of_sector() {
        let snapshot = Snapshot::new(
            Some("2025-01-10".to_string()),
            vec![
                record("A", "Technology", "Software", None),
                record("B", "Financials", "Banks", None),
                record("C", "Technology", "Hardware", None),
                record("D", "Technology", "Software", None),
            ],
        );

        assert_eq!(snapshot.sub_sectors_of("Technology"), vec!["Hardware", "Software"]);
        assert!(snapshot.sub_sectors_of("Energy").is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::empty();
        assert!(snapshot.is_empty());
        assert!(snapshot.date.is_none());
        assert!(snapshot.vocab.is_empty());
        assert!(snapshot.find(&StockCode::from("A")).is_none());
    }
}
