use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

use stockterm_types::{Snapshot, StockRecord};

use crate::queries::stockmaster;
use crate::schema;
use crate::Result;

/// One stored snapshot date and how many records it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSummary {
    pub date: String,
    pub records: usize,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        tracing::debug!(path = %db_path.display(), "opened snapshot store");

        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    /// Upsert records in one transaction. Every record must carry its date.
    pub fn insert_records(&self, records: &[StockRecord]) -> Result<usize> {
        let imported_at = Utc::now().to_rfc3339();
        let tx = self.conn.unchecked_transaction()?;
        for record in records {
            stockmaster::upsert(&tx, record, &imported_at)?;
        }
        tx.commit()?;

        tracing::info!(count = records.len(), "stored records");
        Ok(records.len())
    }

    pub fn latest_date(&self) -> Result<Option<String>> {
        stockmaster::latest_date(&self.conn)
    }

    pub fn records_for_date(&self, date: &str) -> Result<Vec<StockRecord>> {
        stockmaster::for_date(&self.conn, date)
    }

    pub fn find_record(&self, date: &str, code: &str) -> Result<Option<StockRecord>> {
        stockmaster::find(&self.conn, date, code)
    }

    pub fn list_dates(&self) -> Result<Vec<DateSummary>> {
        Ok(stockmaster::dates(&self.conn)?
            .into_iter()
            .map(|(date, records)| DateSummary { date, records })
            .collect())
    }

    pub fn count_for_date(&self, date: &str) -> Result<usize> {
        stockmaster::count_for_date(&self.conn, date)
    }

    pub fn delete_date(&self, date: &str) -> Result<usize> {
        stockmaster::delete_date(&self.conn, date)
    }

    /// The most recent dated batch, or an empty snapshot for an empty store.
    pub fn latest_snapshot(&self) -> Result<Snapshot> {
        let Some(date) = self.latest_date()? else {
            return Ok(Snapshot::empty());
        };
        let records = self.records_for_date(&date)?;
        tracing::debug!(%date, count = records.len(), "loaded latest snapshot");
        Ok(Snapshot::new(Some(date), records))
    }

    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute("VACUUM", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, code: &str, score: f64) -> StockRecord {
        let mut r = StockRecord::new(code);
        r.date = date.to_string();
        r.score = Some(score);
        r
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.latest_date().unwrap(), None);
        assert!(db.list_dates().unwrap().is_empty());
    }

    #[test]
    fn test_latest_snapshot_uses_most_recent_date() {
        let db = Database::open_in_memory().unwrap();
        db.insert_records(&[
            record("2025-01-09", "AAA", 10.0),
            record("2025-01-10", "BBB", 20.0),
            record("2025-01-10", "AAA", 30.0),
        ])
        .unwrap();

        let snapshot = db.latest_snapshot().unwrap();
        assert_eq!(snapshot.date.as_deref(), Some("2025-01-10"));
        let codes: Vec<&str> = snapshot.records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["BBB", "AAA"]);
    }

    #[test]
    fn test_upsert_replaces_payload_and_keeps_order() {
        let db = Database::open_in_memory().unwrap();
        db.insert_records(&[record("2025-01-10", "AAA", 1.0), record("2025-01-10", "BBB", 2.0)])
            .unwrap();
        db.insert_records(&[record("2025-01-10", "AAA", 99.0)]).unwrap();

        let records = db.records_for_date("2025-01-10").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code.as_str(), "AAA");
        assert_eq!(records[0].score, Some(99.0));
        assert_eq!(db.count_for_date("2025-01-10").unwrap(), 2);
    }

    #[test]
    fn test_record_without_date_is_rejected_atomically() {
        let db = Database::open_in_memory().unwrap();
        let err = db
            .insert_records(&[record("2025-01-10", "AAA", 1.0), StockRecord::new("NODATE")])
            .unwrap_err();
        assert!(err.to_string().contains("NODATE"));
        assert_eq!(db.latest_date().unwrap(), None);
    }

    #[test]
    fn test_list_dates_and_delete() {
        let db = Database::open_in_memory().unwrap();
        db.insert_records(&[
            record("2025-01-09", "AAA", 1.0),
            record("2025-01-10", "AAA", 1.0),
            record("2025-01-10", "BBB", 1.0),
        ])
        .unwrap();

        let dates = db.list_dates().unwrap();
        assert_eq!(
            dates,
            vec![
                DateSummary { date: "2025-01-10".to_string(), records: 2 },
                DateSummary { date: "2025-01-09".to_string(), records: 1 },
            ]
        );

        assert_eq!(db.delete_date("2025-01-10").unwrap(), 2);
        db.vacuum().unwrap();
        assert_eq!(db.latest_date().unwrap().as_deref(), Some("2025-01-09"));
        assert!(db.find_record("2025-01-09", "AAA").unwrap().is_some());
        assert!(db.find_record("2025-01-09", "ZZZ").unwrap().is_none());
    }

    #[test]
    fn test_empty_store_gives_empty_snapshot() {
        let db = Database::open_in_memory().unwrap();
        let snapshot = db.latest_snapshot().unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.date.is_none());
    }
}
