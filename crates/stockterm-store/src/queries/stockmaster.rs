use rusqlite::{Connection, OptionalExtension, params};
use stockterm_types::{StockRecord, normalize_snapshot_date};

use crate::{Error, Result};

pub fn upsert(conn: &Connection, record: &StockRecord, imported_at: &str) -> Result<()> {
    if record.date.trim().is_empty() {
        return Err(Error::Query(format!(
            "record {} has no snapshot date",
            record.code
        )));
    }
    let date = normalize_snapshot_date(&record.date)
        .map_err(|e| Error::Query(format!("record {}: {}", record.code, e)))?;

    let payload = if date == record.date {
        record.to_json()?
    } else {
        let mut stored = record.clone();
        stored.date = date.clone();
        stored.to_json()?
    };

    conn.execute(
        r#"
        INSERT INTO stockmaster (date, stock_code, payload, imported_at)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(date, stock_code) DO UPDATE SET
            payload = ?3,
            imported_at = ?4
        "#,
        params![&date, record.code.as_str(), payload, imported_at],
    )?;

    Ok(())
}

pub fn latest_date(conn: &Connection) -> Result<Option<String>> {
    let date: Option<String> = conn
        .query_row("SELECT MAX(date) FROM stockmaster", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    Ok(date)
}

/// Records of one date in insertion order.
pub fn for_date(conn: &Connection, date: &str) -> Result<Vec<StockRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT payload
        FROM stockmaster
        WHERE date = ?1
        ORDER BY rowid
        "#,
    )?;

    let payloads = stmt
        .query_map([date], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    payloads
        .iter()
        .map(|p| StockRecord::from_json(p).map_err(Error::from))
        .collect()
}

pub fn find(conn: &Connection, date: &str, code: &str) -> Result<Option<StockRecord>> {
    let payload: Option<String> = conn
        .query_row(
            "SELECT payload FROM stockmaster WHERE date = ?1 AND stock_code = ?2",
            [date, code],
            |row| row.get(0),
        )
        .optional()?;

    payload
        .map(|p| StockRecord::from_json(&p).map_err(Error::from))
        .transpose()
}

pub fn dates(conn: &Connection) -> Result<Vec<(String, usize)>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT date, COUNT(*)
        FROM stockmaster
        GROUP BY date
        ORDER BY date DESC
        "#,
    )?;

    let rows = stmt
        .query_map([], |row| {
            let count: i64 = row.get(1)?;
            Ok((row.get(0)?, count as usize))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

pub fn count_for_date(conn: &Connection, date: &str) -> Result<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM stockmaster WHERE date = ?1",
        [date],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

pub fn delete_date(conn: &Connection, date: &str) -> Result<usize> {
    Ok(conn.execute("DELETE FROM stockmaster WHERE date = ?1", [date])?)
}
